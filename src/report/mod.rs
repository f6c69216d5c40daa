//! Presentation and export of decay results
//!
//! Everything here consumes a finished [`DecaySeries`](crate::decay::DecaySeries)
//! plus a [`ReportContext`] carrying the user's isotope labels and activity unit.
//!
//! - [`format_report`]: constants, equations and the results table as text
//! - [`build_workbook`]: the two-sheet spreadsheet model
//! - [`export_csv`] / [`export_json`]: writers

mod export;
mod table;
mod workbook;

use serde::{Deserialize, Serialize};

use crate::units::ActivityUnit;

pub use export::{default_export_stem, export_csv, export_json, ExportError};
pub use table::{equations_text, format_constants, format_report, format_table};
pub use workbook::{
    build_workbook, table_header, Cell, Sheet, Workbook, GENERATOR, PROJECT_URL, SUMMARY_SHEET,
    TABLE_SHEET,
};

/// Display names of the parent and daughter isotopes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsotopeLabels {
    pub parent: String,
    pub daughter: String,
}

impl Default for IsotopeLabels {
    fn default() -> Self {
        Self {
            parent: "Hg197m".to_string(),
            daughter: "Hg197g".to_string(),
        }
    }
}

/// Labels and unit used to render a series
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportContext {
    pub labels: IsotopeLabels,
    pub unit: ActivityUnit,
}

impl ReportContext {
    pub fn new(labels: IsotopeLabels, unit: ActivityUnit) -> Self {
        Self { labels, unit }
    }
}
