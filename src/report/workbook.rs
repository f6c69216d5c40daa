//! Spreadsheet-shaped report model
//!
//! A [`Workbook`] is a list of named sheets holding typed cells. It is built once
//! from a [`DecaySeries`] and handed to a writer; the layout mirrors the exported
//! report: metadata, inputs and constants on the first sheet, the full results
//! table on the second.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::ReportContext;
use crate::data::DISPLAY_FORMAT;
use crate::decay::{DecayConstants, DecaySeries};

pub const GENERATOR: &str = concat!("HgQuant v.", env!("CARGO_PKG_VERSION"));
pub const PROJECT_URL: &str = "https://github.com/cristinarod2/HgQuant";

pub const SUMMARY_SHEET: &str = "Input and Decay Constants";
pub const TABLE_SHEET: &str = "Decay Table";

/// A single cell value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

impl Cell {
    pub fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }

    fn number_or_empty(v: Option<f64>) -> Self {
        v.map_or(Cell::Empty, Cell::Number)
    }

    /// Text form used by delimited writers
    pub fn render(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(v) => v.to_string(),
            Cell::Empty => String::new(),
        }
    }
}

/// A named sheet of rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    fn push(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    fn push_blank(&mut self) {
        self.rows.push(Vec::new());
    }

    /// Widest rendered cell per column, for writers that size columns
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = Vec::new();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                let len = cell.render().chars().count();
                if i >= widths.len() {
                    widths.push(len);
                } else if len > widths[i] {
                    widths[i] = len;
                }
            }
        }
        widths
    }

    /// Lowercase, underscore-separated name usable in file names
    pub fn slug(&self) -> String {
        self.name
            .split(|c: char| !c.is_alphanumeric())
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("_")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }
}

/// Header row of the results table
pub fn table_header(ctx: &ReportContext) -> Vec<String> {
    let (m, g, unit) = (&ctx.labels.parent, &ctx.labels.daughter, ctx.unit);
    vec![
        "Time Point".to_string(),
        "Hours Elapsed".to_string(),
        format!("{m} ({unit})"),
        format!("{g} ({unit})"),
        format!("% {m}"),
        format!("% {g}"),
        format!("Decay Factor {m}"),
        format!("Decay Factor {g}"),
    ]
}

/// Build the two-sheet report workbook for `series`
///
/// `generated_at` is stamped into the metadata section.
pub fn build_workbook(
    series: &DecaySeries,
    ctx: &ReportContext,
    generated_at: NaiveDateTime,
) -> Workbook {
    let (m, g) = (&ctx.labels.parent, &ctx.labels.daughter);
    let p = &series.parameters;

    let mut summary = Sheet::new(SUMMARY_SHEET);

    // Metadata
    summary.push(vec![Cell::text("Report"), Cell::text("Value")]);
    summary.push(vec![Cell::text("Report generated by"), Cell::text(GENERATOR)]);
    summary.push(vec![
        Cell::text("on"),
        Cell::text(generated_at.format(DISPLAY_FORMAT).to_string()),
    ]);
    summary.push(vec![
        Cell::text("User-defined Isotopes"),
        Cell::text(format!("{m} → {g}")),
    ]);
    summary.push(vec![Cell::text("GitHub"), Cell::text(PROJECT_URL)]);
    summary.push_blank();

    // Inputs
    summary.push(vec![Cell::text("Parameter"), Cell::text("Value")]);
    summary.push(vec![
        Cell::text(format!("Initial Activity ({m})")),
        Cell::Number(p.initial_parent),
    ]);
    summary.push(vec![
        Cell::text(format!("Initial Activity ({g})")),
        Cell::Number(p.initial_daughter),
    ]);
    summary.push(vec![
        Cell::text(format!("Half-life ({m})")),
        Cell::text(format!("{:.4} h", p.half_life_parent)),
    ]);
    summary.push(vec![
        Cell::text(format!("Half-life ({g})")),
        Cell::text(format!("{:.4} h", p.half_life_daughter)),
    ]);
    summary.push(vec![Cell::text("Activity Units"), Cell::text(ctx.unit.label())]);
    summary.push(vec![
        Cell::text("Measured Timestamp"),
        Cell::text(p.reference.format(DISPLAY_FORMAT).to_string()),
    ]);
    summary.push_blank();
    summary.push_blank();

    // Constants
    summary.push(vec![Cell::text("Decay Constant"), Cell::text("Value (h⁻¹)")]);
    let names = [
        format!("λm ({m})"),
        format!("λ_ITm ({m} → {g})"),
        format!("λg ({g})"),
    ];
    for (name, (_, value)) in names.into_iter().zip(series.constants.named()) {
        summary.push(vec![
            Cell::Text(name),
            Cell::Text(DecayConstants::format_value(value)),
        ]);
    }

    let mut table = Sheet::new(TABLE_SHEET);
    table.push(table_header(ctx).into_iter().map(Cell::Text).collect());
    for r in series {
        table.push(vec![
            Cell::text(r.raw_label.as_str()),
            Cell::Number(r.elapsed_hours),
            Cell::Number(r.parent_activity),
            Cell::Number(r.daughter_activity),
            Cell::number_or_empty(r.parent_percent),
            Cell::number_or_empty(r.daughter_percent),
            Cell::number_or_empty(r.decay_factor_parent),
            Cell::number_or_empty(r.decay_factor_daughter),
        ]);
    }

    Workbook {
        sheets: vec![summary, table],
    }
}
