//! Writing reports to disk
//!
//! Exports only borrow the series, so a failed write leaves it intact for a retry.

use chrono::NaiveDateTime;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use super::workbook::Workbook;
use super::ReportContext;
use crate::decay::DecaySeries;

/// Errors raised while writing an export
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Could not write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("JSON error in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// File stem for an export created at `now`, e.g. `BatemanDecay_20250101_120000`
pub fn default_export_stem(now: NaiveDateTime) -> String {
    format!("BatemanDecay_{}", now.format("%Y%m%d_%H%M%S"))
}

/// Write each sheet of `workbook` to `<dir>/<stem>_<sheet>.csv`
///
/// Rows keep their natural width; blank separator rows become rows of empty fields.
/// Returns the written paths in sheet order.
pub fn export_csv(
    workbook: &Workbook,
    dir: impl AsRef<Path>,
    stem: &str,
) -> Result<Vec<PathBuf>, ExportError> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir).map_err(|source| ExportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(workbook.sheets.len());
    for sheet in &workbook.sheets {
        let n_columns = sheet.column_widths().len().max(1);
        let path = dir.join(format!("{stem}_{}.csv", sheet.slug()));
        let csv_err = |source: csv::Error| ExportError::Csv {
            path: path.clone(),
            source,
        };

        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_path(&path)
            .map_err(csv_err)?;
        for row in &sheet.rows {
            if row.is_empty() {
                writer
                    .write_record(std::iter::repeat("").take(n_columns))
                    .map_err(csv_err)?;
            } else {
                writer
                    .write_record(row.iter().map(|c| c.render()))
                    .map_err(csv_err)?;
            }
        }
        writer.flush().map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;

        info!(path = %path.display(), rows = sheet.rows.len(), "sheet exported");
        written.push(path);
    }
    Ok(written)
}

#[derive(Serialize)]
struct JsonReport<'a> {
    context: &'a ReportContext,
    #[serde(flatten)]
    series: &'a DecaySeries,
}

/// Write the series and its labels as pretty-printed JSON
pub fn export_json(
    series: &DecaySeries,
    ctx: &ReportContext,
    path: impl AsRef<Path>,
) -> Result<(), ExportError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let report = JsonReport {
        context: ctx,
        series,
    };
    serde_json::to_writer_pretty(BufWriter::new(file), &report).map_err(|source| {
        ExportError::Json {
            path: path.to_path_buf(),
            source,
        }
    })?;

    info!(path = %path.display(), "JSON report exported");
    Ok(())
}
