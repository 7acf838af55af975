//! Manifest output: `urls.json` and `urls.csv`.
//!
//! The CSV has one row per college with columns `id,name,logo,images`. The two
//! list columns hold every locator joined with `|`; inside a locator `\` is
//! written as `\\` and `|` as `\|`, so the list can be split back without
//! ambiguity. Cells are then quoted per RFC 4180 where needed.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use thiserror::Error;
use unibuzz_core::{BatchReport, Locator};

pub(crate) const JSON_FILE: &str = "urls.json";
pub(crate) const CSV_FILE: &str = "urls.csv";
const CSV_HEADER: [&str; 4] = ["id", "name", "logo", "images"];
const LIST_SEPARATOR: char = '|';

#[derive(Debug, Error)]
pub(crate) enum ReportError {
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error for {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Where [`write_report`] put the two documents.
#[derive(Debug, Clone)]
pub(crate) struct ReportPaths {
    pub json: PathBuf,
    pub csv: PathBuf,
}

/// Write the report as `urls.json`, then derive `urls.csv` from that file.
///
/// Image files written earlier in the run are left alone if this fails.
///
/// # Errors
///
/// Returns [`ReportError`] if the output directory or either file cannot be
/// written, or the report cannot be serialized.
pub(crate) fn write_report(
    output_dir: &Path,
    report: &BatchReport,
) -> Result<ReportPaths, ReportError> {
    std::fs::create_dir_all(output_dir).map_err(|e| ReportError::Write {
        path: output_dir.display().to_string(),
        source: e,
    })?;

    let json_path = output_dir.join(JSON_FILE);
    let json = serde_json::to_string_pretty(report).map_err(|e| ReportError::Json {
        context: json_path.display().to_string(),
        source: e,
    })?;
    write_file(&json_path, json.as_bytes())?;

    // The table is derived from the document as written, not the in-memory copy.
    let written = load_report(&json_path)?;
    let csv_path = output_dir.join(CSV_FILE);
    write_file(&csv_path, render_csv(&written).as_bytes())?;

    tracing::info!(
        results = report.len(),
        json = %json_path.display(),
        csv = %csv_path.display(),
        "report written"
    );

    Ok(ReportPaths {
        json: json_path,
        csv: csv_path,
    })
}

/// Read a report previously written by [`write_report`].
///
/// # Errors
///
/// Returns [`ReportError::Read`] if the file cannot be read and
/// [`ReportError::Json`] if it is not a report document.
pub(crate) fn load_report(path: &Path) -> Result<BatchReport, ReportError> {
    let content = std::fs::read_to_string(path).map_err(|e| ReportError::Read {
        path: path.display().to_string(),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| ReportError::Json {
        context: path.display().to_string(),
        source: e,
    })
}

fn write_file(path: &Path, contents: &[u8]) -> Result<(), ReportError> {
    std::fs::write(path, contents).map_err(|e| ReportError::Write {
        path: path.display().to_string(),
        source: e,
    })
}

fn render_csv(report: &BatchReport) -> String {
    let mut out = String::new();
    push_row(&mut out, &CSV_HEADER);
    for result in &report.results {
        let logo = encode_list_cell(&result.logo_locators);
        let images = encode_list_cell(&result.image_locators);
        push_row(
            &mut out,
            &[
                result.id.as_str(),
                result.name.as_str(),
                logo.as_str(),
                images.as_str(),
            ],
        );
    }
    out
}

fn push_row(out: &mut String, cells: &[&str]) {
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&quote_csv_field(cell));
    }
    out.push_str("\r\n");
}

fn quote_csv_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Join locators into one cell, escaping `\` and the `|` separator.
fn encode_list_cell(locators: &[Locator]) -> String {
    let mut cell = String::new();
    for (i, locator) in locators.iter().enumerate() {
        if i > 0 {
            cell.push(LIST_SEPARATOR);
        }
        for c in locator.chars() {
            if c == '\\' || c == LIST_SEPARATOR {
                cell.push('\\');
            }
            cell.push(c);
        }
    }
    cell
}
