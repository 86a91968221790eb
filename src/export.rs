//! Public export facade and output sinks.
//!
//! `build_xlsx` is the pure core: bytes in memory, no I/O. The sink
//! functions are thin adapters so the same buffer can back a file on disk,
//! an HTTP response body, or any other `io::Write` consumer.

use std::io::Write;
use std::path::Path;

use chrono::Utc;

use crate::error::Result;
use crate::package::package_parts;
use crate::sheet::build_sheet_xml;
use crate::types::{Column, Row};
use crate::zip::ZipArchive;

/// MIME type for `.xlsx` downloads.
pub const XLSX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Options controlling an export.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Worksheet name shown on the sheet tab.
    pub sheet_name: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            sheet_name: "Submissions".to_string(),
        }
    }
}

impl ExportOptions {
    /// Options with a custom sheet name.
    pub fn with_sheet_name(sheet_name: impl Into<String>) -> Self {
        ExportOptions {
            sheet_name: sheet_name.into(),
        }
    }
}

/// Build a complete `.xlsx` package in memory.
///
/// Pure apart from the document timestamp: the same inputs always produce
/// the same part contents. An empty `rows` slice still yields a parseable
/// package with a header-only sheet.
///
/// # Examples
///
/// ```
/// use xlsxport::{build_xlsx, Column, ExportOptions, Row};
///
/// let columns = vec![Column::new("id", "ID"), Column::new("name", "Name")];
/// let rows = vec![Row::from_iter([("id", 1.0)])];
///
/// let bytes = build_xlsx(&columns, &rows, &ExportOptions::default());
/// assert_eq!(&bytes[0..2], b"PK");
/// ```
pub fn build_xlsx(columns: &[Column], rows: &[Row], options: &ExportOptions) -> Vec<u8> {
    let sheet_xml = build_sheet_xml(columns, rows);
    let parts = package_parts(&options.sheet_name, sheet_xml, Utc::now());

    let mut archive = ZipArchive::new();
    for part in parts {
        archive.add_entry(&part.path, part.content.into_bytes());
    }
    archive.finish()
}

/// Build the package and write it to any `io::Write` sink.
pub fn export_to_writer<W: Write>(
    mut writer: W,
    columns: &[Column],
    rows: &[Row],
    options: &ExportOptions,
) -> Result<()> {
    let bytes = build_xlsx(columns, rows, options);
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

/// Build the package and save it to a file path.
///
/// # Examples
///
/// ```no_run
/// use xlsxport::{export_to_file, Column, ExportOptions, Row};
///
/// let columns = vec![Column::new("id", "ID")];
/// export_to_file("export.xlsx", &columns, &[], &ExportOptions::default()).unwrap();
/// ```
pub fn export_to_file<P: AsRef<Path>>(
    path: P,
    columns: &[Column],
    rows: &[Row],
    options: &ExportOptions,
) -> Result<()> {
    let file = std::fs::File::create(path)?;
    export_to_writer(file, columns, rows, options)
}
