//! # xlsxport
//!
//! Dependency-free XLSX export: build a valid Office Open XML spreadsheet
//! package entirely in memory, from a list of column descriptors and
//! key-to-value rows.
//!
//! ## Features
//!
//! - **No spreadsheet or compression crates**: the ZIP container (stored
//!   entries, CRC-32, central directory, EOCD) and every OOXML part are
//!   written by hand
//! - **Pure core**: `build_xlsx` returns bytes; sinks for files and
//!   arbitrary writers sit on top
//! - **Lenient data model**: blank, missing and non-finite values render as
//!   empty cells instead of erroring
//! - **Inline strings**: no shared-strings table, one default cell format
//!
//! ## Quick Start
//!
//! ```
//! use xlsxport::{build_xlsx, Column, ExportOptions, Row};
//!
//! let columns = vec![
//!     Column::new("id", "ID"),
//!     Column::new("name", "Name"),
//!     Column::new("amount", "Amount").with_width(14.0),
//! ];
//!
//! let mut row = Row::new();
//! row.set("id", 1.0).set("name", "Alice").set("amount", 1250.5);
//!
//! let bytes = build_xlsx(&columns, &[row], &ExportOptions::default());
//! assert_eq!(&bytes[0..2], b"PK");
//! ```
//!
//! Writing straight to a file:
//!
//! ```no_run
//! use xlsxport::{export_to_file, Column, ExportOptions, Row};
//!
//! let columns = vec![Column::new("id", "ID")];
//! export_to_file("export.xlsx", &columns, &[], &ExportOptions::default())?;
//! # Ok::<(), xlsxport::XlsxError>(())
//! ```

pub mod cell_ref;
pub mod crc32;
pub mod error;
pub mod export;
pub mod package;
pub mod sheet;
pub mod types;
pub mod xml;
pub mod zip;

pub use error::{Result, XlsxError};
pub use export::{build_xlsx, export_to_file, export_to_writer, ExportOptions, XLSX_MIME};
pub use types::{CellValue, Column, Row};
