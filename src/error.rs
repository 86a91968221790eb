//! Error types for xlsxport.
//!
//! Malformed cell data never errors: blank and missing values render as
//! empty cells by design. Failures only come from the sink side.

use thiserror::Error;

/// Result type alias for export operations.
pub type Result<T> = std::result::Result<T, XlsxError>;

/// Errors raised while delivering an export to a sink.
#[derive(Error, Debug)]
pub enum XlsxError {
    /// IO error wrapper for file and writer sinks.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
