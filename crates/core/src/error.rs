//! Error types for the reporting dashboard

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportDashError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Application-level error carried in a response body's `error` field.
    /// Displayed to the user verbatim, so no prefix.
    #[error("{0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),
}

pub type Result<T> = std::result::Result<T, ReportDashError>;
