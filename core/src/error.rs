use thiserror::Error;

/// Result type for pathreport I/O operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// Error types for the table I/O layer
///
/// Extraction itself never fails; these errors only arise while reading
/// or writing the surrounding table.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The input table has no column with the expected name
    #[error("Required input column missing: {0}")]
    MissingColumn(String),

    /// Malformed delimited input or output
    #[error("CSV error: {0}")]
    CsvError(String),

    /// Serialization failure
    #[error("JSON error: {0}")]
    JsonError(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<csv::Error> for ReportError {
    fn from(e: csv::Error) -> Self {
        ReportError::CsvError(format!("{}", e))
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for ReportError {
    fn from(e: serde_json::Error) -> Self {
        ReportError::JsonError(format!("{}", e))
    }
}
