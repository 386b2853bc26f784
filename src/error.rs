//! Error handling for the career matcher

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CareerMatchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Catalog is missing required columns: {}", missing.join(", "))]
    Schema { missing: Vec<String> },

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("DOCX extraction error: {0}")]
    DocxExtraction(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, CareerMatchError>;

/// Convert CSV reader errors to our custom error type
impl From<csv::Error> for CareerMatchError {
    fn from(err: csv::Error) -> Self {
        CareerMatchError::Catalog(err.to_string())
    }
}
