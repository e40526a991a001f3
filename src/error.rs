//! Error handling for the resume radar application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeRadarError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Taxonomy error: {0}")]
    Taxonomy(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ResumeRadarError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ResumeRadarError {
    fn from(err: anyhow::Error) -> Self {
        ResumeRadarError::InvalidInput(err.to_string())
    }
}
