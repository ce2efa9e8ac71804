//! Error handling for the resume insight application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeInsightError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Text processing error: {0}")]
    TextProcessing(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ResumeInsightError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ResumeInsightError {
    fn from(err: anyhow::Error) -> Self {
        ResumeInsightError::Processing(err.to_string())
    }
}
