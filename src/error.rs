//! Error handling for the ATS analyzer
//!
//! The analysis pipeline itself is total and never produces these errors;
//! they come from the layers around it (input, configuration, output).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, AtsError>;

impl From<askama::Error> for AtsError {
    fn from(err: askama::Error) -> Self {
        AtsError::OutputFormatting(err.to_string())
    }
}
