//! Error types for the salary letter pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for all generation and rendering operations
#[derive(Error, Debug)]
pub enum SalaryError {
    #[error("File system error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    #[error("Rendering error: {0}")]
    Render(String),

    #[error("Failed to create output directory {}: {source}", path.display())]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to allocate a unique identifier after {attempts} attempts")]
    IdentifierSpaceExhausted { attempts: u32 },
}

impl From<salary_types::TypeError> for SalaryError {
    fn from(err: salary_types::TypeError) -> Self {
        SalaryError::Validation(err.to_string())
    }
}

impl From<config::ConfigError> for SalaryError {
    fn from(err: config::ConfigError) -> Self {
        SalaryError::Config(err.to_string())
    }
}

/// Result type for salary pipeline operations
pub type Result<T> = std::result::Result<T, SalaryError>;
