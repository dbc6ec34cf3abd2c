//! Parse and validation errors for the shared types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("Invalid identifier '{value}': {reason}")]
    InvalidIdentifier { value: String, reason: String },

    #[error("Invalid amount: '{0}'")]
    InvalidAmount(String),

    #[error("Invalid percentage: '{0}'")]
    InvalidPercent(String),

    #[error("Unknown schema: '{0}'")]
    UnknownSchema(String),

    #[error("Row has {found} populated columns, at least {required} required")]
    RowTooShort { required: usize, found: usize },
}
