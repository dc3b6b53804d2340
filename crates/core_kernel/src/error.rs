//! Errors raised while reading monetary input

use thiserror::Error;
use crate::money::MoneyError;
use crate::temporal::TemporalError;

/// A value supplied from outside (command line, configuration) was rejected
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid money value: {0}")]
    Money(#[from] MoneyError),

    #[error("Invalid day: {0}")]
    Temporal(#[from] TemporalError),

    #[error("Invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },
}

impl CoreError {
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        CoreError::Validation {
            field,
            message: message.into(),
        }
    }
}
