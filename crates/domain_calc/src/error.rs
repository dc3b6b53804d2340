//! Calculation errors

use core_kernel::MoneyError;
use thiserror::Error;

/// Errors that can occur while constructing or evaluating a formula
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Overflow during calculation")]
    Overflow,

    #[error("Money error: {0}")]
    Money(#[from] MoneyError),
}

impl CalcError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        CalcError::InvalidArgument(message.into())
    }
}
