//! Exchange rate domain errors

use chrono::NaiveDate;
use core_kernel::{Currency, MoneyError};
use thiserror::Error;

/// Errors raised while reading a rate feed
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeedError {
    /// The document is not well-formed; records read before the error are kept
    #[error("Malformed feed document: {0}")]
    Xml(String),

    /// A single record could not be interpreted; it is skipped
    #[error("Invalid rate record: {0}")]
    InvalidRecord(String),
}

/// Errors that can occur in the exchange rate domain
#[derive(Debug, Error)]
pub enum FxError {
    #[error("No exchange rate available for {base}/{term}{}", on_day(.day))]
    RateUnavailable {
        base: Currency,
        term: Currency,
        day: Option<NaiveDate>,
    },

    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),

    #[error("Feed source {source_name} failed: {message}")]
    Source {
        source_name: String,
        message: String,
    },

    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl FxError {
    pub fn source_failed(source_name: impl Into<String>, message: impl ToString) -> Self {
        FxError::Source {
            source_name: source_name.into(),
            message: message.to_string(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        FxError::Configuration(message.into())
    }

    /// Returns true if the error means no rate was found
    pub fn is_unavailable(&self) -> bool {
        matches!(self, FxError::RateUnavailable { .. })
    }
}

impl From<config::ConfigError> for FxError {
    fn from(err: config::ConfigError) -> Self {
        FxError::Configuration(err.to_string())
    }
}

fn on_day(day: &Option<NaiveDate>) -> String {
    day.map(|d| format!(" on {d}")).unwrap_or_default()
}
