//! CLI error handling

use core_kernel::CoreError;
use domain_calc::CalcError;
use domain_fx::FxError;
use thiserror::Error;

/// Errors reported by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Input(#[from] CoreError),

    #[error("Calculation failed: {0}")]
    Calculation(#[from] CalcError),

    #[error(transparent)]
    ExchangeRate(#[from] FxError),
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
