//! Continuous compound interest: `A * e^(r * n)`
//!
//! The exponential is evaluated in binary floating point (see
//! `CalculationContext::exp`), so results carry `f64` rounding error in the
//! last few significant digits.

use core_kernel::{MonetaryOperator, Money};
use rust_decimal::Decimal;

use crate::context::CalculationContext;
use crate::error::CalcError;
use crate::operator::rate_and_periods_operator;
use crate::rate::RateAndPeriods;

rate_and_periods_operator!(
    /// Grows an amount continuously at rate `r` for `n` periods
    ContinuousCompoundInterest
);

/// Returns `r * n` as a decimal
pub(crate) fn exponent(rate_and_periods: &RateAndPeriods) -> Result<Decimal, CalcError> {
    rate_and_periods
        .rate()
        .value()
        .checked_mul(Decimal::from(rate_and_periods.periods()))
        .ok_or(CalcError::Overflow)
}

/// Returns `e^(r * n)`
pub fn factor(rate_and_periods: &RateAndPeriods) -> Result<Decimal, CalcError> {
    CalculationContext::DEFAULT.exp(exponent(rate_and_periods)?)
}

pub fn calculate(amount: Money, rate_and_periods: &RateAndPeriods) -> Result<Money, CalcError> {
    CalculationContext::DEFAULT.scale(amount, factor(rate_and_periods)?)
}

impl MonetaryOperator for ContinuousCompoundInterest {
    type Error = CalcError;

    fn apply(&self, amount: Money) -> Result<Money, CalcError> {
        calculate(amount, self.rate_and_periods())
    }
}
