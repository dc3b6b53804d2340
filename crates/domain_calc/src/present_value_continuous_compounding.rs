//! Present value under continuous compounding: `FV * e^-(r * n)`

use core_kernel::{MonetaryOperator, Money};
use rust_decimal::Decimal;

use crate::context::CalculationContext;
use crate::continuous_compound_interest;
use crate::error::CalcError;
use crate::operator::rate_and_periods_operator;
use crate::rate::RateAndPeriods;

rate_and_periods_operator!(
    /// Discounts an amount continuously at rate `r` over `n` periods
    PresentValueContinuousCompounding
);

/// Returns `e^-(r * n)`
pub fn factor(rate_and_periods: &RateAndPeriods) -> Result<Decimal, CalcError> {
    let exponent = continuous_compound_interest::exponent(rate_and_periods)?;
    CalculationContext::DEFAULT.exp(-exponent)
}

pub fn calculate(amount: Money, rate_and_periods: &RateAndPeriods) -> Result<Money, CalcError> {
    CalculationContext::DEFAULT.scale(amount, factor(rate_and_periods)?)
}

impl MonetaryOperator for PresentValueContinuousCompounding {
    type Error = CalcError;

    fn apply(&self, amount: Money) -> Result<Money, CalcError> {
        calculate(amount, self.rate_and_periods())
    }
}
