//! Future value of an ordinary annuity: `((1 + r)^n - 1) / r`

use core_kernel::{MonetaryOperator, Money};
use rust_decimal::Decimal;

use crate::context::CalculationContext;
use crate::error::CalcError;
use crate::operator::rate_and_periods_operator;
use crate::present_value_factor;
use crate::rate::RateAndPeriods;

rate_and_periods_operator!(
    /// Accumulated value of `n` equal end-of-period payments of the applied amount
    FutureValueOfAnnuity
);

/// Returns `((1 + r)^n - 1) / r`
///
/// # Errors
///
/// `CalcError::DivisionByZero` for a zero rate with at least one period.
pub fn factor(rate_and_periods: &RateAndPeriods) -> Result<Decimal, CalcError> {
    if rate_and_periods.periods() == 0 {
        return Ok(Decimal::ZERO);
    }
    let ctx = CalculationContext::DEFAULT;
    let compounded = present_value_factor::calculate(rate_and_periods)?;
    ctx.divide(compounded - Decimal::ONE, rate_and_periods.rate().value())
}

pub fn calculate(amount: Money, rate_and_periods: &RateAndPeriods) -> Result<Money, CalcError> {
    CalculationContext::DEFAULT.scale(amount, factor(rate_and_periods)?)
}

impl MonetaryOperator for FutureValueOfAnnuity {
    type Error = CalcError;

    fn apply(&self, amount: Money) -> Result<Money, CalcError> {
        calculate(amount, self.rate_and_periods())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rate::Rate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_two_periods() {
        let rp = RateAndPeriods::new(Rate::new(dec!(0.05)), 2).unwrap();
        assert_eq!(factor(&rp).unwrap(), dec!(2.05));
    }

    #[test]
    fn test_zero_rate() {
        let rp = RateAndPeriods::new(Rate::ZERO, 2).unwrap();
        assert_eq!(factor(&rp), Err(CalcError::DivisionByZero));
    }
}
