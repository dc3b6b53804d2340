//! Present value of an ordinary annuity (payments at period end)

use core_kernel::{MonetaryOperator, Money};

use crate::context::CalculationContext;
use crate::error::CalcError;
use crate::operator::rate_and_periods_operator;
use crate::present_value_of_annuity_payment_factor;
use crate::rate::RateAndPeriods;

rate_and_periods_operator!(
    /// Values a series of equal end-of-period payments of the applied amount
    PresentValueOfAnnuity
);

pub fn calculate(amount: Money, rate_and_periods: &RateAndPeriods) -> Result<Money, CalcError> {
    let factor = present_value_of_annuity_payment_factor::calculate(
        rate_and_periods.rate(),
        i64::from(rate_and_periods.periods()),
    )?;
    CalculationContext::DEFAULT.scale(amount, factor)
}

impl MonetaryOperator for PresentValueOfAnnuity {
    type Error = CalcError;

    fn apply(&self, amount: Money) -> Result<Money, CalcError> {
        calculate(amount, self.rate_and_periods())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rate::Rate;
    use core_kernel::Currency;
    use rust_decimal_macros::dec;

    #[test]
    fn test_ten_payments() {
        let pva = PresentValueOfAnnuity::of(Rate::new(dec!(0.05)), 10).unwrap();
        let value = pva.apply(Money::new(dec!(100), Currency::USD)).unwrap();
        assert_eq!(value.round_bankers(2).amount(), dec!(772.17));
    }
}
