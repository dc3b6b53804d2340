//! Present value of a single future amount: `FV * (1 + r)^-n`

use core_kernel::{MonetaryOperator, Money};

use crate::context::CalculationContext;
use crate::error::CalcError;
use crate::operator::rate_and_periods_operator;
use crate::rate::RateAndPeriods;

rate_and_periods_operator!(
    /// Discounts an amount over `n` periods at rate `r`
    PresentValue
);

/// Discounts `amount` over the given rate and periods
pub fn calculate(amount: Money, rate_and_periods: &RateAndPeriods) -> Result<Money, CalcError> {
    let ctx = CalculationContext::DEFAULT;
    let discount = ctx.pow(
        rate_and_periods.rate().growth_factor()?,
        -i64::from(rate_and_periods.periods()),
    )?;
    ctx.scale(amount, discount)
}

impl MonetaryOperator for PresentValue {
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
    fn test_discounts_to_cents() {
        let money = Money::new(dec!(100), Currency::CHF);
        let pv = |n| {
            PresentValue::of(Rate::new(dec!(0.05)), n)
                .unwrap()
                .apply(money)
                .unwrap()
                .round_bankers(2)
                .amount()
        };
        assert_eq!(pv(1), dec!(95.24));
        assert_eq!(pv(2), dec!(90.70));
        assert_eq!(pv(3), dec!(86.38));
    }

    #[test]
    fn test_long_horizon_discounts_toward_zero() {
        let money = Money::new(dec!(100), Currency::CHF);
        let pv = PresentValue::of(Rate::new(dec!(0.03)), 3654)
            .unwrap()
            .apply(money)
            .unwrap();
        assert_eq!(pv.currency(), Currency::CHF);
        assert!(pv.amount() >= dec!(0) && pv.amount() < dec!(0.0000001));
    }

    #[test]
    fn test_rate_of_minus_one_cannot_discount() {
        let money = Money::new(dec!(100), Currency::CHF);
        let pv = PresentValue::of(Rate::new(dec!(-1)), 1).unwrap();
        assert_eq!(pv.apply(money), Err(CalcError::DivisionByZero));
    }
}
