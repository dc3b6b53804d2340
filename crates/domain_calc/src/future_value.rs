//! Future value of a present amount: `PV * (1 + r)^n`

use core_kernel::{MonetaryOperator, Money};

use crate::context::CalculationContext;
use crate::error::CalcError;
use crate::operator::rate_and_periods_operator;
use crate::present_value_factor;
use crate::rate::RateAndPeriods;

rate_and_periods_operator!(
    /// Compounds an amount over `n` periods at rate `r`
    FutureValue
);

pub fn calculate(amount: Money, rate_and_periods: &RateAndPeriods) -> Result<Money, CalcError> {
    let factor = present_value_factor::calculate(rate_and_periods)?;
    CalculationContext::DEFAULT.scale(amount, factor)
}

impl MonetaryOperator for FutureValue {
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
    fn test_compounds_amount() {
        let fv = FutureValue::of(Rate::new(dec!(0.05)), 2).unwrap();
        let result = fv.apply(Money::new(dec!(100), Currency::EUR)).unwrap();
        assert_eq!(result.amount(), dec!(110.25));
    }
}
