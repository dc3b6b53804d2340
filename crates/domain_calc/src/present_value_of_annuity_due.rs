//! Present value of an annuity due (payments at period start)
//!
//! Each payment is received one period earlier than in an ordinary annuity,
//! so the value is the ordinary annuity value grown by one period:
//! `PVAD = PVA * (1 + r)`.

use core_kernel::{MonetaryOperator, Money};
use rust_decimal::Decimal;

use crate::context::CalculationContext;
use crate::error::CalcError;
use crate::operator::rate_and_periods_operator;
use crate::present_value_of_annuity_payment_factor;
use crate::rate::RateAndPeriods;

rate_and_periods_operator!(
    /// Values a series of equal start-of-period payments of the applied amount
    PresentValueOfAnnuityDue
);

/// Returns `PVA * (1 + r)`; zero periods give a zero factor
pub fn factor(rate_and_periods: &RateAndPeriods) -> Result<Decimal, CalcError> {
    let rate = rate_and_periods.rate();
    let annuity = present_value_of_annuity_payment_factor::calculate(
        rate,
        i64::from(rate_and_periods.periods()),
    )?;
    CalculationContext::DEFAULT.multiply(annuity, rate.growth_factor()?)
}

pub fn calculate(amount: Money, rate_and_periods: &RateAndPeriods) -> Result<Money, CalcError> {
    CalculationContext::DEFAULT.scale(amount, factor(rate_and_periods)?)
}

impl MonetaryOperator for PresentValueOfAnnuityDue {
    type Error = CalcError;

    fn apply(&self, amount: Money) -> Result<Money, CalcError> {
        calculate(amount, self.rate_and_periods())
    }
}
