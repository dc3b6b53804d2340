//! Present value of annuity payment factor
//!
//! `PVA = (1 - (1 + r)^-n) / r`, the present value of `n` end-of-period
//! payments of one unit each.

use rust_decimal::Decimal;

use crate::context::CalculationContext;
use crate::error::CalcError;
use crate::rate::Rate;

/// Computes the annuity factor for `periods` payments
///
/// # Errors
///
/// * `CalcError::InvalidArgument` if `periods` is negative
/// * `CalcError::DivisionByZero` if the rate is zero and `periods > 0`
///
/// # Example
///
/// ```rust
/// use domain_calc::{present_value_of_annuity_payment_factor, Rate};
/// use rust_decimal_macros::dec;
///
/// let factor = present_value_of_annuity_payment_factor::calculate(Rate::new(dec!(0.05)), 0).unwrap();
/// assert!(factor.is_zero());
/// ```
pub fn calculate(rate: Rate, periods: i64) -> Result<Decimal, CalcError> {
    if periods < 0 {
        return Err(CalcError::invalid_argument(format!(
            "annuity factor requires periods >= 0, was {periods}"
        )));
    }
    if periods == 0 {
        return Ok(Decimal::ZERO);
    }
    let ctx = CalculationContext::DEFAULT;
    let discount = ctx.pow(rate.growth_factor()?, -periods)?;
    ctx.divide(Decimal::ONE - discount, rate.value())
}
