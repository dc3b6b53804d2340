//! Present value factor
//!
//! The compounding factor `(1 + r)^n`; dividing a future amount by it yields
//! its present value.

use rust_decimal::Decimal;

use crate::context::CalculationContext;
use crate::error::CalcError;
use crate::rate::RateAndPeriods;

/// Returns `(1 + r)^n`, which is exactly one for zero periods
pub fn calculate(rate_and_periods: &RateAndPeriods) -> Result<Decimal, CalcError> {
    CalculationContext::DEFAULT.pow(
        rate_and_periods.rate().growth_factor()?,
        i64::from(rate_and_periods.periods()),
    )
}
