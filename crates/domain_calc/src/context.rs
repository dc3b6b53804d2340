//! Shared numeric context for all formulas
//!
//! Every formula evaluates under the same precision and rounding mode so
//! that results are reproducible to the cent regardless of which operator
//! produced them.

use core_kernel::Money;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::CalcError;

/// Precision and rounding applied to intermediate results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculationContext {
    precision: u32,
    strategy: RoundingStrategy,
}

impl CalculationContext {
    /// 16 significant digits, round half to even
    pub const DEFAULT: CalculationContext = CalculationContext {
        precision: 16,
        strategy: RoundingStrategy::MidpointNearestEven,
    };

    /// Creates a context with the given number of significant digits
    pub const fn new(precision: u32, strategy: RoundingStrategy) -> Self {
        Self { precision, strategy }
    }

    /// Number of significant digits kept
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Rounds a value to the context precision
    pub fn round(&self, value: Decimal) -> Decimal {
        value
            .round_sf_with_strategy(self.precision, self.strategy)
            .unwrap_or(value)
    }

    /// Checked multiplication, rounded to the context
    pub fn multiply(&self, lhs: Decimal, rhs: Decimal) -> Result<Decimal, CalcError> {
        lhs.checked_mul(rhs)
            .map(|v| self.round(v))
            .ok_or(CalcError::Overflow)
    }

    /// Checked division, rounded to the context
    pub fn divide(&self, numerator: Decimal, denominator: Decimal) -> Result<Decimal, CalcError> {
        if denominator.is_zero() {
            return Err(CalcError::DivisionByZero);
        }
        numerator
            .checked_div(denominator)
            .map(|v| self.round(v))
            .ok_or(CalcError::Overflow)
    }

    /// Multiplies a monetary amount by a factor, rounded to the context
    pub fn scale(&self, amount: Money, factor: Decimal) -> Result<Money, CalcError> {
        Ok(Money::new(
            self.multiply(amount.amount(), factor)?,
            amount.currency(),
        ))
    }

    /// Raises `base` to an integer power by repeated squaring
    ///
    /// A negative exponent is evaluated as the power of the reciprocal, so
    /// long discounting horizons shrink toward zero instead of overflowing.
    pub fn pow(&self, base: Decimal, exponent: i64) -> Result<Decimal, CalcError> {
        if exponent < 0 {
            let reciprocal = self.divide(Decimal::ONE, base)?;
            let magnitude = exponent.checked_neg().ok_or(CalcError::Overflow)?;
            return self.pow(reciprocal, magnitude);
        }

        let mut result = Decimal::ONE;
        let mut square = base;
        let mut remaining = exponent as u64;
        while remaining > 0 {
            if remaining & 1 == 1 {
                result = self.multiply(result, square)?;
            }
            remaining >>= 1;
            if remaining > 0 {
                square = self.multiply(square, square)?;
            }
        }
        Ok(result)
    }

    /// e^x computed in binary floating point
    ///
    /// Inherits the error bound of `f64::exp`; the result is converted back
    /// to a decimal with at most 15 significant digits.
    pub fn exp(&self, exponent: Decimal) -> Result<Decimal, CalcError> {
        let x = exponent.to_f64().ok_or(CalcError::Overflow)?;
        let value = x.exp();
        if !value.is_finite() {
            return Err(CalcError::Overflow);
        }
        Decimal::from_f64(value).ok_or(CalcError::Overflow)
    }
}

impl Default for CalculationContext {
    fn default() -> Self {
        Self::DEFAULT
    }
}
