//! Basis points: one hundredth of a percent

use core_kernel::{MonetaryOperator, Money};
use rust_decimal::Decimal;
use std::fmt;

use crate::context::CalculationContext;
use crate::error::CalcError;
use crate::rate::Rate;

const BASIS_POINTS_PER_UNIT: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// A number of basis points; applying it yields that share of the amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BasisPoint(Decimal);

impl BasisPoint {
    pub fn of(points: Decimal) -> Self {
        Self(points)
    }

    /// Returns the number of basis points
    pub fn points(&self) -> Decimal {
        self.0
    }

    /// Returns the equivalent fractional rate (15 bp -> 0.0015)
    pub fn as_rate(&self) -> Rate {
        Rate::new(self.0 / BASIS_POINTS_PER_UNIT)
    }
}

impl fmt::Display for BasisPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\u{2031}", self.0.normalize())
    }
}

impl From<Rate> for BasisPoint {
    fn from(rate: Rate) -> Self {
        Self(rate.value() * BASIS_POINTS_PER_UNIT)
    }
}

impl MonetaryOperator for BasisPoint {
    type Error = CalcError;

    fn apply(&self, amount: Money) -> Result<Money, CalcError> {
        CalculationContext::DEFAULT.scale(amount, self.as_rate().value())
    }
}
