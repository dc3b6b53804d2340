//! Monetary operators
//!
//! An operator maps one `Money` value to another. Formula types implement
//! it so that they can be applied through `Money::with` without dynamic
//! dispatch.

use rust_decimal::RoundingStrategy;

use crate::money::{Money, MoneyError};

/// A function from a monetary amount to a monetary amount
pub trait MonetaryOperator {
    /// Error reported when the operator cannot be applied
    type Error: From<MoneyError>;

    /// Applies the operator to the given amount
    fn apply(&self, amount: Money) -> Result<Money, Self::Error>;
}

/// Rounds an amount to a fixed scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rounding {
    scale: u32,
    strategy: RoundingStrategy,
}

impl Rounding {
    /// Creates a rounding to `scale` decimal places with the given strategy
    pub fn new(scale: u32, strategy: RoundingStrategy) -> Self {
        Self { scale, strategy }
    }

    /// Banker's rounding (round half to even)
    pub fn half_even(scale: u32) -> Self {
        Self::new(scale, RoundingStrategy::MidpointNearestEven)
    }

    /// Commercial rounding (round half away from zero)
    pub fn half_up(scale: u32) -> Self {
        Self::new(scale, RoundingStrategy::MidpointAwayFromZero)
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }
}

impl MonetaryOperator for Rounding {
    type Error = MoneyError;

    fn apply(&self, amount: Money) -> Result<Money, MoneyError> {
        Ok(Money::new(
            amount
                .amount()
                .round_dp_with_strategy(self.scale, self.strategy),
            amount.currency(),
        ))
    }
}
