//! Rates and the rate/period pair shared by every formula

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CalcError;

/// A fractional rate per period (e.g., 0.05 for 5%)
///
/// Rates may be zero or negative. Equality, hashing and ordering follow the
/// numeric value, so `0.05` and `0.050` are the same rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rate(Decimal);

impl Rate {
    pub const ZERO: Rate = Rate(Decimal::ZERO);

    /// Creates a rate from a decimal fraction
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Creates a rate from a binary floating point fraction
    ///
    /// The value is taken from its shortest decimal representation, so
    /// `Rate::of(0.05)` is exactly `0.05`.
    ///
    /// # Errors
    ///
    /// `CalcError::InvalidArgument` if the value is NaN, infinite or out of
    /// decimal range, including non-zero values too small to represent.
    pub fn of(value: f64) -> Result<Self, CalcError> {
        if !value.is_finite() {
            return Err(CalcError::invalid_argument(format!(
                "rate must be finite, was {value}"
            )));
        }
        let out_of_range = || CalcError::invalid_argument(format!("rate out of range: {value}"));
        let decimal = Decimal::from_str(&value.to_string()).map_err(|_| out_of_range())?;
        if decimal.is_zero() && value != 0.0 {
            return Err(out_of_range());
        }
        Ok(Self(decimal))
    }

    /// Creates a rate from a percentage (e.g., 5 for 5%)
    pub fn from_percentage(percentage: Decimal) -> Self {
        Self(percentage / Decimal::ONE_HUNDRED)
    }

    /// Returns the rate as a decimal fraction
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Returns the rate as a percentage
    pub fn as_percentage(&self) -> Decimal {
        self.0 * Decimal::ONE_HUNDRED
    }

    /// Returns `1 + r`, the growth over a single period
    pub fn growth_factor(&self) -> Result<Decimal, CalcError> {
        Decimal::ONE.checked_add(self.0).ok_or(CalcError::Overflow)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rate[{}]", self.0.normalize())
    }
}

impl FromStr for Rate {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map(Self)
            .map_err(|_| CalcError::invalid_argument(format!("not a decimal rate: {s:?}")))
    }
}

impl From<Decimal> for Rate {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

/// A rate together with a non-negative number of periods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RateAndPeriods {
    rate: Rate,
    periods: u32,
}

impl RateAndPeriods {
    /// Creates a new pair
    ///
    /// # Errors
    ///
    /// `CalcError::InvalidArgument` if `periods` is negative or exceeds
    /// `u32::MAX`.
    pub fn new(rate: Rate, periods: i64) -> Result<Self, CalcError> {
        let periods = u32::try_from(periods).map_err(|_| {
            CalcError::invalid_argument(format!("periods must be >= 0, was {periods}"))
        })?;
        Ok(Self { rate, periods })
    }

    /// Creates a pair from a floating point rate
    pub fn of(rate: f64, periods: i64) -> Result<Self, CalcError> {
        Self::new(Rate::of(rate)?, periods)
    }

    /// Creates a pair from a textual rate, e.g. read from user input
    pub fn parse(rate: &str, periods: i64) -> Result<Self, CalcError> {
        Self::new(rate.parse()?, periods)
    }

    pub fn rate(&self) -> Rate {
        self.rate
    }

    pub fn periods(&self) -> u32 {
        self.periods
    }
}

impl fmt::Display for RateAndPeriods {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RateAndPeriods{{rate={}, periods={}}}", self.rate, self.periods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rate_equality_by_value() {
        assert_eq!(Rate::new(dec!(0.05)), Rate::new(dec!(0.050)));
        assert_eq!(Rate::of(0.05).unwrap(), Rate::new(dec!(0.05)));
    }

    #[test]
    fn test_rate_rejects_non_finite() {
        assert!(matches!(Rate::of(f64::NAN), Err(CalcError::InvalidArgument(_))));
        assert!(matches!(Rate::of(f64::INFINITY), Err(CalcError::InvalidArgument(_))));
    }

    #[test]
    fn test_rate_too_small_to_represent_is_rejected() {
        assert!(matches!(Rate::of(1e-30), Err(CalcError::InvalidArgument(_))));
        assert!(matches!(Rate::of(-1e-300), Err(CalcError::InvalidArgument(_))));
        assert_eq!(Rate::of(0.0).unwrap(), Rate::ZERO);
        assert_eq!(Rate::of(-0.0).unwrap(), Rate::ZERO);
    }

    #[test]
    fn test_rate_display() {
        assert_eq!(Rate::new(dec!(0.0500)).to_string(), "Rate[0.05]");
        assert_eq!(Rate::new(dec!(-0.05)).to_string(), "Rate[-0.05]");
    }

    #[test]
    fn test_negative_periods_rejected() {
        assert!(matches!(
            RateAndPeriods::of(0.05, -1),
            Err(CalcError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_rate_and_periods_display() {
        let rp = RateAndPeriods::of(0.05, 1).unwrap();
        assert_eq!(rp.to_string(), "RateAndPeriods{rate=Rate[0.05], periods=1}");
    }
}
