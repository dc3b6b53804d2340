//! Exchange rates between two currencies

use chrono::{DateTime, NaiveDate, Utc};
use core_kernel::{utc_day, Currency, Money, MoneyError};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Significant digits kept when a factor is inverted
pub const REVERSE_PRECISION: u32 = 16;

/// Classifies where a rate comes from (e.g. ECB reference rates)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExchangeRateType(Cow<'static, str>);

impl ExchangeRateType {
    /// Reference rates published by the European Central Bank
    pub const EZB: ExchangeRateType = ExchangeRateType(Cow::Borrowed("EZB"));

    pub fn of(id: impl Into<String>) -> Self {
        Self(Cow::Owned(id.into()))
    }

    pub fn id(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExchangeRateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A conversion factor from a base to a term currency, valid from a point in time
///
/// Rates derived from other rates keep the hops they were computed from in
/// their chain; directly published rates have an empty chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRate {
    base: Currency,
    term: Currency,
    factor: Decimal,
    valid_from: DateTime<Utc>,
    provider: String,
    rate_type: ExchangeRateType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    chain: Vec<ExchangeRate>,
}

impl ExchangeRate {
    pub fn new(
        base: Currency,
        term: Currency,
        factor: Decimal,
        valid_from: DateTime<Utc>,
        provider: impl Into<String>,
        rate_type: ExchangeRateType,
    ) -> Self {
        Self {
            base,
            term,
            factor,
            valid_from,
            provider: provider.into(),
            rate_type,
            chain: Vec::new(),
        }
    }

    /// Records the rates this one was derived from
    pub fn with_chain(mut self, chain: Vec<ExchangeRate>) -> Self {
        self.chain = chain;
        self
    }

    pub fn base(&self) -> Currency {
        self.base
    }

    pub fn term(&self) -> Currency {
        self.term
    }

    pub fn factor(&self) -> Decimal {
        self.factor
    }

    pub fn valid_from(&self) -> DateTime<Utc> {
        self.valid_from
    }

    /// The UTC day the rate belongs to
    pub fn day(&self) -> NaiveDate {
        utc_day(self.valid_from)
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn rate_type(&self) -> &ExchangeRateType {
        &self.rate_type
    }

    pub fn chain(&self) -> &[ExchangeRate] {
        &self.chain
    }

    /// Returns true if the rate was computed from other rates
    pub fn is_derived(&self) -> bool {
        !self.chain.is_empty()
    }

    /// The inverse rate, `term -> base`, with `1 / factor` rounded half-even
    /// to 16 significant digits
    ///
    /// Returns `None` for a zero factor. The chain is not carried over.
    pub fn reverse(&self) -> Option<ExchangeRate> {
        if self.factor.is_zero() {
            return None;
        }
        let factor = Decimal::ONE
            .checked_div(self.factor)?
            .round_sf_with_strategy(REVERSE_PRECISION, RoundingStrategy::MidpointNearestEven)?;
        Some(Self {
            base: self.term,
            term: self.base,
            factor,
            valid_from: self.valid_from,
            provider: self.provider.clone(),
            rate_type: self.rate_type.clone(),
            chain: Vec::new(),
        })
    }

    /// Converts an amount in the base currency into the term currency
    ///
    /// The result keeps full precision; round it with
    /// [`Money::round_to_currency`] for display.
    pub fn convert(&self, amount: Money) -> Result<Money, MoneyError> {
        if amount.currency() != self.base {
            return Err(MoneyError::CurrencyMismatch(
                amount.currency().to_string(),
                self.base.to_string(),
            ));
        }
        let converted = amount.multiply(self.factor)?;
        Ok(Money::new(converted.amount(), self.term))
    }
}

impl fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} {} ({}, {})",
            self.base,
            self.term,
            self.factor.normalize(),
            self.day(),
            self.rate_type
        )
    }
}
