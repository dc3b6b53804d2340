//! Money conversion on top of a rate provider

use chrono::{DateTime, Utc};
use core_kernel::{utc_day, Currency, Money};

use crate::error::FxError;
use crate::provider::ExchangeRateProvider;
use crate::rate::ExchangeRate;

/// Converts amounts between currencies using a borrowed provider
#[derive(Debug)]
pub struct CurrencyConverter<'a, P: ExchangeRateProvider + ?Sized> {
    provider: &'a P,
}

impl<'a, P: ExchangeRateProvider + ?Sized> CurrencyConverter<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        Self { provider }
    }

    /// The most recent rate for a pair, or an error if there is none
    pub fn exchange_rate(&self, base: Currency, term: Currency) -> Result<ExchangeRate, FxError> {
        self.provider
            .get_exchange_rate(base, term)
            .ok_or(FxError::RateUnavailable {
                base,
                term,
                day: None,
            })
    }

    /// The rate for a pair on the UTC day of `timestamp`
    pub fn exchange_rate_at(
        &self,
        base: Currency,
        term: Currency,
        timestamp: DateTime<Utc>,
    ) -> Result<ExchangeRate, FxError> {
        self.provider
            .get_exchange_rate_at(base, term, timestamp)
            .ok_or(FxError::RateUnavailable {
                base,
                term,
                day: Some(utc_day(timestamp)),
            })
    }

    /// Converts with the most recent rate
    pub fn convert(&self, amount: Money, term: Currency) -> Result<Money, FxError> {
        if amount.currency() == term {
            return Ok(amount);
        }
        Ok(self.exchange_rate(amount.currency(), term)?.convert(amount)?)
    }

    /// Converts with the rate valid at `timestamp`
    pub fn convert_at(
        &self,
        amount: Money,
        term: Currency,
        timestamp: DateTime<Utc>,
    ) -> Result<Money, FxError> {
        if amount.currency() == term {
            return Ok(amount);
        }
        Ok(self
            .exchange_rate_at(amount.currency(), term, timestamp)?
            .convert(amount)?)
    }
}

impl<P: ExchangeRateProvider + ?Sized> Clone for CurrencyConverter<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: ExchangeRateProvider + ?Sized> Copy for CurrencyConverter<'_, P> {}
