//! Day-bucketed table of reference rates
//!
//! Every entry maps the reference currency (EUR for the ECB) to one term
//! currency on one UTC day. Lookups for other currency pairs are derived from
//! these entries: inverted when the reference currency is the term, chained
//! through the reference currency when neither side is.

use chrono::NaiveDate;
use core_kernel::{start_of_day, Currency};
use dashmap::DashMap;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::debug;

use crate::rate::{ExchangeRate, ExchangeRateType};

/// Rates of a single day, keyed by term currency
type DayRates = DashMap<Currency, ExchangeRate>;

/// Concurrent table of historic reference rates
///
/// The table only grows; adding a rate for an existing `(day, currency)`
/// replaces it.
#[derive(Debug)]
pub struct HistoricRateStore {
    reference: Currency,
    provider: String,
    rate_type: ExchangeRateType,
    days: DashMap<NaiveDate, Arc<DayRates>>,
}

impl HistoricRateStore {
    pub fn new(
        reference: Currency,
        provider: impl Into<String>,
        rate_type: ExchangeRateType,
    ) -> Self {
        Self {
            reference,
            provider: provider.into(),
            rate_type,
            days: DashMap::new(),
        }
    }

    /// An empty store for ECB reference rates, based on EUR
    pub fn ecb() -> Self {
        Self::new(Currency::EUR, crate::ECB_PROVIDER, ExchangeRateType::EZB)
    }

    pub fn reference(&self) -> Currency {
        self.reference
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn rate_type(&self) -> &ExchangeRateType {
        &self.rate_type
    }

    /// Stores the rate `reference -> term` for a day
    pub fn add_rate(&self, term: Currency, day: NaiveDate, factor: Decimal) {
        let rate = self.rate(self.reference, term, factor, day);
        let day_rates = Arc::clone(
            self.days
                .entry(day)
                .or_insert_with(|| Arc::new(DashMap::new()))
                .value(),
        );
        day_rates.insert(term, rate);
    }

    /// Looks up the rate `base -> term` on a day
    ///
    /// Returns `None` if the day was never loaded or a needed entry is missing.
    pub fn get_exchange_rate(
        &self,
        base: Currency,
        term: Currency,
        day: NaiveDate,
    ) -> Option<ExchangeRate> {
        let Some(day_rates) = self.day_rates(day) else {
            debug!(%day, "No reference rates loaded for day");
            return None;
        };

        if base == self.reference && term == self.reference {
            return Some(self.rate(base, term, Decimal::ONE, day));
        }
        if term == self.reference {
            let stored = day_rates.get(&base).map(|r| r.value().clone());
            return stored.and_then(|r| r.reverse());
        }
        if base == self.reference {
            let stored = day_rates.get(&term).map(|r| r.value().clone());
            return stored;
        }

        let to_reference = self.get_exchange_rate(base, self.reference, day)?;
        let from_reference = self.get_exchange_rate(self.reference, term, day)?;
        let factor = to_reference.factor().checked_mul(from_reference.factor())?;
        Some(
            self.rate(base, term, factor, day)
                .with_chain(vec![to_reference, from_reference]),
        )
    }

    /// Looks up the inverse of a rate on the rate's own day
    pub fn get_reversed(&self, rate: &ExchangeRate) -> Option<ExchangeRate> {
        self.get_exchange_rate(rate.term(), rate.base(), rate.day())
    }

    /// The most recent day with rates
    pub fn latest_day(&self) -> Option<NaiveDate> {
        self.days.iter().map(|entry| *entry.key()).max()
    }

    /// All loaded days, oldest first
    pub fn days(&self) -> Vec<NaiveDate> {
        let mut days: Vec<NaiveDate> = self.days.iter().map(|entry| *entry.key()).collect();
        days.sort_unstable();
        days
    }

    /// Term currencies with a rate on a day, sorted by code
    pub fn currencies_on(&self, day: NaiveDate) -> Vec<Currency> {
        let Some(day_rates) = self.day_rates(day) else {
            return Vec::new();
        };
        let mut currencies: Vec<Currency> = day_rates.iter().map(|entry| *entry.key()).collect();
        currencies.sort_unstable_by(|a, b| a.code().cmp(b.code()));
        currencies
    }

    /// Number of loaded days
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Number of stored entries over all days
    pub fn rate_count(&self) -> usize {
        self.days.iter().map(|entry| entry.value().len()).sum()
    }

    fn day_rates(&self, day: NaiveDate) -> Option<Arc<DayRates>> {
        self.days.get(&day).map(|entry| Arc::clone(entry.value()))
    }

    fn rate(&self, base: Currency, term: Currency, factor: Decimal, day: NaiveDate) -> ExchangeRate {
        ExchangeRate::new(
            base,
            term,
            factor,
            start_of_day(day),
            self.provider.clone(),
            self.rate_type.clone(),
        )
    }
}

impl Default for HistoricRateStore {
    fn default() -> Self {
        Self::ecb()
    }
}
