//! Test Data Builders
//!
//! Builders for rate stores and providers, so tests only spell out the rates
//! they care about.

use chrono::NaiveDate;
use core_kernel::Currency;
use domain_fx::{EcbHistoricProvider, FeedSource, HistoricRateStore, StaticFeedSource};
use rust_decimal::Decimal;

use crate::fixtures::{TemporalFixtures, ECB_FEED_FEBRUARY_2013};

/// Builder for a [`HistoricRateStore`] with hand-picked rates
pub struct RateStoreBuilder {
    day: NaiveDate,
    rates: Vec<(NaiveDate, Currency, Decimal)>,
}

impl Default for RateStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RateStoreBuilder {
    /// Starts with no rates; rates go to 19 February 2013 until [`on`](Self::on) is called
    pub fn new() -> Self {
        Self {
            day: TemporalFixtures::feb_19(),
            rates: Vec::new(),
        }
    }

    /// Subsequent rates are added for `day`
    pub fn on(mut self, day: NaiveDate) -> Self {
        self.day = day;
        self
    }

    /// Adds the EUR to `term` rate for the current day
    pub fn rate(mut self, term: Currency, factor: Decimal) -> Self {
        self.rates.push((self.day, term, factor));
        self
    }

    pub fn build(self) -> HistoricRateStore {
        let store = HistoricRateStore::ecb();
        for (day, term, factor) in self.rates {
            store.add_rate(term, day, factor);
        }
        store
    }

    /// A provider over the built store with no feed sources
    pub fn into_provider(self) -> EcbHistoricProvider {
        EcbHistoricProvider::with_sources(self.build(), Vec::new())
    }
}

/// Builder for providers with in-memory feed sources
pub struct ProviderBuilder {
    sources: Vec<Box<dyn FeedSource>>,
}

impl Default for ProviderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProviderBuilder {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Adds a source serving `document`
    pub fn document(mut self, name: &str, document: &str) -> Self {
        self.sources
            .push(Box::new(StaticFeedSource::new(name, document)));
        self
    }

    /// Adds a source serving the February 2013 fixture feed
    pub fn february_2013(self) -> Self {
        self.document("february-2013", ECB_FEED_FEBRUARY_2013)
    }

    pub fn source(mut self, source: Box<dyn FeedSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// An unloaded provider over an empty store
    pub fn build(self) -> EcbHistoricProvider {
        EcbHistoricProvider::with_sources(HistoricRateStore::ecb(), self.sources)
    }
}
