//! Historic ECB rate provider
//!
//! The provider owns a [`HistoricRateStore`] and fills it from an ordered
//! list of [`FeedSource`]s: the first source that delivers a readable
//! document wins; a failed fetch or a malformed document falls through to the
//! next one. Loading can run inline, in the background, or periodically;
//! lookups are served from whatever has been loaded so far.

use chrono::{DateTime, Utc};
use core_kernel::{utc_day, Currency};
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{info, instrument, warn};

use crate::config::FeedConfig;
use crate::converter::CurrencyConverter;
use crate::error::FxError;
use crate::feed::{parse_feed, FeedSummary};
use crate::rate::{ExchangeRate, ExchangeRateType};
use crate::source::{FeedSource, FileFeedSource, HttpFeedSource, StaticFeedSource};
use crate::store::HistoricRateStore;

/// Looks up exchange rates between currencies
pub trait ExchangeRateProvider: Send + Sync {
    /// The kind of rates this provider serves
    fn rate_type(&self) -> ExchangeRateType;

    /// The most recent rate for a currency pair
    fn get_exchange_rate(&self, base: Currency, term: Currency) -> Option<ExchangeRate>;

    /// The rate for a currency pair on the UTC day of `timestamp`
    fn get_exchange_rate_at(
        &self,
        base: Currency,
        term: Currency,
        timestamp: DateTime<Utc>,
    ) -> Option<ExchangeRate>;

    fn is_available(&self, base: Currency, term: Currency) -> bool {
        self.get_exchange_rate(base, term).is_some()
    }

    fn is_available_at(&self, base: Currency, term: Currency, timestamp: DateTime<Utc>) -> bool {
        self.get_exchange_rate_at(base, term, timestamp).is_some()
    }

    /// Looks up the opposite direction of `rate` at the rate's own time
    fn get_reversed(&self, rate: &ExchangeRate) -> Option<ExchangeRate> {
        self.get_exchange_rate_at(rate.term(), rate.base(), rate.valid_from())
    }

    /// A converter backed by this provider
    fn converter(&self) -> CurrencyConverter<'_, Self>
    where
        Self: Sized,
    {
        CurrencyConverter::new(self)
    }
}

/// Progress of the provider's loading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing loaded yet
    Unloaded,
    /// A load is running
    Loading,
    /// At least one load completed; `days` days are available
    Loaded { days: usize },
}

/// Serves historic ECB reference rates
///
/// Cloning is cheap; clones share the store and load state.
#[derive(Clone)]
pub struct EcbHistoricProvider {
    inner: Arc<Inner>,
}

struct Inner {
    store: HistoricRateStore,
    sources: Vec<Box<dyn FeedSource>>,
    state: RwLock<LoadState>,
    // held for the whole of a load so overlapping loads run one after another
    loading: Mutex<()>,
}

impl EcbHistoricProvider {
    /// Creates a provider reading from the configured URL, falling back to the
    /// configured file and then to the bundled snapshot
    ///
    /// Nothing is loaded until [`load`](Self::load) or one of its variants runs.
    pub fn new(config: &FeedConfig) -> Result<Self, FxError> {
        let mut sources: Vec<Box<dyn FeedSource>> =
            vec![Box::new(HttpFeedSource::new(config.url.clone(), config.timeout())?)];
        if let Some(path) = &config.fallback_path {
            sources.push(Box::new(FileFeedSource::new(path.clone())));
        }
        if config.bundled_fallback {
            sources.push(Box::new(StaticFeedSource::bundled()));
        }
        Ok(Self::with_sources(HistoricRateStore::ecb(), sources))
    }

    /// Creates a provider over an existing store and explicit sources, tried in order
    pub fn with_sources(store: HistoricRateStore, sources: Vec<Box<dyn FeedSource>>) -> Self {
        let state = if store.is_empty() {
            LoadState::Unloaded
        } else {
            LoadState::Loaded { days: store.len() }
        };
        Self {
            inner: Arc::new(Inner {
                store,
                sources,
                state: RwLock::new(state),
                loading: Mutex::new(()),
            }),
        }
    }

    pub fn store(&self) -> &HistoricRateStore {
        &self.inner.store
    }

    pub fn state(&self) -> LoadState {
        *self.inner.state.read()
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state(), LoadState::Loaded { .. })
    }

    /// Fetches and reads one feed document into the store
    ///
    /// A load started while another is running waits for it to finish. On
    /// failure the state returns to what the store holds: `Unloaded` if empty,
    /// `Loaded` otherwise.
    #[instrument(skip(self), fields(sources = self.inner.sources.len()))]
    pub async fn load(&self) -> Result<FeedSummary, FxError> {
        let _running = self.inner.loading.lock().await;
        let days_before = self.inner.store.len();
        *self.inner.state.write() = LoadState::Loading;

        let result = self.fetch_and_read().await;

        let days = self.inner.store.len();
        *self.inner.state.write() = self.settled_state();
        match &result {
            Ok(summary) => info!(
                days,
                new_days = days.saturating_sub(days_before),
                rates = summary.rates,
                skipped = summary.skipped,
                "Loaded ECB exchange rates"
            ),
            Err(err) => warn!(error = %err, days, "Loading ECB exchange rates failed"),
        }
        result
    }

    /// Starts a load without waiting for it; failures are logged
    pub fn load_in_background(&self) -> JoinHandle<()> {
        let provider = self.clone();
        tokio::spawn(async move {
            // load() logs its own failure
            let _ = provider.load().await;
        })
    }

    /// Loads now and then every `period`, until the returned task is aborted
    pub fn refresh_every(&self, period: Duration) -> JoinHandle<()> {
        let provider = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                let _ = provider.load().await;
            }
        })
    }

    async fn fetch_and_read(&self) -> Result<FeedSummary, FxError> {
        let mut last_error = None;
        for source in &self.inner.sources {
            let read = match source.fetch().await {
                Ok(document) => parse_feed(&document, &self.inner.store).map_err(FxError::from),
                Err(err) => Err(err),
            };
            match read {
                Ok(summary) => return Ok(summary),
                Err(err) => {
                    warn!(source = %source.describe(), error = %err, "Feed source failed");
                    last_error = Some(err);
                }
            }
        }
        Err(last_error.unwrap_or_else(|| FxError::configuration("no feed sources configured")))
    }

    fn settled_state(&self) -> LoadState {
        if self.inner.store.is_empty() {
            LoadState::Unloaded
        } else {
            LoadState::Loaded {
                days: self.inner.store.len(),
            }
        }
    }
}

impl ExchangeRateProvider for EcbHistoricProvider {
    fn rate_type(&self) -> ExchangeRateType {
        self.inner.store.rate_type().clone()
    }

    fn get_exchange_rate(&self, base: Currency, term: Currency) -> Option<ExchangeRate> {
        let day = self.inner.store.latest_day()?;
        self.inner.store.get_exchange_rate(base, term, day)
    }

    fn get_exchange_rate_at(
        &self,
        base: Currency,
        term: Currency,
        timestamp: DateTime<Utc>,
    ) -> Option<ExchangeRate> {
        self.inner
            .store
            .get_exchange_rate(base, term, utc_day(timestamp))
    }
}

impl std::fmt::Debug for EcbHistoricProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EcbHistoricProvider")
            .field(
                "sources",
                &self
                    .inner
                    .sources
                    .iter()
                    .map(|source| source.describe())
                    .collect::<Vec<_>>(),
            )
            .field("state", &self.state())
            .finish()
    }
}
