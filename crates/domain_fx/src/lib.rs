//! Historic ECB Exchange Rates
//!
//! This crate loads the European Central Bank's daily reference rates into a
//! concurrent, day-bucketed store and serves exchange rates for any pair of
//! published currencies:
//!
//! - EUR to a published currency: the stored rate
//! - A published currency to EUR: the inverse of the stored rate
//! - Between two non-EUR currencies: the product of both hops via EUR
//!
//! Rates are looked up by UTC calendar day. A day that was never loaded has no
//! rates, not even EUR/EUR.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use core_kernel::Currency;
//! use domain_fx::HistoricRateStore;
//! use rust_decimal::Decimal;
//!
//! let store = HistoricRateStore::ecb();
//! let day = NaiveDate::from_ymd_opt(2013, 2, 19).unwrap();
//! store.add_rate(Currency::USD, day, Decimal::new(13349, 4));
//!
//! let rate = store.get_exchange_rate(Currency::EUR, Currency::USD, day).unwrap();
//! assert_eq!(rate.factor(), Decimal::new(13349, 4));
//! ```

pub mod config;
pub mod converter;
pub mod error;
pub mod feed;
pub mod provider;
pub mod rate;
pub mod source;
pub mod store;

pub use config::FeedConfig;
pub use converter::CurrencyConverter;
pub use error::{FeedError, FxError};
pub use feed::{parse_feed, FeedSummary};
pub use provider::{EcbHistoricProvider, ExchangeRateProvider, LoadState};
pub use rate::{ExchangeRate, ExchangeRateType};
pub use source::{FeedSource, FileFeedSource, HttpFeedSource, StaticFeedSource, BUNDLED_FEED};
pub use store::HistoricRateStore;

/// Provider name recorded on every ECB rate
pub const ECB_PROVIDER: &str = "European Central Bank";
