//! Core Kernel - Foundational monetary types
//!
//! This crate provides the building blocks shared by the calculation and
//! exchange-rate crates:
//! - Money with precise decimal arithmetic
//! - ISO-4217 currency codes and the currency namespace lookup
//! - The `MonetaryOperator` abstraction applied through `Money::with`
//! - UTC day bucketing for dated data

pub mod currency;
pub mod money;
pub mod operator;
pub mod temporal;
pub mod error;

pub use currency::{Currency, CurrencyNamespace, ISO_NAMESPACE};
pub use money::{Money, MoneyError};
pub use operator::{MonetaryOperator, Rounding};
pub use temporal::{utc_day, start_of_day, parse_day, TemporalError};
pub use error::CoreError;
