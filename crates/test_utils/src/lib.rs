//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! money extras test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built amounts, rates, days and ECB feed data
//! - `builders`: Builders for rate stores and providers
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
