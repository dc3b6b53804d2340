//! Custom Test Assertions
//!
//! Assertion helpers for money and rate values with messages that show both
//! sides and the tolerance.

use core_kernel::{Money, MonetaryOperator, Rounding};
use domain_fx::ExchangeRate;
use rust_decimal::Decimal;

/// Asserts that two decimals differ by at most `tolerance`
pub fn assert_decimal_approx_eq(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Decimals differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Asserts that two Money values are approximately equal within a tolerance
///
/// # Panics
///
/// Panics if the currencies don't match or the amounts differ by more than tolerance
pub fn assert_money_approx_eq(actual: &Money, expected: &Money, tolerance: Decimal) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );
    assert_decimal_approx_eq(actual.amount(), expected.amount(), tolerance);
}

/// Asserts the amount rounded half-even to cents
pub fn assert_cents_eq(actual: &Money, expected: Decimal) {
    let rounded = Rounding::half_even(2)
        .apply(*actual)
        .unwrap_or_else(|err| panic!("Rounding {actual} failed: {err}"));
    assert_eq!(
        rounded.amount(),
        expected,
        "Expected {} {} after rounding to cents, got {} (unrounded {})",
        actual.currency(),
        expected,
        rounded.amount(),
        actual.amount()
    );
}

/// Asserts the currencies and factor of a rate
pub fn assert_rate(rate: &ExchangeRate, base: &str, term: &str, factor: Decimal) {
    assert_eq!(
        (rate.base().code(), rate.term().code()),
        (base, term),
        "Unexpected currency pair for {rate}"
    );
    assert_eq!(rate.factor(), factor, "Unexpected factor for {rate}");
}
