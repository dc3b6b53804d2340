//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use core_kernel::{Currency, Money};
use domain_calc::{Rate, RateAndPeriods};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for currencies the ECB publishes rates for
pub fn ecb_currency_strategy() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::USD),
        Just(Currency::GBP),
        Just(Currency::JPY),
        Just(Currency::CHF),
        Just(Currency::INR),
        Just(Currency::AUD),
        Just(Currency::CAD),
        Just(Currency::SGD),
        Just(Currency::HKD),
        Just(Currency::CNY),
    ]
}

/// Strategy for Money values (can be negative)
pub fn money_strategy() -> impl Strategy<Value = Money> {
    (-1_000_000_000i64..1_000_000_000i64, ecb_currency_strategy())
        .prop_map(|(minor, currency)| Money::from_minor(minor, currency))
}

/// Strategy for positive EUR to term factors, 0.0001 to 9999.9999
pub fn factor_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|n| Decimal::new(n, 4))
}

/// Strategy for rates between -20% and +20%, in basis point steps
pub fn rate_strategy() -> impl Strategy<Value = Rate> {
    (-2_000i64..=2_000i64).prop_map(|bp| Rate::new(Decimal::new(bp, 4)))
}

/// Strategy for rate/period pairs with up to 50 periods
pub fn rate_and_periods_strategy() -> impl Strategy<Value = RateAndPeriods> {
    (rate_strategy(), 0i64..=50i64).prop_map(|(rate, periods)| {
        RateAndPeriods::new(rate, periods).expect("periods are non-negative")
    })
}
