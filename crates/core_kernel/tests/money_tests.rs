//! Unit tests for the Money module
//!
//! Tests cover money creation, arithmetic, rounding, display and
//! operator application.

use core_kernel::{Currency, Money, MoneyError, MonetaryOperator, Rounding};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_creates_money_with_correct_amount() {
        let m = Money::new(dec!(100.50), Currency::USD);
        assert_eq!(m.amount(), dec!(100.50));
        assert_eq!(m.currency(), Currency::USD);
    }

    #[test]
    fn test_new_keeps_sub_cent_precision() {
        let m = Money::new(dec!(100.123456789), Currency::USD);
        assert_eq!(m.amount(), dec!(100.123456789));
    }

    #[test]
    fn test_from_minor_converts_cents_correctly() {
        let m = Money::from_minor(10050, Currency::USD);
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_from_minor_handles_jpy_no_decimals() {
        let m = Money::from_minor(10000, Currency::JPY);
        assert_eq!(m.amount(), dec!(10000));
    }

    #[test]
    fn test_zero_creates_zero_amount() {
        let m = Money::zero(Currency::EUR);
        assert!(m.is_zero());
        assert_eq!(m.currency(), Currency::EUR);
    }

    #[test]
    fn test_equality_ignores_trailing_zeros() {
        assert_eq!(
            Money::new(dec!(10), Currency::CHF),
            Money::new(dec!(10.00), Currency::CHF)
        );
    }
}

mod predicates {
    use super::*;

    #[test]
    fn test_is_positive_false_for_zero() {
        assert!(!Money::zero(Currency::USD).is_positive());
    }

    #[test]
    fn test_is_negative_true_for_negative_amount() {
        assert!(Money::new(dec!(-100.00), Currency::USD).is_negative());
    }

    #[test]
    fn test_is_negative_false_for_zero() {
        assert!(!Money::zero(Currency::USD).is_negative());
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_checked_add_same_currency() {
        let a = Money::new(dec!(100.00), Currency::USD);
        let b = Money::new(dec!(50.00), Currency::USD);
        assert_eq!(a.checked_add(&b).unwrap().amount(), dec!(150.00));
    }

    #[test]
    fn test_checked_sub_currency_mismatch() {
        let a = Money::new(dec!(100.00), Currency::USD);
        let b = Money::new(dec!(50.00), Currency::EUR);
        assert!(matches!(
            a.checked_sub(&b),
            Err(MoneyError::CurrencyMismatch(_, _))
        ));
    }

    #[test]
    fn test_negation() {
        let m = Money::new(dec!(100.00), Currency::USD);
        assert_eq!((-m).amount(), dec!(-100.00));
    }

    #[test]
    fn test_multiply_by_scalar() {
        let m = Money::new(dec!(100.00), Currency::USD);
        assert_eq!(m.multiply(dec!(1.5)).unwrap().amount(), dec!(150.00));
    }

    #[test]
    fn test_divide_by_zero_error() {
        let m = Money::new(dec!(100.00), Currency::USD);
        assert_eq!(m.divide(Decimal::ZERO), Err(MoneyError::DivisionByZero));
    }

    #[test]
    fn test_divide_by_scalar() {
        let m = Money::new(dec!(100.00), Currency::USD);
        assert_eq!(m.divide(dec!(4)).unwrap().amount(), dec!(25.00));
    }
}

mod rounding {
    use super::*;

    #[test]
    fn test_round_to_currency_uses_currency_digits() {
        let usd = Money::new(dec!(10.555), Currency::USD);
        let jpy = Money::new(dec!(10.5), Currency::JPY);
        assert_eq!(usd.round_to_currency().amount(), dec!(10.56));
        assert_eq!(jpy.round_to_currency().amount(), dec!(10));
    }

    #[test]
    fn test_round_bankers() {
        let m = Money::new(dec!(90.705), Currency::CHF);
        assert_eq!(m.round_bankers(2).amount(), dec!(90.70));
    }

    #[test]
    fn test_with_applies_operator() {
        let m = Money::new(dec!(46.30119), Currency::CHF);
        let op = Rounding::half_even(2);
        assert_eq!(m.with(&op).unwrap(), op.apply(m).unwrap());
        assert_eq!(m.with(&op).unwrap().amount(), dec!(46.30));
    }
}

mod display {
    use super::*;

    #[test]
    fn test_display_uses_currency_digits() {
        assert_eq!(Money::new(dec!(10), Currency::CHF).to_string(), "CHF 10.00");
        assert_eq!(Money::new(dec!(1250), Currency::JPY).to_string(), "JPY 1250");
    }

    #[test]
    fn test_serde_round_trip() {
        let m = Money::new(dec!(12.34), Currency::EUR);
        let json = serde_json::to_string(&m).unwrap();
        assert!(json.contains("\"EUR\""));
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
