//! Tests for rejected input reporting

use core_kernel::error::CoreError;
use core_kernel::money::MoneyError;
use core_kernel::{parse_day, Currency};

#[test]
fn test_invalid_names_the_field() {
    let error = CoreError::invalid("amount", "not a decimal: \"12,50\"");

    assert!(matches!(error, CoreError::Validation { field: "amount", .. }));
    assert_eq!(error.to_string(), "Invalid amount: not a decimal: \"12,50\"");
}

#[test]
fn test_rejected_currency_code() {
    let error: CoreError = Currency::new("EURO").unwrap_err().into();

    assert!(matches!(error, CoreError::Money(MoneyError::InvalidCurrency(_))));
    assert!(error.to_string().starts_with("Invalid money value:"));
    assert!(error.to_string().contains("EURO"));
}

#[test]
fn test_rejected_day() {
    let error: CoreError = parse_day("19.02.2013").unwrap_err().into();

    assert!(matches!(error, CoreError::Temporal(_)));
    assert!(error.to_string().starts_with("Invalid day:"));
    assert!(error.to_string().contains("19.02.2013"));
}
