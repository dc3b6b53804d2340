//! Tests for ISO-4217 currencies and the currency namespace

use core_kernel::{Currency, CurrencyNamespace, MoneyError, ISO_NAMESPACE};

mod codes {
    use super::*;

    #[test]
    fn test_constants_match_parsed_codes() {
        assert_eq!("EUR".parse::<Currency>().unwrap(), Currency::EUR);
        assert_eq!(Currency::new("usd").unwrap(), Currency::USD);
    }

    #[test]
    fn test_invalid_code_is_rejected() {
        assert_eq!(
            Currency::new("US$"),
            Err(MoneyError::InvalidCurrency("US$".to_string()))
        );
    }

    #[test]
    fn test_unknown_well_formed_code_is_accepted() {
        let xau = Currency::new("XAU").unwrap();
        assert!(!xau.is_iso());
        assert_eq!(xau.symbol(), "XAU");
    }

    #[test]
    fn test_display_and_debug() {
        assert_eq!(Currency::CHF.to_string(), "CHF");
        assert_eq!(format!("{:?}", Currency::CHF), "Currency(\"CHF\")");
    }

    #[test]
    fn test_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Currency::GBP).unwrap(), "\"GBP\"");
        let parsed: Currency = serde_json::from_str("\"jpy\"").unwrap();
        assert_eq!(parsed, Currency::JPY);
        assert!(serde_json::from_str::<Currency>("\"EURO\"").is_err());
    }
}

mod namespace {
    use super::*;

    #[test]
    fn test_iso_namespace_is_available() {
        let ns = CurrencyNamespace;
        assert!(ns.is_namespace_available(ISO_NAMESPACE));
        assert!(!ns.is_namespace_available("CRYPTO"));
        assert_eq!(ns.namespaces(), &[ISO_NAMESPACE]);
    }

    #[test]
    fn test_currencies_of_iso_namespace() {
        let currencies = CurrencyNamespace.currencies(ISO_NAMESPACE);
        assert!(currencies.contains(&Currency::EUR));
        assert!(currencies.contains(&Currency::JPY));
        assert!(currencies.iter().all(Currency::is_iso));
    }

    #[test]
    fn test_currencies_of_unknown_namespace_is_empty() {
        assert!(CurrencyNamespace.currencies("CRYPTO").is_empty());
    }

    #[test]
    fn test_namespaces_of_code() {
        assert_eq!(CurrencyNamespace.namespaces_of("CHF"), vec![ISO_NAMESPACE]);
        assert!(CurrencyNamespace.namespaces_of("XAU").is_empty());
        assert!(CurrencyNamespace.namespaces_of("??").is_empty());
    }
}
