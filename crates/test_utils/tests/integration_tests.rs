//! Integration Tests for Money Extras
//!
//! These tests verify end-to-end scenarios across the kernel, the formula
//! crate, the exchange rate crate and the command line interface.

use clap::Parser;
use core_kernel::{CoreError, Currency, Money};
use domain_calc::{FutureValue, PresentValue, PresentValueOfAnnuityDue, RateAndPeriods};
use domain_fx::{ExchangeRateProvider, LoadState};
use rust_decimal_macros::dec;
use test_utils::*;

mod historic_rates {
    use super::*;

    #[test]
    fn test_published_rate() {
        let rate = FEBRUARY_2013
            .get_exchange_rate(Currency::EUR, Currency::USD, TemporalFixtures::feb_19())
            .unwrap();
        assert_rate(&rate, "EUR", "USD", EcbFixtures::eur_usd_19_feb());
    }

    #[test]
    fn test_reverse_rate() {
        let rate = FEBRUARY_2013
            .get_exchange_rate(Currency::USD, Currency::EUR, TemporalFixtures::feb_19())
            .unwrap();
        assert_rate(&rate, "USD", "EUR", dec!(0.7491197842535021));
    }

    #[test]
    fn test_cross_rate_via_euro() {
        let rate = FEBRUARY_2013
            .get_exchange_rate(Currency::JPY, Currency::USD, TemporalFixtures::feb_19())
            .unwrap();
        assert_rate(&rate, "JPY", "USD", dec!(0.0106954570947840723317));
        assert_eq!(rate.chain().len(), 2);

        let rate = FEBRUARY_2013
            .get_exchange_rate(Currency::CHF, Currency::GBP, TemporalFixtures::feb_19())
            .unwrap();
        assert_rate(&rate, "CHF", "GBP", dec!(0.8105041335710812) * dec!(0.8631));
    }

    #[test]
    fn test_currency_missing_on_later_day() {
        // HUF is only published in the fixture for the 19th
        assert!(FEBRUARY_2013
            .get_exchange_rate(Currency::EUR, Currency::new("HUF").unwrap(), TemporalFixtures::feb_19())
            .is_some());
        assert!(FEBRUARY_2013
            .get_exchange_rate(Currency::EUR, Currency::new("HUF").unwrap(), TemporalFixtures::feb_20())
            .is_none());
    }

    #[test]
    fn test_day_before_feed_is_unavailable() {
        assert!(FEBRUARY_2013
            .get_exchange_rate(Currency::EUR, Currency::EUR, TemporalFixtures::feb_18())
            .is_none());
    }

    #[test]
    fn test_builder_store() {
        let store = RateStoreBuilder::new()
            .rate(Currency::USD, dec!(1.3349))
            .on(TemporalFixtures::feb_20())
            .rate(Currency::USD, dec!(1.3386))
            .build();
        assert_eq!(store.len(), 2);
        assert_eq!(store.latest_day(), Some(TemporalFixtures::feb_20()));
    }
}

mod provider_workflow {
    use super::*;

    #[tokio::test]
    async fn test_load_then_convert() {
        let provider = ProviderBuilder::new().february_2013().build();
        assert_eq!(provider.state(), LoadState::Unloaded);

        provider.load().await.unwrap();
        assert_eq!(provider.state(), LoadState::Loaded { days: 3 });

        let jpy = provider
            .converter()
            .convert_at(
                MoneyFixtures::usd_100(),
                Currency::JPY,
                TemporalFixtures::feb_19_afternoon(),
            )
            .unwrap();
        assert_money_approx_eq(&jpy, &Money::new(dec!(9349.764027267959710100), Currency::JPY), dec!(0.000001));
        assert_eq!(jpy.round_to_currency().amount(), dec!(9350));
    }

    #[tokio::test]
    async fn test_reversed_lookup_on_same_day() {
        let provider = ProviderBuilder::new().february_2013().build();
        provider.load().await.unwrap();
        let rate = provider
            .get_exchange_rate_at(Currency::GBP, Currency::CHF, TemporalFixtures::feb_19_afternoon())
            .unwrap();
        let reversed = provider.get_reversed(&rate).unwrap();
        assert_eq!(reversed.base(), Currency::CHF);
        assert_eq!(reversed.day(), TemporalFixtures::feb_19());
        assert_decimal_approx_eq(rate.factor() * reversed.factor(), dec!(1), dec!(0.000000000001));
    }

    #[tokio::test]
    async fn test_provider_from_builder_store_needs_no_load() {
        let provider = RateStoreBuilder::new()
            .rate(Currency::USD, dec!(1.3349))
            .into_provider();
        assert!(provider.is_loaded());
        assert!(provider.is_available(Currency::USD, Currency::EUR));
    }

    #[tokio::test]
    async fn test_convert_then_grow() {
        let provider = ProviderBuilder::new().february_2013().build();
        provider.load().await.unwrap();
        let usd = provider
            .converter()
            .convert_at(MoneyFixtures::eur_100(), Currency::USD, TemporalFixtures::feb_19_afternoon())
            .unwrap();
        let grown = usd
            .with(&FutureValue::new(RateFixtures::five_percent_over(1)))
            .unwrap();
        assert_cents_eq(&grown, dec!(140.16));
    }
}

mod formulas {
    use super::*;

    #[test]
    fn test_present_value_scenarios() {
        for (periods, expected) in [(1, dec!(95.24)), (2, dec!(90.70)), (3, dec!(86.38))] {
            let pv = PresentValue::new(RateFixtures::five_percent_over(periods));
            assert_cents_eq(&MoneyFixtures::chf_100().with(&pv).unwrap(), expected);
        }
    }

    #[test]
    fn test_annuity_due_scenario() {
        let due = PresentValueOfAnnuityDue::new(RateFixtures::five_percent_over(10));
        assert_cents_eq(&MoneyFixtures::chf_10().with(&due).unwrap(), dec!(81.08));

        let negative = PresentValueOfAnnuityDue::new(
            RateAndPeriods::new(RateFixtures::minus_five_percent(), 10).unwrap(),
        );
        assert_cents_eq(&MoneyFixtures::chf_10().with(&negative).unwrap(), dec!(127.33));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn future_then_present_value_round_trips(
                rp in rate_and_periods_strategy(),
                money in money_strategy()
            ) {
                prop_assume!(rp.rate().value() > dec!(-0.2));
                let grown = money.with(&FutureValue::new(rp)).unwrap();
                let back = grown.with(&PresentValue::new(rp)).unwrap();
                prop_assert_eq!(back.round_to_currency(), money);
            }

            #[test]
            fn stored_factor_is_returned_unchanged(
                currency in ecb_currency_strategy(),
                factor in factor_strategy()
            ) {
                let store = RateStoreBuilder::new().rate(currency, factor).build();
                let rate = store
                    .get_exchange_rate(Currency::EUR, currency, TemporalFixtures::feb_19())
                    .unwrap();
                prop_assert_eq!(rate.factor(), factor);
            }
        }
    }
}

mod cli {
    use super::*;
    use interface_cli::cli::{Cli, Command};
    use interface_cli::commands::{self, CalcReport};
    use interface_cli::CliError;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("money-extras").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_calc_annuity_due() {
        let cli = parse(&[
            "calc", "annuity-due", "--rate", "0.05", "--periods", "10", "--amount", "10", "--currency", "CHF",
        ]);
        let Command::Calc(args) = cli.command else {
            panic!("expected calc command");
        };
        let report = commands::calc(&args).unwrap();
        assert_eq!(report.to_string(), "CHF 81.08");
    }

    #[test]
    fn test_calc_factor_needs_no_amount() {
        let cli = parse(&["calc", "present-value-factor", "-r", "0.05", "-n", "1"]);
        let Command::Calc(args) = cli.command else {
            panic!("expected calc command");
        };
        let report = commands::calc(&args).unwrap();
        assert_eq!(
            report,
            CalcReport::Factor {
                formula: "present-value-factor".to_string(),
                factor: dec!(1.05)
            }
        );
        assert_eq!(report.to_string(), "1.05");
    }

    #[test]
    fn test_calc_requires_amount_for_money_formulas() {
        let cli = parse(&["calc", "present-value", "--rate", "0.05", "--periods", "1"]);
        let Command::Calc(args) = cli.command else {
            panic!("expected calc command");
        };
        let err = commands::calc(&args).unwrap_err();
        assert!(matches!(err, CliError::Input(CoreError::Validation { field: "amount", .. })));
        assert_eq!(err.to_string(), "Invalid amount: required for present-value");
    }

    #[test]
    fn test_calc_rejects_negative_periods() {
        let cli = parse(&["calc", "annuity", "--rate", "0.05", "--periods", "-1", "--amount", "1"]);
        let Command::Calc(args) = cli.command else {
            panic!("expected calc command");
        };
        assert!(matches!(commands::calc(&args), Err(CliError::Calculation(_))));
    }

    #[test]
    fn test_invalid_currency_rejected_by_parser() {
        let result = Cli::try_parse_from(["money-extras", "rate", "EURO", "USD"]);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_rate_command_with_feed_file() {
        let file = EcbFixtures::feed_file();
        let path = file.path().to_str().unwrap().to_string();
        let cli = parse(&["rate", "EUR", "USD", "--date", "2013-02-20", "--feed", &path]);
        let Command::Rate(args) = cli.command else {
            panic!("expected rate command");
        };
        let provider = commands::load_provider(&args.feed, &domain_fx::FeedConfig::default())
            .await
            .unwrap();
        let rate = commands::rate(&provider, &args).unwrap();
        assert_eq!(rate.to_string(), "EUR/USD 1.3386 (2013-02-20, EZB)");
    }

    #[tokio::test]
    async fn test_convert_command_json() {
        let provider = ProviderBuilder::new().february_2013().build();
        provider.load().await.unwrap();
        let cli = parse(&["--format", "json", "convert", "100", "EUR", "CHF"]);
        let Command::Convert(args) = cli.command else {
            panic!("expected convert command");
        };
        let report = commands::convert(&provider, &args).unwrap();
        assert_eq!(report.converted, Money::new(dec!(122.54), Currency::CHF));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["rate"]["base"], "EUR");
        assert_eq!(json["rate"]["term"], "CHF");
    }

    #[tokio::test]
    async fn test_convert_on_missing_day() {
        let provider = ProviderBuilder::new().february_2013().build();
        provider.load().await.unwrap();
        let cli = parse(&["convert", "100", "EUR", "USD", "--date", "2013-02-18"]);
        let Command::Convert(args) = cli.command else {
            panic!("expected convert command");
        };
        let err = commands::convert(&provider, &args).unwrap_err();
        assert!(matches!(err, CliError::ExchangeRate(ref fx) if fx.is_unavailable()));
    }
}
