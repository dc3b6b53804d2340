//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data: amounts, rates, days and an excerpt of
//! the ECB historic reference rate feed. Values are fixed so scenarios stay
//! predictable across the suite.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use core_kernel::{Currency, Money};
use domain_calc::{Rate, RateAndPeriods};
use domain_fx::{parse_feed, HistoricRateStore};
use once_cell::sync::Lazy;
use rust_decimal_macros::dec;
use std::io::Write;
use tempfile::NamedTempFile;

/// Three days of ECB reference rates, newest first as published
pub const ECB_FEED_FEBRUARY_2013: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<gesmes:Envelope xmlns:gesmes="http://www.gesmes.org/xml/2002-08-01" xmlns="http://www.ecb.int/vocabulary/2002-08-01/eurofxref">
	<gesmes:subject>Reference rates</gesmes:subject>
	<gesmes:Sender>
		<gesmes:name>European Central Bank</gesmes:name>
	</gesmes:Sender>
	<Cube>
		<Cube time="2013-02-21">
			<Cube currency="USD" rate="1.3205"/>
			<Cube currency="JPY" rate="123.28"/>
			<Cube currency="GBP" rate="0.8659"/>
			<Cube currency="CHF" rate="1.2254"/>
		</Cube>
		<Cube time="2013-02-20">
			<Cube currency="USD" rate="1.3386"/>
			<Cube currency="JPY" rate="125.36"/>
			<Cube currency="GBP" rate="0.8710"/>
			<Cube currency="CHF" rate="1.2335"/>
		</Cube>
		<Cube time="2013-02-19">
			<Cube currency="USD" rate="1.3349"/>
			<Cube currency="JPY" rate="124.81"/>
			<Cube currency="BGN" rate="1.9558"/>
			<Cube currency="CZK" rate="25.434"/>
			<Cube currency="DKK" rate="7.4599"/>
			<Cube currency="GBP" rate="0.8631"/>
			<Cube currency="HUF" rate="290.79"/>
			<Cube currency="CHF" rate="1.2338"/>
		</Cube>
	</Cube>
</gesmes:Envelope>"#;

/// Store loaded with [`ECB_FEED_FEBRUARY_2013`], shared read-only between tests
pub static FEBRUARY_2013: Lazy<HistoricRateStore> = Lazy::new(EcbFixtures::store);

/// Fixture for ECB feed data
pub struct EcbFixtures;

impl EcbFixtures {
    /// A fresh store loaded with the February 2013 feed
    pub fn store() -> HistoricRateStore {
        let store = HistoricRateStore::ecb();
        parse_feed(ECB_FEED_FEBRUARY_2013.as_bytes(), &store)
            .expect("fixture feed must parse");
        store
    }

    /// The February 2013 feed written to a temporary file
    pub fn feed_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temporary feed file");
        file.write_all(ECB_FEED_FEBRUARY_2013.as_bytes())
            .expect("write temporary feed file");
        file
    }

    /// Published EUR/USD on 19 February 2013
    pub fn eur_usd_19_feb() -> rust_decimal::Decimal {
        dec!(1.3349)
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// First day of the fixture feed
    pub fn feb_19() -> NaiveDate {
        NaiveDate::from_ymd_opt(2013, 2, 19).expect("valid date")
    }

    pub fn feb_20() -> NaiveDate {
        NaiveDate::from_ymd_opt(2013, 2, 20).expect("valid date")
    }

    /// Last day of the fixture feed
    pub fn feb_21() -> NaiveDate {
        NaiveDate::from_ymd_opt(2013, 2, 21).expect("valid date")
    }

    /// A day before the fixture feed starts
    pub fn feb_18() -> NaiveDate {
        NaiveDate::from_ymd_opt(2013, 2, 18).expect("valid date")
    }

    /// Afternoon of 19 February 2013, UTC
    pub fn feb_19_afternoon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2013, 2, 19, 15, 30, 0)
            .single()
            .expect("valid timestamp")
    }
}

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    pub fn chf_10() -> Money {
        Money::new(dec!(10), Currency::CHF)
    }

    pub fn chf_100() -> Money {
        Money::new(dec!(100), Currency::CHF)
    }

    pub fn eur_100() -> Money {
        Money::new(dec!(100), Currency::EUR)
    }

    pub fn usd_100() -> Money {
        Money::new(dec!(100), Currency::USD)
    }

    /// A JPY amount (zero decimal places)
    pub fn jpy_10000() -> Money {
        Money::new(dec!(10000), Currency::JPY)
    }
}

/// Fixture for rate test data
pub struct RateFixtures;

impl RateFixtures {
    /// 5% per period
    pub fn five_percent() -> Rate {
        Rate::new(dec!(0.05))
    }

    /// -5% per period
    pub fn minus_five_percent() -> Rate {
        Rate::new(dec!(-0.05))
    }

    pub fn five_percent_over(periods: i64) -> RateAndPeriods {
        RateAndPeriods::new(Self::five_percent(), periods).expect("non-negative periods")
    }
}
