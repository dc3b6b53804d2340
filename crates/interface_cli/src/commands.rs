//! Command implementations
//!
//! Each command returns a serializable report; printing is left to the
//! binary so the commands can be exercised without a terminal.

use chrono::NaiveDate;
use core_kernel::{start_of_day, CoreError, Currency, Money};
use domain_calc::{
    present_value_factor, present_value_of_annuity_payment_factor, ContinuousCompoundInterest,
    FutureValue, FutureValueOfAnnuity, PresentValue, PresentValueContinuousCompounding,
    PresentValueOfAnnuity, PresentValueOfAnnuityDue, RateAndPeriods,
};
use domain_fx::{
    EcbHistoricProvider, ExchangeRate, ExchangeRateProvider, FeedConfig, FileFeedSource, FxError,
    HistoricRateStore,
};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use tracing::info;

use crate::cli::{CalcArgs, ConvertArgs, FeedArgs, Formula, RateArgs};
use crate::error::CliResult;

/// Result of `calc`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalcReport {
    Factor { formula: String, factor: Decimal },
    Amount { formula: String, result: Money },
}

impl fmt::Display for CalcReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcReport::Factor { factor, .. } => write!(f, "{}", factor.normalize()),
            CalcReport::Amount { result, .. } => write!(f, "{result}"),
        }
    }
}

/// Result of `convert`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    pub amount: Money,
    pub converted: Money,
    pub rate: ExchangeRate,
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {} ({})", self.amount, self.converted, self.rate)
    }
}

/// Evaluates a formula
pub fn calc(args: &CalcArgs) -> CliResult<CalcReport> {
    let rp = RateAndPeriods::parse(&args.rate, args.periods)?;
    let formula = args.formula.name();
    let money = || {
        args.amount
            .map(|amount| Money::new(amount, args.currency))
            .ok_or_else(|| {
                CoreError::invalid("amount", format!("required for {}", args.formula.name()))
            })
    };

    let result = match args.formula {
        Formula::PresentValueFactor => {
            let factor = present_value_factor::calculate(&rp)?;
            return Ok(CalcReport::Factor { formula, factor });
        }
        Formula::AnnuityFactor => {
            let factor = present_value_of_annuity_payment_factor::calculate(rp.rate(), args.periods)?;
            return Ok(CalcReport::Factor { formula, factor });
        }
        Formula::PresentValue => money()?.with(&PresentValue::new(rp))?,
        Formula::Annuity => money()?.with(&PresentValueOfAnnuity::new(rp))?,
        Formula::AnnuityDue => money()?.with(&PresentValueOfAnnuityDue::new(rp))?,
        Formula::FutureValue => money()?.with(&FutureValue::new(rp))?,
        Formula::FutureValueOfAnnuity => money()?.with(&FutureValueOfAnnuity::new(rp))?,
        Formula::ContinuousInterest => money()?.with(&ContinuousCompoundInterest::new(rp))?,
        Formula::PresentValueContinuous => {
            money()?.with(&PresentValueContinuousCompounding::new(rp))?
        }
    };
    Ok(CalcReport::Amount { formula, result })
}

/// Looks up a rate, on the given day or the latest one
pub fn rate<P: ExchangeRateProvider>(provider: &P, args: &RateArgs) -> CliResult<ExchangeRate> {
    Ok(lookup(provider, args.base, args.term, args.date)?)
}

/// Converts an amount
pub fn convert<P: ExchangeRateProvider>(
    provider: &P,
    args: &ConvertArgs,
) -> CliResult<ConversionReport> {
    let amount = Money::new(args.amount, args.base);
    let rate = lookup(provider, args.base, args.term, args.date)?;
    let converted = rate.convert(amount).map_err(FxError::from)?;
    Ok(ConversionReport {
        amount,
        converted,
        rate,
    })
}

/// Builds a provider for the requested feed and loads it
///
/// An explicit `--feed` file replaces the configured sources.
pub async fn load_provider(feed: &FeedArgs, config: &FeedConfig) -> CliResult<EcbHistoricProvider> {
    let provider = match &feed.feed {
        Some(path) => EcbHistoricProvider::with_sources(
            HistoricRateStore::ecb(),
            vec![Box::new(FileFeedSource::new(path.clone()))],
        ),
        None => EcbHistoricProvider::new(config)?,
    };
    let summary = provider.load().await?;
    info!(days = summary.days, rates = summary.rates, "Exchange rates ready");
    Ok(provider)
}

fn lookup<P: ExchangeRateProvider>(
    provider: &P,
    base: Currency,
    term: Currency,
    date: Option<NaiveDate>,
) -> Result<ExchangeRate, FxError> {
    let converter = provider.converter();
    match date {
        Some(day) => converter.exchange_rate_at(base, term, start_of_day(day)),
        None => converter.exchange_rate(base, term),
    }
}
