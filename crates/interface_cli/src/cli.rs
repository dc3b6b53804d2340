//! CLI argument definitions

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use core_kernel::{parse_day, CoreError, Currency};
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::str::FromStr;

/// Money extras - time-value-of-money formulas and historic ECB exchange rates
#[derive(Debug, Parser)]
#[command(name = "money-extras")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up the ECB exchange rate between two currencies
    Rate(RateArgs),

    /// Convert an amount with an ECB exchange rate
    Convert(ConvertArgs),

    /// Evaluate a rate and period based formula
    Calc(CalcArgs),
}

/// Where to read ECB rates from
#[derive(Debug, Clone, Args)]
pub struct FeedArgs {
    /// Read the feed from this file instead of the configured sources
    #[arg(long, env = "ECB_FEED_FILE")]
    pub feed: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
pub struct RateArgs {
    /// Base currency (e.g. EUR)
    #[arg(value_parser = parse_currency)]
    pub base: Currency,

    /// Term currency (e.g. USD)
    #[arg(value_parser = parse_currency)]
    pub term: Currency,

    /// Day of the rate (YYYY-MM-DD); latest available day if omitted
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    #[command(flatten)]
    pub feed: FeedArgs,
}

#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// Amount in the base currency
    #[arg(value_parser = parse_amount, allow_hyphen_values = true)]
    pub amount: Decimal,

    #[arg(value_parser = parse_currency)]
    pub base: Currency,

    #[arg(value_parser = parse_currency)]
    pub term: Currency,

    /// Day of the rate (YYYY-MM-DD); latest available day if omitted
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    #[command(flatten)]
    pub feed: FeedArgs,
}

#[derive(Debug, Clone, Args)]
pub struct CalcArgs {
    pub formula: Formula,

    /// Rate per period as a decimal fraction (0.05 for 5%)
    #[arg(short, long, allow_hyphen_values = true)]
    pub rate: String,

    /// Number of periods
    #[arg(short = 'n', long, allow_hyphen_values = true)]
    pub periods: i64,

    /// Amount to apply the formula to; required for all but the factor formulas
    #[arg(short, long, value_parser = parse_amount, allow_hyphen_values = true)]
    pub amount: Option<Decimal>,

    /// Currency of the amount
    #[arg(short, long, value_parser = parse_currency, default_value = "EUR")]
    pub currency: Currency,
}

/// Formulas available to `calc`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Formula {
    /// A * (1 + r)^-n
    PresentValue,
    /// (1 + r)^n
    PresentValueFactor,
    /// (1 - (1 + r)^-n) / r
    AnnuityFactor,
    /// Present value of an ordinary annuity
    Annuity,
    /// Present value of an annuity due
    AnnuityDue,
    /// A * (1 + r)^n
    FutureValue,
    /// Future value of an ordinary annuity
    FutureValueOfAnnuity,
    /// A * e^(r n)
    ContinuousInterest,
    /// A * e^-(r n)
    PresentValueContinuous,
}

impl Formula {
    /// The name used on the command line, e.g. `annuity-due`
    pub fn name(&self) -> String {
        self.to_possible_value()
            .map(|value| value.get_name().to_string())
            .unwrap_or_default()
    }
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON
    Json,
}

pub fn parse_currency(value: &str) -> Result<Currency, CoreError> {
    Ok(Currency::new(value)?)
}

pub fn parse_date(value: &str) -> Result<NaiveDate, CoreError> {
    Ok(parse_day(value)?)
}

pub fn parse_amount(value: &str) -> Result<Decimal, CoreError> {
    Decimal::from_str(value.trim())
        .map_err(|_| CoreError::invalid("amount", format!("not a decimal: {value:?}")))
}
