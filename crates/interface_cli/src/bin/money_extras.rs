//! Money Extras - CLI Binary
//!
//! # Usage
//!
//! ```bash
//! # Latest EUR/USD reference rate
//! money-extras rate EUR USD
//!
//! # Convert on a given day, reading a local copy of the feed
//! money-extras convert 100 USD JPY --date 2013-02-19 --feed eurofxref-hist.xml
//!
//! # Present value of an annuity due
//! money-extras calc annuity-due --rate 0.05 --periods 10 --amount 10 --currency CHF
//! ```
//!
//! # Environment Variables
//!
//! * `ECB_URL` - Feed location (default: the ECB historic feed)
//! * `ECB_FALLBACK_PATH` - Local copy used when the feed cannot be fetched or read
//! * `ECB_BUNDLED_FALLBACK` - Try the bundled snapshot last (default: true)
//! * `ECB_TIMEOUT_SECS` - HTTP timeout in seconds (default: 30)
//! * `ECB_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use anyhow::Result;
use clap::Parser;
use domain_fx::FeedConfig;
use interface_cli::cli::{Cli, Command, OutputFormat};
use interface_cli::commands;
use serde::Serialize;
use std::fmt::Display;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = FeedConfig::from_env().unwrap_or_else(|err| {
        eprintln!("Ignoring invalid ECB_* configuration: {err}");
        FeedConfig::default()
    });
    init_tracing(&config.log_level);

    let cli = Cli::parse();
    match &cli.command {
        Command::Rate(args) => {
            let provider = commands::load_provider(&args.feed, &config).await?;
            print(&commands::rate(&provider, args)?, cli.format)?
        }
        Command::Convert(args) => {
            let provider = commands::load_provider(&args.feed, &config).await?;
            print(&commands::convert(&provider, args)?, cli.format)?
        }
        Command::Calc(args) => print(&commands::calc(args)?, cli.format)?,
    }

    Ok(())
}

fn print<T: Serialize + Display>(report: &T, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{report}"),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
    }
    Ok(())
}

/// Logs go to stderr so reports on stdout stay machine readable
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}
