//! Reader for the ECB reference rate feed
//!
//! The feed nests one `Cube` element per day, each holding one `Cube` per
//! currency:
//!
//! ```xml
//! <gesmes:Envelope xmlns:gesmes="http://www.gesmes.org/xml/2002-08-01"
//!                  xmlns="http://www.ecb.int/vocabulary/2002-08-01/eurofxref">
//!   <Cube>
//!     <Cube time="2013-02-19">
//!       <Cube currency="USD" rate="1.3349"/>
//!       <Cube currency="JPY" rate="124.81"/>
//!     </Cube>
//!   </Cube>
//! </gesmes:Envelope>
//! ```
//!
//! Elements are matched by local name, so namespace prefixes do not matter.

use chrono::NaiveDate;
use core_kernel::{parse_day, Currency};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::error::FeedError;
use crate::store::HistoricRateStore;

const CUBE: &[u8] = b"Cube";

/// Counts of what a feed contributed to the store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedSummary {
    /// Day sections read
    pub days: usize,
    /// Rates stored
    pub rates: usize,
    /// Records skipped as malformed
    pub skipped: usize,
}

/// Reads a feed document and stores every well-formed rate record
///
/// Malformed records are logged and skipped. If the document itself is
/// broken, reading stops with [`FeedError::Xml`]; rates read before that
/// point stay in the store.
pub fn parse_feed(document: &[u8], store: &HistoricRateStore) -> Result<FeedSummary, FeedError> {
    let mut reader = Reader::from_reader(document);
    let mut handler = RateReadingHandler::new(store);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(element)) | Ok(Event::Empty(element)) => {
                if element.local_name().as_ref() == CUBE {
                    handler.on_cube(&element);
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => {
                return Err(FeedError::Xml(format!(
                    "at byte {}: {err}",
                    reader.buffer_position()
                )))
            }
        }
        buf.clear();
    }

    debug!(
        days = handler.summary.days,
        rates = handler.summary.rates,
        skipped = handler.summary.skipped,
        "Feed document read"
    );
    Ok(handler.summary)
}

/// Tracks the day section currently being read
struct RateReadingHandler<'a> {
    store: &'a HistoricRateStore,
    current_day: Option<NaiveDate>,
    summary: FeedSummary,
}

impl<'a> RateReadingHandler<'a> {
    fn new(store: &'a HistoricRateStore) -> Self {
        Self {
            store,
            current_day: None,
            summary: FeedSummary::default(),
        }
    }

    fn on_cube(&mut self, element: &BytesStart<'_>) {
        let attributes = match CubeAttributes::read(element) {
            Ok(attributes) => attributes,
            Err(err) => return self.skip(&err),
        };

        if let Some(time) = attributes.time {
            match parse_day(&time) {
                Ok(day) => {
                    self.current_day = Some(day);
                    self.summary.days += 1;
                }
                Err(err) => {
                    // Rates up to the next valid day would land on the wrong day
                    self.current_day = None;
                    self.skip(&FeedError::InvalidRecord(err.to_string()));
                }
            }
        } else if let Some(currency) = attributes.currency {
            match self.record(&currency, attributes.rate.as_deref()) {
                Ok(()) => self.summary.rates += 1,
                Err(err) => self.skip(&err),
            }
        }
    }

    fn record(&self, currency: &str, rate: Option<&str>) -> Result<(), FeedError> {
        let day = self.current_day.ok_or_else(|| {
            FeedError::InvalidRecord(format!("rate for {currency} outside of a valid day"))
        })?;
        let term = Currency::new(currency)
            .map_err(|err| FeedError::InvalidRecord(err.to_string()))?;
        let rate = rate.ok_or_else(|| {
            FeedError::InvalidRecord(format!("missing rate for {currency} on {day}"))
        })?;
        let factor = Decimal::from_str(rate.trim())
            .or_else(|_| Decimal::from_scientific(rate.trim()))
            .map_err(|_| {
                FeedError::InvalidRecord(format!("unparseable rate {rate:?} for {currency} on {day}"))
            })?;
        if factor <= Decimal::ZERO {
            return Err(FeedError::InvalidRecord(format!(
                "non-positive rate {factor} for {currency} on {day}"
            )));
        }

        self.store.add_rate(term, day, factor);
        Ok(())
    }

    fn skip(&mut self, err: &FeedError) {
        warn!(error = %err, "Skipping malformed feed record");
        self.summary.skipped += 1;
    }
}

/// The attributes a `Cube` element may carry
#[derive(Debug, Default)]
struct CubeAttributes {
    time: Option<String>,
    currency: Option<String>,
    rate: Option<String>,
}

impl CubeAttributes {
    fn read(element: &BytesStart<'_>) -> Result<Self, FeedError> {
        let mut attributes = Self::default();
        for attribute in element.attributes() {
            let attribute = attribute.map_err(|err| FeedError::InvalidRecord(err.to_string()))?;
            let value = attribute
                .unescape_value()
                .map_err(|err| FeedError::InvalidRecord(err.to_string()))?
                .into_owned();
            match attribute.key.local_name().as_ref() {
                b"time" => attributes.time = Some(value),
                b"currency" => attributes.currency = Some(value),
                b"rate" => attributes.rate = Some(value),
                _ => {}
            }
        }
        Ok(attributes)
    }
}
