//! ISO-4217 currency codes
//!
//! A `Currency` is a validated three-letter code. Codes listed in the
//! built-in ISO table carry their default fraction digits and symbol; other
//! well-formed codes are accepted and fall back to two fraction digits.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::money::MoneyError;

/// Identifier of the ISO-4217 currency namespace
pub const ISO_NAMESPACE: &str = "ISO-4217";

/// (code, default fraction digits, symbol)
const ISO_4217: &[(&str, u32, &str)] = &[
    ("AUD", 2, "A$"),
    ("BGN", 2, "лв"),
    ("BHD", 3, "BD"),
    ("BRL", 2, "R$"),
    ("CAD", 2, "C$"),
    ("CHF", 2, "CHF"),
    ("CNY", 2, "¥"),
    ("CYP", 2, "£"),
    ("CZK", 2, "Kč"),
    ("DKK", 2, "kr"),
    ("EEK", 2, "kr"),
    ("EUR", 2, "€"),
    ("GBP", 2, "£"),
    ("HKD", 2, "HK$"),
    ("HRK", 2, "kn"),
    ("HUF", 2, "Ft"),
    ("IDR", 2, "Rp"),
    ("ILS", 2, "₪"),
    ("INR", 2, "₹"),
    ("ISK", 0, "kr"),
    ("JPY", 0, "¥"),
    ("KRW", 0, "₩"),
    ("KWD", 3, "KD"),
    ("LTL", 2, "Lt"),
    ("LVL", 2, "Ls"),
    ("MTL", 2, "Lm"),
    ("MXN", 2, "MX$"),
    ("MYR", 2, "RM"),
    ("NOK", 2, "kr"),
    ("NZD", 2, "NZ$"),
    ("PHP", 2, "₱"),
    ("PLN", 2, "zł"),
    ("RON", 2, "lei"),
    ("RUB", 2, "₽"),
    ("SEK", 2, "kr"),
    ("SGD", 2, "S$"),
    ("SIT", 2, "SIT"),
    ("SKK", 2, "Sk"),
    ("THB", 2, "฿"),
    ("TRY", 2, "₺"),
    ("USD", 2, "$"),
    ("ZAR", 2, "R"),
];

/// A three-letter ISO-4217 currency code
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Currency([u8; 3]);

impl Currency {
    pub const AUD: Currency = Currency(*b"AUD");
    pub const CAD: Currency = Currency(*b"CAD");
    pub const CHF: Currency = Currency(*b"CHF");
    pub const CNY: Currency = Currency(*b"CNY");
    pub const EUR: Currency = Currency(*b"EUR");
    pub const GBP: Currency = Currency(*b"GBP");
    pub const HKD: Currency = Currency(*b"HKD");
    pub const INR: Currency = Currency(*b"INR");
    pub const JPY: Currency = Currency(*b"JPY");
    pub const SGD: Currency = Currency(*b"SGD");
    pub const USD: Currency = Currency(*b"USD");

    /// Parses a currency code, accepting lower case input
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidCurrency` unless the code is exactly
    /// three ASCII letters.
    pub fn new(code: &str) -> Result<Self, MoneyError> {
        let bytes = code.trim().as_bytes();
        if bytes.len() != 3 || !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(MoneyError::InvalidCurrency(code.to_string()));
        }
        Ok(Self([
            bytes[0].to_ascii_uppercase(),
            bytes[1].to_ascii_uppercase(),
            bytes[2].to_ascii_uppercase(),
        ]))
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &str {
        // Only ASCII letters are ever stored
        std::str::from_utf8(&self.0).unwrap_or("XXX")
    }

    /// Returns the number of decimal places for this currency
    pub fn decimal_places(&self) -> u32 {
        self.iso_entry().map_or(2, |(_, digits, _)| *digits)
    }

    /// Returns the currency symbol, or the code when none is known
    pub fn symbol(&self) -> &str {
        match self.iso_entry() {
            Some((_, _, symbol)) => *symbol,
            None => self.code(),
        }
    }

    /// Returns true if the code is part of the built-in ISO table
    pub fn is_iso(&self) -> bool {
        self.iso_entry().is_some()
    }

    fn iso_entry(&self) -> Option<&'static (&'static str, u32, &'static str)> {
        let code = self.code();
        ISO_4217
            .binary_search_by(|(c, _, _)| c.cmp(&code))
            .ok()
            .and_then(|idx| ISO_4217.get(idx))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl fmt::Debug for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Currency").field(&self.code()).finish()
    }
}

impl FromStr for Currency {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::new(s)
    }
}

impl Serialize for Currency {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Currency::new(&s).map_err(serde::de::Error::custom)
    }
}

/// Lookup of currencies grouped by namespace
///
/// Only the ISO-4217 namespace is defined; it is always available.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrencyNamespace;

impl CurrencyNamespace {
    /// Returns true if the given namespace is defined
    pub fn is_namespace_available(&self, namespace: &str) -> bool {
        namespace == ISO_NAMESPACE
    }

    /// Returns all defined namespaces
    pub fn namespaces(&self) -> &'static [&'static str] {
        &[ISO_NAMESPACE]
    }

    /// Returns the currencies of a namespace, empty if it is not defined
    pub fn currencies(&self, namespace: &str) -> Vec<Currency> {
        if !self.is_namespace_available(namespace) {
            return Vec::new();
        }
        ISO_4217
            .iter()
            .filter_map(|(code, _, _)| Currency::new(code).ok())
            .collect()
    }

    /// Returns the namespaces defining the given code, empty if none does
    pub fn namespaces_of(&self, code: &str) -> Vec<&'static str> {
        match Currency::new(code) {
            Ok(currency) if currency.is_iso() => vec![ISO_NAMESPACE],
            _ => Vec::new(),
        }
    }
}
