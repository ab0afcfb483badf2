use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use serde::Serialize;

use invoicekit_core::{DomainError, DomainResult, ValueObject};

use crate::money::Money;

/// Overall shape of a money string: a 3 letter code or a single leading
/// symbol, an optional space, then ASCII digits with an optional decimal
/// part.
static MONEY_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Za-z]{3}|[^\w\s]) ?[0-9]+(?:\.[0-9]*)?$").expect("money pattern compiles")
});

/// A currency: ISO-style abbreviation plus display symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Currency {
    abbreviation: &'static str,
    symbol: &'static str,
}

impl Currency {
    pub const GBP: Currency = Currency::new("GBP", "£");
    pub const USD: Currency = Currency::new("USD", "$");
    /// "No currency chosen". Money in this currency formats as empty text.
    pub const ZERO: Currency = Currency::new("", "");

    pub const fn new(abbreviation: &'static str, symbol: &'static str) -> Self {
        Self {
            abbreviation,
            symbol,
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        self.abbreviation
    }

    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Whether money arithmetic is defined for this currency.
    ///
    /// Only the built-in currencies have a known minor-unit scale (1/100).
    /// Registries may carry others for parsing, but converting or combining
    /// amounts in them fails with `UnsupportedCurrency`.
    pub fn is_supported(&self) -> bool {
        CurrencyRegistry::BUILTIN.contains(self)
    }

    pub(crate) fn ensure_supported(&self) -> DomainResult<()> {
        if self.is_supported() {
            Ok(())
        } else {
            Err(DomainError::unsupported_currency(self.abbreviation))
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::ZERO
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.abbreviation)
    }
}

impl ValueObject for Currency {}

/// Immutable, closed set of currencies known to the parser.
///
/// Built once and then only read; share it by reference (it is `Sync`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyRegistry {
    currencies: Vec<Currency>,
}

impl CurrencyRegistry {
    pub const BUILTIN: [Currency; 3] = [Currency::GBP, Currency::USD, Currency::ZERO];

    /// Build a registry from the given currencies.
    ///
    /// The zero currency is always a member; duplicates are dropped, first
    /// occurrence wins.
    pub fn new(currencies: impl IntoIterator<Item = Currency>) -> Self {
        let mut registry = Self {
            currencies: Vec::new(),
        };
        for currency in currencies.into_iter().chain([Currency::ZERO]) {
            if !registry.currencies.contains(&currency) {
                registry.currencies.push(currency);
            }
        }
        registry
    }

    pub fn currencies(&self) -> &[Currency] {
        &self.currencies
    }

    /// Exact (case-sensitive) lookup by symbol.
    pub fn by_symbol(&self, symbol: &str) -> Option<Currency> {
        if symbol.is_empty() {
            return None;
        }
        self.currencies.iter().copied().find(|c| c.symbol == symbol)
    }

    /// Case-insensitive lookup by abbreviation.
    pub fn by_abbreviation(&self, abbreviation: &str) -> Option<Currency> {
        if abbreviation.is_empty() {
            return None;
        }
        self.currencies
            .iter()
            .copied()
            .find(|c| c.abbreviation.eq_ignore_ascii_case(abbreviation))
    }

    /// Parse text such as `GBP 10.00`, `USD10.00` or `£10.00`.
    ///
    /// Digits and the decimal point form the amount, whitespace is dropped and
    /// everything else forms the currency marker. The marker is resolved by
    /// symbol first, then by abbreviation.
    pub fn parse_money(&self, text: &str) -> DomainResult<Money> {
        let text = text.trim();
        if !MONEY_SHAPE.is_match(text) {
            return Err(DomainError::not_money(text));
        }

        let mut marker = String::new();
        let mut number = String::new();
        for ch in text.chars() {
            match ch {
                c if c.is_whitespace() => continue,
                c if c.is_ascii_digit() || c == '.' => number.push(c),
                c => marker.push(c),
            }
        }
        let marker = marker.to_uppercase();
        tracing::trace!(%text, %marker, %number, "scanned money text");

        let currency = self
            .by_symbol(&marker)
            .or_else(|| self.by_abbreviation(&marker))
            .ok_or_else(|| DomainError::unknown_currency(marker.as_str()))?;

        // Well-formed text whose amount does not fit is reported as typed.
        let amount = Decimal::from_str(number.trim_end_matches('.'))
            .map_err(|_| DomainError::out_of_range(text))?;
        Money::from_decimal(amount, currency).map_err(|err| match err {
            DomainError::AmountOutOfRange(_) => DomainError::out_of_range(text),
            other => other,
        })
    }
}

impl Default for CurrencyRegistry {
    fn default() -> Self {
        Self::new(Self::BUILTIN)
    }
}
