use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;

use invoicekit_core::{DomainError, ValueObject};

/// Calendar date on an invoice, written `D/M/YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct InvoiceDate(NaiveDate);

impl InvoiceDate {
    /// Day/Month/Year; single-digit days and months are accepted.
    pub const FORMAT: &'static str = "%d/%m/%Y";

    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl FromStr for InvoiceDate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), Self::FORMAT)
            .map(Self)
            .map_err(|e| DomainError::InvalidDate {
                value: s.to_string(),
                reason: e.to_string(),
            })
    }
}

/// `December 10th, 2021`.
impl core::fmt::Display for InvoiceDate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} {}, {}",
            self.0.format("%B"),
            ordinal(self.0.day()),
            self.0.year()
        )
    }
}

impl ValueObject for InvoiceDate {}

fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
