//! Domain error model.

use thiserror::Error;

/// Result type used across the record engine.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is deterministic and caused by caller input; none of them is
/// fatal to the process. Messages are meant to be shown to the person who
/// typed the input, so they quote the offending text and, for key errors,
/// list the keys that would have been accepted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A key:value segment did not split into exactly a key and a value.
    #[error(
        "{record} details: cannot find key in text: \"{text}\", keys must be one or more character long followed by a ':' then an optional whitespace\nany one of the following keys are valid (case insensitive):\n{accepted}"
    )]
    MalformedPair {
        record: &'static str,
        text: String,
        accepted: String,
    },

    /// A key did not match any alias declared by the record.
    #[error(
        "{record} details: unknown key \"{key}\" in \"{text}\"\nany one of the following keys are valid (case insensitive):\n{accepted}"
    )]
    UnknownKey {
        record: &'static str,
        key: String,
        text: String,
        accepted: String,
    },

    /// The same field was assigned twice within one record.
    #[error("specified the same {record} field ({field}) multiple times in list of key-value pairs")]
    DuplicateField {
        record: &'static str,
        field: &'static str,
    },

    /// Required fields were left unset and defaulting could not fill them.
    #[error(
        "{record} details: you need to give {expected} key-value pairs each of which representing one of the following fields:\n{fields}"
    )]
    MissingFields {
        record: &'static str,
        expected: usize,
        fields: String,
    },

    #[error("\"{0}\" is not a valid email")]
    InvalidEmail(String),

    /// An unsigned-integer field could not be parsed.
    #[error("{field}: \"{value}\" is not a whole, non-negative number")]
    NotANumber { field: &'static str, value: String },

    #[error(
        "\"{0}\" is not money, expected a 3 letter currency code or a symbol followed by an amount (e.g. \"GBP 10.00\", \"USD10.00\", \"£10.00\")"
    )]
    NotMoney(String),

    #[error("no currency with symbol/abbreviation: {0}")]
    UnknownCurrency(String),

    /// Arithmetic or conversion attempted on a currency outside the supported set.
    #[error("unsupported currency: {0}")]
    UnsupportedCurrency(String),

    /// A decimal amount is negative, not finite, or too large for minor units.
    #[error("{0} cannot be represented as a money amount")]
    AmountOutOfRange(String),

    /// A sort code or account number broke one or more format rules.
    #[error("\"{value}\" is not a valid {field}{}", violation_suffix(.violations))]
    InvalidBankField {
        field: &'static str,
        value: String,
        violations: Vec<String>,
    },

    #[error("invalid date \"{value}\" ({reason}), dates must be given as D/M/YYYY")]
    InvalidDate { value: String, reason: String },

    /// Invoice assembly is missing one or more required parts.
    #[error("the following are required: {}", .0.join(", "))]
    RequiredMissing(Vec<String>),
}

fn violation_suffix(violations: &[String]) -> String {
    violations.iter().map(|v| format!(" ({v})")).collect()
}

impl DomainError {
    pub fn not_money(text: impl Into<String>) -> Self {
        Self::NotMoney(text.into())
    }

    pub fn unknown_currency(marker: impl Into<String>) -> Self {
        Self::UnknownCurrency(marker.into())
    }

    pub fn unsupported_currency(abbreviation: impl Into<String>) -> Self {
        Self::UnsupportedCurrency(abbreviation.into())
    }

    pub fn out_of_range(amount: impl ToString) -> Self {
        Self::AmountOutOfRange(amount.to_string())
    }

    pub fn invalid_email(value: impl Into<String>) -> Self {
        Self::InvalidEmail(value.into())
    }
}
