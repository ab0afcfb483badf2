use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use invoicekit_core::{DomainError, DomainResult, ValueObject};

use crate::currency::Currency;

/// Minor units per major unit for every supported currency.
const MINOR_PER_MAJOR: u64 = 100;

/// A fixed-point amount of money.
///
/// `minor_units` is always a whole number of the currency's smallest unit;
/// there are no fractional cents. Money is immutable: every operation returns
/// a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Money {
    minor_units: u64,
    currency: Currency,
}

impl Money {
    /// Zero in the unset currency (the default for optional money fields).
    pub const fn zero() -> Self {
        Self {
            minor_units: 0,
            currency: Currency::ZERO,
        }
    }

    pub const fn from_minor_units(minor_units: u64, currency: Currency) -> Self {
        Self {
            minor_units,
            currency,
        }
    }

    /// Convert a decimal amount to money, rounding half-up to whole minor
    /// units (`1.005` becomes `1.01`).
    pub fn to_money(amount: f64, currency: Currency) -> DomainResult<Self> {
        currency.ensure_supported()?;
        quantize(decimal_from_f64(amount)?, currency)
    }

    /// Exact counterpart of [`Money::to_money`] for amounts that are already
    /// decimal.
    pub fn from_decimal(amount: Decimal, currency: Currency) -> DomainResult<Self> {
        currency.ensure_supported()?;
        quantize(amount, currency)
    }

    pub fn minor_units(&self) -> u64 {
        self.minor_units
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Whether a currency has been chosen for this value.
    pub fn is_set(&self) -> bool {
        !self.currency.is_zero()
    }

    /// Amount in major units, exact.
    pub fn amount(&self) -> DomainResult<Decimal> {
        self.currency.ensure_supported()?;
        Ok(Decimal::from_i128_with_scale(i128::from(self.minor_units), 2))
    }

    /// Amount in major units as a float.
    pub fn to_decimal(&self) -> DomainResult<f64> {
        self.currency.ensure_supported()?;
        Ok(self.minor_units as f64 / MINOR_PER_MAJOR as f64)
    }

    /// Multiply by `factor`, rounding half-up to whole minor units.
    pub fn multiply(&self, factor: f64) -> DomainResult<Self> {
        self.currency.ensure_supported()?;
        let product = Decimal::from(self.minor_units)
            .checked_mul(decimal_from_f64(factor)?)
            .ok_or_else(|| DomainError::out_of_range(format!("{} * {factor}", self.full())))?;
        Ok(Self {
            minor_units: round_minor(product)?,
            currency: self.currency,
        })
    }

    /// Add a major-unit amount, keeping this value's currency.
    pub fn add(&self, amount: f64) -> DomainResult<Self> {
        let sum = self
            .amount()?
            .checked_add(decimal_from_f64(amount)?)
            .ok_or_else(|| DomainError::out_of_range(format!("{} + {amount}", self.full())))?;
        quantize(sum, self.currency)
    }

    /// `USD $10.00`; empty for the unset currency.
    pub fn full(&self) -> String {
        if self.currency.is_zero() {
            return String::new();
        }
        format!(
            "{} {}{}",
            self.currency.abbreviation(),
            self.currency.symbol(),
            self.major_text()
        )
    }

    /// `$10.00`; empty for the unset currency.
    pub fn symbol_form(&self) -> String {
        if self.currency.is_zero() {
            return String::new();
        }
        format!("{}{}", self.currency.symbol(), self.major_text())
    }

    /// `USD 10.00`; empty for the unset currency.
    pub fn abbreviated_form(&self) -> String {
        if self.currency.is_zero() {
            return String::new();
        }
        format!("{} {}", self.currency.abbreviation(), self.major_text())
    }

    /// Amount to two decimal places, without any currency marker.
    pub fn major_text(&self) -> String {
        format!(
            "{}.{:02}",
            self.minor_units / MINOR_PER_MAJOR,
            self.minor_units % MINOR_PER_MAJOR
        )
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.full())
    }
}

impl ValueObject for Money {}

/// Shortest round-trip text of the float, read back as a decimal, so `1.005`
/// stays `1.005` rather than `1.00499999999999989...`.
fn decimal_from_f64(value: f64) -> DomainResult<Decimal> {
    if !value.is_finite() {
        return Err(DomainError::out_of_range(value));
    }
    Decimal::from_str(&value.to_string()).map_err(|_| DomainError::out_of_range(value))
}

fn quantize(major: Decimal, currency: Currency) -> DomainResult<Money> {
    let minor = major
        .checked_mul(Decimal::ONE_HUNDRED)
        .ok_or_else(|| DomainError::out_of_range(major))?;
    Ok(Money {
        minor_units: round_minor(minor)?,
        currency,
    })
}

fn round_minor(minor: Decimal) -> DomainResult<u64> {
    let rounded = minor.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        return Err(DomainError::out_of_range(minor));
    }
    rounded
        .to_u64()
        .ok_or_else(|| DomainError::out_of_range(minor))
}
