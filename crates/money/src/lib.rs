//! Currency registry and fixed-point money.
//!
//! Amounts are stored as whole minor units (cents, pence) tagged with a
//! currency. Floating-point values only appear at the edges (`to_money`,
//! `to_decimal`, `multiply`, `add`) and are re-quantized immediately.

pub mod currency;
pub mod money;

pub use currency::{Currency, CurrencyRegistry};
pub use money::Money;
