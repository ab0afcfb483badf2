//! `invoicekit-core`: shared building blocks for the invoice record engine.
//!
//! This crate contains **pure domain** primitives (no parsing, no IO).

pub mod error;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use value_object::ValueObject;
