//! Value object trait: equality by value, not identity.
//!
//! Everything the record engine produces (currencies, money, contacts, bank
//! details, line items) is a value object: built once from caller input and
//! never mutated afterwards.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one; every `Money` operation, for example, returns a fresh
/// `Money` rather than touching its receiver.
///
/// The trait requires:
/// - **Clone**: values are handed out by copy, never shared mutably
/// - **PartialEq**: two values with the same attributes are the same value
/// - **Debug**: values show up in test failures and `tracing` fields
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Money {
///     minor_units: u64,
///     currency: Currency,
/// }
///
/// impl ValueObject for Money {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
