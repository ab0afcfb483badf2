//! Schema-driven parsing of delimiter-separated key:value text into records.
//!
//! A record type declares its fields once ([`Record::FIELDS`]): a display
//! name plus the lowercase aliases accepted for it. [`RecordParser`] splits
//! text with the fixed [`grammar`], resolves each key through that
//! declaration, coerces the value by the slot's [`FieldKind`], rejects
//! duplicates, then runs the record's defaulting and completeness checks.
//!
//! Parsing is synchronous and allocation-light; a parser only owns an
//! immutable [`CurrencyRegistry`](invoicekit_money::CurrencyRegistry) and can
//! be shared across threads.

pub mod compose;
pub mod field;
pub mod grammar;
pub mod list;
pub mod record;

pub use field::{FieldKind, FieldSpec, Record, Slot};
pub use grammar::{Depth, Separator};
pub use record::RecordParser;
