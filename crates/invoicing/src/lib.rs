//! Invoicing domain module.
//!
//! Line items and their totals, invoice dates, and the assembly of a
//! complete invoice from parsed parts. Rendering to a page is left to the
//! caller; this crate only produces values and a plain-text summary.

pub mod date;
pub mod invoice;
pub mod item;

pub use date::InvoiceDate;
pub use invoice::{Invoice, ItemTable};
pub use item::{ItemList, LineItem, LineItemField};
