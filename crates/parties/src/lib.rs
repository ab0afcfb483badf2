//! Parties on an invoice: who issues it, who pays it, and where to pay.
//!
//! Both record types are parsed from a single flag value, so they sit at the
//! outermost grammar level (pairs separated by `,`, address lines by `;`).

pub mod bank;
pub mod contact;

pub use bank::{BankDetails, BankField};
pub use contact::{Contact, ContactField};
