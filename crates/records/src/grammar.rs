//! The fixed delimiter grammar.
//!
//! Four separators, outermost first:
//!
//! | separator   | char | splits                                   |
//! |-------------|------|------------------------------------------|
//! | `Record`    | `,`  | records in a list                        |
//! | `Field`     | `;`  | key:value pairs of one record            |
//! | `ListValue` | `\|` | values of a list-valued field            |
//! | `KeyValue`  | `:`  | a key from its value                     |
//!
//! Every separator may be followed by one space, which is dropped.

/// One level of the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    Record,
    Field,
    ListValue,
    KeyValue,
}

impl Separator {
    pub const fn as_char(self) -> char {
        match self {
            Separator::Record => ',',
            Separator::Field => ';',
            Separator::ListValue => '|',
            Separator::KeyValue => ':',
        }
    }

    /// Split `text` on this separator, dropping one space after each
    /// occurrence.
    pub fn split(self, text: &str) -> impl Iterator<Item = &str> + '_ {
        text.split(self.as_char())
            .enumerate()
            .map(|(i, part)| match i {
                0 => part,
                _ => part.strip_prefix(' ').unwrap_or(part),
            })
    }
}

/// Where a record sits in the input, which decides its separators.
///
/// A record given on its own (a contact, bank details) is the outermost
/// level, so its pairs are separated like records and its list values like
/// fields. A record that is one entry of a list (a line item) sits one level
/// deeper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    Standalone,
    Listed,
}

impl Depth {
    /// Separator between the key:value pairs of one record.
    pub const fn fields(self) -> Separator {
        match self {
            Depth::Standalone => Separator::Record,
            Depth::Listed => Separator::Field,
        }
    }

    /// Separator between the values of a list-valued field.
    pub const fn values(self) -> Separator {
        match self {
            Depth::Standalone => Separator::Field,
            Depth::Listed => Separator::ListValue,
        }
    }
}
