use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use invoicekit_core::{DomainError, DomainResult, ValueObject};
use invoicekit_records::{Depth, FieldKind, FieldSpec, Record, RecordParser, Slot};

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"#,
    )
    .expect("email pattern compiles")
});

fn is_valid_email(value: &str) -> bool {
    (3..=254).contains(&value.len()) && EMAIL.is_match(value)
}

/// A business contact (the issuer or the recipient of an invoice).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Contact {
    /// Defaults to `"<first name> <last name>"`.
    pub company: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    /// Address lines in mailing order.
    pub address: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Company,
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    Address,
}

impl Record for Contact {
    type Field = ContactField;
    const NAME: &'static str = "Contact";
    const FIELDS: &'static [FieldSpec<ContactField>] = &[
        FieldSpec {
            field: ContactField::Company,
            name: "Company",
            kind: FieldKind::Text,
            aliases: &["company", "comp", "c"],
            required: false,
        },
        FieldSpec {
            field: ContactField::FirstName,
            name: "FirstName",
            kind: FieldKind::Text,
            aliases: &["firstname", "first", "f"],
            required: true,
        },
        FieldSpec {
            field: ContactField::LastName,
            name: "LastName",
            kind: FieldKind::Text,
            aliases: &["lastname", "last", "l"],
            required: true,
        },
        FieldSpec {
            field: ContactField::Email,
            name: "Email",
            kind: FieldKind::Text,
            aliases: &["email", "e"],
            required: true,
        },
        FieldSpec {
            field: ContactField::PhoneNumber,
            name: "PhoneNo",
            kind: FieldKind::Text,
            aliases: &["phoneno", "phonenumber", "phone", "p"],
            required: true,
        },
        FieldSpec {
            field: ContactField::Address,
            name: "Address",
            kind: FieldKind::TextList,
            aliases: &["address", "addr", "a"],
            required: true,
        },
    ];

    fn slot(&mut self, field: ContactField) -> Slot<'_> {
        match field {
            ContactField::Company => Slot::Text(&mut self.company),
            ContactField::FirstName => Slot::Text(&mut self.first_name),
            ContactField::LastName => Slot::Text(&mut self.last_name),
            ContactField::Email => Slot::Text(&mut self.email),
            ContactField::PhoneNumber => Slot::Text(&mut self.phone_number),
            ContactField::Address => Slot::TextList(&mut self.address),
        }
    }

    fn apply_defaults(&mut self) {
        if self.company.trim().is_empty() {
            self.company = self.full_name();
            tracing::debug!(company = %self.company, "defaulted contact company to full name");
        }
    }

    fn validate(&self) -> DomainResult<()> {
        if !self.email.is_empty() && !is_valid_email(&self.email) {
            return Err(DomainError::invalid_email(self.email.as_str()));
        }
        Ok(())
    }
}

impl Contact {
    /// Parse a contact given on its own (pairs on `,`, address lines on `;`).
    pub fn parse_with(parser: &RecordParser, text: &str) -> DomainResult<Self> {
        parser.parse(text, Depth::Standalone)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether nothing at all was supplied.
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

impl FromStr for Contact {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(&RecordParser::default(), s)
    }
}

impl core::fmt::Display for Contact {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{}", self.company)?;
        writeln!(f, "{}", self.full_name())?;
        writeln!(f, "{}", self.address.join("\n"))?;
        writeln!(f)?;
        writeln!(f, "{}", self.email)?;
        writeln!(f, "{}", self.phone_number)
    }
}

impl ValueObject for Contact {}
