use std::str::FromStr;

use serde::Serialize;

use invoicekit_core::{DomainError, DomainResult, ValueObject};
use invoicekit_records::{Depth, FieldKind, FieldSpec, Record, RecordParser, Slot};

const ACCOUNT_NUMBER_DIGITS: usize = 8;
const SORT_CODE_DIGITS: usize = 6;

/// Where the invoice should be paid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BankDetails {
    pub bank_name: String,
    /// Exactly 8 digits.
    pub account_number: String,
    /// Exactly 6 digits.
    pub sort_code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BankField {
    BankName,
    AccountNumber,
    SortCode,
}

impl Record for BankDetails {
    type Field = BankField;
    const NAME: &'static str = "Bank";
    const FIELDS: &'static [FieldSpec<BankField>] = &[
        FieldSpec {
            field: BankField::BankName,
            name: "Bank",
            kind: FieldKind::Text,
            aliases: &["bank", "b"],
            required: true,
        },
        FieldSpec {
            field: BankField::AccountNumber,
            name: "AccountNo",
            kind: FieldKind::Text,
            aliases: &["accountno", "account", "a/c no.", "a/c", "a", "no", "acc"],
            required: true,
        },
        FieldSpec {
            field: BankField::SortCode,
            name: "SortCode",
            kind: FieldKind::Text,
            aliases: &["sortcode", "sort", "code", "s"],
            required: true,
        },
    ];

    fn slot(&mut self, field: BankField) -> Slot<'_> {
        match field {
            BankField::BankName => Slot::Text(&mut self.bank_name),
            BankField::AccountNumber => Slot::Text(&mut self.account_number),
            BankField::SortCode => Slot::Text(&mut self.sort_code),
        }
    }

    fn validate(&self) -> DomainResult<()> {
        check_digits("account number", &self.account_number, ACCOUNT_NUMBER_DIGITS)?;
        check_digits("sort code", &self.sort_code, SORT_CODE_DIGITS)
    }
}

/// Every rule `value` breaks is reported, not just the first. Empty values
/// are left to the completeness check.
fn check_digits(field: &'static str, value: &str, digits: usize) -> DomainResult<()> {
    if value.is_empty() {
        return Ok(());
    }
    let mut violations = Vec::new();
    if value.chars().count() != digits {
        violations.push(format!("{digits} digits"));
    }
    if !value.chars().all(|c| c.is_ascii_digit()) {
        violations.push("not numeric".to_string());
    }
    if violations.is_empty() {
        return Ok(());
    }
    Err(DomainError::InvalidBankField {
        field,
        value: value.to_string(),
        violations,
    })
}

impl BankDetails {
    pub fn parse_with(parser: &RecordParser, text: &str) -> DomainResult<Self> {
        parser.parse(text, Depth::Standalone)
    }

    /// The zero value means "no bank details supplied".
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

impl FromStr for BankDetails {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(&RecordParser::default(), s)
    }
}

impl core::fmt::Display for BankDetails {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Bank details:")?;
        writeln!(f, "{}", self.bank_name)?;
        writeln!(f, "A/c No.    {}", self.account_number)?;
        writeln!(f, "Sort code: {}", self.sort_code)
    }
}

impl ValueObject for BankDetails {}
