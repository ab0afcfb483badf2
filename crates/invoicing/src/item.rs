use std::str::FromStr;

use serde::Serialize;

use invoicekit_core::{DomainError, DomainResult, ValueObject};
use invoicekit_money::{Currency, Money};
use invoicekit_records::{FieldKind, FieldSpec, Record, RecordParser, Slot};

/// One billable line of an invoice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LineItem {
    pub description: String,
    /// Hours worked or units sold. Defaults to 1.
    pub hours_quantity: u64,
    pub rate: Money,
    /// Added on top of `rate * hours_quantity`. Defaults to zero in the unset
    /// currency.
    pub tax: Money,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineItemField {
    Description,
    HoursQuantity,
    Rate,
    Tax,
}

impl Record for LineItem {
    type Field = LineItemField;
    const NAME: &'static str = "Item";
    const FIELDS: &'static [FieldSpec<LineItemField>] = &[
        FieldSpec {
            field: LineItemField::Description,
            name: "Description",
            kind: FieldKind::Text,
            aliases: &["description", "desc", "d"],
            required: true,
        },
        FieldSpec {
            field: LineItemField::HoursQuantity,
            name: "HoursQuantity",
            kind: FieldKind::Count,
            aliases: &["hoursquantity", "hours", "hrs", "h", "quantity", "qty", "q"],
            required: false,
        },
        FieldSpec {
            field: LineItemField::Rate,
            name: "Rate",
            kind: FieldKind::Money,
            aliases: &["rate", "r"],
            required: true,
        },
        FieldSpec {
            field: LineItemField::Tax,
            name: "Tax",
            kind: FieldKind::Money,
            aliases: &["tax", "t"],
            required: false,
        },
    ];

    fn slot(&mut self, field: LineItemField) -> Slot<'_> {
        match field {
            LineItemField::Description => Slot::Text(&mut self.description),
            LineItemField::HoursQuantity => Slot::Count(&mut self.hours_quantity),
            LineItemField::Rate => Slot::Money(&mut self.rate),
            LineItemField::Tax => Slot::Money(&mut self.tax),
        }
    }

    fn apply_defaults(&mut self) {
        if self.hours_quantity == 0 {
            tracing::debug!(item = %self.description, "defaulted hours/quantity to 1");
            self.hours_quantity = 1;
        }
        if !self.tax.is_set() {
            self.tax = Money::zero();
        }
    }
}

impl LineItem {
    /// `rate * hours_quantity + tax`, in the rate's currency.
    pub fn subtotal(&self) -> DomainResult<Money> {
        self.rate
            .multiply(self.hours_quantity as f64)?
            .add(self.tax.to_decimal()?)
    }
}

impl core::fmt::Display for LineItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let subtotal = self
            .subtotal()
            .map_or_else(|err| format!("<{err}>"), |m| m.full());
        write!(
            f,
            "{}: HRS/QTY: {}, RATE: {}, TAX: {}, Subtotal: {}",
            self.description, self.hours_quantity, self.rate, self.tax, subtotal
        )
    }
}

impl ValueObject for LineItem {}

/// Items of one invoice, in presentation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ItemList(Vec<LineItem>);

impl ItemList {
    pub fn new(items: Vec<LineItem>) -> Self {
        Self(items)
    }

    /// Parse items separated by `,`, each with pairs on `;` and list values
    /// on `|`.
    pub fn parse_with(parser: &RecordParser, text: &str) -> DomainResult<Self> {
        parser.parse_list(text).map(Self)
    }

    pub fn items(&self) -> &[LineItem] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, LineItem> {
        self.0.iter()
    }

    /// Sum of subtotals in the first item's rate currency (the unset currency
    /// for an empty list).
    pub fn total(&self) -> DomainResult<Money> {
        let currency = self
            .0
            .first()
            .map(|item| item.rate.currency())
            .unwrap_or(Currency::ZERO);
        self.0
            .iter()
            .try_fold(Money::to_money(0.0, currency)?, |total, item| {
                total.add(item.subtotal()?.to_decimal()?)
            })
    }
}

impl FromStr for ItemList {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(&RecordParser::default(), s)
    }
}

impl<'a> IntoIterator for &'a ItemList {
    type Item = &'a LineItem;
    type IntoIter = core::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl core::fmt::Display for ItemList {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, item) in self.0.iter().enumerate() {
            writeln!(f, "Item {}: {item}", i + 1)?;
        }
        Ok(())
    }
}
