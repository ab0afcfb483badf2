use serde::Serialize;

use invoicekit_core::{DomainError, DomainResult};
use invoicekit_money::Money;
use invoicekit_parties::{BankDetails, Contact};

use crate::date::InvoiceDate;
use crate::item::ItemList;

/// A complete invoice, assembled from individually parsed parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invoice {
    number: u32,
    from: Contact,
    to: Contact,
    items: ItemList,
    bank: Option<BankDetails>,
    invoice_date: InvoiceDate,
    due_date: InvoiceDate,
}

/// Item rundown as display-ready text cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemTable {
    pub header: [&'static str; 5],
    pub rows: Vec<[String; 5]>,
}

impl Invoice {
    pub const TABLE_HEADER: [&'static str; 5] =
        ["Description", "Hours/Quantity", "Rate", "Tax", "Subtotal"];

    /// Assemble an invoice.
    ///
    /// From, To and a non-empty item list are required; every missing one is
    /// reported in a single error. Blank bank details count as not supplied.
    pub fn new(
        number: u32,
        from: Contact,
        to: Contact,
        items: ItemList,
        bank: Option<BankDetails>,
        invoice_date: InvoiceDate,
        due_date: InvoiceDate,
    ) -> DomainResult<Self> {
        let mut missing = Vec::new();
        if from.is_blank() {
            missing.push("From".to_string());
        }
        if to.is_blank() {
            missing.push("To".to_string());
        }
        if items.is_empty() {
            missing.push("Items".to_string());
        }
        if !missing.is_empty() {
            return Err(DomainError::RequiredMissing(missing));
        }

        Ok(Self {
            number,
            from,
            to,
            items,
            bank: bank.filter(|b| !b.is_blank()),
            invoice_date,
            due_date,
        })
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    /// Invoice number zero-padded to three digits (`007`).
    pub fn number_text(&self) -> String {
        format!("{:03}", self.number)
    }

    pub fn from(&self) -> &Contact {
        &self.from
    }

    pub fn to(&self) -> &Contact {
        &self.to
    }

    pub fn items(&self) -> &ItemList {
        &self.items
    }

    pub fn bank(&self) -> Option<&BankDetails> {
        self.bank.as_ref()
    }

    pub fn invoice_date(&self) -> InvoiceDate {
        self.invoice_date
    }

    pub fn due_date(&self) -> InvoiceDate {
        self.due_date
    }

    pub fn total(&self) -> DomainResult<Money> {
        self.items.total()
    }

    pub fn table(&self) -> DomainResult<ItemTable> {
        let rows = self
            .items
            .iter()
            .map(|item| {
                Ok([
                    item.description.clone(),
                    item.hours_quantity.to_string(),
                    item.rate.major_text(),
                    item.tax.abbreviated_form(),
                    item.subtotal()?.abbreviated_form(),
                ])
            })
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(ItemTable {
            header: Self::TABLE_HEADER,
            rows,
        })
    }
}

impl core::fmt::Display for Invoice {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "INVOICE {}", self.number_text())?;
        writeln!(f)?;
        writeln!(f, "Invoice date: {}", self.invoice_date)?;
        writeln!(f, "Due: {}", self.due_date)?;
        writeln!(f)?;
        writeln!(f, "FROM")?;
        writeln!(f, "{}", self.from)?;
        writeln!(f, "TO")?;
        writeln!(f, "{}", self.to)?;
        if let Some(bank) = &self.bank {
            writeln!(f, "{bank}")?;
        }
        write!(f, "{}", self.items)?;
        let total = self
            .total()
            .map_or_else(|err| format!("<{err}>"), |m| m.abbreviated_form());
        writeln!(f, "Total: {total}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::LineItem;
    use invoicekit_money::Currency;

    fn contact(text: &str) -> Contact {
        text.parse().unwrap()
    }

    fn date(text: &str) -> InvoiceDate {
        text.parse().unwrap()
    }

    fn sample_invoice(bank: Option<BankDetails>) -> Invoice {
        Invoice::new(
            7,
            contact("c:Acme,f:Ann,l:Lee,e:ann@acme.io,p:0100,a:1 Road;Town"),
            contact("f:Bob,l:Ray,e:bob@ray.io,p:0200,a:2 Lane"),
            "d:Design;h:3;r:£40;t:£12,d:Hosting;r:£9.99".parse().unwrap(),
            bank,
            date("1/3/2024"),
            date("31/3/2024"),
        )
        .unwrap()
    }

    #[test]
    fn reports_every_missing_part() {
        let err = Invoice::new(
            1,
            Contact::default(),
            Contact::default(),
            ItemList::default(),
            None,
            date("1/1/2024"),
            date("1/1/2024"),
        )
        .unwrap_err();
        assert_eq!(
            err,
            DomainError::RequiredMissing(vec![
                "From".to_string(),
                "To".to_string(),
                "Items".to_string()
            ])
        );
    }

    #[test]
    fn blank_bank_details_are_dropped() {
        assert!(sample_invoice(Some(BankDetails::default())).bank().is_none());
        let bank: BankDetails = "b:Bank,a:12345678,s:123456".parse().unwrap();
        assert_eq!(sample_invoice(Some(bank.clone())).bank(), Some(&bank));
    }

    #[test]
    fn total_and_table_use_abbreviated_money() {
        let invoice = sample_invoice(None);
        assert_eq!(invoice.number_text(), "007");
        assert_eq!(
            invoice.total().unwrap(),
            Money::from_minor_units(14_199, Currency::GBP)
        );

        let table = invoice.table().unwrap();
        assert_eq!(table.header, Invoice::TABLE_HEADER);
        assert_eq!(
            table.rows,
            vec![
                [
                    "Design".to_string(),
                    "3".to_string(),
                    "40.00".to_string(),
                    "GBP 12.00".to_string(),
                    "GBP 132.00".to_string(),
                ],
                [
                    "Hosting".to_string(),
                    "1".to_string(),
                    "9.99".to_string(),
                    String::new(),
                    "GBP 9.99".to_string(),
                ],
            ]
        );
    }

    #[test]
    fn summary_includes_parties_items_and_total() {
        let bank: BankDetails = "b:Bank,a:12345678,s:123456".parse().unwrap();
        let summary = sample_invoice(Some(bank)).to_string();
        assert!(summary.starts_with("INVOICE 007\n\nInvoice date: March 1st, 2024\nDue: March 31st, 2024\n"));
        assert!(summary.contains("FROM\nAcme\nAnn Lee\n1 Road\nTown\n"));
        assert!(summary.contains("TO\nBob Ray\nBob Ray\n2 Lane\n"));
        assert!(summary.contains("Sort code: 123456\n"));
        assert!(summary.contains("Item 2: Hosting: HRS/QTY: 1"));
        assert!(summary.ends_with("Total: GBP 141.99\n"));
    }

    #[test]
    fn serializes_for_json_output() {
        let json = serde_json::to_value(sample_invoice(None)).unwrap();
        assert_eq!(json["number"], 7);
        assert_eq!(json["items"][0]["description"], "Design");
        assert_eq!(json["items"][0]["rate"]["minor_units"], 4000);
        assert_eq!(json["bank"], serde_json::Value::Null);
        assert_eq!(json["due_date"], "2024-03-31");
    }

    #[test]
    fn summary_marks_total_that_cannot_be_represented() {
        let huge = LineItem {
            description: "Huge".to_string(),
            hours_quantity: 2,
            rate: Money::from_minor_units(u64::MAX, Currency::USD),
            tax: Money::zero(),
        };
        let invoice = Invoice::new(
            8,
            contact("f:Ann,l:Lee,e:ann@acme.io,p:0100,a:1 Road"),
            contact("f:Bob,l:Ray,e:bob@ray.io,p:0200,a:2 Lane"),
            ItemList::new(vec![huge]),
            None,
            date("1/3/2024"),
            date("31/3/2024"),
        )
        .unwrap();
        assert!(invoice.total().is_err());
        assert!(invoice
            .to_string()
            .ends_with("Total: <36893488147419103230 cannot be represented as a money amount>\n"));
    }
}
