//! Command-line surface for assembling an invoice from key:value flags.
//!
//! Every record flag may also come from the environment (`INVOICE_FROM`,
//! `INVOICE_ITEMS`, ...), which makes a fixed issuer easy to keep in a shell
//! profile. Record flags are kept as text until [`run`], so parsing happens
//! after logging is set up and errors name the flag they came from.

use anyhow::Context;
use clap::Parser;

use invoicekit_core::DomainResult;
use invoicekit_invoicing::{Invoice, InvoiceDate, ItemList};
use invoicekit_parties::{BankDetails, Contact};
use invoicekit_records::RecordParser;

pub mod help;

#[derive(Debug, Parser)]
#[command(
    name = "invoicekit",
    version,
    about = "Build an invoice from terse key:value flags",
    after_long_help = help::long_help()
)]
pub struct Args {
    /// The number of the invoice.
    #[arg(long, env = "INVOICE_NUMBER", default_value_t = 1)]
    pub number: u32,

    /// The contact who issued the invoice (required).
    #[arg(long, env = "INVOICE_FROM", value_name = "CONTACT")]
    pub from: Option<String>,

    /// The contact who needs to pay the invoice (required).
    #[arg(long, env = "INVOICE_TO", value_name = "CONTACT")]
    pub to: Option<String>,

    /// Bank details of the issuer (optional).
    #[arg(long, env = "INVOICE_BANK", value_name = "BANK")]
    pub bank: Option<String>,

    /// The billable items (required; hours/quantity defaults to 1, tax to 0).
    #[arg(long, env = "INVOICE_ITEMS", value_name = "ITEMS")]
    pub items: Option<String>,

    /// The date the invoice was created, D/M/YYYY (defaults to today).
    #[arg(long, env = "INVOICE_DATE", value_name = "DATE")]
    pub date: Option<InvoiceDate>,

    /// The date by which the invoice must be paid, D/M/YYYY (defaults to today).
    #[arg(long, env = "INVOICE_DUE", value_name = "DATE")]
    pub due: Option<InvoiceDate>,

    /// Print the full parsed invoice instead of a one-line summary.
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the parsed invoice, its item table and total as JSON.
    #[arg(long, conflicts_with = "verbose")]
    pub json: bool,

    /// Emit logs as JSON.
    #[arg(long)]
    pub log_json: bool,
}

/// Assemble the invoice described by `args` and render the requested output.
pub fn run(args: &Args) -> anyhow::Result<String> {
    let parser = RecordParser::default();
    let from = parse_flag("--from", args.from.as_deref(), |text| {
        Contact::parse_with(&parser, text)
    })?;
    let to = parse_flag("--to", args.to.as_deref(), |text| Contact::parse_with(&parser, text))?;
    let bank = parse_flag("--bank", args.bank.as_deref(), |text| {
        BankDetails::parse_with(&parser, text)
    })?;
    let items = parse_flag("--items", args.items.as_deref(), |text| {
        ItemList::parse_with(&parser, text)
    })?;

    let invoice = Invoice::new(
        args.number,
        from.unwrap_or_default(),
        to.unwrap_or_default(),
        items.unwrap_or_default(),
        bank,
        args.date.unwrap_or_else(InvoiceDate::today),
        args.due.unwrap_or_else(InvoiceDate::today),
    )
    .context("missing required flags")?;

    let total = invoice.total().context("cannot total invoice items")?;
    tracing::info!(
        number = invoice.number(),
        items = invoice.items().len(),
        total = %total,
        "assembled invoice"
    );

    if args.json {
        let table = invoice.table().context("cannot build item table")?;
        let document = serde_json::json!({
            "invoice": &invoice,
            "table": table,
            "total": total,
        });
        return serde_json::to_string_pretty(&document).context("cannot serialize invoice");
    }

    if args.verbose {
        return Ok(format!("Parsed information:\n{invoice}"));
    }

    Ok(format!(
        "Invoice {} from {} to {}: {} item(s), total {}",
        invoice.number_text(),
        invoice.from().company,
        invoice.to().company,
        invoice.items().len(),
        total.abbreviated_form()
    ))
}

fn parse_flag<T>(
    flag: &str,
    value: Option<&str>,
    parse: impl FnOnce(&str) -> DomainResult<T>,
) -> anyhow::Result<Option<T>> {
    value
        .map(parse)
        .transpose()
        .with_context(|| format!("invalid {flag}"))
}
