use invoicekit_invoicing::LineItem;
use invoicekit_parties::{BankDetails, Contact};
use invoicekit_records::{Record, Separator, compose};

/// Field reference appended to `--help`.
pub fn long_help() -> String {
    let mut out = String::from("Record syntax:\n\n");
    section::<Contact>(
        &mut out,
        "--from, --to",
        Separator::Record,
        "; between address lines",
    );
    section::<BankDetails>(&mut out, "--bank", Separator::Record, "");
    section::<LineItem>(&mut out, "--items", Separator::Field, ", between items");
    out.push_str("Money is a currency code or symbol followed by an amount: GBP 10, USD10.50, £9.99\n");
    out.push_str("Dates are written D/M/YYYY.\n");
    out
}

fn section<R: Record>(out: &mut String, flags: &str, separator: Separator, note: &str) {
    out.push_str(&format!(
        "{} ({flags}): {}",
        R::NAME,
        compose::pair_syntax(separator)
    ));
    if !note.is_empty() {
        out.push_str(&format!(" ({note})"));
    }
    out.push('\n');
    out.push_str(&compose::describe::<R>());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_record_with_its_fields() {
        let help = long_help();
        assert!(help.contains("Contact (--from, --to): <key>: <value>, <key>: <value>, ..."));
        assert!(help.contains("Item (--items): <key>: <value>; <key>: <value>; ..."));
        assert!(help.contains("- SortCode (\"sortcode\", \"sort\", \"code\", \"s\"): text (required)\n"));
        assert!(help.contains("- Tax (\"tax\", \"t\"): money (optional)\n"));
    }
}
