//! Builds the multi-line, user-facing error text for record parsing.

use core::fmt::Write;

use invoicekit_core::DomainError;

use crate::field::Record;
use crate::grammar::Separator;

/// Every field of `R` with all of its accepted aliases.
pub fn accepted_keys<R: Record>() -> String {
    let mut out = String::new();
    for spec in R::FIELDS {
        let _ = writeln!(
            out,
            "\t- The following are all possible prefixes for \"{}\"",
            spec.name
        );
        for alias in spec.aliases {
            let _ = writeln!(out, "\t\t- {alias}");
        }
    }
    out
}

/// Every declared field name of `R`, one per line.
pub fn declared_fields<R: Record>() -> String {
    R::FIELDS
        .iter()
        .map(|spec| format!("\t- {}\n", spec.name))
        .collect()
}

/// One line per field: name, aliases, kind and whether it is required.
///
/// Used for help text, e.g.
/// `- FirstName ("firstname", "first", "f"): text (required)`.
pub fn describe<R: Record>() -> String {
    R::FIELDS
        .iter()
        .map(|spec| {
            let aliases = spec
                .aliases
                .iter()
                .map(|alias| format!("\"{alias}\""))
                .collect::<Vec<_>>()
                .join(", ");
            let required = if spec.required { "required" } else { "optional" };
            format!(
                "- {} ({aliases}): {} ({required})\n",
                spec.name,
                spec.kind.describe()
            )
        })
        .collect()
}

pub fn malformed_pair<R: Record>(text: &str) -> DomainError {
    DomainError::MalformedPair {
        record: R::NAME,
        text: text.to_string(),
        accepted: accepted_keys::<R>(),
    }
}

pub fn unknown_key<R: Record>(key: &str, text: &str) -> DomainError {
    DomainError::UnknownKey {
        record: R::NAME,
        key: key.to_string(),
        text: text.to_string(),
        accepted: accepted_keys::<R>(),
    }
}

pub fn duplicate_field<R: Record>(field: &'static str) -> DomainError {
    DomainError::DuplicateField {
        record: R::NAME,
        field,
    }
}

pub fn missing_fields<R: Record>() -> DomainError {
    DomainError::MissingFields {
        record: R::NAME,
        expected: R::FIELDS.len(),
        fields: declared_fields::<R>(),
    }
}

/// Separator hint shown next to a record's help text.
pub fn pair_syntax(separator: Separator) -> String {
    format!(
        "<key>{kv} <value>{sep} <key>{kv} <value>{sep} ...",
        kv = Separator::KeyValue.as_char(),
        sep = separator.as_char()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::tests::Sample;

    #[test]
    fn accepted_keys_lists_every_alias_under_its_field() {
        let text = accepted_keys::<Sample>();
        assert!(text.starts_with("\t- The following are all possible prefixes for \"Name\"\n"));
        assert!(text.contains("\t\t- name\n\t\t- n\n"));
        assert!(text.contains("\"Price\"\n\t\t- price\n\t\t- p\n"));
    }

    #[test]
    fn missing_fields_names_every_declared_field() {
        let err = missing_fields::<Sample>();
        assert_eq!(
            err.to_string(),
            "Sample details: you need to give 4 key-value pairs each of which representing one of the following fields:\n\t- Name\n\t- Tags\n\t- Count\n\t- Price\n"
        );
    }

    #[test]
    fn describe_marks_required_fields() {
        let help = describe::<Sample>();
        assert!(help.contains("- Name (\"name\", \"n\"): text (required)\n"));
        assert!(help.contains("- Tags (\"tags\", \"t\"): list of text (optional)\n"));
    }

    #[test]
    fn pair_syntax_uses_the_given_separator() {
        assert_eq!(
            pair_syntax(Separator::Field),
            "<key>: <value>; <key>: <value>; ..."
        );
    }
}
