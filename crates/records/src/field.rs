//! Field declarations, key resolution and value coercion.

use invoicekit_core::{DomainError, DomainResult};
use invoicekit_money::{CurrencyRegistry, Money};

use crate::grammar::Depth;

/// Semantic type of a record slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextList,
    Count,
    Money,
}

impl FieldKind {
    pub fn describe(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::TextList => "list of text",
            FieldKind::Count => "whole number",
            FieldKind::Money => "money",
        }
    }
}

/// Declaration of one field: its handle, display name and accepted aliases.
///
/// Aliases are lowercase and disjoint across the fields of one record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec<F: 'static> {
    pub field: F,
    pub name: &'static str,
    pub kind: FieldKind,
    pub aliases: &'static [&'static str],
    pub required: bool,
}

/// Mutable view of the slot a field handle addresses.
#[derive(Debug)]
pub enum Slot<'a> {
    Text(&'a mut String),
    TextList(&'a mut Vec<String>),
    Count(&'a mut u64),
    Money(&'a mut Money),
}

impl Slot<'_> {
    pub fn kind(&self) -> FieldKind {
        match self {
            Slot::Text(_) => FieldKind::Text,
            Slot::TextList(_) => FieldKind::TextList,
            Slot::Count(_) => FieldKind::Count,
            Slot::Money(_) => FieldKind::Money,
        }
    }

    /// Whether the slot holds a value that satisfies a required field.
    ///
    /// A list needs at least one non-blank entry; a money value needs a
    /// chosen currency.
    pub fn is_filled(&self) -> bool {
        match self {
            Slot::Text(text) => !text.is_empty(),
            Slot::TextList(list) => list.iter().any(|line| !line.trim().is_empty()),
            Slot::Count(count) => **count != 0,
            Slot::Money(money) => money.is_set(),
        }
    }
}

/// A record type the parser can fill from key:value text.
///
/// Completeness is checked from the declaration: after defaults are applied,
/// every field marked `required` must be [filled](Slot::is_filled).
pub trait Record: Default {
    /// Field handle, usually a fieldless enum.
    type Field: Copy + Eq + core::fmt::Debug + 'static;

    /// Name used in error messages ("Contact details: ...").
    const NAME: &'static str;

    /// Every field, in declaration order.
    const FIELDS: &'static [FieldSpec<Self::Field>];

    fn slot(&mut self, field: Self::Field) -> Slot<'_>;

    /// Post-pass defaulting for fields that were left empty.
    fn apply_defaults(&mut self) {}

    /// Format checks on values that are present.
    fn validate(&self) -> DomainResult<()> {
        Ok(())
    }
}

/// Find the declaration whose aliases contain `key` (case-insensitive).
pub fn resolve<R: Record>(key: &str) -> Option<&'static FieldSpec<R::Field>> {
    let key = key.trim().to_lowercase();
    R::FIELDS
        .iter()
        .find(|spec| spec.aliases.contains(&key.as_str()))
}

/// Coerce `value` according to the slot's kind and write it.
pub fn coerce(
    slot: Slot<'_>,
    name: &'static str,
    value: &str,
    depth: Depth,
    registry: &CurrencyRegistry,
) -> DomainResult<()> {
    match slot {
        Slot::Text(text) => *text = value.to_string(),
        Slot::TextList(list) => {
            *list = depth.values().split(value).map(str::to_string).collect();
        }
        Slot::Count(count) => {
            *count = value
                .trim()
                .parse()
                .map_err(|_| DomainError::NotANumber {
                    field: name,
                    value: value.to_string(),
                })?;
        }
        Slot::Money(money) => *money = registry.parse_money(value)?,
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use invoicekit_money::Currency;

    /// Test record exercising every slot kind.
    #[derive(Debug, Default, Clone, PartialEq, Eq)]
    pub(crate) struct Sample {
        pub name: String,
        pub tags: Vec<String>,
        pub count: u64,
        pub price: Money,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) enum SampleField {
        Name,
        Tags,
        Count,
        Price,
    }

    impl Record for Sample {
        type Field = SampleField;
        const NAME: &'static str = "Sample";
        const FIELDS: &'static [FieldSpec<SampleField>] = &[
            FieldSpec {
                field: SampleField::Name,
                name: "Name",
                kind: FieldKind::Text,
                aliases: &["name", "n"],
                required: true,
            },
            FieldSpec {
                field: SampleField::Tags,
                name: "Tags",
                kind: FieldKind::TextList,
                aliases: &["tags", "t"],
                required: false,
            },
            FieldSpec {
                field: SampleField::Count,
                name: "Count",
                kind: FieldKind::Count,
                aliases: &["count", "c"],
                required: false,
            },
            FieldSpec {
                field: SampleField::Price,
                name: "Price",
                kind: FieldKind::Money,
                aliases: &["price", "p"],
                required: true,
            },
        ];

        fn slot(&mut self, field: SampleField) -> Slot<'_> {
            match field {
                SampleField::Name => Slot::Text(&mut self.name),
                SampleField::Tags => Slot::TextList(&mut self.tags),
                SampleField::Count => Slot::Count(&mut self.count),
                SampleField::Price => Slot::Money(&mut self.price),
            }
        }

        fn apply_defaults(&mut self) {
            if self.count == 0 {
                self.count = 1;
            }
        }

        fn validate(&self) -> DomainResult<()> {
            if self.name.contains('!') {
                return Err(DomainError::invalid_email(self.name.as_str()));
            }
            Ok(())
        }
    }

    #[test]
    fn resolves_aliases_case_insensitively() {
        assert_eq!(resolve::<Sample>("NAME").map(|s| s.field), Some(SampleField::Name));
        assert_eq!(resolve::<Sample>(" P ").map(|s| s.field), Some(SampleField::Price));
        assert!(resolve::<Sample>("nope").is_none());
    }

    #[test]
    fn declared_kinds_match_slots() {
        let mut sample = Sample::default();
        for spec in Sample::FIELDS {
            assert_eq!(sample.slot(spec.field).kind(), spec.kind, "{}", spec.name);
        }
    }

    #[test]
    fn filled_slots_depend_on_kind() {
        let mut text = String::new();
        let mut list = vec![" ".to_string(), String::new()];
        let mut count = 0;
        let mut money = Money::zero();
        assert!(!Slot::Text(&mut text).is_filled());
        assert!(!Slot::TextList(&mut list).is_filled());
        assert!(!Slot::Count(&mut count).is_filled());
        assert!(!Slot::Money(&mut money).is_filled());

        let mut text = "x".to_string();
        let mut list = vec![String::new(), "line".to_string()];
        let mut count = 2;
        let mut money = Money::from_minor_units(0, Currency::GBP);
        assert!(Slot::Text(&mut text).is_filled());
        assert!(Slot::TextList(&mut list).is_filled());
        assert!(Slot::Count(&mut count).is_filled());
        assert!(Slot::Money(&mut money).is_filled());
    }

    #[test]
    fn coerces_each_kind() {
        let registry = CurrencyRegistry::default();
        let mut sample = Sample::default();

        coerce(sample.slot(SampleField::Name), "Name", "Widget", Depth::Listed, &registry)
            .unwrap();
        coerce(sample.slot(SampleField::Tags), "Tags", "a|b| c", Depth::Listed, &registry)
            .unwrap();
        coerce(sample.slot(SampleField::Count), "Count", "7", Depth::Listed, &registry).unwrap();
        coerce(sample.slot(SampleField::Price), "Price", "£2.50", Depth::Listed, &registry)
            .unwrap();

        assert_eq!(sample.name, "Widget");
        assert_eq!(sample.tags, vec!["a", "b", "c"]);
        assert_eq!(sample.count, 7);
        assert_eq!(sample.price, Money::from_minor_units(250, Currency::GBP));
    }

    #[test]
    fn list_values_follow_depth() {
        let registry = CurrencyRegistry::default();
        let mut sample = Sample::default();
        coerce(sample.slot(SampleField::Tags), "Tags", "a;b", Depth::Standalone, &registry)
            .unwrap();
        assert_eq!(sample.tags, vec!["a", "b"]);
    }

    #[test]
    fn count_must_be_a_whole_number() {
        let registry = CurrencyRegistry::default();
        let mut sample = Sample::default();
        for bad in ["ten", "-1", "1.5", ""] {
            match coerce(sample.slot(SampleField::Count), "Count", bad, Depth::Listed, &registry) {
                Err(DomainError::NotANumber { field: "Count", value }) if value == bad => {}
                other => panic!("expected NotANumber for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn money_errors_propagate() {
        let registry = CurrencyRegistry::default();
        let mut sample = Sample::default();
        match coerce(sample.slot(SampleField::Price), "Price", "lots", Depth::Listed, &registry) {
            Err(DomainError::NotMoney(_)) => {}
            other => panic!("expected NotMoney, got {other:?}"),
        }
    }
}
