//! Parsing one group of key:value pairs into a record.

use invoicekit_core::DomainResult;
use invoicekit_money::CurrencyRegistry;

use crate::compose;
use crate::field::{self, Record};
use crate::grammar::{Depth, Separator};

/// Record parsing engine.
///
/// Owns the currency registry used to coerce money fields; otherwise
/// stateless, so one parser can serve any number of records.
#[derive(Debug, Clone, Default)]
pub struct RecordParser {
    registry: CurrencyRegistry,
}

impl RecordParser {
    pub fn new(registry: CurrencyRegistry) -> Self {
        Self { registry }
    }

    /// Parse `text` into a fresh `R`.
    pub fn parse<R: Record>(&self, text: &str, depth: Depth) -> DomainResult<R> {
        let mut record = R::default();
        self.parse_into(text, depth, &mut record)?;
        Ok(record)
    }

    /// Parse `text` into `record` in place.
    ///
    /// Pairs are applied in input order; the first malformed pair, unknown
    /// key, duplicate field or coercion failure stops parsing. Afterwards the
    /// record is checked in three steps: completeness (every declared field
    /// assigned), defaulting and validation, then a recheck of every field
    /// declared `required`. A completeness failure is waived when defaults
    /// leave every required field filled. On error `record` may be partially
    /// filled.
    pub fn parse_into<R: Record>(&self, text: &str, depth: Depth, record: &mut R) -> DomainResult<()> {
        let mut assigned: Vec<R::Field> = Vec::with_capacity(R::FIELDS.len());

        for segment in depth.fields().split(text) {
            let parts: Vec<&str> = Separator::KeyValue.split(segment).collect();
            let [key, value] = parts.as_slice() else {
                return Err(compose::malformed_pair::<R>(segment));
            };

            let spec = field::resolve::<R>(key)
                .ok_or_else(|| compose::unknown_key::<R>(key, segment))?;
            if assigned.contains(&spec.field) {
                return Err(compose::duplicate_field::<R>(spec.name));
            }

            field::coerce(record.slot(spec.field), spec.name, value, depth, &self.registry)?;
            assigned.push(spec.field);
            tracing::trace!(record = R::NAME, field = spec.name, %value, "assigned field");
        }

        let complete = assigned.len() == R::FIELDS.len();

        record.apply_defaults();
        record.validate()?;

        let unfilled = R::FIELDS
            .iter()
            .filter(|spec| spec.required)
            .find(|spec| !record.slot(spec.field).is_filled());
        if let Some(spec) = unfilled {
            tracing::debug!(record = R::NAME, field = spec.name, "required field left empty");
            return Err(compose::missing_fields::<R>());
        }
        if !complete {
            tracing::debug!(
                record = R::NAME,
                assigned = assigned.len(),
                declared = R::FIELDS.len(),
                "missing fields satisfied by defaults"
            );
        }
        Ok(())
    }
}
