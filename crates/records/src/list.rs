//! Parsing a list of records separated by the record separator.

use invoicekit_core::DomainResult;

use crate::field::Record;
use crate::grammar::{Depth, Separator};
use crate::record::RecordParser;

impl RecordParser {
    /// Parse every record in `text`, in input order.
    pub fn parse_list<R: Record>(&self, text: &str) -> DomainResult<Vec<R>> {
        self.parse_list_with(text, R::default)
    }

    /// Like [`RecordParser::parse_list`], building each record with
    /// `new_record` before it is filled.
    ///
    /// Fails fast: the first record that does not parse aborts the whole list.
    pub fn parse_list_with<R, F>(&self, text: &str, mut new_record: F) -> DomainResult<Vec<R>>
    where
        R: Record,
        F: FnMut() -> R,
    {
        let records = Separator::Record
            .split(text)
            .enumerate()
            .map(|(index, segment)| {
                let mut record = new_record();
                self.parse_into(segment, Depth::Listed, &mut record)
                    .inspect_err(|err| {
                        tracing::debug!(record = R::NAME, index, %err, "list entry rejected");
                    })?;
                Ok(record)
            })
            .collect::<DomainResult<Vec<R>>>()?;

        tracing::debug!(record = R::NAME, count = records.len(), "parsed list");
        Ok(records)
    }
}
