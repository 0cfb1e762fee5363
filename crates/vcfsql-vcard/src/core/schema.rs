use std::collections::BTreeSet;

use crate::core::ContactRecord;

/// The unified column set of a batch of records.
///
/// Exports rarely carry the same properties on every contact, so the schema
/// is the sorted union of every key seen across the batch. Records missing
/// a column simply have no value for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<String>,
}

impl Schema {
    /// Builds the schema for a batch by unioning the key sets of all
    /// records and sorting the result.
    #[must_use]
    pub fn unify(records: &[ContactRecord]) -> Self {
        let columns: BTreeSet<&str> = records.iter().flat_map(ContactRecord::keys).collect();

        Self {
            columns: columns.into_iter().map(str::to_string).collect(),
        }
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
