//! Assembly of [`ContactRecord`]s from split raw records.

use crate::core::{ContactRecord, RawRecord};
use crate::parse::lexer::{ValueRule, split_content_line};
use crate::parse::splitter::{BEGIN_MARKER, END_MARKER, split_records};

/// Parses a whole export into contact records using the default value rule.
#[must_use]
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse(input: &str) -> Vec<ContactRecord> {
    parse_with_rule(input, ValueRule::default())
}

/// Parses a whole export into contact records with an explicit value rule.
#[must_use]
pub fn parse_with_rule(input: &str, rule: ValueRule) -> Vec<ContactRecord> {
    let raw_records = split_records(input);
    tracing::debug!(count = raw_records.len(), "Split input into raw records");

    raw_records
        .iter()
        .map(|raw| parse_record(raw, rule))
        .collect()
}

/// Parses the content lines of one raw record.
///
/// The opening marker is skipped and parsing stops at the closing marker.
/// Content lines without a colon cannot be split into key and value and
/// are dropped with a warning.
#[must_use]
pub fn parse_record(raw: &RawRecord, rule: ValueRule) -> ContactRecord {
    let mut record = ContactRecord::new();

    for line in &raw.lines {
        if line == BEGIN_MARKER {
            continue;
        }
        if line == END_MARKER {
            break;
        }

        match split_content_line(line, rule) {
            Some(field) => record.insert(field),
            None => tracing::warn!(line = %line, "Skipping content line without a colon"),
        }
    }

    record
}
