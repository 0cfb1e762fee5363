//! Record splitting for concatenated vCard exports.
//!
//! Export files carry many records back to back. Splitting flattens the
//! input into one comma-joined blob and cuts it at every `BEGIN:VCARD`
//! marker, so record boundaries survive even when the export interleaves
//! blank lines or stray whitespace between records.

use crate::core::RawRecord;

/// Marker line opening a vCard record.
pub const BEGIN_MARKER: &str = "BEGIN:VCARD";
/// Marker line closing a vCard record.
pub const END_MARKER: &str = "END:VCARD";

/// Splits raw export text into per-record line lists.
///
/// Lines are trimmed and blank lines dropped before the input is joined
/// into a single comma-separated blob and cut at each `BEGIN:VCARD`. The
/// cut swallows the closing marker of the final record, so one `END:VCARD`
/// is restored onto it. Text before the first marker is discarded; input
/// with no marker at all yields no records.
#[must_use]
pub fn split_records(input: &str) -> Vec<RawRecord> {
    let lines: Vec<&str> = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let blob = lines.join(",");

    let mut records: Vec<RawRecord> = blob
        .split(BEGIN_MARKER)
        .skip(1)
        .map(|segment| RawRecord::new(segment_lines(segment)))
        .collect();

    if let Some(last) = records.last_mut() {
        last.lines.push(END_MARKER.to_string());
    }
    for record in &mut records {
        record.lines.insert(0, BEGIN_MARKER.to_string());
    }

    records
}

/// Recovers the content lines of one blob segment.
///
/// The segment starts with the join comma that followed its `BEGIN:VCARD`
/// and ends where the next marker was cut, so the first and last
/// comma-separated pieces are shed.
fn segment_lines(segment: &str) -> Vec<String> {
    let fields: Vec<&str> = segment.split(',').collect();

    fields
        .get(1..fields.len().saturating_sub(1))
        .unwrap_or(&[])
        .iter()
        .map(|line| (*line).to_string())
        .collect()
}
