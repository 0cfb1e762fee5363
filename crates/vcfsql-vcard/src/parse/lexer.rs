//! Content line lexing: key normalization and value extraction.

use crate::core::Field;

/// How the value of a content line is carved out of the text after the
/// first colon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValueRule {
    /// Take the text up to the next colon, or to the end of the line when
    /// there is none. Values that themselves contain colons, such as URLs,
    /// lose everything from their first colon on.
    #[default]
    FirstSegment,
    /// Take everything after the first colon, colons included.
    FullRemainder,
}

/// Splits one content line into a normalized key and a value.
///
/// The key is the text before the first colon, run through
/// [`normalize_key`]. The value is carved from the remainder per `rule`.
/// Lines without a colon carry no key/value split and yield `None`.
#[must_use]
pub fn split_content_line(line: &str, rule: ValueRule) -> Option<Field> {
    let colon = line.find(':')?;
    let (raw_key, rest) = line.split_at(colon);
    let rest = &rest[1..];

    let value = match rule {
        ValueRule::FirstSegment => match rest.find(':') {
            Some(second) => &rest[..second],
            None => rest,
        },
        ValueRule::FullRemainder => rest,
    };

    Some(Field::new(normalize_key(raw_key), value))
}

/// Normalizes a raw key token into a column-friendly name.
///
/// Tokens carrying a parameter assignment (`=` anywhere in the token) are
/// truncated at the first `;` or `=`, so `EMAIL;TYPE=INTERNET` and
/// `TYPE=INTERNET` become `EMAIL` and `TYPE`. Tokens with semicolons but
/// no assignment are compacted by dropping every `;`, so `TEL;WORK;VOICE`
/// becomes `TELWORKVOICE`. Plain tokens pass through unchanged.
#[must_use]
pub fn normalize_key(raw: &str) -> String {
    if raw.contains('=') {
        let cut = raw.find([';', '=']).unwrap_or(raw.len());
        raw[..cut].to_string()
    } else if raw.contains(';') {
        raw.replace(';', "")
    } else {
        raw.to_string()
    }
}
