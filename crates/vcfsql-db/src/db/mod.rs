//! Connection handling, table loading, and row retrieval.

pub mod connection;
pub mod query;
pub mod table;

/// Quotes an identifier for interpolation into SQL text.
///
/// Column names come straight from parsed vCard keys and may carry
/// characters such as `-` from extension properties, so every identifier
/// is double-quoted with embedded quotes doubled.
#[must_use]
pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}
