//! Tabular rendering of query results.

use tabled::builder::Builder;
use tabled::settings::Style;
use vcfsql_db::db::query::Row;

/// Renders headers and rows as a psql-style text table.
///
/// Null cells render as empty strings. An empty header set, which only
/// happens when nothing was loaded, renders as empty text.
#[must_use]
pub fn render(headers: &[String], rows: &[Row]) -> String {
    if headers.is_empty() {
        return String::new();
    }

    let mut builder = Builder::default();
    builder.push_record(headers.iter().map(String::as_str));
    for row in rows {
        builder.push_record(row.iter().map(|cell| cell.clone().unwrap_or_default()));
    }

    let mut table = builder.build();
    table.with(Style::psql());
    table.to_string()
}
