//! Row retrieval over the loaded table.

use rusqlite::Connection;

use crate::db::quote_ident;
use crate::error::DbResult;

/// One result row. Cells follow the table's column order and are `None`
/// where the stored cell is null.
pub type Row = Vec<Option<String>>;

/// ## Summary
/// Returns every row of `table`, in insertion order.
///
/// A table that does not exist, as after loading an empty batch, yields an
/// empty result rather than an error.
///
/// ## Errors
/// Returns an error if the query fails to execute.
pub fn query_all(conn: &Connection, table: &str) -> DbResult<Vec<Row>> {
    if !table_exists(conn, table)? {
        return Ok(Vec::new());
    }

    fetch_rows(conn, &format!("SELECT * FROM {}", quote_ident(table)))
}

/// ## Summary
/// Returns the rows of `table` matching `condition`.
///
/// The condition is the caller's own SQL filter clause, interpolated
/// verbatim after `WHERE`. It is never validated here; a condition the
/// store rejects surfaces as a query error.
///
/// ## Errors
/// Returns an error if the condition is not valid SQL for the table or the
/// query fails to execute.
#[tracing::instrument(skip(conn), fields(table = %table, condition = %condition))]
pub fn query_filtered(conn: &Connection, table: &str, condition: &str) -> DbResult<Vec<Row>> {
    if !table_exists(conn, table)? {
        return Ok(Vec::new());
    }

    fetch_rows(
        conn,
        &format!("SELECT * FROM {} WHERE {condition}", quote_ident(table)),
    )
}

fn table_exists(conn: &Connection, table: &str) -> DbResult<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
        [table],
        |row| row.get(0),
    )?;

    Ok(count > 0)
}

fn fetch_rows(conn: &Connection, sql: &str) -> DbResult<Vec<Row>> {
    let mut stmt = conn.prepare(sql)?;
    let column_count = stmt.column_count();

    let rows = stmt.query_map([], |row| {
        (0..column_count)
            .map(|index| row.get::<_, Option<String>>(index))
            .collect::<Result<Row, _>>()
    })?;

    let mut collected = Vec::new();
    for row in rows {
        collected.push(row?);
    }

    tracing::debug!(rows = collected.len(), "Fetched rows");
    Ok(collected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vcfsql_vcard::{ContactRecord, Field, Schema};

    use crate::db::table::load_records;

    fn record(pairs: &[(&str, &str)]) -> ContactRecord {
        let mut record = ContactRecord::new();
        for (key, value) in pairs {
            record.insert(Field::new(*key, *value));
        }
        record
    }

    fn loaded_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        let records = vec![
            record(&[("FN", "John Doe"), ("TEL", "12345")]),
            record(&[("FN", "Jane Doe"), ("EMAIL", "jane@x.com")]),
        ];
        let schema = Schema::unify(&records);
        load_records(&conn, "contactsvcfsql", &schema, &records).unwrap();
        conn
    }

    #[test_log::test]
    fn round_trip_preserves_rows_and_nulls() {
        let conn = loaded_connection();

        let rows = query_all(&conn, "contactsvcfsql").unwrap();
        assert_eq!(
            rows,
            vec![
                vec![None, Some("John Doe".to_string()), Some("12345".to_string())],
                vec![
                    Some("jane@x.com".to_string()),
                    Some("Jane Doe".to_string()),
                    None,
                ],
            ]
        );
    }

    #[test]
    fn every_row_spans_the_full_schema() {
        let conn = loaded_connection();

        let rows = query_all(&conn, "contactsvcfsql").unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.len() == 3));
    }

    #[test]
    fn values_with_sql_metacharacters_round_trip() {
        let conn = Connection::open_in_memory().unwrap();
        let records = vec![record(&[
            ("FN", "O'Brien \"Bob\""),
            ("NOTE", "x'); DROP TABLE contacts; --"),
        ])];
        let schema = Schema::unify(&records);
        load_records(&conn, "contactsvcfsql", &schema, &records).unwrap();

        let rows = query_all(&conn, "contactsvcfsql").unwrap();
        assert_eq!(
            rows,
            vec![vec![
                Some("O'Brien \"Bob\"".to_string()),
                Some("x'); DROP TABLE contacts; --".to_string()),
            ]]
        );
    }

    #[test_log::test]
    fn filter_selects_matching_rows() {
        let conn = loaded_connection();

        let rows = query_filtered(&conn, "contactsvcfsql", "FN = 'Jane Doe'").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][1], Some("Jane Doe".to_string()));
    }

    #[test]
    fn filter_may_match_nothing() {
        let conn = loaded_connection();

        let rows = query_filtered(&conn, "contactsvcfsql", "FN = 'Nobody'").unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn invalid_condition_is_a_query_error() {
        let conn = loaded_connection();

        assert!(query_filtered(&conn, "contactsvcfsql", "NOSUCHCOL = 1").is_err());
    }

    #[test]
    fn missing_table_yields_empty_results() {
        let conn = Connection::open_in_memory().unwrap();

        assert!(query_all(&conn, "absent").unwrap().is_empty());
        assert!(query_filtered(&conn, "absent", "FN = 'x'").unwrap().is_empty());
    }
}
