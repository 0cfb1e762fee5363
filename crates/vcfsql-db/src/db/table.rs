//! Table creation and row loading.

use rusqlite::Connection;
use vcfsql_vcard::{ContactRecord, Schema};

use crate::db::quote_ident;
use crate::error::DbResult;

/// ## Summary
/// Drops and recreates `table` with one text column per schema entry, in
/// schema order.
///
/// A batch with an empty schema creates no table at all; queries treat the
/// missing table as an empty result.
///
/// ## Errors
/// Returns an error if a statement fails to execute.
pub fn create_table(conn: &Connection, table: &str, schema: &Schema) -> DbResult<()> {
    conn.execute(&format!("DROP TABLE IF EXISTS {}", quote_ident(table)), [])?;

    if schema.is_empty() {
        tracing::debug!(table = %table, "Empty schema, skipping table creation");
        return Ok(());
    }

    let columns: Vec<String> = schema
        .columns()
        .iter()
        .map(|column| format!("{} TEXT", quote_ident(column)))
        .collect();
    let sql = format!(
        "CREATE TABLE {} ({})",
        quote_ident(table),
        columns.join(", ")
    );
    conn.execute(&sql, [])?;

    tracing::debug!(table = %table, columns = schema.len(), "Created table");
    Ok(())
}

/// ## Summary
/// Inserts one contact as a row of `table`.
///
/// Only the columns the record actually carries are named in the insert;
/// the rest of the row stays null. A record with no fields still produces
/// a row, with every cell null.
///
/// ## Errors
/// Returns an error if the insert fails, including when the record carries
/// a column the table does not have.
pub fn insert_row(conn: &Connection, table: &str, record: &ContactRecord) -> DbResult<()> {
    if record.is_empty() {
        conn.execute(
            &format!("INSERT INTO {} DEFAULT VALUES", quote_ident(table)),
            [],
        )?;
        return Ok(());
    }

    let mut columns: Vec<String> = Vec::new();
    let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();
    for (key, value) in record.fields() {
        columns.push(quote_ident(key));
        params_vec.push(Box::new(value.to_string()));
    }

    let placeholders = vec!["?"; columns.len()].join(", ");
    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({placeholders})",
        quote_ident(table),
        columns.join(", ")
    );

    let params_slice: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(AsRef::as_ref).collect();
    conn.execute(&sql, params_slice.as_slice())?;

    Ok(())
}

/// ## Summary
/// Loads a whole batch: recreates `table` for `schema`, then inserts every
/// record. Returns the number of rows inserted.
///
/// With an empty schema nothing is created or inserted and the count is
/// zero.
///
/// ## Errors
/// Returns an error if table creation or any insert fails.
#[tracing::instrument(skip(conn, schema, records), fields(table = %table, records = records.len()))]
pub fn load_records(
    conn: &Connection,
    table: &str,
    schema: &Schema,
    records: &[ContactRecord],
) -> DbResult<usize> {
    create_table(conn, table, schema)?;

    if schema.is_empty() {
        return Ok(0);
    }

    for record in records {
        insert_row(conn, table, record)?;
    }

    tracing::debug!(rows = records.len(), "Loaded records");
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vcfsql_vcard::Field;

    fn record(pairs: &[(&str, &str)]) -> ContactRecord {
        let mut record = ContactRecord::new();
        for (key, value) in pairs {
            record.insert(Field::new(*key, *value));
        }
        record
    }

    fn sample_batch() -> Vec<ContactRecord> {
        vec![
            record(&[("FN", "John Doe"), ("TEL", "12345")]),
            record(&[("FN", "Jane Doe"), ("EMAIL", "jane@x.com")]),
        ]
    }

    #[test_log::test]
    fn creates_columns_in_schema_order() {
        let conn = Connection::open_in_memory().unwrap();
        let records = sample_batch();
        let schema = Schema::unify(&records);

        create_table(&conn, "contactsvcfsql", &schema).unwrap();

        let mut stmt = conn
            .prepare("SELECT name FROM pragma_table_info('contactsvcfsql') ORDER BY cid")
            .unwrap();
        let columns: Vec<String> = stmt
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(columns, ["EMAIL", "FN", "TEL"]);
    }

    #[test]
    fn recreate_replaces_previous_table() {
        let conn = Connection::open_in_memory().unwrap();
        let records = sample_batch();
        let schema = Schema::unify(&records);

        load_records(&conn, "contactsvcfsql", &schema, &records).unwrap();
        load_records(&conn, "contactsvcfsql", &schema, &records).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM \"contactsvcfsql\"", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(count, 2);
    }

    #[test]
    fn missing_fields_load_as_null() {
        let conn = Connection::open_in_memory().unwrap();
        let records = sample_batch();
        let schema = Schema::unify(&records);

        load_records(&conn, "t", &schema, &records).unwrap();

        let nulls: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM \"t\" WHERE \"EMAIL\" IS NULL",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(nulls, 1);
    }

    #[test]
    fn empty_record_becomes_all_null_row() {
        let conn = Connection::open_in_memory().unwrap();
        let records = vec![record(&[("FN", "John Doe")]), record(&[])];
        let schema = Schema::unify(&records);

        let loaded = load_records(&conn, "t", &schema, &records).unwrap();
        assert_eq!(loaded, 2);

        let nulls: i64 = conn
            .query_row("SELECT COUNT(*) FROM \"t\" WHERE \"FN\" IS NULL", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(nulls, 1);
    }

    #[test_log::test]
    fn empty_schema_creates_nothing() {
        let conn = Connection::open_in_memory().unwrap();
        let schema = Schema::unify(&[]);

        let loaded = load_records(&conn, "t", &schema, &[]).unwrap();
        assert_eq!(loaded, 0);

        let tables: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 0);
    }
}
