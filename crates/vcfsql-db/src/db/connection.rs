use std::fs;
use std::path::Path;

use rusqlite::Connection;

use crate::error::DbResult;

/// ## Summary
/// Opens a fresh database at `path`, replacing any existing one.
///
/// An existing database file is removed before opening, so the connection
/// always starts from an empty database. Loads are destructive by design
/// and never merge into leftovers from a previous run.
///
/// ## Errors
/// Returns an error if the old file cannot be removed or the new database
/// cannot be opened.
#[tracing::instrument(fields(path = %path.display()))]
pub fn ensure_database(path: &Path) -> DbResult<Connection> {
    if path.exists() {
        tracing::debug!("Removing existing database file");
        fs::remove_file(path)?;
    }

    let conn = Connection::open(path)?;
    tracing::debug!("Opened fresh database");

    Ok(conn)
}
