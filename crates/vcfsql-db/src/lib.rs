//! SQLite storage for parsed contact batches.
//!
//! The table layout is derived at runtime from the batch being loaded:
//! one text column per schema entry, one row per contact. Loads are
//! destructive, dropping and recreating both the database file and the
//! table, so a run always reflects exactly the input it was given.

pub mod db;
pub mod error;

pub use error::{DbError, DbResult};
