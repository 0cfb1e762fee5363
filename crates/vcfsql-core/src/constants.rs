/// Fixed store names shared across crates.
///
/// The contact database keeps one constant name per run; only the table
/// name varies with the input file.
pub const DB_NAME: &str = "CONTACTS";
pub const DB_FILE: &str = const_str::concat!(DB_NAME, ".db");

/// Suffix appended to the punctuation-stripped input filename to form the
/// table name.
pub const TABLE_SUFFIX: &str = "sql";

/// Default output file for `--save` runs.
pub const OUT_FILE: &str = "out.txt";
