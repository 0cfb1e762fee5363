//! Table-name derivation from input filenames.
//!
//! The store table is named after the input file, but table names cannot
//! carry punctuation. Every ASCII punctuation character (path separators
//! and extension dots included) is stripped before the fixed suffix is
//! appended, so the same input file always maps to the same table.

use crate::constants::TABLE_SUFFIX;

/// Derives the store table name for an input file path.
///
/// Examples:
/// - "contacts.vcf" -> "contactsvcfsql"
/// - "data/contacts.vcf" -> "datacontactsvcfsql"
/// - "família.vcf" -> "famíliavcfsql" (non-ASCII letters survive)
#[must_use]
pub fn table_name(filename: &str) -> String {
    let stripped: String = filename
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();

    format!("{stripped}{TABLE_SUFFIX}")
}
