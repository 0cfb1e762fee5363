//! Parsing for exported vCard (VCF) dumps.
//!
//! The exports this crate targets are the messy kind produced by phone
//! backup tools: records separated by `BEGIN:VCARD` / `END:VCARD` markers,
//! with inconsistent property parameters and blank lines sprinkled
//! throughout. Parsing happens in three stages: [`parse::split_records`]
//! carves the raw text into per-record line lists, [`parse::split_content_line`]
//! breaks a single content line into a key and a value, and [`parse::parse`]
//! assembles [`ContactRecord`]s from them. [`Schema`] then unifies the key
//! sets of all records into one sorted column list.
//!
//! ```
//! use vcfsql_vcard::{parse, Schema};
//!
//! let input = "BEGIN:VCARD\nFN:John Doe\nTEL:12345\nEND:VCARD\n\
//!              BEGIN:VCARD\nFN:Jane Doe\nEMAIL:jane@x.com\nEND:VCARD\n";
//!
//! let records = parse::parse(input);
//! assert_eq!(records.len(), 2);
//!
//! let schema = Schema::unify(&records);
//! assert_eq!(schema.columns(), ["EMAIL", "FN", "TEL"]);
//! ```

pub mod core;
pub mod parse;

pub use self::core::{ContactRecord, Field, RawRecord, Schema};
