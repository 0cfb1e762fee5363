//! Core data model for parsed contacts.

mod record;
mod schema;

pub use record::{ContactRecord, Field, RawRecord};
pub use schema::Schema;
