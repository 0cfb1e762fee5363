//! Three-stage parsing pipeline: split, lex, assemble.

mod lexer;
mod parser;
mod splitter;

pub use lexer::{ValueRule, normalize_key, split_content_line};
pub use parser::{parse, parse_record, parse_with_rule};
pub use splitter::{BEGIN_MARKER, END_MARKER, split_records};
