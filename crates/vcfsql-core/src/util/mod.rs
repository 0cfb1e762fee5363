//! Small shared utilities.

pub mod naming;
