//! Shared configuration, fixed names, and naming utilities for vcfsql.

pub mod config;
pub mod constants;
pub mod util;
