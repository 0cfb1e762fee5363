//! Command-line front end: argument parsing, run orchestration, and table
//! rendering.

pub mod cli;
pub mod output;
pub mod run;
