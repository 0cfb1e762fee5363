//! Command-line definition.

use clap::Parser;

const EPILOG: &str = "vCard to SQL database loader:\n    \
    Use this program to convert a Virtual Contact File (vcf/vCard)\n    \
    to an SQL database and pretty print it.";

/// Loads a vCard export into a fresh SQL table and prints the result.
#[derive(Debug, Parser)]
#[command(name = "vcfsql")]
#[command(about = "Convert a Virtual Contact File (vcf/vCard) to an SQL database")]
#[command(after_help = EPILOG)]
pub struct Cli {
    /// Input vCard file
    #[arg(long)]
    pub file: String,

    /// Write the result to the output file instead of printing it
    #[arg(long)]
    pub save: bool,

    /// Filter condition applied to the loaded table, in SQL syntax
    #[arg(long)]
    pub cond: Option<String>,
}
