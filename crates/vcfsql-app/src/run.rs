//! Run orchestration: one load-then-query pipeline per invocation.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use vcfsql_core::util::naming::table_name;
use vcfsql_db::db::connection::ensure_database;
use vcfsql_db::db::query::{query_all, query_filtered};
use vcfsql_db::db::table::load_records;
use vcfsql_vcard::{Schema, parse};

use crate::output::render;

/// Everything one run needs: the caller's arguments plus the configured
/// database and output locations.
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Input file path as given on the command line. Also the source of
    /// the table name, via [`table_name`].
    pub input: String,
    /// Write the result to `output_path` instead of printing it.
    pub save: bool,
    /// SQL filter clause for the query stage; `None` selects all rows.
    pub condition: Option<String>,
    pub database_path: PathBuf,
    pub output_path: PathBuf,
}

/// ## Summary
/// Executes the pipeline for one run and returns the rendered table text.
///
/// The input file is parsed into contact records, their unified schema is
/// loaded into a freshly recreated database, and the table is queried back
/// in full or filtered by the context's condition. The connection lives
/// only for the duration of this call.
///
/// ## Errors
/// Returns an error if the input cannot be read, the database cannot be
/// recreated, or loading or querying fails.
#[tracing::instrument(skip(ctx), fields(input = %ctx.input))]
pub fn run(ctx: &RunContext) -> Result<String> {
    let text = fs::read_to_string(&ctx.input)
        .with_context(|| format!("Failed to read input file {}", ctx.input))?;

    let records = parse::parse(&text);
    let schema = Schema::unify(&records);
    tracing::info!(
        records = records.len(),
        columns = schema.len(),
        "Parsed input"
    );

    let table = table_name(&ctx.input);

    let conn = ensure_database(&ctx.database_path).with_context(|| {
        format!(
            "Failed to recreate database at {}",
            ctx.database_path.display()
        )
    })?;
    load_records(&conn, &table, &schema, &records)
        .with_context(|| format!("Failed to load records into table {table}"))?;

    let rows = match ctx.condition.as_deref() {
        Some(condition) => query_filtered(&conn, &table, condition)
            .with_context(|| format!("Filtered query failed for table {table}"))?,
        None => query_all(&conn, &table)
            .with_context(|| format!("Query failed for table {table}"))?,
    };

    Ok(render(schema.columns(), &rows))
}

/// ## Summary
/// Sends rendered output where the context directs: standard output, or
/// the configured output file when saving.
///
/// Saved output is written exactly as rendered, without a trailing
/// newline; printed output gets one from the print itself.
///
/// ## Errors
/// Returns an error if the output file cannot be written.
pub fn deliver(ctx: &RunContext, rendered: &str) -> Result<()> {
    if ctx.save {
        fs::write(&ctx.output_path, rendered).with_context(|| {
            format!("Failed to write output file {}", ctx.output_path.display())
        })?;
        tracing::info!(path = %ctx.output_path.display(), "Saved result");
    } else {
        println!("{rendered}");
    }

    Ok(())
}
