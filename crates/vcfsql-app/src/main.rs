use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};
use vcfsql_app::cli::Cli;
use vcfsql_app::run::{RunContext, deliver, run};
use vcfsql_core::config::load_config;

fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();

    let config = load_config()?;
    tracing::debug!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping info");
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(_) => {
            Cli::command().print_help()?;
            return Ok(());
        }
    };

    let ctx = RunContext {
        input: cli.file,
        save: cli.save,
        condition: cli.cond,
        database_path: config.database.path.into(),
        output_path: config.output.path.into(),
    };

    let rendered = run(&ctx)?;
    deliver(&ctx, &rendered)?;

    Ok(())
}
