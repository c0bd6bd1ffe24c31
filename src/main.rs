mod config;
mod engine;
mod ingest;
mod models;
mod types;

use std::io::{stderr, stdout, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::config::{Cli, Config};
use crate::models::TransactionSummary;

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.log_level.into());

    let config = Config::from_cli(&cli)?;
    let summary = engine::process(&config)
        .with_context(|| format!("Error processing CSV [{}]", config.path.display()))?;

    info!("Summary for [{}]: income {}, expenditure {}", summary.period, summary.total_income, summary.total_expenditure);

    write_summary_to_stdout(&summary)?;

    Ok(())
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the JSON summary, so diagnostics go to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_summary_to_stdout(summary: &TransactionSummary) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    serde_json::to_writer_pretty(&mut output, summary)?;
    writeln!(output)?;

    output.flush()?;

    Ok(())
}
