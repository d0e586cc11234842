use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod domain;
mod services;

pub use anyhow::Context;
pub use cli::*;
pub use commands::*;
pub use domain::models::*;
pub use serde::Serialize;
pub use services::aggregate::*;
pub use services::dispatcher::*;
pub use services::output::*;
pub use services::planner::*;
pub use services::regression::*;
pub use services::rules::*;
pub use services::runner::*;
pub use services::sheets::*;

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; stdout carries the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let Some(mode) = Mode::from_name(&cli.mode) else {
        println!("Unknown mode: {}", cli.mode);
        return Ok(());
    };
    tracing::debug!(mode = mode.name(), "starting");

    if handle_tabulate_commands(&cli, mode)? {
        return Ok(());
    }
    handle_trace_commands(&cli, mode)?;
    Ok(())
}
