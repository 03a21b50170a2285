//! Santa Server - Secret Santa exchange daemon
//!
//! A pure Rust HTTP server and CLI that:
//! - Pairs every participant with a hidden recipient on /api/assignments
//! - Keeps the legacy single-table upload on /upload/employee_list
//! - Serves the upload page as static files
//!
//! Access via: http://localhost:8046

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod api;
mod cli;
mod commands;
mod config_commands;
mod router;
mod server_utils;
mod state;

#[cfg(test)]
mod test_helpers;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so `assign` can stream the table on stdout.
    let filter = EnvFilter::try_new(&cli.log_level)
        .map_err(|e| anyhow::anyhow!("Invalid log filter '{}': {}", cli.log_level, e))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    match cli.command {
        Some(Commands::Serve { port, seed }) => {
            commands::handle_serve(port.or(cli.port), cli.static_dir, seed).await
        }
        Some(Commands::Assign(args)) => commands::handle_assign(args).await,
        Some(Commands::Config(cmd)) => commands::handle_config_command(cmd).await,
        None => commands::handle_serve(cli.port, cli.static_dir, None).await,
    }
}
