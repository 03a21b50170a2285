use anyhow::{Context, Result};
use chrono::Datelike;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Table};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use santa_core::modules::{config as core_config, delivery};
use santa_core::{run_exchange, ExchangeOptions, ExchangeOutcome};

use crate::cli::{AssignArgs, ConfigCommands};
use crate::router::build_router;
use crate::server_utils::{create_listener, shutdown_signal};
use crate::state::AppState;

mod config_commands_impl {
    pub use crate::config_commands::*;
}

pub async fn handle_serve(
    port: Option<u16>,
    static_dir: Option<String>,
    seed: Option<u64>,
) -> Result<()> {
    let mut config = core_config::load_config()
        .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?
        .server;
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(static_dir) = static_dir {
        config.static_dir = static_dir;
    }

    info!("🎅 Secret Santa server starting on port {}...", config.port);
    info!(
        attempts = config.assignment_attempts,
        strict_uploads = config.strict_uploads,
        max_upload_bytes = config.max_upload_bytes,
        "Exchange settings"
    );

    let listener = create_listener(&config).await?;
    let port = config.port;
    let state = match seed {
        Some(seed) => {
            warn!(seed, "Serving with a fixed seed; pairings are reproducible");
            AppState::with_seed(config, seed)
        }
        None => AppState::new(config),
    };
    let app = build_router(state);

    info!("📊 WebUI available at http://localhost:{}/", port);
    info!("🔌 API available at http://localhost:{}/api/", port);

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    info!("👋 Server stopped");
    Ok(())
}

pub async fn handle_assign(args: AssignArgs) -> Result<()> {
    let current = read_table(&args.current)?;
    let previous = args.previous.as_deref().map(read_table).transpose()?;

    let attempts = match args.attempts {
        Some(attempts) => attempts,
        None => core_config::load_config()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?
            .server
            .assignment_attempts,
    };
    let options = ExchangeOptions { attempts, seed: args.seed };

    let outcome = run_exchange(&current, previous.as_deref(), &options)?;

    match args.output.as_deref().map(output_path) {
        Some(path) => {
            std::fs::write(&path, &outcome.csv)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("{} Assignments written to {}", "✓".green(), path.display());
        }
        None => {
            use std::io::Write;
            std::io::stdout().write_all(&outcome.csv).context("Failed to write to stdout")?;
        }
    }

    eprintln!("{}", summary_table(&outcome));

    if let Some(url) = &args.deliver_to {
        let client = reqwest::Client::new();
        let receipt = delivery::deliver_csv(&client, url, outcome.csv).await?;
        eprintln!("{} Delivered to {} (HTTP {})", "✓".green(), url, receipt.status);
    }

    Ok(())
}

pub async fn handle_config_command(cmd: ConfigCommands) -> Result<()> {
    match cmd {
        ConfigCommands::Show { json } => config_commands_impl::show_config(json),
        ConfigCommands::Get { key } => config_commands_impl::get_config_value(&key),
        ConfigCommands::Set { key, value } => config_commands_impl::set_config_value(&key, &value),
    }
}

/// A directory target gets the yearly result file name the upload page uses.
fn output_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(result_file_name(chrono::Local::now().year()))
    } else {
        path.to_path_buf()
    }
}

fn result_file_name(year: i32) -> String {
    format!("Secret_Santa_Result_{}.csv", year)
}

fn read_table(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Counts only; who gives to whom stays in the table.
fn summary_table(outcome: &ExchangeOutcome) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Participants", "Prior exclusions", "Attempts"]);
    table.add_row(vec![
        outcome.pairing.len().to_string(),
        outcome.prior_constraints.to_string(),
        outcome.attempts_used.to_string(),
    ]);
    table
}
