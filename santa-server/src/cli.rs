use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "santa-server",
    about = "Secret Santa Exchange - pairing service and CLI",
    version = env!("CARGO_PKG_VERSION"),
    author,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short, long, env = "SANTA_PORT", help = "Port to listen on (overrides config)")]
    pub port: Option<u16>,

    #[arg(long, env = "SANTA_STATIC_DIR", help = "Directory holding the upload page")]
    pub static_dir: Option<String>,

    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Start the HTTP server (default if no command specified)")]
    Serve {
        #[arg(short, long, help = "Port to listen on (overrides config)")]
        port: Option<u16>,

        #[arg(long, help = "Fixed seed for every request (reproducible demos and tests)")]
        seed: Option<u64>,
    },

    #[command(about = "Generate assignments from local CSV files")]
    Assign(AssignArgs),

    #[command(subcommand, about = "View and modify configuration")]
    Config(ConfigCommands),
}

#[derive(Args)]
pub struct AssignArgs {
    #[arg(long, help = "Current participant table (Employee_Name, Employee_EmailID)")]
    pub current: PathBuf,

    #[arg(long, help = "Previous round's assignments table")]
    pub previous: Option<PathBuf>,

    #[arg(short, long, help = "Write the table here instead of stdout")]
    pub output: Option<PathBuf>,

    #[arg(long, help = "Seed for reproducible assignments")]
    pub seed: Option<u64>,

    #[arg(
        long,
        value_parser = clap::value_parser!(u32).range(1..=100),
        help = "Engine runs before giving up (defaults to server.assignment_attempts)"
    )]
    pub attempts: Option<u32>,

    #[arg(long, help = "POST the generated table to this URL")]
    pub deliver_to: Option<String>,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    #[command(about = "Show current configuration")]
    Show {
        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Get a specific configuration value")]
    Get {
        #[arg(help = "Configuration key (e.g., 'server.port', 'server.assignment_attempts')")]
        key: String,
    },

    #[command(about = "Set a configuration value")]
    Set {
        #[arg(help = "Configuration key")]
        key: String,

        #[arg(help = "New value")]
        value: String,
    },
}
