//! Gantry CLI
//!
//! Command-line interface for querying pipeline configurations from a gate.

mod commands;
mod config;
mod error;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "gantry")]
#[command(about = "Gantry deployment pipeline CLI", long_about = None)]
struct Cli {
    /// Gate endpoint URL
    #[arg(long, global = true, env = "GANTRY_GATE_ENDPOINT")]
    gate_endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Accept invalid TLS certificates from the gate
    #[arg(long, global = true)]
    insecure: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Logs go to stderr so stdout only ever carries command output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gantry=warn,gantry_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .context("Failed to initialize logging")?;

    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = Config {
        gate_endpoint: cli.gate_endpoint,
        timeout: cli.timeout.map(Duration::from_secs),
        insecure: cli.insecure,
    };

    let status = handle_command(cli.command, &config).await;
    Ok(ExitCode::from(u8::try_from(status).unwrap_or(1)))
}
