#![forbid(unsafe_code)]

mod config;
mod engines;
mod gui;
mod host;
mod logo;
mod mirror;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level as TraceLevel};
use tracing_subscriber::FmtSubscriber;

/// Front-end for the askbar AI-search launcher
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Open the settings window instead of the search bar
    #[arg(long)]
    settings: bool,

    /// Override the host socket path
    #[arg(long)]
    socket: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse log level from environment variable
    let log_level = match std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();
    info!(settings = args.settings, "Starting askbar UI");

    if args.settings {
        gui::run_settings(args.socket)?;
    } else {
        gui::run_search(args.socket)?;
    }

    Ok(())
}
