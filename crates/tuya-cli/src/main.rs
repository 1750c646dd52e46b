//! tuya - CLI tool for the Tuya cloud IoT API.
//!
//! A thin wrapper over the `tuya-core` and `tuya-http` libraries, intended
//! for inspecting devices and sending commands by hand.

mod cli;
mod commands;
mod output;
mod session;

use anyhow::Result;
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json_logs);

    // Ctrl-C cancels the request in flight instead of killing the process
    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::debug!("Interrupt received");
            on_interrupt.cancel();
        }
    });

    match cli.command {
        Commands::Login => commands::login::run(&cli.api, &cancel).await,
        Commands::Logout => commands::logout::run(),
        Commands::Whoami => commands::whoami::run(),
        Commands::Device(cmd) => commands::device::handle(cmd, &cli.api, &cancel).await,
        Commands::User(cmd) => commands::user::handle(cmd, &cli.api, &cancel).await,
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
