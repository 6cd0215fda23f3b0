//! `namecheap-manager`: minimal Namecheap DNS and Domain Privacy helper.
//!
//! Results go to stdout; errors and logs go to stderr. Any failure exits
//! with status 1.

mod cli;
mod commands;
mod config;
mod output;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use namecheap_provider::NamecheapProvider;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Log to stderr. `RUST_LOG` wins unless `--verbose` is given.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("warn,namecheap_provider=debug,namecheap_manager=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .without_time()
                .with_target(verbose),
        )
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let credentials = match config::load(cli.config.as_deref()) {
        Ok(credentials) => credentials,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!("Loaded configuration: {credentials:?}");

    let provider = match NamecheapProvider::new(credentials) {
        Ok(provider) => provider,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = io::stdout().lock();
    match commands::run(&provider, &cli.command, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
