//! checkers: command-line front-end for a Checkers server.
//!
//! Reads a check run payload from stdin, sends it through `CheckersClient`
//! and prints the server's response body on success.

mod args;
mod payload;
mod status;

use std::env;
use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use checkers_core::{CheckersClient, UreqTransport};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::args::{Cli, Command};
use crate::payload::read_payload;
use crate::status::ensure_success;

/// Crates whose events follow `-v`. Dependencies stay at WARN: ureq's TRACE
/// output dumps request headers, signature included.
const LOGGED_CRATES: [&str; 2] = ["checkers", "checkers_core"];

fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn filter_directives(verbosity: u8) -> String {
    let level = level_for(verbosity).as_str().to_ascii_lowercase();
    let mut directives = vec!["warn".to_string()];
    directives.extend(LOGGED_CRATES.iter().map(|krate| format!("{krate}={level}")));
    directives.join(",")
}

fn init_tracing(verbose: u8) -> Result<()> {
    let verbosity = env::var("CHECKERS_VERBOSITY")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(verbose);

    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true);
    let filter = EnvFilter::try_new(filter_directives(verbosity)).context("Invalid log filter")?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .ok();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let config = cli.client_config()?;
    let transport = match cli.timeout {
        0 => UreqTransport::new(),
        secs => UreqTransport::with_timeout(Duration::from_secs(secs)),
    };
    let client = CheckersClient::new(config, transport);

    let response = match cli.command {
        Command::Create(args) => {
            let payload = read_payload(io::stdin().lock())?;
            client
                .create_check_run(&args.into_request(payload))
                .context("Failed to create check run")?
        }
        Command::Update(args) => {
            let payload = read_payload(io::stdin().lock())?;
            client
                .update_check_run(&args.into_request(payload))
                .context("Failed to update check run")?
        }
    };

    let response = ensure_success(response)?;
    println!("{}", serde_json::to_string_pretty(&response.body)?);
    Ok(())
}
