//! `xusdc`: build Gateway USDC burn intents from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Typed data for a 10.5 USDC transfer from Base Sepolia to Ethereum Sepolia
//! xusdc burn-intent --amount 10.5 --from base-sepolia --to eth-sepolia \
//!     --depositor 0x... --recipient 0x...
//!
//! # Use a custom config and verbose logs
//! RUST_LOG=debug xusdc --config ./staging.toml chains
//! ```
//!
//! # Environment Variables
//!
//! - `XUSDC_CONFIG`: path to TOML configuration file (default: `xusdc.toml`)
//! - `XUSDC_DECIMALS`: override token decimals
//! - `RUST_LOG`: log level filter (default: `info`)
//!
//! Results are printed to stdout as JSON; logs go to stderr.

use std::io::Write;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use xusdc_cli::commands::{Cli, execute};
use xusdc_cli::error::CliError;

fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        tracing::error!("xusdc failed: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    let config = cli.load_config()?;
    tracing::debug!(
        decimals = config.decimals,
        overrides = config.chains.len(),
        "Loaded configuration"
    );

    let output = execute(&cli.command, &config)?;
    let rendered = serde_json::to_string_pretty(&output)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    Ok(())
}
