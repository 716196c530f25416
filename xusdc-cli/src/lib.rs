//! Library half of the `xusdc` command-line tool.
//!
//! - [`config`] - TOML configuration with `$VAR` expansion
//! - [`commands`] - clap command definitions and their execution
//! - [`error`] - [`CliError`](error::CliError)

pub mod commands;
pub mod config;
pub mod error;
