//! Error types for the `xusdc` command-line tool.

use std::path::PathBuf;

use xusdc::error::{ChainError, HexError, UnitsError};
use xusdc_evm::burn::BuildError;

/// Errors that can occur while loading configuration or running a command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The configuration file exists but could not be read.
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`CliConfig`](crate::config::CliConfig).
    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// An amount could not be converted.
    #[error("{0}")]
    Units(#[from] UnitsError),

    /// A hex argument could not be padded.
    #[error("{0}")]
    Hex(#[from] HexError),

    /// A chain could not be resolved or registered.
    #[error("{0}")]
    Chain(#[from] ChainError),

    /// The burn intent could not be built.
    #[error("{0}")]
    Build(#[from] BuildError),

    /// An address argument is not `0x` followed by 40 hex digits.
    #[error("invalid address {0:?}")]
    InvalidAddress(String),

    /// A transfer amount parsed to zero.
    #[error("amount must be greater than zero, got {0:?}")]
    NonPositiveAmount(String),

    /// Any other malformed argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Output could not be serialized.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Output could not be written.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
