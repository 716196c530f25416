//! Command-line tool configuration.
//!
//! Loads configuration from a TOML file with support for environment variable
//! expansion in string values. Variables use `$VAR` or `${VAR}` syntax.
//!
//! # Example Configuration
//!
//! ```toml
//! decimals = 6
//! gateway_wallet = "$GATEWAY_WALLET"
//!
//! [chains.base-sepolia]
//! label = "Base Sepolia (staging)"
//! usdc_address = "${BASE_USDC}"
//! ```
//!
//! # Environment Variables
//!
//! - `XUSDC_CONFIG`: path to the configuration file (default: `xusdc.toml`)
//! - `XUSDC_DECIMALS`: override token decimals
//! - Any variable referenced by `$VAR` in the config file

use std::collections::BTreeMap;
use std::path::Path;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use xusdc::chain::{ChainKey, ChainRegistry};
use xusdc_evm::burn::GatewayContracts;
use xusdc_evm::networks::{USDC_DECIMALS, known_chains};

use crate::error::CliError;

/// Default configuration file name.
pub const DEFAULT_CONFIG_PATH: &str = "xusdc.toml";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Token decimals used for amount conversions (default: `6`).
    #[serde(default = "default_decimals")]
    pub decimals: u8,

    /// Override of the `GatewayWallet` contract.
    #[serde(default)]
    pub gateway_wallet: Option<Address>,

    /// Override of the `GatewayMinter` contract.
    #[serde(default)]
    pub gateway_minter: Option<Address>,

    /// Per-chain overrides of the built-in testnet data.
    #[serde(default)]
    pub chains: BTreeMap<ChainKey, ChainOverride>,
}

/// Fields of a known chain that configuration may replace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainOverride {
    /// Display name.
    #[serde(default)]
    pub label: Option<String>,
    /// Gateway domain id.
    #[serde(default)]
    pub domain_id: Option<u32>,
    /// USDC contract address.
    #[serde(default)]
    pub usdc_address: Option<Address>,
}

const fn default_decimals() -> u8 {
    USDC_DECIMALS
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            decimals: default_decimals(),
            gateway_wallet: None,
            gateway_minter: None,
            chains: BTreeMap::new(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from the path in `XUSDC_CONFIG`, falling back to
    /// `xusdc.toml` in the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, CliError> {
        let path = std::env::var("XUSDC_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_owned());
        Self::load_from(Path::new(&path))
    }

    /// Loads configuration from a specific file path.
    ///
    /// A missing file yields the defaults. `$VAR` references are expanded
    /// before parsing and `XUSDC_DECIMALS` overrides the file value.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, CliError> {
        let content = if path.exists() {
            std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            String::new()
        };

        let mut config = Self::from_toml(&expand_env_vars(&content))?;

        if let Ok(decimals) = std::env::var("XUSDC_DECIMALS")
            && let Ok(decimals) = decimals.parse()
        {
            config.decimals = decimals;
        }

        Ok(config)
    }

    /// Parses configuration from a TOML string without env expansion.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::ConfigParse`] if the document is invalid.
    pub fn from_toml(content: &str) -> Result<Self, CliError> {
        Ok(toml::from_str(content)?)
    }

    /// Builds the chain registry: the known testnet chains with the
    /// configured overrides applied.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Chain`] if the overrides make two chains share a
    /// domain id.
    pub fn registry(&self) -> Result<ChainRegistry, CliError> {
        let chains = known_chains().into_iter().map(|mut chain| {
            if let Some(overrides) = self.chains.get(&chain.key) {
                if let Some(label) = &overrides.label {
                    chain.label.clone_from(label);
                }
                if let Some(domain_id) = overrides.domain_id {
                    chain.domain_id = domain_id;
                }
                if let Some(usdc_address) = overrides.usdc_address {
                    chain.usdc_address = usdc_address;
                }
            }
            chain
        });
        Ok(ChainRegistry::from_chains(chains)?)
    }

    /// Returns the Gateway contracts with the configured overrides applied.
    #[must_use]
    pub fn contracts(&self) -> GatewayContracts {
        let defaults = GatewayContracts::default();
        GatewayContracts {
            wallet: self.gateway_wallet.unwrap_or(defaults.wallet),
            minter: self.gateway_minter.unwrap_or(defaults.minter),
        }
    }
}

/// Expands `$VAR` and `${VAR}` patterns from the process environment.
///
/// Unresolved variables are left as-is.
fn expand_env_vars(input: &str) -> String {
    expand_vars(input, |name| std::env::var(name).ok())
}

fn expand_vars<F>(input: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '$' {
            result.push(ch);
            continue;
        }

        let braced = chars.next_if_eq(&'{').is_some();
        let mut name = String::new();
        let mut closed = false;
        while let Some(&c) = chars.peek() {
            if braced && c == '}' {
                chars.next();
                closed = true;
                break;
            }
            if !braced && !c.is_ascii_alphanumeric() && c != '_' {
                break;
            }
            name.push(c);
            chars.next();
        }

        match lookup(&name).filter(|_| !name.is_empty()) {
            Some(value) => result.push_str(&value),
            None => {
                result.push('$');
                if braced {
                    result.push('{');
                }
                result.push_str(&name);
                if closed {
                    result.push('}');
                }
            }
        }
    }

    result
}
