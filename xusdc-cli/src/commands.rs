//! Command-line surface of the `xusdc` binary.
//!
//! Every command is a pure function of its arguments and the loaded
//! [`CliConfig`]; [`execute`] returns the JSON value the binary prints.

use std::path::PathBuf;
use std::str::FromStr;

use alloy_primitives::{Address, B256, Bytes, I256, U256};
use clap::{Args, Parser, Subcommand};
use serde_json::{Value, json};
use xusdc::chain::{ChainKey, map_blockchain_name_to_chain_key};
use xusdc::error::{ChainError, HexError};
use xusdc::hex::{is_address, pad_hex};
use xusdc::units::{format_signed_units, normalize_decimal_input, parse_units};
use xusdc_evm::api::BalancesRequest;
use xusdc_evm::burn::{BurnIntentBuilder, BurnIntentParams};
use xusdc_evm::networks::GATEWAY_TESTNET_DOMAINS;

use crate::config::CliConfig;
use crate::error::CliError;

/// Gateway cross-chain USDC toolkit.
#[derive(Debug, Parser)]
#[command(name = "xusdc", version, about)]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, global = true, env = "XUSDC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Loads the configuration this invocation points at.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_config(&self) -> Result<CliConfig, CliError> {
        match &self.config {
            Some(path) => CliConfig::load_from(path),
            None => CliConfig::load(),
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert a decimal amount into token base units
    ParseUnits {
        /// Decimal amount, e.g. `10.5`
        value: String,
        /// Token decimals (default from config)
        #[arg(long)]
        decimals: Option<u8>,
        /// Accept locale-formatted input such as `1.234,56`
        #[arg(long)]
        normalize: bool,
    },

    /// Convert base units into a decimal amount
    FormatUnits {
        /// Integer amount of base units, may be negative
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Token decimals (default from config)
        #[arg(long)]
        decimals: Option<u8>,
    },

    /// List the configured chains
    Chains,

    /// Map a wallet blockchain name (e.g. `BASE-SEPOLIA`) to a chain key
    ResolveChain {
        /// Blockchain name as reported by the wallet provider
        name: String,
    },

    /// Build a burn intent and print its EIP-712 typed data
    BurnIntent(BurnIntentArgs),

    /// Print the body of a Gateway balances request
    BalancesRequest {
        /// Depositor address
        #[arg(long)]
        depositor: String,
        /// Query every Gateway testnet domain explicitly
        #[arg(long)]
        all_domains: bool,
    },
}

/// Arguments of the `burn-intent` command.
#[derive(Debug, Args)]
pub struct BurnIntentArgs {
    /// Decimal amount to transfer
    #[arg(long)]
    pub amount: String,
    /// Source chain key or wallet blockchain name
    #[arg(long)]
    pub from: String,
    /// Destination chain key or wallet blockchain name
    #[arg(long)]
    pub to: String,
    /// Owner of the Gateway balance
    #[arg(long)]
    pub depositor: String,
    /// Receiver on the destination chain
    #[arg(long)]
    pub recipient: String,
    /// Signer for the depositor (default: the depositor)
    #[arg(long)]
    pub signer: Option<String>,
    /// Only this address may execute the mint
    #[arg(long)]
    pub caller: Option<String>,
    /// Maximum fee as a decimal amount
    #[arg(long)]
    pub max_fee: Option<String>,
    /// Fixed salt (hex, up to 32 bytes) instead of a random one
    #[arg(long)]
    pub salt: Option<String>,
    /// Hook data (hex)
    #[arg(long)]
    pub hook_data: Option<String>,
    /// Highest block at which the intent is valid
    #[arg(long)]
    pub max_block_height: Option<String>,
    /// Print only the EIP-712 signing hash
    #[arg(long)]
    pub hash: bool,
}

/// Runs a command against the given configuration.
///
/// # Errors
///
/// Returns the first validation, registry or serialization error hit.
pub fn execute(command: &Command, config: &CliConfig) -> Result<Value, CliError> {
    match command {
        Command::ParseUnits {
            value,
            decimals,
            normalize,
        } => {
            let decimals = decimals.unwrap_or(config.decimals);
            let input = if *normalize {
                normalize_decimal_input(value)
            } else {
                value.clone()
            };
            let units = parse_units(&input, decimals)?;
            Ok(json!({ "input": input, "decimals": decimals, "value": units.to_string() }))
        }
        Command::FormatUnits { value, decimals } => {
            let decimals = decimals.unwrap_or(config.decimals);
            let units = I256::from_dec_str(value.trim())
                .map_err(|_| CliError::InvalidArgument(format!("not an integer: {value:?}")))?;
            Ok(json!({ "decimals": decimals, "value": format_signed_units(units, decimals) }))
        }
        Command::Chains => {
            let registry = config.registry()?;
            let chains: Vec<_> = registry.iter().collect();
            Ok(serde_json::to_value(chains)?)
        }
        Command::ResolveChain { name } => {
            let chain = map_blockchain_name_to_chain_key(name);
            Ok(json!({ "name": name, "chain": chain }))
        }
        Command::BurnIntent(args) => burn_intent(args, config),
        Command::BalancesRequest {
            depositor,
            all_domains,
        } => {
            let depositor = parse_address(depositor)?;
            let domains: Vec<u32> = if *all_domains {
                GATEWAY_TESTNET_DOMAINS.iter().map(|(id, _)| *id).collect()
            } else {
                Vec::new()
            };
            Ok(serde_json::to_value(BalancesRequest::usdc(depositor, &domains))?)
        }
    }
}

fn burn_intent(args: &BurnIntentArgs, config: &CliConfig) -> Result<Value, CliError> {
    let amount = parse_units(&args.amount, config.decimals)?;
    if amount.is_zero() {
        return Err(CliError::NonPositiveAmount(args.amount.clone()));
    }

    let depositor = parse_address(&args.depositor)?;
    let signer = args
        .signer
        .as_deref()
        .map_or(Ok(depositor), parse_address)?;

    let mut params = BurnIntentParams::new(
        amount,
        parse_chain(&args.from)?,
        parse_chain(&args.to)?,
        depositor,
        parse_address(&args.recipient)?,
        signer,
    );
    if let Some(caller) = &args.caller {
        params = params.with_destination_caller(parse_address(caller)?);
    }
    if let Some(max_fee) = &args.max_fee {
        params = params.with_max_fee(parse_units(max_fee, config.decimals)?);
    }
    if let Some(salt) = &args.salt {
        params = params.with_salt(parse_salt(salt)?);
    }
    if let Some(hook_data) = &args.hook_data {
        let bytes = Bytes::from_str(hook_data).map_err(|_| HexError::InvalidHex(hook_data.clone()))?;
        params = params.with_hook_data(bytes);
    }
    if let Some(height) = &args.max_block_height {
        let height = U256::from_str_radix(height.trim(), 10)
            .map_err(|_| CliError::InvalidArgument(format!("invalid block height {height:?}")))?;
        params = params.with_max_block_height(height);
    }

    let builder = BurnIntentBuilder::new(config.registry()?).with_contracts(config.contracts());
    let built = builder.build(params)?;
    tracing::info!(
        source = built.burn_intent.spec.source_domain,
        destination = built.burn_intent.spec.destination_domain,
        value = %built.burn_intent.spec.value,
        "Built burn intent"
    );

    if args.hash {
        Ok(json!({ "signingHash": built.typed_data.signing_hash() }))
    } else {
        Ok(serde_json::to_value(&built.typed_data)?)
    }
}

/// Accepts either a chain key (`base-sepolia`) or a wallet blockchain name
/// (`BASE-SEPOLIA`).
fn parse_chain(value: &str) -> Result<ChainKey, CliError> {
    ChainKey::from_str(value)
        .ok()
        .or_else(|| map_blockchain_name_to_chain_key(value))
        .ok_or_else(|| ChainError::UnknownChainKey(value.to_owned()).into())
}

fn parse_address(value: &str) -> Result<Address, CliError> {
    if !is_address(value) {
        return Err(CliError::InvalidAddress(value.to_owned()));
    }
    Address::from_str(value).map_err(|_| CliError::InvalidAddress(value.to_owned()))
}

fn parse_salt(value: &str) -> Result<B256, CliError> {
    let padded = pad_hex(value, 32)?;
    B256::from_str(&padded).map_err(|_| HexError::InvalidHex(value.to_owned()).into())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    const DEPOSITOR: &str = "0x1111111111111111111111111111111111111111";
    const RECIPIENT: &str = "0x2222222222222222222222222222222222222222";

    fn run(args: &[&str]) -> Result<Value, CliError> {
        let cli = Cli::try_parse_from(std::iter::once("xusdc").chain(args.iter().copied()))
            .expect("arguments parse");
        execute(&cli.command, &CliConfig::default())
    }

    /// Base `burn-intent` invocation; `extra` pairs replace or extend it.
    fn run_burn(extra: &[(&str, &str)], flags: &[&str]) -> Result<Value, CliError> {
        let mut options = vec![
            ("--amount", "10.5"),
            ("--from", "base-sepolia"),
            ("--to", "ETH-SEPOLIA"),
            ("--depositor", DEPOSITOR),
            ("--recipient", RECIPIENT),
            ("--salt", "0x01"),
        ];
        for &(flag, value) in extra {
            match options.iter_mut().find(|(name, _)| *name == flag) {
                Some(option) => option.1 = value,
                None => options.push((flag, value)),
            }
        }

        let mut args = vec!["burn-intent"];
        for (flag, value) in options {
            args.push(flag);
            args.push(value);
        }
        args.extend_from_slice(flags);
        run(&args)
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_units_command() {
        let output = run(&["parse-units", "10.5"]).unwrap();
        assert_eq!(output["value"], json!("10500000"));
        assert_eq!(output["decimals"], json!(6));

        let output = run(&["parse-units", "1.234,5", "--normalize", "--decimals", "2"]).unwrap();
        assert_eq!(output["input"], json!("1234.5"));
        assert_eq!(output["value"], json!("123450"));

        assert!(matches!(
            run(&["parse-units", "1.2345678"]),
            Err(CliError::Units(_))
        ));
    }

    #[test]
    fn test_format_units_command() {
        let output = run(&["format-units", "10500000"]).unwrap();
        assert_eq!(output["value"], json!("10.5"));

        let output = run(&["format-units", "-1500", "--decimals", "3"]).unwrap();
        assert_eq!(output["value"], json!("-1.5"));

        assert!(matches!(
            run(&["format-units", "1.5"]),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_chains_command() {
        let output = run(&["chains"]).unwrap();
        let chains = output.as_array().unwrap();
        assert_eq!(chains.len(), 3);
        assert!(chains.iter().any(|c| c["key"] == json!("arc-testnet") && c["domainId"] == json!(26)));
    }

    #[test]
    fn test_resolve_chain_command() {
        let output = run(&["resolve-chain", "base-sepolia"]).unwrap();
        assert_eq!(output["chain"], json!("base-sepolia"));

        let output = run(&["resolve-chain", "MATIC-AMOY"]).unwrap();
        assert_eq!(output["chain"], Value::Null);
    }

    #[test]
    fn test_burn_intent_command() {
        let output = run_burn(&[], &[]).unwrap();
        assert_eq!(output["primaryType"], json!("BurnIntent"));
        let spec = &output["message"]["spec"];
        assert_eq!(spec["sourceDomain"], json!(6));
        assert_eq!(spec["destinationDomain"], json!(0));
        assert_eq!(spec["value"], json!("10500000"));
        assert_eq!(
            spec["salt"],
            json!("0x0000000000000000000000000000000000000000000000000000000000000001")
        );
        assert_eq!(spec["sourceSigner"], spec["sourceDepositor"]);
    }

    #[test]
    fn test_burn_intent_is_deterministic_with_salt() {
        assert_eq!(run_burn(&[], &[]).unwrap(), run_burn(&[], &[]).unwrap());
    }

    #[test]
    fn test_burn_intent_hash_output() {
        let output = run_burn(&[], &["--hash"]).unwrap();
        let hash = output["signingHash"].as_str().unwrap();
        assert_eq!(hash.len(), 66);
        assert!(hash.starts_with("0x"));
        assert_eq!(run_burn(&[], &["--hash"]).unwrap(), output);
    }

    #[test]
    fn test_burn_intent_optional_arguments() {
        let output = run_burn(
            &[
                ("--max-fee", "2.01"),
                ("--hook-data", "0xdeadbeef"),
                ("--max-block-height", "1000"),
            ],
            &[],
        )
        .unwrap();
        let message = &output["message"];
        assert_eq!(message["maxFee"], json!("2010000"));
        assert_eq!(message["maxBlockHeight"], json!("1000"));
        assert_eq!(message["spec"]["hookData"], json!("0xdeadbeef"));
    }

    #[test]
    fn test_burn_intent_rejects_bad_input() {
        assert!(matches!(
            run_burn(&[("--amount", "0")], &[]),
            Err(CliError::NonPositiveAmount(_))
        ));
        assert!(matches!(
            run_burn(&[("--caller", "0x1234")], &[]),
            Err(CliError::InvalidAddress(_))
        ));
        assert!(matches!(
            run_burn(&[("--salt", "0xzz")], &[]),
            Err(CliError::Hex(HexError::InvalidHex(_)))
        ));
        assert!(matches!(
            run_burn(&[("--from", "solana-devnet")], &[]),
            Err(CliError::Chain(ChainError::UnknownChainKey(_)))
        ));
    }

    #[test]
    fn test_burn_intent_rejects_oversized_salt() {
        let salt = format!("0x{}", "ab".repeat(33));
        assert!(matches!(
            run_burn(&[("--salt", salt.as_str())], &[]),
            Err(CliError::Hex(HexError::ValueTooLarge { size: 32, actual: 33 }))
        ));
    }

    #[test]
    fn test_balances_request_command() {
        let output = run(&["balances-request", "--depositor", DEPOSITOR]).unwrap();
        assert_eq!(output["token"], json!("USDC"));
        assert_eq!(output["sources"].as_array().unwrap().len(), 1);

        let output = run(&["balances-request", "--depositor", DEPOSITOR, "--all-domains"]).unwrap();
        assert_eq!(
            output["sources"].as_array().unwrap().len(),
            GATEWAY_TESTNET_DOMAINS.len()
        );

        assert!(matches!(
            run(&["balances-request", "--depositor", "0xnope"]),
            Err(CliError::InvalidAddress(_))
        ));
    }
}
