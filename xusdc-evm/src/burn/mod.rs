//! Gateway burn-intent construction.
//!
//! [`BurnIntentBuilder`] turns caller parameters plus a [`ChainRegistry`]
//! into a [`BurnIntent`] and its EIP-712 [`BurnIntentTypedData`] envelope.
//! Building is a pure data transform: no network access and no signing. Given
//! the same parameters (including the salt) it always produces the same
//! message.

pub mod abi;
pub mod types;

use alloy_primitives::{Address, B256, Bytes, U256};
use xusdc::chain::{ChainKey, ChainRegistry};
use xusdc::error::ChainError;
use xusdc::hex::{pad_address, random_bytes32};

use crate::networks::{GATEWAY_MINTER_ADDRESS, GATEWAY_WALLET_ADDRESS};

pub use types::*;

/// Errors produced while building a burn intent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// The source or destination chain is missing from the registry.
    #[error("{0}")]
    Chain(#[from] ChainError),
}

/// The Gateway contract pair a transfer goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatewayContracts {
    /// `GatewayWallet` on the source chain.
    pub wallet: Address,
    /// `GatewayMinter` on the destination chain.
    pub minter: Address,
}

impl Default for GatewayContracts {
    fn default() -> Self {
        Self {
            wallet: GATEWAY_WALLET_ADDRESS,
            minter: GATEWAY_MINTER_ADDRESS,
        }
    }
}

/// Caller-supplied parameters of a burn intent.
///
/// Addresses are expected to be validated by the caller (see
/// [`xusdc::hex::is_address`]); amounts are in base units and `amount` is
/// expected to be positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BurnIntentParams {
    /// Amount to transfer, in base units.
    pub amount: U256,
    /// Largest fee the depositor authorizes, in base units.
    pub max_fee: U256,
    /// Chain to burn on.
    pub source_chain: ChainKey,
    /// Chain to mint on.
    pub destination_chain: ChainKey,
    /// Owner of the Gateway balance.
    pub source_depositor: Address,
    /// Receiver on the destination chain.
    pub destination_recipient: Address,
    /// Signer authorized for the depositor.
    pub source_signer: Address,
    /// Restricts who may execute the mint. `None` means anyone.
    pub destination_caller: Option<Address>,
    /// Replay-protection salt. `None` draws a fresh random one.
    pub salt: Option<B256>,
    /// Extension data. `None` means empty.
    pub hook_data: Option<Bytes>,
    /// Block height bound. `None` means no limit (`U256::MAX`).
    pub max_block_height: Option<U256>,
}

impl BurnIntentParams {
    /// Creates parameters with a zero fee and every optional field unset.
    #[must_use]
    pub const fn new(
        amount: U256,
        source_chain: ChainKey,
        destination_chain: ChainKey,
        source_depositor: Address,
        destination_recipient: Address,
        source_signer: Address,
    ) -> Self {
        Self {
            amount,
            max_fee: U256::ZERO,
            source_chain,
            destination_chain,
            source_depositor,
            destination_recipient,
            source_signer,
            destination_caller: None,
            salt: None,
            hook_data: None,
            max_block_height: None,
        }
    }

    /// Sets the maximum fee.
    #[must_use]
    pub const fn with_max_fee(mut self, max_fee: U256) -> Self {
        self.max_fee = max_fee;
        self
    }

    /// Restricts the mint to a single caller.
    #[must_use]
    pub const fn with_destination_caller(mut self, caller: Address) -> Self {
        self.destination_caller = Some(caller);
        self
    }

    /// Uses a fixed salt instead of a random one.
    #[must_use]
    pub const fn with_salt(mut self, salt: B256) -> Self {
        self.salt = Some(salt);
        self
    }

    /// Attaches hook data.
    #[must_use]
    pub fn with_hook_data<B: Into<Bytes>>(mut self, hook_data: B) -> Self {
        self.hook_data = Some(hook_data.into());
        self
    }

    /// Bounds the block height at which the intent is valid.
    #[must_use]
    pub const fn with_max_block_height(mut self, height: U256) -> Self {
        self.max_block_height = Some(height);
        self
    }
}

/// Output of a build: the envelope to sign and the bare intent to submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltBurnIntent {
    /// EIP-712 envelope handed to the signer.
    pub typed_data: BurnIntentTypedData,
    /// The burn intent, identical to `typed_data.message`.
    pub burn_intent: BurnIntent,
}

/// Builds Gateway burn intents against an injected chain registry.
///
/// The builder owns its registry and never mutates it, so one instance can
/// serve concurrent callers.
#[derive(Debug, Clone)]
pub struct BurnIntentBuilder {
    registry: ChainRegistry,
    contracts: GatewayContracts,
}

impl BurnIntentBuilder {
    /// Creates a builder using the default Gateway contracts.
    #[must_use]
    pub fn new(registry: ChainRegistry) -> Self {
        Self {
            registry,
            contracts: GatewayContracts::default(),
        }
    }

    /// Overrides the Gateway contract pair.
    #[must_use]
    pub const fn with_contracts(mut self, contracts: GatewayContracts) -> Self {
        self.contracts = contracts;
        self
    }

    /// Returns the registry chains are resolved against.
    #[must_use]
    pub const fn registry(&self) -> &ChainRegistry {
        &self.registry
    }

    /// Returns the Gateway contract pair.
    #[must_use]
    pub const fn contracts(&self) -> GatewayContracts {
        self.contracts
    }

    /// Builds a burn intent and its typed-data envelope.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Chain`] if either chain is missing from the
    /// registry.
    pub fn build(&self, params: BurnIntentParams) -> Result<BuiltBurnIntent, BuildError> {
        build_with_contracts(&self.registry, self.contracts, params)
    }
}

/// Builds a burn intent with the default Gateway contracts.
///
/// Free-function form of [`BurnIntentBuilder::build`].
///
/// # Errors
///
/// Returns [`BuildError::Chain`] if either chain is missing from the registry.
pub fn build_burn_intent_typed_data(
    registry: &ChainRegistry,
    params: BurnIntentParams,
) -> Result<BuiltBurnIntent, BuildError> {
    build_with_contracts(registry, GatewayContracts::default(), params)
}

#[cfg_attr(
    feature = "telemetry",
    tracing::instrument(name = "xusdc.burn_intent.build", skip_all, err)
)]
fn build_with_contracts(
    registry: &ChainRegistry,
    contracts: GatewayContracts,
    params: BurnIntentParams,
) -> Result<BuiltBurnIntent, BuildError> {
    let source = registry.require(params.source_chain)?;
    let destination = registry.require(params.destination_chain)?;

    #[cfg(feature = "telemetry")]
    tracing::debug!(
        source = %source.key,
        source_domain = source.domain_id,
        destination = %destination.key,
        destination_domain = destination.domain_id,
        fixed_salt = params.salt.is_some(),
        "Building burn intent"
    );

    let spec = TransferSpec {
        version: TRANSFER_SPEC_VERSION,
        source_domain: source.domain_id,
        destination_domain: destination.domain_id,
        source_contract: pad_address(contracts.wallet),
        destination_contract: pad_address(contracts.minter),
        source_token: pad_address(source.usdc_address),
        destination_token: pad_address(destination.usdc_address),
        source_depositor: pad_address(params.source_depositor),
        destination_recipient: pad_address(params.destination_recipient),
        source_signer: pad_address(params.source_signer),
        destination_caller: pad_address(params.destination_caller.unwrap_or(Address::ZERO)),
        value: params.amount,
        salt: params.salt.unwrap_or_else(random_bytes32),
        hook_data: params.hook_data.unwrap_or_default(),
    };

    let burn_intent = BurnIntent {
        max_block_height: params.max_block_height.unwrap_or(U256::MAX),
        max_fee: params.max_fee,
        spec,
    };

    Ok(BuiltBurnIntent {
        typed_data: BurnIntentTypedData::new(burn_intent.clone()),
        burn_intent,
    })
}
