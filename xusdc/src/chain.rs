//! Supported chains and the Gateway domain registry.
//!
//! Gateway identifies chains by its own *domain id*, which is unrelated to the
//! EIP-155 chain id. This module provides:
//!
//! - [`ChainKey`] - The closed set of chains this crate can bridge between
//! - [`ChainDescriptor`] - Domain id and USDC deployment for one chain
//! - [`ChainRegistry`] - An immutable lookup table of descriptors
//! - [`map_blockchain_name_to_chain_key`] - Wallet API name normalization
//!
//! Concrete testnet data lives in `xusdc-evm` (`xusdc_evm::networks`).
//! Applications build a [`ChainRegistry`] from it at startup and pass it to
//! whatever needs chain lookups; there is no process-wide registry.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::error::ChainError;

/// A chain supported for Gateway transfers.
///
/// # Serialization
///
/// Serializes to/from its kebab-case key: `"arc-testnet"`, `"base-sepolia"`,
/// `"eth-sepolia"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChainKey {
    /// Arc Testnet, Gateway's settlement chain.
    ArcTestnet,
    /// Base Sepolia.
    BaseSepolia,
    /// Ethereum Sepolia.
    EthSepolia,
}

impl ChainKey {
    /// Every supported chain key.
    pub const ALL: [Self; 3] = [Self::ArcTestnet, Self::BaseSepolia, Self::EthSepolia];

    /// Returns the kebab-case key string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ArcTestnet => "arc-testnet",
            Self::BaseSepolia => "base-sepolia",
            Self::EthSepolia => "eth-sepolia",
        }
    }
}

impl fmt::Display for ChainKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChainKey {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ChainError::UnknownChainKey(s.to_owned()))
    }
}

/// Static description of one chain as seen by the Gateway protocol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainDescriptor {
    /// Registry key.
    pub key: ChainKey,
    /// Human-readable display name (e.g., `"Base Sepolia"`).
    pub label: String,
    /// Gateway domain id (not the EIP-155 chain id).
    pub domain_id: u32,
    /// USDC token contract on this chain.
    pub usdc_address: Address,
}

impl ChainDescriptor {
    /// Creates a new chain descriptor.
    pub fn new<L: Into<String>>(key: ChainKey, label: L, domain_id: u32, usdc_address: Address) -> Self {
        Self {
            key,
            label: label.into(),
            domain_id,
            usdc_address,
        }
    }
}

/// Immutable registry of chain descriptors keyed by [`ChainKey`].
///
/// Every key maps to at most one descriptor and domain ids are unique across
/// the registry. Both invariants are checked when the registry is built; once
/// built it offers read-only access only, so it can be shared freely across
/// threads.
///
/// # Example
///
/// ```rust
/// use alloy_primitives::Address;
/// use xusdc::chain::{ChainDescriptor, ChainKey, ChainRegistry};
///
/// let registry = ChainRegistry::from_chains([
///     ChainDescriptor::new(ChainKey::EthSepolia, "Ethereum Sepolia", 0, Address::ZERO),
/// ])
/// .unwrap();
///
/// assert_eq!(registry.require(ChainKey::EthSepolia).unwrap().domain_id, 0);
/// assert!(registry.get(ChainKey::BaseSepolia).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainRegistry {
    chains: BTreeMap<ChainKey, ChainDescriptor>,
}

impl ChainRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry from a list of descriptors.
    ///
    /// A later descriptor for the same key replaces an earlier one.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::DuplicateDomain`] if two different chains share
    /// a domain id.
    pub fn from_chains<I>(chains: I) -> Result<Self, ChainError>
    where
        I: IntoIterator<Item = ChainDescriptor>,
    {
        chains
            .into_iter()
            .try_fold(Self::new(), |registry, chain| registry.with_chain(chain))
    }

    /// Builder-style method: adds (or replaces) a descriptor and returns `self`.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::DuplicateDomain`] if another chain already uses
    /// the descriptor's domain id.
    pub fn with_chain(mut self, chain: ChainDescriptor) -> Result<Self, ChainError> {
        let clash = self
            .chains
            .values()
            .any(|other| other.key != chain.key && other.domain_id == chain.domain_id);
        if clash {
            return Err(ChainError::DuplicateDomain(chain.domain_id));
        }

        #[cfg(feature = "telemetry")]
        tracing::debug!(
            chain = %chain.key,
            domain = chain.domain_id,
            usdc = %chain.usdc_address,
            "Registered Gateway chain"
        );

        self.chains.insert(chain.key, chain);
        Ok(self)
    }

    /// Looks up a descriptor by key.
    #[must_use]
    pub fn get(&self, key: ChainKey) -> Option<&ChainDescriptor> {
        self.chains.get(&key)
    }

    /// Looks up a descriptor by key, failing if the registry lacks it.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::UnsupportedChain`] if no descriptor is registered.
    pub fn require(&self, key: ChainKey) -> Result<&ChainDescriptor, ChainError> {
        self.get(key).ok_or(ChainError::UnsupportedChain(key))
    }

    /// Looks up a descriptor by Gateway domain id.
    #[must_use]
    pub fn by_domain(&self, domain_id: u32) -> Option<&ChainDescriptor> {
        self.chains.values().find(|chain| chain.domain_id == domain_id)
    }

    /// Iterates over the registered descriptors in key order.
    pub fn iter(&self) -> impl Iterator<Item = &ChainDescriptor> {
        self.chains.values()
    }

    /// Returns the number of registered chains.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chains.len()
    }

    /// Returns `true` if no chains are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}

/// Maps a free-form blockchain name, as reported by wallet APIs (e.g.,
/// `"BASE-SEPOLIA"`, `"ETH-SEPOLIA"`, `"ARC-TESTNET"`), to a [`ChainKey`].
///
/// Matching is a case-insensitive substring heuristic, checked in order:
/// any name containing `ARC` maps to Arc Testnet; `BASE` together with
/// `SEPOLIA` maps to Base Sepolia; `ETH` together with `SEPOLIA` maps to
/// Ethereum Sepolia. Anything else yields `None`, meaning the chain cannot be
/// bridged.
#[must_use]
pub fn map_blockchain_name_to_chain_key(name: &str) -> Option<ChainKey> {
    let normalized = name.trim().to_uppercase();
    if normalized.contains("ARC") {
        return Some(ChainKey::ArcTestnet);
    }
    if normalized.contains("SEPOLIA") {
        if normalized.contains("BASE") {
            return Some(ChainKey::BaseSepolia);
        }
        if normalized.contains("ETH") {
            return Some(ChainKey::EthSepolia);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    fn descriptor(key: ChainKey, domain_id: u32) -> ChainDescriptor {
        ChainDescriptor::new(key, key.as_str(), domain_id, Address::ZERO)
    }

    #[test]
    fn test_chain_key_serialize() {
        let serialized = serde_json::to_string(&ChainKey::BaseSepolia).unwrap();
        assert_eq!(serialized, "\"base-sepolia\"");
    }

    #[test]
    fn test_chain_key_deserialize() {
        let key: ChainKey = serde_json::from_str("\"arc-testnet\"").unwrap();
        assert_eq!(key, ChainKey::ArcTestnet);
        assert!(serde_json::from_str::<ChainKey>("\"solana-devnet\"").is_err());
    }

    #[test]
    fn test_chain_key_from_str_roundtrip() {
        for key in ChainKey::ALL {
            assert_eq!(key.to_string().parse::<ChainKey>().unwrap(), key);
        }
        assert_eq!(
            "polygon-amoy".parse::<ChainKey>(),
            Err(ChainError::UnknownChainKey("polygon-amoy".to_owned()))
        );
    }

    #[test]
    fn test_map_blockchain_name_to_chain_key() {
        assert_eq!(
            map_blockchain_name_to_chain_key("BASE-SEPOLIA"),
            Some(ChainKey::BaseSepolia)
        );
        assert_eq!(
            map_blockchain_name_to_chain_key("ETH-SEPOLIA"),
            Some(ChainKey::EthSepolia)
        );
        assert_eq!(
            map_blockchain_name_to_chain_key(" arc-testnet "),
            Some(ChainKey::ArcTestnet)
        );
        assert_eq!(map_blockchain_name_to_chain_key("SOLANA-DEVNET"), None);
        assert_eq!(map_blockchain_name_to_chain_key("BASE"), None);
        assert_eq!(map_blockchain_name_to_chain_key("ETH"), None);
        assert_eq!(map_blockchain_name_to_chain_key(""), None);
    }

    #[test]
    fn test_map_blockchain_name_arc_takes_precedence() {
        // "ARB-SEPOLIA" has no ARC; "ARC-BASE-SEPOLIA" hits the first rule.
        assert_eq!(map_blockchain_name_to_chain_key("ARB-SEPOLIA"), None);
        assert_eq!(
            map_blockchain_name_to_chain_key("ARC-BASE-SEPOLIA"),
            Some(ChainKey::ArcTestnet)
        );
    }

    #[test]
    fn test_registry_lookup() {
        let registry = ChainRegistry::from_chains([
            descriptor(ChainKey::BaseSepolia, 6),
            descriptor(ChainKey::EthSepolia, 0),
        ])
        .unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(ChainKey::BaseSepolia).unwrap().domain_id, 6);
        assert_eq!(registry.by_domain(0).unwrap().key, ChainKey::EthSepolia);
        assert!(registry.by_domain(26).is_none());
        assert_eq!(
            registry.require(ChainKey::ArcTestnet),
            Err(ChainError::UnsupportedChain(ChainKey::ArcTestnet))
        );
    }

    #[test]
    fn test_registry_rejects_duplicate_domain() {
        let result = ChainRegistry::from_chains([
            descriptor(ChainKey::BaseSepolia, 6),
            descriptor(ChainKey::EthSepolia, 6),
        ]);
        assert_eq!(result, Err(ChainError::DuplicateDomain(6)));
    }

    #[test]
    fn test_registry_replaces_same_key() {
        let replacement = ChainDescriptor::new(
            ChainKey::BaseSepolia,
            "Base (custom)",
            6,
            address!("0x036CbD53842c5426634e7929541eC2318f3dCF7e"),
        );
        let registry = ChainRegistry::from_chains([descriptor(ChainKey::BaseSepolia, 6)])
            .and_then(|r| r.with_chain(replacement.clone()))
            .unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(ChainKey::BaseSepolia), Some(&replacement));
    }

    #[test]
    fn test_registry_iterates_in_key_order() {
        let registry = ChainRegistry::from_chains([
            descriptor(ChainKey::EthSepolia, 0),
            descriptor(ChainKey::ArcTestnet, 26),
        ])
        .unwrap();
        let keys: Vec<_> = registry.iter().map(|c| c.key).collect();
        assert_eq!(keys, vec![ChainKey::ArcTestnet, ChainKey::EthSepolia]);
    }

    #[test]
    fn test_empty_registry() {
        let registry = ChainRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get(ChainKey::EthSepolia).is_none());
    }
}
