//! Known Gateway testnet configuration.
//!
//! Gateway contract addresses, USDC deployments and Gateway domain ids for
//! the chains in [`ChainKey`], plus the display labels of every Gateway
//! testnet domain.

use alloy_primitives::{Address, address};
use xusdc::chain::{ChainDescriptor, ChainKey, ChainRegistry};

/// `GatewayWallet` contract (burn side), same address on every testnet.
pub const GATEWAY_WALLET_ADDRESS: Address = address!("0x0077777d7EBA4688BDeF3E311b846F25870A19B9");

/// `GatewayMinter` contract (mint side), same address on every testnet.
pub const GATEWAY_MINTER_ADDRESS: Address = address!("0x0022222ABE238Cc2C7Bb1f21003F0a260052475B");

/// Arc Testnet Gateway domain id.
pub const ARC_TESTNET_DOMAIN: u32 = 26;

/// Base Sepolia Gateway domain id.
pub const BASE_SEPOLIA_DOMAIN: u32 = 6;

/// Ethereum Sepolia Gateway domain id.
pub const ETH_SEPOLIA_DOMAIN: u32 = 0;

/// USDC contract address on Arc Testnet.
pub const USDC_ARC_TESTNET: Address = address!("0x3600000000000000000000000000000000000000");

/// USDC contract address on Base Sepolia.
pub const USDC_BASE_SEPOLIA: Address = address!("0x036CbD53842c5426634e7929541eC2318f3dCF7e");

/// USDC contract address on Ethereum Sepolia.
pub const USDC_ETH_SEPOLIA: Address = address!("0x1c7D4B196Cb0C7B01d743Fbc6116a902379C7238");

/// Token decimals for USDC.
pub const USDC_DECIMALS: u8 = 6;

/// Display labels for every Gateway testnet domain, including domains this
/// crate cannot build intents for.
pub const GATEWAY_TESTNET_DOMAINS: &[(u32, &str)] = &[
    (ARC_TESTNET_DOMAIN, "Arc Testnet"),
    (1, "Avalanche Fuji"),
    (BASE_SEPOLIA_DOMAIN, "Base Sepolia"),
    (ETH_SEPOLIA_DOMAIN, "Ethereum Sepolia"),
    (19, "HyperEVM Testnet"),
    (16, "Sei Atlantic"),
    (13, "Sonic Testnet"),
    (14, "World Chain Sepolia"),
];

/// Returns the display label of a Gateway testnet domain.
#[must_use]
pub fn domain_label(domain_id: u32) -> Option<&'static str> {
    GATEWAY_TESTNET_DOMAINS
        .iter()
        .find(|(id, _)| *id == domain_id)
        .map(|(_, label)| *label)
}

/// Returns the descriptors of every chain in [`ChainKey`].
#[must_use]
pub fn known_chains() -> Vec<ChainDescriptor> {
    vec![
        ChainDescriptor::new(
            ChainKey::ArcTestnet,
            "Arc Testnet",
            ARC_TESTNET_DOMAIN,
            USDC_ARC_TESTNET,
        ),
        ChainDescriptor::new(
            ChainKey::BaseSepolia,
            "Base Sepolia",
            BASE_SEPOLIA_DOMAIN,
            USDC_BASE_SEPOLIA,
        ),
        ChainDescriptor::new(
            ChainKey::EthSepolia,
            "Ethereum Sepolia",
            ETH_SEPOLIA_DOMAIN,
            USDC_ETH_SEPOLIA,
        ),
    ]
}

/// Builds a registry holding every known testnet chain.
///
/// # Panics
///
/// Panics if [`known_chains`] ever lists two chains with the same domain id.
#[must_use]
pub fn testnet_registry() -> ChainRegistry {
    ChainRegistry::from_chains(known_chains()).expect("known chains have unique domain ids")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_testnet_registry_covers_every_key() {
        let registry = testnet_registry();
        for key in ChainKey::ALL {
            assert!(registry.get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn test_known_domains() {
        let registry = testnet_registry();
        assert_eq!(registry.get(ChainKey::ArcTestnet).unwrap().domain_id, 26);
        assert_eq!(registry.get(ChainKey::BaseSepolia).unwrap().domain_id, 6);
        assert_eq!(registry.get(ChainKey::EthSepolia).unwrap().domain_id, 0);
        assert_eq!(
            registry.get(ChainKey::BaseSepolia).unwrap().usdc_address,
            USDC_BASE_SEPOLIA
        );
    }

    #[test]
    fn test_domain_label() {
        assert_eq!(domain_label(6), Some("Base Sepolia"));
        assert_eq!(domain_label(19), Some("HyperEVM Testnet"));
        assert_eq!(domain_label(999), None);
    }

    #[test]
    fn test_known_chains_labels_match_domain_table() {
        for chain in known_chains() {
            assert_eq!(domain_label(chain.domain_id), Some(chain.label.as_str()));
        }
    }
}
