#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! EVM typed-data construction for Gateway cross-chain USDC transfers.
//!
//! Gateway moves USDC between chains by burning on a source domain and
//! minting on a destination domain. A transfer is requested with a *burn
//! intent*: an EIP-712 `BurnIntent` message wrapping a `TransferSpec`, signed
//! by the depositor and submitted to the Gateway API. This crate builds that
//! message and its typed-data envelope; signing and submission happen
//! elsewhere.
//!
//! # Architecture
//!
//! - [`networks`] - Gateway contracts, testnet USDC deployments and domain ids
//! - [`burn`] - Burn-intent builder, wire types and EIP-712 bindings
//! - [`api`] - Request/response bodies for the Gateway REST API
//!
//! # Feature Flags
//!
//! - `telemetry` - Tracing instrumentation for the builder and registry
//!
//! # Example
//!
//! ```rust
//! use alloy_primitives::{U256, address};
//! use xusdc::chain::ChainKey;
//! use xusdc_evm::burn::{BurnIntentBuilder, BurnIntentParams};
//! use xusdc_evm::networks::testnet_registry;
//!
//! let builder = BurnIntentBuilder::new(testnet_registry());
//! let depositor = address!("0x1111111111111111111111111111111111111111");
//! let params = BurnIntentParams::new(
//!     U256::from(10_500_000u64),
//!     ChainKey::BaseSepolia,
//!     ChainKey::EthSepolia,
//!     depositor,
//!     depositor,
//!     depositor,
//! );
//!
//! let built = builder.build(params).unwrap();
//! assert_eq!(built.burn_intent.spec.source_domain, 6);
//! assert_eq!(built.typed_data.message, built.burn_intent);
//! ```

pub mod api;
pub mod burn;
pub mod networks;

pub use burn::{BurnIntentBuilder, BurnIntentParams, build_burn_intent_typed_data};
