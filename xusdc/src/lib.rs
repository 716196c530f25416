#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Core types for Gateway cross-chain USDC transfers.
//!
//! This crate provides the chain-agnostic building blocks used to assemble a
//! Gateway burn intent: exact fixed-point amount handling, hex padding for ABI
//! `bytes32` slots, and the registry of chains the bridge can move value
//! between. EVM typed-data construction lives in `xusdc-evm`.
//!
//! # Modules
//!
//! - [`units`] - Decimal string ⇄ base unit conversion without floating point
//! - [`hex`] - Address validation, hex rendering and left padding
//! - [`chain`] - Supported chain keys and the immutable [`chain::ChainRegistry`]
//! - [`error`] - Error taxonomy shared by the workspace
//!
//! # Feature Flags
//!
//! - `telemetry` - Enables tracing instrumentation for debugging and monitoring

pub mod chain;
pub mod error;
pub mod hex;
pub mod units;

pub use error::Error;
