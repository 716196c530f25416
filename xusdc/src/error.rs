//! Error types for Gateway amount, hex and chain handling.
//!
//! Every failure here is a deterministic validation error: the same input
//! always fails the same way, so nothing is retried.

use crate::chain::ChainKey;

/// Base error type for the core crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A decimal amount could not be converted.
    #[error("{0}")]
    Units(#[from] UnitsError),

    /// A hex value could not be padded or decoded.
    #[error("{0}")]
    Hex(#[from] HexError),

    /// A chain lookup or registry construction failed.
    #[error("{0}")]
    Chain(#[from] ChainError),
}

/// Error returned by [`parse_units`](crate::units::parse_units).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnitsError {
    /// The value is empty, malformed, or contains disallowed characters.
    #[error("invalid amount {0:?}")]
    InvalidAmount(String),

    /// The value has more fractional digits than the token supports.
    #[error("too many decimal places: got {actual}, token supports {decimals}")]
    PrecisionOverflow {
        /// Decimal places supported by the token.
        decimals: usize,
        /// Fractional digits present in the input.
        actual: usize,
    },
}

/// Error returned by [`pad_hex`](crate::hex::pad_hex).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HexError {
    /// The value is already wider than the requested byte size.
    #[error("hex value of {actual} bytes does not fit in {size} bytes")]
    ValueTooLarge {
        /// Target width in bytes.
        size: usize,
        /// Width of the input in bytes (rounded up).
        actual: usize,
    },

    /// The value contains characters that are not hex digits.
    #[error("invalid hex value {0:?}")]
    InvalidHex(String),
}

/// Error returned by [`ChainRegistry`](crate::chain::ChainRegistry) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
    /// The key is valid but the registry has no descriptor for it.
    #[error("chain {0} is not supported by this registry")]
    UnsupportedChain(ChainKey),

    /// The string is not one of the known chain keys.
    #[error("unknown chain key {0:?}")]
    UnknownChainKey(String),

    /// Another chain in the registry already uses this domain id.
    #[error("domain id {0} is already registered")]
    DuplicateDomain(u32),
}
