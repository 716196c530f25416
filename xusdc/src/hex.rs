//! Hex string helpers for EVM addresses and ABI word padding.

use std::sync::LazyLock;

use alloy_primitives::{Address, B256};
use rand::RngExt;
use rand::rng;
use regex::Regex;

use crate::error::HexError;

static ADDRESS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0x[0-9a-fA-F]{40}$").expect("address pattern is valid"));

/// Returns `true` if `value` is `0x` followed by exactly 40 hex digits.
///
/// The check is purely syntactic and case-insensitive; EIP-55 checksums are
/// not enforced.
#[must_use]
pub fn is_address(value: &str) -> bool {
    ADDRESS_PATTERN.is_match(value)
}

/// Renders bytes as a lowercase `0x`-prefixed hex string.
#[must_use]
pub fn to_hex<T: AsRef<[u8]>>(bytes: T) -> String {
    alloy_primitives::hex::encode_prefixed(bytes)
}

/// Left-pads a hex value with zeros to `size` bytes.
///
/// An optional `0x` prefix is stripped before padding and always present in
/// the output. The digits keep their original case.
///
/// ```rust
/// use xusdc::hex::pad_hex;
///
/// assert_eq!(pad_hex("0xabc", 4).unwrap(), "0x00000abc");
/// ```
///
/// # Errors
///
/// - [`HexError::InvalidHex`] if the value contains non-hex characters.
/// - [`HexError::ValueTooLarge`] if the value is already wider than `size` bytes.
pub fn pad_hex(value: &str, size: usize) -> Result<String, HexError> {
    let digits = value.strip_prefix("0x").unwrap_or(value);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(HexError::InvalidHex(value.to_owned()));
    }

    let width = size * 2;
    if digits.len() > width {
        return Err(HexError::ValueTooLarge {
            size,
            actual: digits.len().div_ceil(2),
        });
    }
    Ok(format!("0x{digits:0>width$}"))
}

/// Widens a 20-byte address into a left-padded 32-byte ABI word.
///
/// Byte-level equivalent of `pad_hex(address, 32)`.
#[must_use]
pub fn pad_address(address: Address) -> B256 {
    address.into_word()
}

/// Generates `size` bytes from a cryptographically secure generator and
/// renders them with [`to_hex`].
#[must_use]
pub fn random_hex(size: usize) -> String {
    let mut bytes = vec![0u8; size];
    rng().fill(bytes.as_mut_slice());
    to_hex(&bytes)
}

/// Generates a random 32-byte word, used as the per-intent salt.
#[must_use]
pub fn random_bytes32() -> B256 {
    let bytes: [u8; 32] = rng().random();
    B256::from(bytes)
}
