//! Fixed-point conversion between decimal strings and token base units.
//!
//! Amounts entered by users are decimal strings (`"10.5"`); on-chain values
//! are unsigned integers counted in the token's smallest unit (`10500000`
//! for 6-decimal USDC). Conversions here are exact: no floating point is
//! involved and precision loss is reported as an error instead of rounding.

use std::iter;
use std::sync::LazyLock;

use alloy_primitives::{I256, U256};
use regex::Regex;

use crate::error::UnitsError;

static AMOUNT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]*\.?[0-9]*$").expect("amount pattern is valid"));

/// Parses a decimal string into an integer amount of base units.
///
/// The value is trimmed and must consist of an optional integer part, an
/// optional `.`, and optional fractional digits. Signs, exponents and
/// thousands separators are rejected; use [`normalize_decimal_input`] first
/// for locale-formatted input.
///
/// ```rust
/// use alloy_primitives::U256;
/// use xusdc::units::parse_units;
///
/// assert_eq!(parse_units("10.5", 6).unwrap(), U256::from(10_500_000u64));
/// assert_eq!(parse_units(".25", 2).unwrap(), U256::from(25u64));
/// ```
///
/// # Errors
///
/// - [`UnitsError::InvalidAmount`] if the value is empty, malformed, has no
///   digits at all, or does not fit in 256 bits.
/// - [`UnitsError::PrecisionOverflow`] if the fractional part has more
///   digits than `decimals`.
pub fn parse_units(value: &str, decimals: u8) -> Result<U256, UnitsError> {
    let normalized = value.trim();
    if normalized.is_empty() || !AMOUNT_PATTERN.is_match(normalized) {
        return Err(UnitsError::InvalidAmount(value.to_owned()));
    }

    let (whole, fraction) = normalized.split_once('.').unwrap_or((normalized, ""));
    if whole.is_empty() && fraction.is_empty() {
        return Err(UnitsError::InvalidAmount(value.to_owned()));
    }

    let decimals = usize::from(decimals);
    if fraction.len() > decimals {
        return Err(UnitsError::PrecisionOverflow {
            decimals,
            actual: fraction.len(),
        });
    }

    let mut digits = String::with_capacity(whole.len() + decimals);
    digits.push_str(whole);
    digits.push_str(fraction);
    digits.extend(iter::repeat_n('0', decimals - fraction.len()));

    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Ok(U256::ZERO);
    }
    U256::from_str_radix(digits, 10).map_err(|_| UnitsError::InvalidAmount(value.to_owned()))
}

/// Renders an amount of base units as a decimal string.
///
/// Trailing fractional zeros are dropped, and the `.` only appears when a
/// fractional remainder exists, so `0` renders as `"0"` and `1_000_000` with
/// 6 decimals renders as `"1"`.
#[must_use]
pub fn format_units(value: U256, decimals: u8) -> String {
    let decimals = usize::from(decimals);
    let raw = value.to_string();
    let raw = format!("{raw:0>width$}", width = decimals + 1);
    let (whole, fraction) = raw.split_at(raw.len() - decimals);
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        whole.to_owned()
    } else {
        format!("{whole}.{fraction}")
    }
}

/// Signed variant of [`format_units`]: formats the absolute value and
/// prefixes `-` for negative amounts.
#[must_use]
pub fn format_signed_units(value: I256, decimals: u8) -> String {
    let formatted = format_units(value.unsigned_abs(), decimals);
    if value.is_negative() {
        format!("-{formatted}")
    } else {
        formatted
    }
}

/// Normalizes locale-formatted user input into the plain form accepted by
/// [`parse_units`].
///
/// Whitespace is removed. When both `,` and `.` occur, whichever comes last
/// is the decimal separator and the other is dropped as a thousands
/// separator; a lone `,` is read as the decimal separator. Any other
/// character that is not a digit or `.` is discarded, and a second `.` is
/// folded into the fractional digits.
///
/// ```rust
/// use xusdc::units::normalize_decimal_input;
///
/// assert_eq!(normalize_decimal_input("1.234,56"), "1234.56");
/// assert_eq!(normalize_decimal_input("1,234.56"), "1234.56");
/// assert_eq!(normalize_decimal_input("0,5"), "0.5");
/// ```
#[must_use]
pub fn normalize_decimal_input(value: &str) -> String {
    let mut cleaned: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    if cleaned.is_empty() {
        return cleaned;
    }

    match (cleaned.rfind(','), cleaned.rfind('.')) {
        (Some(comma), Some(dot)) => {
            let (decimal_sep, thousands_sep) = if comma > dot { (',', '.') } else { ('.', ',') };
            cleaned.retain(|c| c != thousands_sep);
            cleaned = cleaned.replacen(decimal_sep, ".", 1);
        }
        (Some(_), None) => cleaned = cleaned.replace(',', "."),
        _ => {}
    }

    cleaned.retain(|c| c.is_ascii_digit() || c == '.');

    if let Some((head, tail)) = cleaned.split_once('.')
        && tail.contains('.')
    {
        cleaned = format!("{head}.{}", tail.replace('.', ""));
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_units_usdc_amount() {
        assert_eq!(parse_units("10.5", 6).unwrap(), U256::from(10_500_000u64));
        assert_eq!(parse_units("1", 6).unwrap(), U256::from(1_000_000u64));
        assert_eq!(parse_units("0.000001", 6).unwrap(), U256::from(1u64));
    }

    #[test]
    fn test_parse_units_optional_parts() {
        assert_eq!(parse_units(".5", 6).unwrap(), U256::from(500_000u64));
        assert_eq!(parse_units("5.", 6).unwrap(), U256::from(5_000_000u64));
        assert_eq!(parse_units("  007.10 ", 2).unwrap(), U256::from(710u64));
        assert_eq!(parse_units("0", 6).unwrap(), U256::ZERO);
        assert_eq!(parse_units("0.000000", 6).unwrap(), U256::ZERO);
    }

    #[test]
    fn test_parse_units_zero_decimals() {
        assert_eq!(parse_units("42", 0).unwrap(), U256::from(42u64));
        assert_eq!(
            parse_units("42.1", 0),
            Err(UnitsError::PrecisionOverflow {
                decimals: 0,
                actual: 1
            })
        );
    }

    #[test]
    fn test_parse_units_rejects_extra_precision() {
        assert_eq!(
            parse_units("1.1234567", 6),
            Err(UnitsError::PrecisionOverflow {
                decimals: 6,
                actual: 7
            })
        );
    }

    #[test]
    fn test_parse_units_rejects_malformed_input() {
        for input in ["", "   ", ".", "-1", "+1", "1e6", "1,000", "1.2.3", "abc", "0x10"] {
            assert!(
                matches!(parse_units(input, 6), Err(UnitsError::InvalidAmount(_))),
                "expected InvalidAmount for {input:?}"
            );
        }
    }

    #[test]
    fn test_parse_units_rejects_values_wider_than_256_bits() {
        let max = U256::MAX.to_string();
        assert_eq!(parse_units(&max, 0).unwrap(), U256::MAX);

        let too_large = format!("{max}0");
        assert!(matches!(
            parse_units(&too_large, 0),
            Err(UnitsError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_format_units() {
        assert_eq!(format_units(U256::ZERO, 6), "0");
        assert_eq!(format_units(U256::from(1_000_000u64), 6), "1");
        assert_eq!(format_units(U256::from(10_500_000u64), 6), "10.5");
        assert_eq!(format_units(U256::from(1u64), 6), "0.000001");
        assert_eq!(format_units(U256::from(1_234_567u64), 6), "1.234567");
        assert_eq!(format_units(U256::from(5u64), 0), "5");
    }

    #[test]
    fn test_format_signed_units() {
        assert_eq!(
            format_signed_units(I256::from_dec_str("-1500000").unwrap(), 6),
            "-1.5"
        );
        assert_eq!(
            format_signed_units(I256::from_dec_str("2000000").unwrap(), 6),
            "2"
        );
        assert_eq!(format_signed_units(I256::ZERO, 6), "0");
    }

    #[test]
    fn test_units_roundtrip_across_decimals() {
        let samples = [
            U256::ZERO,
            U256::from(1u64),
            U256::from(10u64),
            U256::from(10_500_000u64),
            U256::from(u64::MAX),
            U256::MAX,
        ];
        for decimals in 0..=18u8 {
            for value in samples {
                let formatted = format_units(value, decimals);
                assert_eq!(
                    parse_units(&formatted, decimals).unwrap(),
                    value,
                    "roundtrip failed for {value} with {decimals} decimals"
                );
            }
        }
    }

    #[test]
    fn test_normalize_decimal_input() {
        assert_eq!(normalize_decimal_input(""), "");
        assert_eq!(normalize_decimal_input(" 1 000,50 "), "1000.50");
        assert_eq!(normalize_decimal_input("1.234.567,89"), "1234567.89");
        assert_eq!(normalize_decimal_input("1,234,567.89"), "1234567.89");
        assert_eq!(normalize_decimal_input("12,5"), "12.5");
        assert_eq!(normalize_decimal_input("$10.00 USDC"), "10.00");
        assert_eq!(normalize_decimal_input("1.2.3"), "1.23");
    }

    #[test]
    fn test_normalized_input_parses() {
        let normalized = normalize_decimal_input("1.000,25");
        assert_eq!(parse_units(&normalized, 6).unwrap(), U256::from(1_000_250_000u64));
    }
}
