//! Conversion between human-readable decimal strings and integer base units.
//!
//! Token amounts travel on-chain as integers scaled by `10^decimals`. These
//! helpers work on the digit strings directly, so any precision a token can
//! report (`0..=255`) is handled without floating point.

use alloy_primitives::U256;

use crate::error::{Error, Result};

/// Fractional digits of the pool's fixed-point prices.
pub const FIXED_POINT_DECIMALS: u8 = 18;

/// Split a plain decimal literal into its whole and fractional digit runs.
///
/// Accepts ASCII digits with at most one `.` and at least one digit overall
/// (`"1"`, `"1.5"`, `".5"`, `"5."`). Signs, exponents and separators are not
/// part of the grammar.
pub(crate) fn split_decimal(input: &str) -> Option<(&str, &str)> {
    let (whole, fraction) = match input.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (input, ""),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if !all_digits(whole) || !all_digits(fraction) {
        return None;
    }
    Some((whole, fraction))
}

/// Convert a decimal string into base units for a token with `precision`
/// decimals.
///
/// # Errors
///
/// Returns [`Error::InvalidAmount`] when the input is not a non-negative
/// decimal, carries non-zero digits beyond `precision`, or does not fit in
/// 256 bits once scaled.
pub fn to_base_units(input: &str, precision: u8) -> Result<U256> {
    let trimmed = input.trim();
    let (whole, fraction) = split_decimal(trimmed)
        .ok_or_else(|| Error::invalid_amount(input, "not a non-negative decimal number"))?;

    let precision = usize::from(precision);
    let significant = fraction.trim_end_matches('0');
    if significant.len() > precision {
        return Err(Error::invalid_amount(
            input,
            format!("more than {precision} decimal places"),
        ));
    }

    let mut digits = String::with_capacity(whole.len() + precision);
    digits.push_str(whole);
    digits.push_str(significant);
    digits.extend(std::iter::repeat('0').take(precision - significant.len()));

    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Ok(U256::ZERO);
    }

    U256::from_str_radix(digits, 10)
        .map_err(|_| Error::invalid_amount(input, "amount too large"))
}

/// Render base units as a decimal string for a token with `precision`
/// decimals.
///
/// Redundant trailing zeros are stripped but one fractional digit is always
/// kept (`1000000` at precision 6 renders as `"1.0"`); precision `0` renders
/// the bare integer.
#[must_use]
pub fn to_decimal_string(amount: U256, precision: u8) -> String {
    let digits = amount.to_string();
    let precision = usize::from(precision);
    if precision == 0 {
        return digits;
    }

    let padded = if digits.len() <= precision {
        let mut padded = "0".repeat(precision + 1 - digits.len());
        padded.push_str(&digits);
        padded
    } else {
        digits
    };

    let (whole, fraction) = padded.split_at(padded.len() - precision);
    let fraction = fraction.trim_end_matches('0');
    let fraction = if fraction.is_empty() { "0" } else { fraction };
    format!("{whole}.{fraction}")
}
