//! Client-side validation of user-entered amounts.

use super::units::split_decimal;
use crate::error::{Error, Result};

/// Check that `input` is a present, numeric, strictly positive amount.
///
/// Returns the trimmed input on success. Precision is not checked here; that
/// happens when the amount is converted with the token's decimals.
///
/// # Errors
///
/// Returns [`Error::InvalidAmount`] for empty, non-numeric or non-positive
/// input.
pub fn validate_positive(input: &str) -> Result<&str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_amount(input, "amount is required"));
    }

    let (whole, fraction) =
        split_decimal(trimmed).ok_or_else(|| Error::invalid_amount(input, "not a number"))?;

    let is_zero = whole.bytes().chain(fraction.bytes()).all(|b| b == b'0');
    if is_zero {
        return Err(Error::invalid_amount(input, "amount must be greater than zero"));
    }

    Ok(trimmed)
}
