//! # Amount Conversion
//!
//! Decimal strings from the amount input converted to base units. Every asset
//! traded here (the native coin and the stock tokens) uses 18 decimals.

use alloy_primitives::{utils::parse_ether, U256};

use crate::error::ValidationError;

/// Decimals of the native coin and of every registry token.
pub const NATIVE_DECIMALS: usize = 18;

/// Parse a user-entered decimal into 18-decimal base units.
///
/// Accepts plain decimals (`"1"`, `"1.5"`, `".25"`). Rejects empty input,
/// signs, exponents, hex, more than 18 fractional digits and zero.
pub fn parse_amount(input: &str) -> Result<U256, ValidationError> {
    let input = input.trim();

    let mut parts = input.splitn(2, '.');
    let whole = parts.next().unwrap_or_default();
    let fraction = parts.next().unwrap_or_default();

    let digits_only = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !digits_only(whole) || !digits_only(fraction) {
        return Err(ValidationError::InvalidAmount);
    }
    if whole.is_empty() && fraction.is_empty() {
        return Err(ValidationError::InvalidAmount);
    }
    if fraction.len() > NATIVE_DECIMALS {
        return Err(ValidationError::InvalidAmount);
    }

    let normalized = match (whole.is_empty(), fraction.is_empty()) {
        (true, _) => format!("0.{fraction}"),
        (false, true) => whole.to_string(),
        (false, false) => format!("{whole}.{fraction}"),
    };

    match parse_ether(&normalized) {
        Ok(value) if !value.is_zero() => Ok(value),
        _ => Err(ValidationError::InvalidAmount),
    }
}
