//! # Shared Utility Functions
//!
//! ## Address Formatting
//!
//! Functions for formatting EVM account addresses for display:
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - `format_address` with the connect-button lengths (6 and 4)
//!
//! ## Amount Formatting
//!
//! - [`format_estimate`] - Scale a typed amount by a fee factor for display

/// Placeholder shown in the estimate field when there is nothing to estimate.
pub const EMPTY_ESTIMATE: &str = "0.00";

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045";
/// assert_eq!(format_address(addr, 6, 4), "0xd8dA...6045");
/// assert_eq!(format_address(addr, 4, 4), "0xd8...6045");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    if address_len <= prefix_len + suffix_len || !address.is_ascii() {
        return address.to_string();
    }

    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format an address the way the connect button shows it: `0x` plus four
/// characters, then the last four.
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// assert_eq!(truncate_address("0x1234567890abcdef1234567890abcdef12345678"), "0x1234...5678");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

/// `~{amount * factor}` with six decimals, or [`EMPTY_ESTIMATE`] when the
/// amount is empty or not a finite number.
///
/// ```rust
/// use shared::utils::format_estimate;
///
/// assert_eq!(format_estimate("1.5", 0.99), "~1.485000");
/// assert_eq!(format_estimate("", 0.99), "0.00");
/// ```
pub fn format_estimate(amount: &str, factor: f64) -> String {
    match amount.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => format!("~{:.6}", value * factor),
        _ => EMPTY_ESTIMATE.to_string(),
    }
}
