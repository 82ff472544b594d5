//! # Shared Display Helpers
//!
//! Formatting helpers used by both the core library and the browser front end.
//!
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::truncate_address`]**: `0x1234...abcd` form used on the connect button
//!   - **[`utils::format_estimate`]**: Decorative receive estimate
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_estimate, truncate_address};
//!
//! let display = truncate_address("0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045");
//! assert_eq!(display, "0xd8dA...6045");
//! assert_eq!(format_estimate("2", 0.99), "~1.980000");
//! ```

pub mod utils;

pub use utils::*;
