//! # Domain Model
//!
//! - [`token`]: the fixed ticker → address registry
//! - [`mode`]: the three swap directions and their legs
//! - [`amount`]: decimal string → 18-decimal base units
//! - [`request`]: the transient swap request and its validated form

pub mod amount;
pub mod mode;
pub mod request;
pub mod token;

pub use amount::{parse_amount, NATIVE_DECIMALS};
pub use mode::{Leg, SwapMode};
pub use request::{SwapRequest, ValidatedSwap};
pub use token::{Token, TokenRegistry};
