//! Browser services

pub mod timer;
pub mod wallet;

pub use timer::BrowserDelay;
pub use wallet::{BrowserSigner, BrowserWallet};
