//! # Core Library
//!
//! Browser-free core of the Hoods DEX front end: configuration, error taxonomy,
//! token registry, swap modes, the chain-facing traits, the ABI-encoding contract
//! client and the swap workflow state machine.
//!
//! Nothing in this crate touches `window` or `wasm-bindgen`; the browser crate
//! (`wallet-web`) plugs an EIP-1193 wallet into [`chain::WalletBridge`] and a
//! reactive signal into [`swap::ViewStore`]. Everything here runs on the host
//! and is tested with `tokio`.
//!
//! ```text
//! ViewState ──begin_submit──▶ SwapWorkflow ──▶ WalletBridge (network, signer)
//!     ▲                            │
//!     │                            └──▶ ContractClient (allowance, approve, swap)
//!     └─────────finish/revert──────┘
//! ```

pub mod chain;
pub mod config;
pub mod error;
pub mod model;
pub mod swap;
pub mod view;

// Re-export commonly used types
pub use config::{dex_config, init_config, DexConfig};
pub use error::{ChainError, ConfigError, Result, SwapError, ValidationError};
pub use model::{SwapMode, SwapRequest, Token, TokenRegistry};
pub use swap::{SwapController, SwapPhase, SwapWorkflow};
pub use view::ViewState;
