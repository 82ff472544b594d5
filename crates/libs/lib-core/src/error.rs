//! # Centralized Error Handling
//!
//! Error types shared by the wallet bridge, the contract client and the swap
//! workflow. They follow the `thiserror` pattern used across the workspace.
//!
//! ## Error Categories
//!
//! 1. **Chain errors** ([`ChainError`]) - raw failures reported by the wallet
//!    provider or the chain (RPC errors, user rejection, reverted receipts).
//! 2. **Validation errors** ([`ValidationError`]) - bad or missing form input,
//!    raised before any chain interaction.
//! 3. **Swap errors** ([`SwapError`]) - the workflow-level taxonomy. Every chain
//!    error is attributed to the step that produced it (allowance check,
//!    approval, swap) so the user message can name what failed.
//! 4. **Configuration errors** ([`ConfigError`]) - startup configuration.
//!
//! ## User Messages
//!
//! [`SwapError::user_message`] is the single conversion point into text shown in
//! the UI. Chain-provided reasons are surfaced verbatim; when the chain gave no
//! reason a generic message is used instead.

use alloy_primitives::TxHash;
use thiserror::Error;

/// Convenience type alias for `Result<T, SwapError>`.
pub type Result<T> = std::result::Result<T, SwapError>;

/// Generic message used when a failure carries no usable reason.
pub const GENERIC_FAILURE: &str = "Transaction failed";

/// Failures reported by the wallet provider or the chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    /// No injected wallet provider is present.
    #[error("No Ethereum wallet detected")]
    NoProvider,

    /// The user declined a wallet prompt (EIP-1193 code 4001).
    #[error("User rejected the request")]
    Rejected,

    /// JSON-RPC error returned by the provider.
    #[error("{message}")]
    Rpc { code: i64, message: String },

    /// The transaction was mined with a failing status.
    #[error("transaction execution reverted ({hash})")]
    Reverted {
        hash: TxHash,
        reason: Option<String>,
    },

    /// A provider response could not be decoded.
    #[error("Decoding error: {0}")]
    Decode(String),
}

impl ChainError {
    /// EIP-1193 error code for a user-rejected request.
    pub const USER_REJECTED_CODE: i64 = 4001;

    /// Build an error from a provider `{ code, message }` pair.
    pub fn from_rpc(code: Option<i64>, message: impl Into<String>) -> Self {
        match code {
            Some(Self::USER_REJECTED_CODE) => ChainError::Rejected,
            code => ChainError::Rpc {
                code: code.unwrap_or_default(),
                message: message.into(),
            },
        }
    }

    /// The chain-provided reason, when there is one.
    pub fn reason(&self) -> Option<String> {
        match self {
            ChainError::Rpc { message, .. } if !message.trim().is_empty() => Some(message.clone()),
            ChainError::Reverted {
                reason: Some(reason),
                ..
            } => Some(reason.clone()),
            ChainError::Reverted { .. } | ChainError::Rejected => Some(self.to_string()),
            _ => None,
        }
    }
}

/// Form input violations. Raised before any chain interaction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Enter a valid amount > 0")]
    InvalidAmount,

    #[error("Please select the token you want to pay with")]
    MissingInputToken,

    #[error("Please select the token you want to receive")]
    MissingOutputToken,

    #[error("Unknown token: {0}")]
    UnknownToken(String),
}

/// Workflow-level error taxonomy.
///
/// Every variant is recoverable: the user may retry after adjusting input or
/// wallet state. `NoWallet` persists until a wallet is installed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwapError {
    #[error("No Ethereum wallet detected. Install MetaMask or similar.")]
    NoWallet,

    #[error("User rejected the request")]
    UserRejected,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Switch to {network} (Chain ID {expected})")]
    WrongNetwork {
        expected: u64,
        actual: u64,
        network: String,
    },

    #[error("Allowance check failed: {0}")]
    AllowanceCheck(ChainError),

    #[error("Approval failed: {0}")]
    ApprovalReverted(ChainError),

    #[error("Swap failed: {0}")]
    SwapReverted(ChainError),

    #[error("Timed out while {0}")]
    Timeout(&'static str),

    #[error("Wallet error: {0}")]
    Wallet(String),
}

impl SwapError {
    /// Map a wallet-bridge failure (connect, signer, network query).
    pub fn from_wallet(err: ChainError) -> Self {
        match err {
            ChainError::NoProvider => SwapError::NoWallet,
            ChainError::Rejected => SwapError::UserRejected,
            other => SwapError::Wallet(other.to_string()),
        }
    }

    /// Map a failure while reading the allowance.
    pub fn from_allowance(err: ChainError) -> Self {
        Self::attribute(err, SwapError::AllowanceCheck)
    }

    /// Map a failure while submitting or confirming the approval.
    pub fn from_approval(err: ChainError) -> Self {
        Self::attribute(err, SwapError::ApprovalReverted)
    }

    /// Map a failure while submitting or confirming the swap.
    pub fn from_swap(err: ChainError) -> Self {
        Self::attribute(err, SwapError::SwapReverted)
    }

    fn attribute(err: ChainError, wrap: fn(ChainError) -> SwapError) -> Self {
        match err {
            ChainError::NoProvider => SwapError::NoWallet,
            ChainError::Rejected => SwapError::UserRejected,
            other => wrap(other),
        }
    }

    /// Whether the failure happened before anything reached the chain.
    pub fn is_pre_chain(&self) -> bool {
        matches!(
            self,
            SwapError::NoWallet | SwapError::Validation(_) | SwapError::WrongNetwork { .. }
        )
    }

    /// The single user-facing message for this error.
    pub fn user_message(&self) -> String {
        match self {
            SwapError::AllowanceCheck(err)
            | SwapError::ApprovalReverted(err)
            | SwapError::SwapReverted(err) => {
                err.reason().unwrap_or_else(|| GENERIC_FAILURE.to_string())
            }
            SwapError::Wallet(msg) if msg.trim().is_empty() => GENERIC_FAILURE.to_string(),
            SwapError::Wallet(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

/// Configuration loading and validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} has the wrong format")]
    WrongFormat(&'static str),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Config has already been initialized")]
    AlreadyInitialized,
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Invalid(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpc_code_4001_is_rejection() {
        assert_eq!(ChainError::from_rpc(Some(4001), "denied"), ChainError::Rejected);
        assert_eq!(
            ChainError::from_rpc(Some(-32000), "insufficient funds"),
            ChainError::Rpc {
                code: -32000,
                message: "insufficient funds".to_string()
            }
        );
    }

    #[test]
    fn test_user_message_surfaces_chain_reason() {
        let err = SwapError::from_swap(ChainError::from_rpc(Some(-32603), "execution reverted: slippage"));
        assert_eq!(err.user_message(), "execution reverted: slippage");
    }

    #[test]
    fn test_user_message_falls_back_to_generic() {
        let err = SwapError::from_approval(ChainError::Rpc {
            code: -32603,
            message: "  ".to_string(),
        });
        assert_eq!(err.user_message(), GENERIC_FAILURE);

        let err = SwapError::from_allowance(ChainError::Decode("short data".to_string()));
        assert_eq!(err.user_message(), GENERIC_FAILURE);
    }

    #[test]
    fn test_rejection_maps_to_user_rejected_at_every_step() {
        assert_eq!(SwapError::from_wallet(ChainError::Rejected), SwapError::UserRejected);
        assert_eq!(SwapError::from_approval(ChainError::Rejected), SwapError::UserRejected);
        assert_eq!(SwapError::from_swap(ChainError::Rejected), SwapError::UserRejected);
        assert_eq!(SwapError::from_wallet(ChainError::NoProvider), SwapError::NoWallet);
    }

    #[test]
    fn test_wrong_network_message() {
        let err = SwapError::WrongNetwork {
            expected: 46630,
            actual: 1,
            network: "Robinhood Chain Testnet".to_string(),
        };
        assert_eq!(
            err.user_message(),
            "Switch to Robinhood Chain Testnet (Chain ID 46630)"
        );
        assert!(err.is_pre_chain());
    }
}
