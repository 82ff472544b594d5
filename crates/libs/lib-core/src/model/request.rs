//! # Swap Request
//!
//! The transient value captured when the user presses the action button, and
//! its validated, mode-specific form. Validation never touches the chain.

use alloy_primitives::U256;

use super::amount::parse_amount;
use super::mode::SwapMode;
use super::token::{Token, TokenRegistry};
use crate::error::ValidationError;

/// Form contents at submit time. Consumed immediately, never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SwapRequest {
    pub mode: SwapMode,
    pub input_token: Option<String>,
    pub output_token: Option<String>,
    /// Decimal string as typed by the user.
    pub amount: String,
}

/// A request that passed validation, one case per mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidatedSwap {
    NativeToToken { token_out: Token, value: U256 },
    TokenToNative { token_in: Token, amount: U256 },
    TokenToToken {
        token_in: Token,
        token_out: Token,
        amount: U256,
    },
}

impl SwapRequest {
    pub fn new(mode: SwapMode, amount: impl Into<String>) -> Self {
        Self {
            mode,
            amount: amount.into(),
            ..Default::default()
        }
    }

    pub fn with_input(mut self, ticker: &str) -> Self {
        self.input_token = Some(ticker.to_string());
        self
    }

    pub fn with_output(mut self, ticker: &str) -> Self {
        self.output_token = Some(ticker.to_string());
        self
    }

    /// Check the amount, then the input selector, then the output selector.
    ///
    /// Selectors that the mode does not use are ignored even when populated.
    pub fn validate(&self, registry: &TokenRegistry) -> Result<ValidatedSwap, ValidationError> {
        let amount = parse_amount(&self.amount)?;

        let token_in = if self.mode.requires_input_token() {
            Some(resolve(
                registry,
                self.input_token.as_deref(),
                ValidationError::MissingInputToken,
            )?)
        } else {
            None
        };
        let token_out = if self.mode.requires_output_token() {
            Some(resolve(
                registry,
                self.output_token.as_deref(),
                ValidationError::MissingOutputToken,
            )?)
        } else {
            None
        };

        match (self.mode, token_in, token_out) {
            (SwapMode::NativeToToken, _, Some(token_out)) => Ok(ValidatedSwap::NativeToToken {
                token_out,
                value: amount,
            }),
            (SwapMode::TokenToNative, Some(token_in), _) => {
                Ok(ValidatedSwap::TokenToNative { token_in, amount })
            }
            (SwapMode::TokenToToken, Some(token_in), Some(token_out)) => {
                Ok(ValidatedSwap::TokenToToken {
                    token_in,
                    token_out,
                    amount,
                })
            }
            (SwapMode::NativeToToken, _, None) => Err(ValidationError::MissingOutputToken),
            (SwapMode::TokenToNative, None, _) | (SwapMode::TokenToToken, None, _) => {
                Err(ValidationError::MissingInputToken)
            }
            (SwapMode::TokenToToken, Some(_), None) => Err(ValidationError::MissingOutputToken),
        }
    }
}

fn resolve(
    registry: &TokenRegistry,
    ticker: Option<&str>,
    missing: ValidationError,
) -> Result<Token, ValidationError> {
    let ticker = ticker.map(str::trim).filter(|t| !t.is_empty()).ok_or(missing)?;
    registry
        .get(ticker)
        .cloned()
        .ok_or_else(|| ValidationError::UnknownToken(ticker.to_string()))
}

impl ValidatedSwap {
    pub fn mode(&self) -> SwapMode {
        match self {
            ValidatedSwap::NativeToToken { .. } => SwapMode::NativeToToken,
            ValidatedSwap::TokenToNative { .. } => SwapMode::TokenToNative,
            ValidatedSwap::TokenToToken { .. } => SwapMode::TokenToToken,
        }
    }

    /// The token pulled from the user and how much of it, if any.
    pub fn spend(&self) -> Option<(&Token, U256)> {
        match self {
            ValidatedSwap::NativeToToken { .. } => None,
            ValidatedSwap::TokenToNative { token_in, amount }
            | ValidatedSwap::TokenToToken {
                token_in, amount, ..
            } => Some((token_in, *amount)),
        }
    }

    /// Amount in base units, whichever asset is spent.
    pub fn amount(&self) -> U256 {
        match self {
            ValidatedSwap::NativeToToken { value, .. } => *value,
            ValidatedSwap::TokenToNative { amount, .. }
            | ValidatedSwap::TokenToToken { amount, .. } => *amount,
        }
    }
}
