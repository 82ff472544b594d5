//! # Swap Modes
//!
//! Which legs of the trade are the native coin and which are ERC20 tokens.
//! A leg that is a token shows a selector; a native leg shows a static label.

use serde::{Deserialize, Serialize};

/// One side of a swap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Leg {
    /// The chain's native coin; rendered as a fixed label.
    Native,
    /// An ERC20 token chosen from the registry.
    Token,
}

/// Swap direction. Exactly one mode is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwapMode {
    #[default]
    NativeToToken,
    TokenToNative,
    TokenToToken,
}

impl SwapMode {
    pub const ALL: [SwapMode; 3] = [
        SwapMode::NativeToToken,
        SwapMode::TokenToNative,
        SwapMode::TokenToToken,
    ];

    /// Label on the mode selector button.
    pub fn label(self) -> &'static str {
        match self {
            SwapMode::NativeToToken => "ETH → Stock",
            SwapMode::TokenToNative => "Stock → ETH",
            SwapMode::TokenToToken => "Stock → Stock",
        }
    }

    pub fn input_leg(self) -> Leg {
        match self {
            SwapMode::NativeToToken => Leg::Native,
            SwapMode::TokenToNative | SwapMode::TokenToToken => Leg::Token,
        }
    }

    pub fn output_leg(self) -> Leg {
        match self {
            SwapMode::TokenToNative => Leg::Native,
            SwapMode::NativeToToken | SwapMode::TokenToToken => Leg::Token,
        }
    }

    pub fn requires_input_token(self) -> bool {
        self.input_leg() == Leg::Token
    }

    pub fn requires_output_token(self) -> bool {
        self.output_leg() == Leg::Token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_mode_has_two_native_legs() {
        for mode in SwapMode::ALL {
            assert!(
                mode.input_leg() == Leg::Token || mode.output_leg() == Leg::Token,
                "{mode:?} has no token leg"
            );
        }
    }

    #[test]
    fn test_required_selectors_per_mode() {
        assert!(!SwapMode::NativeToToken.requires_input_token());
        assert!(SwapMode::NativeToToken.requires_output_token());
        assert!(SwapMode::TokenToNative.requires_input_token());
        assert!(!SwapMode::TokenToNative.requires_output_token());
        assert!(SwapMode::TokenToToken.requires_input_token());
        assert!(SwapMode::TokenToToken.requires_output_token());
        assert_eq!(SwapMode::default(), SwapMode::NativeToToken);
    }
}
