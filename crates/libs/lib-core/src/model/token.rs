//! # Token Registry
//!
//! Stock tickers mapped to their ERC20 contract addresses on the target chain.
//! The registry is fixed at build time; a JSON override is accepted through
//! [`crate::config::DexConfig::from_json`].

use alloy_primitives::{address, Address};
use serde::{Deserialize, Serialize};

/// One tradable ERC20 token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub ticker: String,
    pub address: Address,
    /// Logo shown next to the ticker in the selectors. Display only.
    #[serde(default)]
    pub logo: String,
}

impl Token {
    pub fn new(ticker: &str, address: Address, logo: &str) -> Self {
        Self {
            ticker: ticker.to_string(),
            address,
            logo: logo.to_string(),
        }
    }
}

/// Ordered ticker → address mapping.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenRegistry(Vec<Token>);

impl TokenRegistry {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self(tokens)
    }

    /// Look a token up by ticker. Lookup is exact after trimming.
    pub fn get(&self, ticker: &str) -> Option<&Token> {
        let ticker = ticker.trim();
        self.0.iter().find(|token| token.ticker == ticker)
    }

    pub fn address_of(&self, ticker: &str) -> Option<Address> {
        self.get(ticker).map(|token| token.address)
    }

    pub fn ticker_of(&self, address: Address) -> Option<&str> {
        self.0
            .iter()
            .find(|token| token.address == address)
            .map(|token| token.ticker.as_str())
    }

    /// Tickers in declaration order.
    pub fn tickers(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|token| token.ticker.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First address that appears more than once, if any.
    pub fn duplicate_address(&self) -> Option<Address> {
        self.0.iter().enumerate().find_map(|(i, token)| {
            self.0[..i]
                .iter()
                .any(|earlier| earlier.address == token.address)
                .then_some(token.address)
        })
    }
}

impl Default for TokenRegistry {
    fn default() -> Self {
        Self(vec![
            Token::new(
                "AMD",
                address!("71178BAc73cBeb415514eB542a8995b82669778d"),
                "https://upload.wikimedia.org/wikipedia/commons/7/7c/AMD_Logo.svg",
            ),
            Token::new(
                "AMZN",
                address!("5884aD2f920c162CFBbACc88C9C51AA75eC09E02"),
                "https://upload.wikimedia.org/wikipedia/commons/a/a9/Amazon_logo.svg",
            ),
            Token::new(
                "TSLA",
                address!("C9f9c86933092BbbfFF3CCb4b105A4A94bf3Bd4E"),
                "https://upload.wikimedia.org/wikipedia/commons/b/bd/Tesla_Motors.svg",
            ),
            Token::new(
                "PLTR",
                address!("1FBE1a0e43594b3455993B5dE5Fd0A7A266298d0"),
                "https://upload.wikimedia.org/wikipedia/commons/1/13/Palantir_Technologies_logo.svg",
            ),
            Token::new(
                "NFLX",
                address!("3b8262A63d25f0477c4DDE23F83cfe22Cb768C93"),
                "https://upload.wikimedia.org/wikipedia/commons/0/08/Netflix_2015_logo.svg",
            ),
        ])
    }
}
