//! # Application Configuration
//!
//! Target chain, exchange contract, token registry and workflow timings.
//! The defaults are the deployed Robinhood Chain Testnet values; a build can
//! override the chain id and exchange address through build-time environment
//! variables, and a JSON document can replace any field.
//!
//! ## Global Config Access
//!
//! Use [`dex_config()`] to access the global configuration instance:
//!
//! ```rust
//! use lib_core::config::dex_config;
//!
//! let config = dex_config();
//! assert_eq!(config.chain_id, 46630);
//! ```
//!
//! Call [`init_config()`] once at startup to apply overrides. Without it,
//! [`dex_config()`] falls back to [`DexConfig::default()`].

use std::str::FromStr;
use std::sync::OnceLock;
use std::time::Duration;

use alloy_primitives::{address, Address};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::TokenRegistry;

/// Exchange and chain configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DexConfig {
    /// Chain id every chain-mutating call requires.
    pub chain_id: u64,

    /// Human-readable network name used in the wrong-network message.
    pub chain_name: String,

    /// The deployed exchange contract.
    pub dex_address: Address,

    /// Tradable tokens, in selector order.
    pub tokens: TokenRegistry,

    /// Gas limit for `ethToToken` and `tokenToEth`.
    pub single_hop_gas_limit: u64,

    /// Gas limit for `tokenToToken`.
    pub multi_hop_gas_limit: u64,

    /// How long the success label stays before reverting to idle.
    pub success_reset_ms: u64,

    /// Receipt polling interval while waiting for confirmation.
    pub receipt_poll_ms: u64,

    /// Optional bound on the network check and the allowance read.
    /// Signer prompts, approvals and confirmation waits are never bounded.
    pub pre_submit_timeout_ms: Option<u64>,
}

impl Default for DexConfig {
    fn default() -> Self {
        Self {
            chain_id: 46630,
            chain_name: "Robinhood Chain Testnet".to_string(),
            dex_address: address!("D0358E7e805384c411Db897990c92A51133bc180"),
            tokens: TokenRegistry::default(),
            single_hop_gas_limit: 600_000,
            multi_hop_gas_limit: 800_000,
            success_reset_ms: 4_000,
            receipt_poll_ms: 1_500,
            pre_submit_timeout_ms: None,
        }
    }
}

impl DexConfig {
    /// Defaults with build-time overrides applied.
    ///
    /// Recognised variables: `HOODS_CHAIN_ID`, `HOODS_DEX_ADDRESS`. They are read
    /// with `option_env!` because the browser has no process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_overrides(option_env!("HOODS_CHAIN_ID"), option_env!("HOODS_DEX_ADDRESS"))
    }

    fn with_overrides(
        mut self,
        chain_id: Option<&str>,
        dex_address: Option<&str>,
    ) -> Result<Self, ConfigError> {
        if let Some(raw) = chain_id {
            self.chain_id = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::WrongFormat("HOODS_CHAIN_ID"))?;
        }
        if let Some(raw) = dex_address {
            self.dex_address = Address::from_str(raw.trim())
                .map_err(|_| ConfigError::WrongFormat("HOODS_DEX_ADDRESS"))?;
        }
        Ok(self)
    }

    /// Parse a JSON document; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reject configurations that could never produce a valid swap.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chain_id == 0 {
            return Err(ConfigError::Invalid("chain_id must be non-zero".to_string()));
        }
        if self.dex_address == Address::ZERO {
            return Err(ConfigError::Invalid("dex_address must be non-zero".to_string()));
        }
        if self.tokens.is_empty() {
            return Err(ConfigError::Invalid("token registry is empty".to_string()));
        }
        if let Some(dup) = self.tokens.duplicate_address() {
            return Err(ConfigError::Invalid(format!("duplicate token address {dup}")));
        }
        if self.single_hop_gas_limit == 0 || self.multi_hop_gas_limit == 0 {
            return Err(ConfigError::Invalid("gas limits must be non-zero".to_string()));
        }
        Ok(())
    }

    pub fn success_reset(&self) -> Duration {
        Duration::from_millis(self.success_reset_ms)
    }

    pub fn receipt_poll(&self) -> Duration {
        Duration::from_millis(self.receipt_poll_ms)
    }

    pub fn pre_submit_timeout(&self) -> Option<Duration> {
        self.pre_submit_timeout_ms.map(Duration::from_millis)
    }
}

/// Global configuration instance (initialized once at startup).
static CONFIG: OnceLock<DexConfig> = OnceLock::new();

/// Load, validate and install the global configuration.
///
/// # Errors
///
/// Returns an error if an override is malformed, validation fails, or the
/// config has already been initialized.
pub fn init_config() -> Result<&'static DexConfig, ConfigError> {
    install(DexConfig::from_env()?)
}

/// Install an explicit configuration (e.g. parsed with [`DexConfig::from_json`]).
pub fn install(config: DexConfig) -> Result<&'static DexConfig, ConfigError> {
    config.validate()?;
    CONFIG
        .set(config)
        .map_err(|_| ConfigError::AlreadyInitialized)?;
    Ok(dex_config())
}

/// Get a reference to the global configuration.
pub fn dex_config() -> &'static DexConfig {
    CONFIG.get_or_init(DexConfig::default)
}
