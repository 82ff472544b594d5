//! # Chain Boundary
//!
//! Traits that separate the swap workflow from the browser wallet, so the
//! workflow can be driven by mocks on the host.
//!
//! - [`WalletBridge`]: account access, signer acquisition, active chain id
//! - [`TxSigner`]: a capability bound to one account (call, send, receipt)
//! - [`ContractClient`]: typed exchange and ERC20 calls (see [`client`])
//! - [`PendingTx`]: handle for a submitted transaction; `wait()` until mined

pub mod abi;
pub mod client;

use alloy_primitives::{Address, Bytes, TxHash, U256};
use async_trait::async_trait;

use crate::error::{ChainError, SwapError};

pub use client::{ClientFactory, ContractClient, DexBinding, DexClient};

/// A transaction to be signed and submitted by the wallet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxRequest {
    pub from: Address,
    pub to: Address,
    pub data: Bytes,
    /// Native value attached to the call; zero for non-payable calls.
    pub value: U256,
    /// Explicit gas limit; `None` lets the wallet estimate.
    pub gas: Option<u64>,
}

/// The parts of a mined receipt the workflow cares about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxReceipt {
    pub hash: TxHash,
    /// `true` when the receipt status is 1.
    pub success: bool,
    pub block_number: Option<u64>,
}

/// Something that can wait for a transaction to be mined.
#[async_trait(?Send)]
pub trait ReceiptWatcher {
    /// Suspend until the transaction is mined and return its receipt.
    async fn receipt(&self, hash: TxHash) -> Result<TxReceipt, ChainError>;
}

/// Signing capability for one account.
#[async_trait(?Send)]
pub trait TxSigner: ReceiptWatcher {
    fn address(&self) -> Address;

    /// Read-only call against the latest block.
    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes, ChainError>;

    /// Sign and submit; resolves once the wallet returns the hash.
    async fn send(&self, tx: TxRequest) -> Result<TxHash, ChainError>;
}

/// Adapter over the injected browser wallet.
#[async_trait(?Send)]
pub trait WalletBridge {
    type Signer: TxSigner + Clone + 'static;

    /// Whether a provider is injected at all.
    fn is_available(&self) -> bool;

    /// Request account access and return the primary account.
    async fn connect(&self) -> Result<Address, SwapError>;

    /// Acquire a signer for the connected account.
    async fn signer(&self) -> Result<Self::Signer, SwapError>;

    /// Chain id of the active network.
    async fn current_network(&self) -> Result<u64, SwapError>;
}

/// A submitted transaction.
pub struct PendingTx {
    hash: TxHash,
    watcher: Box<dyn ReceiptWatcher>,
}

impl PendingTx {
    pub fn new(hash: TxHash, watcher: impl ReceiptWatcher + 'static) -> Self {
        Self {
            hash,
            watcher: Box::new(watcher),
        }
    }

    pub fn hash(&self) -> TxHash {
        self.hash
    }

    /// Wait until mined. A failing receipt status becomes [`ChainError::Reverted`].
    pub async fn wait(self) -> Result<TxReceipt, ChainError> {
        let receipt = self.watcher.receipt(self.hash).await?;
        if receipt.success {
            Ok(receipt)
        } else {
            Err(ChainError::Reverted {
                hash: receipt.hash,
                reason: None,
            })
        }
    }
}

impl std::fmt::Debug for PendingTx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingTx").field("hash", &self.hash).finish()
    }
}
