//! Test doubles for the chain boundary.
//!
//! Every mock appends to one shared [`CallLog`], so a test can assert the exact
//! sequence of remote operations a swap produced.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use alloy_primitives::{address, Address, Bytes, TxHash, U256};
use async_trait::async_trait;
use lib_core::chain::{
    ClientFactory, ContractClient, PendingTx, ReceiptWatcher, TxReceipt, TxRequest, TxSigner,
    WalletBridge,
};
use lib_core::swap::{Delay, ViewStore};
use lib_core::{ChainError, DexConfig, SwapError, SwapWorkflow, ViewState};

pub const OWNER: Address = address!("d8dA6BF26964aF9D7eEd9e03E53415D37aA96045");
pub const TARGET_CHAIN: u64 = 46630;

pub fn approve_hash() -> TxHash {
    TxHash::with_last_byte(0xa1)
}

pub fn swap_hash() -> TxHash {
    TxHash::with_last_byte(0x5a)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Connect,
    Network,
    Signer,
    Allowance {
        token: Address,
        owner: Address,
        spender: Address,
    },
    Approve {
        token: Address,
        spender: Address,
        amount: U256,
    },
    EthToToken {
        token_out: Address,
        value: U256,
    },
    TokenToEth {
        token_in: Address,
        amount: U256,
    },
    TokenToToken {
        token_in: Address,
        token_out: Address,
        amount: U256,
    },
    Wait(TxHash),
}

pub type CallLog = Rc<RefCell<Vec<Call>>>;

/// Stay pending for `times` polls so a racing timer gets polled too.
async fn yield_times(times: usize) {
    for _ in 0..times {
        tokio::task::yield_now().await;
    }
}

// region:    --- Wallet

#[derive(Clone)]
pub struct MockWallet {
    pub available: bool,
    pub chain_id: u64,
    pub connect_result: Result<Address, SwapError>,
    /// Never answer the network query.
    pub network_hangs: bool,
    /// Times `signer()` yields before answering, like a wallet prompt.
    pub signer_yields: usize,
    pub log: CallLog,
}

#[async_trait(?Send)]
impl WalletBridge for MockWallet {
    type Signer = MockSigner;

    fn is_available(&self) -> bool {
        self.available
    }

    async fn connect(&self) -> Result<Address, SwapError> {
        self.log.borrow_mut().push(Call::Connect);
        if !self.available {
            return Err(SwapError::NoWallet);
        }
        self.connect_result.clone()
    }

    async fn signer(&self) -> Result<MockSigner, SwapError> {
        self.log.borrow_mut().push(Call::Signer);
        yield_times(self.signer_yields).await;
        Ok(MockSigner { address: OWNER })
    }

    async fn current_network(&self) -> Result<u64, SwapError> {
        self.log.borrow_mut().push(Call::Network);
        if self.network_hangs {
            futures::future::pending::<()>().await;
        }
        Ok(self.chain_id)
    }
}

/// Only its address is used; the mock contracts never reach it.
#[derive(Clone)]
pub struct MockSigner {
    pub address: Address,
}

#[async_trait(?Send)]
impl ReceiptWatcher for MockSigner {
    async fn receipt(&self, hash: TxHash) -> Result<TxReceipt, ChainError> {
        Err(ChainError::Decode(format!("no receipt for {hash}")))
    }
}

#[async_trait(?Send)]
impl TxSigner for MockSigner {
    fn address(&self) -> Address {
        self.address
    }

    async fn call(&self, _to: Address, _data: Bytes) -> Result<Bytes, ChainError> {
        Err(ChainError::Decode("unexpected eth_call".to_string()))
    }

    async fn send(&self, _tx: TxRequest) -> Result<TxHash, ChainError> {
        Err(ChainError::Decode("unexpected send".to_string()))
    }
}

// endregion: --- Wallet

// region:    --- Contracts

#[derive(Clone)]
pub struct MockContracts {
    pub allowance: Result<U256, ChainError>,
    pub approve_send: Result<(), ChainError>,
    pub approve_mined: bool,
    pub swap_send: Result<(), ChainError>,
    pub swap_mined: bool,
    /// Times each receipt wait yields before the transaction is mined.
    pub receipt_yields: usize,
    pub log: CallLog,
}

impl MockContracts {
    fn pending(&self, hash: TxHash, success: bool) -> PendingTx {
        PendingTx::new(
            hash,
            MockWatcher {
                success,
                yields: self.receipt_yields,
                log: self.log.clone(),
            },
        )
    }

    fn swap(&self, call: Call) -> Result<PendingTx, ChainError> {
        self.log.borrow_mut().push(call);
        self.swap_send.clone()?;
        Ok(self.pending(swap_hash(), self.swap_mined))
    }
}

#[async_trait(?Send)]
impl ContractClient for MockContracts {
    async fn allowance(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
    ) -> Result<U256, ChainError> {
        self.log.borrow_mut().push(Call::Allowance {
            token,
            owner,
            spender,
        });
        self.allowance.clone()
    }

    async fn approve(
        &self,
        token: Address,
        spender: Address,
        amount: U256,
    ) -> Result<PendingTx, ChainError> {
        self.log.borrow_mut().push(Call::Approve {
            token,
            spender,
            amount,
        });
        self.approve_send.clone()?;
        Ok(self.pending(approve_hash(), self.approve_mined))
    }

    async fn eth_to_token(&self, token_out: Address, value: U256) -> Result<PendingTx, ChainError> {
        self.swap(Call::EthToToken { token_out, value })
    }

    async fn token_to_eth(&self, token_in: Address, amount: U256) -> Result<PendingTx, ChainError> {
        self.swap(Call::TokenToEth { token_in, amount })
    }

    async fn token_to_token(
        &self,
        token_in: Address,
        token_out: Address,
        amount: U256,
    ) -> Result<PendingTx, ChainError> {
        self.swap(Call::TokenToToken {
            token_in,
            token_out,
            amount,
        })
    }
}

pub struct MockWatcher {
    success: bool,
    yields: usize,
    log: CallLog,
}

#[async_trait(?Send)]
impl ReceiptWatcher for MockWatcher {
    async fn receipt(&self, hash: TxHash) -> Result<TxReceipt, ChainError> {
        self.log.borrow_mut().push(Call::Wait(hash));
        yield_times(self.yields).await;
        Ok(TxReceipt {
            hash,
            success: self.success,
            block_number: Some(7),
        })
    }
}

pub struct MockFactory {
    pub contracts: MockContracts,
}

impl ClientFactory<MockSigner> for MockFactory {
    type Client = MockContracts;

    fn bind(&self, _signer: MockSigner) -> MockContracts {
        self.contracts.clone()
    }
}

// endregion: --- Contracts

// region:    --- Delay and store

/// Returns immediately and remembers what it was asked to wait for.
#[derive(Clone, Default)]
pub struct InstantDelay {
    pub slept: Rc<RefCell<Vec<Duration>>>,
}

#[async_trait(?Send)]
impl Delay for InstantDelay {
    async fn sleep(&self, duration: Duration) {
        self.slept.borrow_mut().push(duration);
    }
}

/// A view store that records the status label after every update.
#[derive(Clone, Default)]
pub struct RecordingStore {
    pub state: Rc<RefCell<ViewState>>,
    pub labels: Rc<RefCell<Vec<&'static str>>>,
}

impl RecordingStore {
    /// Labels with consecutive duplicates removed.
    pub fn label_changes(&self) -> Vec<&'static str> {
        let mut labels = self.labels.borrow().clone();
        labels.dedup();
        labels
    }
}

impl ViewStore for RecordingStore {
    fn update<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> Option<R> {
        let mut state = self.state.borrow_mut();
        let out = f(&mut state);
        self.labels.borrow_mut().push(state.status().label());
        Some(out)
    }
}

// endregion: --- Delay and store

/// Mocks with sensible defaults: right chain, zero allowance, every
/// transaction mined successfully.
pub struct Harness {
    pub log: CallLog,
    pub wallet: MockWallet,
    pub contracts: MockContracts,
    pub delay: InstantDelay,
    pub config: DexConfig,
}

impl Harness {
    pub fn new() -> Self {
        let log = CallLog::default();
        Self {
            wallet: MockWallet {
                available: true,
                chain_id: TARGET_CHAIN,
                connect_result: Ok(OWNER),
                network_hangs: false,
                signer_yields: 0,
                log: log.clone(),
            },
            contracts: MockContracts {
                allowance: Ok(U256::ZERO),
                approve_send: Ok(()),
                approve_mined: true,
                swap_send: Ok(()),
                swap_mined: true,
                receipt_yields: 0,
                log: log.clone(),
            },
            delay: InstantDelay::default(),
            config: DexConfig::default(),
            log,
        }
    }

    pub fn workflow(&self) -> SwapWorkflow<MockWallet, MockFactory, InstantDelay> {
        SwapWorkflow::new(
            self.wallet.clone(),
            MockFactory {
                contracts: self.contracts.clone(),
            },
            self.delay.clone(),
            Arc::new(self.config.clone()),
        )
    }

    pub fn token(&self, ticker: &str) -> Address {
        self.config.tokens.address_of(ticker).expect("token is registered")
    }

    pub fn dex(&self) -> Address {
        self.config.dex_address
    }

    pub fn calls(&self) -> Vec<Call> {
        self.log.borrow().clone()
    }
}
