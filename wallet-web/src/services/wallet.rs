//! EIP-1193 Wallet Integration via wasm-bindgen
//!
//! This module bridges the injected `window.ethereum` provider (MetaMask or any
//! EIP-1193 wallet) into the core library's [`WalletBridge`] and [`TxSigner`]
//! traits. All requests go through one JavaScript shim; parameters and results
//! cross the boundary as JSON-compatible values via `serde-wasm-bindgen`.

use std::time::Duration;

use alloy_primitives::{Address, Bytes, TxHash, U256, U64};
use async_trait::async_trait;
use js_sys::Reflect;
use lib_core::chain::{ReceiptWatcher, TxReceipt, TxRequest, TxSigner, WalletBridge};
use lib_core::{ChainError, DexConfig, SwapError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

// ============================================================================
// PROVIDER ACCESS (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
export function hasProvider() {
    return typeof window !== 'undefined' && !!window.ethereum;
}

export async function providerRequest(method, params) {
    return await window.ethereum.request({ method, params });
}
")]
extern "C" {
    fn hasProvider() -> bool;

    #[wasm_bindgen(catch)]
    async fn providerRequest(method: &str, params: JsValue) -> Result<JsValue, JsValue>;
}

/// Parameters for methods that take none.
const NO_PARAMS: [u8; 0] = [];

/// Send one JSON-RPC request to the injected provider.
async fn request<P, R>(method: &str, params: P) -> Result<R, ChainError>
where
    P: Serialize,
    R: DeserializeOwned,
{
    if !hasProvider() {
        return Err(ChainError::NoProvider);
    }
    let params = params
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| ChainError::Decode(format!("{method} params: {e}")))?;
    let result = providerRequest(method, params).await.map_err(provider_error)?;
    serde_wasm_bindgen::from_value(result)
        .map_err(|e| ChainError::Decode(format!("{method} result: {e}")))
}

/// Turn a thrown provider error (`{ code, message }`) into a [`ChainError`].
fn provider_error(err: JsValue) -> ChainError {
    let field = |name: &str| Reflect::get(&err, &JsValue::from_str(name)).ok();
    let code = field("code").and_then(|v| v.as_f64()).map(|c| c as i64);
    let message = field("message")
        .and_then(|v| v.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_default();
    ChainError::from_rpc(code, message)
}

/// Parse a hex quantity such as `"0xb626"`.
fn parse_quantity(raw: &str) -> Result<u64, ChainError> {
    let digits = raw
        .strip_prefix("0x")
        .ok_or_else(|| ChainError::Decode(format!("not a hex quantity: {raw}")))?;
    u64::from_str_radix(digits, 16).map_err(|e| ChainError::Decode(format!("{raw}: {e}")))
}

// ============================================================================
// RPC PAYLOADS
// ============================================================================

#[derive(Serialize)]
struct CallParams {
    to: Address,
    data: Bytes,
}

#[derive(Serialize)]
struct TransactionParams {
    from: Address,
    to: Address,
    data: Bytes,
    value: U256,
    #[serde(skip_serializing_if = "Option::is_none")]
    gas: Option<U64>,
}

impl From<TxRequest> for TransactionParams {
    fn from(tx: TxRequest) -> Self {
        Self {
            from: tx.from,
            to: tx.to,
            data: tx.data,
            value: tx.value,
            gas: tx.gas.map(U64::from),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RpcReceipt {
    transaction_hash: TxHash,
    status: Option<U64>,
    block_number: Option<U64>,
}

impl From<RpcReceipt> for TxReceipt {
    fn from(receipt: RpcReceipt) -> Self {
        Self {
            hash: receipt.transaction_hash,
            success: receipt.status == Some(U64::from(1)),
            block_number: receipt.block_number.map(|n| n.to::<u64>()),
        }
    }
}

// ============================================================================
// WALLET BRIDGE
// ============================================================================

/// The injected browser wallet.
#[derive(Clone, Copy, Debug)]
pub struct BrowserWallet {
    receipt_poll: Duration,
}

impl BrowserWallet {
    pub fn new(config: &DexConfig) -> Self {
        Self {
            receipt_poll: config.receipt_poll(),
        }
    }

    async fn primary_account(&self) -> Result<Address, SwapError> {
        let accounts: Vec<Address> = request("eth_requestAccounts", NO_PARAMS)
            .await
            .map_err(SwapError::from_wallet)?;
        accounts.first().copied().ok_or(SwapError::UserRejected)
    }
}

#[async_trait(?Send)]
impl WalletBridge for BrowserWallet {
    type Signer = BrowserSigner;

    fn is_available(&self) -> bool {
        hasProvider()
    }

    async fn connect(&self) -> Result<Address, SwapError> {
        self.primary_account().await
    }

    async fn signer(&self) -> Result<BrowserSigner, SwapError> {
        let address = self.primary_account().await?;
        Ok(BrowserSigner {
            address,
            receipt_poll: self.receipt_poll,
        })
    }

    async fn current_network(&self) -> Result<u64, SwapError> {
        let raw: String = request("eth_chainId", NO_PARAMS)
            .await
            .map_err(SwapError::from_wallet)?;
        parse_quantity(&raw).map_err(SwapError::from_wallet)
    }
}

/// Signs and submits through the provider on behalf of one account.
#[derive(Clone, Debug)]
pub struct BrowserSigner {
    address: Address,
    receipt_poll: Duration,
}

#[async_trait(?Send)]
impl ReceiptWatcher for BrowserSigner {
    async fn receipt(&self, hash: TxHash) -> Result<TxReceipt, ChainError> {
        loop {
            let receipt: Option<RpcReceipt> = request("eth_getTransactionReceipt", (hash,)).await?;
            if let Some(receipt) = receipt {
                return Ok(receipt.into());
            }
            gloo_timers::future::sleep(self.receipt_poll).await;
        }
    }
}

#[async_trait(?Send)]
impl TxSigner for BrowserSigner {
    fn address(&self) -> Address {
        self.address
    }

    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes, ChainError> {
        request("eth_call", (CallParams { to, data }, "latest")).await
    }

    async fn send(&self, tx: TxRequest) -> Result<TxHash, ChainError> {
        request("eth_sendTransaction", (TransactionParams::from(tx),)).await
    }
}
