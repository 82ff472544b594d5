//! # Swap Workflow
//!
//! The central state machine:
//!
//! ```text
//! Validating → CheckingNetwork → CheckingAllowance → Approving → Swapping → Confirming
//!      │              │                 │ (token input only)
//!      └──────────────┴─────────────────┴──── any failure ──▶ Err(SwapError)
//! ```
//!
//! Each step is a suspension point; the caller observes progress through the
//! `on_phase` callback. Validation and the network check happen before a
//! signer is requested, so a bad form or a wrong chain never reaches the
//! contracts.
//!
//! The allowance is read once. After an approval is confirmed the swap is sent
//! without re-reading it.
//!
//! The optional pre-submission timeout covers the network check and the
//! allowance read only. Signer prompts, approvals and confirmation waits run
//! until the wallet or the chain answers.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use alloy_primitives::U256;
use futures::future::{self, Either};
use futures::pin_mut;

use super::{Delay, SwapPhase};
use crate::chain::{ClientFactory, ContractClient, PendingTx, TxReceipt, TxSigner, WalletBridge};
use crate::config::DexConfig;
use crate::error::{Result, SwapError};
use crate::model::{SwapRequest, ValidatedSwap};

/// Orchestrates one swap at a time against a wallet and a contract client.
pub struct SwapWorkflow<W, F, D> {
    wallet: W,
    factory: F,
    delay: D,
    config: Arc<DexConfig>,
}

impl<W, F, D> SwapWorkflow<W, F, D>
where
    W: WalletBridge,
    F: ClientFactory<W::Signer>,
    D: Delay,
{
    pub fn new(wallet: W, factory: F, delay: D, config: Arc<DexConfig>) -> Self {
        Self {
            wallet,
            factory,
            delay,
            config,
        }
    }

    pub fn wallet(&self) -> &W {
        &self.wallet
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    pub fn config(&self) -> &DexConfig {
        &self.config
    }

    /// Run the whole workflow for one request.
    pub async fn execute(
        &self,
        request: &SwapRequest,
        on_phase: &mut dyn FnMut(SwapPhase),
    ) -> Result<TxReceipt> {
        on_phase(SwapPhase::Validating);
        let swap = request.validate(&self.config.tokens)?;
        tracing::debug!(mode = ?swap.mode(), amount = %swap.amount(), "swap request validated");

        on_phase(SwapPhase::CheckingNetwork);
        let chain_id = self
            .bounded("checking the network", self.wallet.current_network())
            .await?;
        if chain_id != self.config.chain_id {
            tracing::warn!(expected = self.config.chain_id, actual = chain_id, "wrong network");
            return Err(SwapError::WrongNetwork {
                expected: self.config.chain_id,
                actual: chain_id,
                network: self.config.chain_name.clone(),
            });
        }

        // Not bounded: the wallet may be showing an account prompt.
        let signer = self.wallet.signer().await?;
        let owner = signer.address();
        let client = self.factory.bind(signer);
        let exchange = self.config.dex_address;

        if let Some((token, amount)) = swap.spend() {
            on_phase(SwapPhase::CheckingAllowance);
            let allowance = self
                .bounded("checking the allowance", async {
                    client
                        .allowance(token.address, owner, exchange)
                        .await
                        .map_err(SwapError::from_allowance)
                })
                .await?;
            tracing::debug!(token = %token.ticker, %allowance, %amount, "allowance read");

            if allowance < amount {
                on_phase(SwapPhase::Approving);
                tracing::info!(token = %token.ticker, "approving unlimited allowance");
                let approval = client
                    .approve(token.address, exchange, U256::MAX)
                    .await
                    .map_err(SwapError::from_approval)?;
                approval.wait().await.map_err(SwapError::from_approval)?;
            }
        }

        on_phase(SwapPhase::Swapping);
        let pending = dispatch(&client, &swap).await.map_err(SwapError::from_swap)?;
        tracing::info!(hash = %pending.hash(), mode = ?swap.mode(), "swap submitted");

        on_phase(SwapPhase::Confirming);
        let receipt = pending.wait().await.map_err(SwapError::from_swap)?;
        tracing::info!(hash = %receipt.hash, block = ?receipt.block_number, "swap confirmed");
        Ok(receipt)
    }

    /// Apply the pre-submission timeout, when configured.
    async fn bounded<T>(
        &self,
        step: &'static str,
        fut: impl Future<Output = Result<T>>,
    ) -> Result<T> {
        let Some(limit) = self.config.pre_submit_timeout() else {
            return fut.await;
        };
        race(fut, self.delay.sleep(limit), step, limit).await
    }
}

async fn race<T>(
    fut: impl Future<Output = Result<T>>,
    timer: impl Future<Output = ()>,
    step: &'static str,
    limit: Duration,
) -> Result<T> {
    pin_mut!(fut);
    pin_mut!(timer);
    match future::select(fut, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => {
            tracing::warn!(step, ?limit, "pre-submission step timed out");
            Err(SwapError::Timeout(step))
        }
    }
}

/// Exactly one exchange call per mode.
async fn dispatch<C: ContractClient>(
    client: &C,
    swap: &ValidatedSwap,
) -> std::result::Result<PendingTx, crate::error::ChainError> {
    match swap {
        ValidatedSwap::NativeToToken { token_out, value } => {
            client.eth_to_token(token_out.address, *value).await
        }
        ValidatedSwap::TokenToNative { token_in, amount } => {
            client.token_to_eth(token_in.address, *amount).await
        }
        ValidatedSwap::TokenToToken {
            token_in,
            token_out,
            amount,
        } => {
            client
                .token_to_token(token_in.address, token_out.address, *amount)
                .await
        }
    }
}
