use std::cell::RefCell;
use std::rc::Rc;

use super::{Delay, SwapWorkflow};
use crate::chain::{ClientFactory, WalletBridge};
use crate::error::SwapError;
use crate::view::{NoticeKind, ViewState};

/// Notice shown when a swap is submitted without an injected wallet.
pub const NO_WALLET_NOTICE: &str = "No wallet detected";

/// Notice shown once the wallet grants account access.
pub const CONNECTED_NOTICE: &str = "Wallet connected";

/// Notice shown when connecting fails for any reason other than a missing wallet.
pub const CONNECT_FAILED_NOTICE: &str = "Failed to connect wallet";

/// Somewhere the [`ViewState`] lives.
///
/// `update` returns `None` when the store is gone (e.g. a disposed signal).
pub trait ViewStore {
    fn update<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> Option<R>;
}

impl ViewStore for Rc<RefCell<ViewState>> {
    fn update<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Connects the page's buttons to the workflow.
pub struct SwapController<S, W, F, D> {
    store: S,
    workflow: SwapWorkflow<W, F, D>,
}

impl<S, W, F, D> SwapController<S, W, F, D>
where
    S: ViewStore,
    W: WalletBridge,
    F: ClientFactory<W::Signer>,
    D: Delay,
{
    pub fn new(store: S, workflow: SwapWorkflow<W, F, D>) -> Self {
        Self { store, workflow }
    }

    /// Run one swap from the current form contents.
    pub async fn submit(&self) {
        if !self.workflow.wallet().is_available() {
            tracing::warn!("submit without an injected wallet");
            self.store
                .update(|state| state.set_notice(NoticeKind::Error, NO_WALLET_NOTICE));
            return;
        }

        let Some(request) = self.store.update(ViewState::begin_submit).flatten() else {
            tracing::debug!("swap already in flight, submit ignored");
            return;
        };

        let store = &self.store;
        let outcome = self
            .workflow
            .execute(&request, &mut |phase| {
                tracing::debug!(?phase, "swap phase");
                store.update(|state| state.set_phase(phase));
            })
            .await;

        if let Err(err) = &outcome {
            if err.is_pre_chain() {
                tracing::warn!(error = %err, "swap rejected");
            } else {
                tracing::error!(error = %err, "swap failed");
            }
        }

        let Some(ticket) = self.store.update(|state| state.finish(&outcome)).flatten() else {
            return;
        };
        self.workflow
            .delay()
            .sleep(self.workflow.config().success_reset())
            .await;
        self.store.update(|state| state.revert_status(ticket));
    }

    /// Ask the wallet for account access and remember the account.
    pub async fn connect(&self) {
        match self.workflow.wallet().connect().await {
            Ok(account) => {
                tracing::info!(%account, "wallet connected");
                self.store.update(|state| {
                    state.set_account(account);
                    state.set_notice(NoticeKind::Info, CONNECTED_NOTICE);
                });
            }
            Err(err) => {
                tracing::warn!(error = %err, "wallet connection failed");
                let message = match err {
                    SwapError::NoWallet => err.to_string(),
                    _ => CONNECT_FAILED_NOTICE.to_string(),
                };
                self.store
                    .update(|state| state.set_notice(NoticeKind::Error, message));
            }
        }
    }
}
