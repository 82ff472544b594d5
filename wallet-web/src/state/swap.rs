//! Swap page state management

use std::sync::Arc;

use leptos::prelude::*;
use lib_core::chain::DexBinding;
use lib_core::swap::ViewStore;
use lib_core::{dex_config, SwapController, SwapWorkflow, ViewState};

use crate::services::{BrowserDelay, BrowserWallet};

pub type BrowserController = SwapController<SwapContext, BrowserWallet, DexBinding, BrowserDelay>;

/// Global swap page context
#[derive(Clone, Copy)]
pub struct SwapContext {
    pub view: RwSignal<ViewState>,
}

impl SwapContext {
    pub fn new() -> Self {
        Self {
            view: RwSignal::new(ViewState::new()),
        }
    }

    /// A controller over this context and the injected wallet.
    pub fn controller(&self) -> BrowserController {
        let config = dex_config();
        let workflow = SwapWorkflow::new(
            BrowserWallet::new(config),
            DexBinding::from_config(config),
            BrowserDelay,
            Arc::new(config.clone()),
        );
        SwapController::new(*self, workflow)
    }

    pub fn submit(&self) {
        let controller = self.controller();
        leptos::task::spawn_local(async move {
            controller.submit().await;
        });
    }

    pub fn connect(&self) {
        let controller = self.controller();
        leptos::task::spawn_local(async move {
            controller.connect().await;
        });
    }
}

impl Default for SwapContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewStore for SwapContext {
    fn update<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> Option<R> {
        self.view.try_update(f)
    }
}

pub fn provide_swap_context() -> SwapContext {
    let context = SwapContext::new();
    provide_context(context);
    context
}

pub fn use_swap_context() -> SwapContext {
    expect_context::<SwapContext>()
}
