//! Token selector with logo, and the per-leg control that chooses between it
//! and the fixed native label.

use leptos::prelude::*;
use lib_core::model::Leg;
use lib_core::{dex_config, ViewState};

use crate::state::swap::use_swap_context;
use crate::utils::constants::NATIVE_SYMBOL;

/// Which row of the form a control belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Input,
    Output,
}

impl Side {
    fn leg(self, state: &ViewState) -> Leg {
        match self {
            Side::Input => state.input_leg(),
            Side::Output => state.output_leg(),
        }
    }

    fn selected(self, state: &ViewState) -> Option<String> {
        match self {
            Side::Input => state.token_in(),
            Side::Output => state.token_out(),
        }
        .map(str::to_string)
    }

    fn select(self, state: &mut ViewState, ticker: Option<String>) {
        match self {
            Side::Input => state.select_input(ticker),
            Side::Output => state.select_output(ticker),
        }
    }
}

/// Token selector when the leg is a token, otherwise the static native label.
#[component]
pub fn LegControl(side: Side) -> impl IntoView {
    let state = use_swap_context().view;
    let leg = Memo::new(move |_| state.with(|s| side.leg(s)));

    move || match leg.get() {
        Leg::Token => view! { <TokenSelect side=side/> }.into_any(),
        Leg::Native => view! { <div class="static-token">{NATIVE_SYMBOL}</div> }.into_any(),
    }
}

#[component]
pub fn TokenSelect(side: Side) -> impl IntoView {
    let state = use_swap_context().view;
    let selected = Memo::new(move |_| state.with(|s| side.selected(s)));
    let logo = move || {
        selected.get().and_then(|ticker| dex_config().tokens.get(&ticker).map(|t| t.logo.clone()))
    };

    view! {
        <div class="token-select">
            {move || logo().map(|src| view! { <img class="token-logo" src=src alt=""/> })}
            <select
                prop:value=move || selected.get().unwrap_or_default()
                on:change=move |ev| {
                    let ticker = event_target_value(&ev);
                    state.update(|s| side.select(s, Some(ticker)));
                }
            >
                <option value="" selected=move || selected.with(Option::is_none)>
                    "Select token"
                </option>
                {dex_config()
                    .tokens
                    .iter()
                    .map(|token| {
                        let ticker = token.ticker.clone();
                        let current = ticker.clone();
                        let value = ticker.clone();
                        let is_selected =
                            move || selected.with(|s| s.as_deref() == Some(current.as_str()));
                        view! {
                            <option value=value selected=is_selected>
                                {ticker}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
