//! Swap direction selector

use leptos::prelude::*;
use lib_core::SwapMode;

use crate::state::swap::use_swap_context;

#[component]
pub fn ModeToggle() -> impl IntoView {
    let state = use_swap_context().view;

    view! {
        <div class="mode-toggle">
            {SwapMode::ALL
                .into_iter()
                .map(|mode| {
                    view! {
                        <button
                            class:active=move || state.with(|s| s.mode() == mode)
                            on:click=move |_| state.update(|s| s.set_mode(mode))
                        >
                            {mode.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
