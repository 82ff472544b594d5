//! Swap Page - the single swap card
//!
//! "You Pay" takes the amount and, for token input, the token to spend.
//! "You Receive" shows a display-only estimate and, for token output, the
//! token to buy. The action button is disabled while a swap is in flight.

use leptos::prelude::*;
use lib_core::ViewState;

use crate::components::{LegControl, ModeToggle, NoticeBanner, Side};
use crate::state::swap::use_swap_context;

#[component]
pub fn SwapPage() -> impl IntoView {
    let ctx = use_swap_context();
    let state = ctx.view;

    let on_amount = move |ev: leptos::ev::Event| {
        let amount = event_target_value(&ev);
        state.update(|s| {
            s.set_amount(amount);
        });
    };

    view! {
        <main class="main-content">
            <div class="swap-card">
                <h1>"Hoods Stocks"</h1>
                <ModeToggle/>
                <NoticeBanner/>

                <div class="input-box">
                    <label>"You Pay"</label>
                    <div class="input-row">
                        <input
                            type="number"
                            placeholder="0.00"
                            prop:value=move || state.with(|s| s.amount().to_string())
                            prop:disabled=move || state.with(ViewState::is_loading)
                            on:input=on_amount
                        />
                        <LegControl side=Side::Input/>
                    </div>
                </div>

                <div class="divider">"↓"</div>

                <div class="input-box">
                    <label>"You Receive (estimated)"</label>
                    <div class="input-row">
                        <input type="text" readonly=true prop:value=move || state.with(ViewState::estimated_receive)/>
                        <LegControl side=Side::Output/>
                    </div>
                </div>

                <button
                    class="action-btn"
                    disabled=move || !state.with(ViewState::can_submit)
                    on:click=move |_| ctx.submit()
                >
                    {move || state.with(ViewState::action_label)}
                </button>
            </div>
        </main>
    }
}
