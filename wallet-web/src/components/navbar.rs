//! Navigation Bar Component

use leptos::prelude::*;
use lib_core::ViewState;

use crate::state::swap::use_swap_context;
use crate::utils::constants::HOODS_LOGO;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_swap_context();
    let state = ctx.view;

    view! {
        <nav class="nav-bar">
            <div class="logo-section">
                <img src=HOODS_LOGO alt="Hoods Dex" class="hoods-logo"/>
                <span class="brand-name">"Hoods Dex"</span>
            </div>
            <div class="nav-actions">
                <button class="theme-toggle" on:click=move |_| state.update(ViewState::toggle_theme)>
                    {move || state.with(|s| s.theme().toggle_icon())}
                </button>
                <button class="connect-btn" on:click=move |_| ctx.connect()>
                    {move || state.with(ViewState::connect_label)}
                </button>
            </div>
        </nav>
    }
}
