//! Hoods Dex browser front end
//!
//! Swaps the native coin and tokenised stocks on the Hoods exchange through
//! the injected EIP-1193 wallet. All swap logic lives in `lib-core`; this crate
//! is the Leptos view and the wallet bridge.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());

    match lib_core::init_config() {
        Ok(config) => log::info!(
            "Hoods Dex starting: {} (chain {}), exchange {}",
            config.chain_name,
            config.chain_id,
            config.dex_address
        ),
        Err(e) => log::error!("Build-time configuration rejected, using defaults: {}", e),
    }

    hide_loading_screen();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static loading screen from `index.html`.
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document available");
        return;
    };
    let Some(loading) = document.get_element_by_id("leptos-loading") else {
        return;
    };
    if let Some(element) = loading.dyn_ref::<HtmlElement>() {
        if let Err(e) = element.class_list().add_1("hidden") {
            log::warn!("Could not hide loading screen: {:?}", e);
        }
    }
}
