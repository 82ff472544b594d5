//! Hoods Dex - Leptos Frontend

use leptos::prelude::*;

use crate::components::{Footer, Navbar};
use crate::pages::SwapPage;
use crate::state::swap::provide_swap_context;

#[component]
pub fn App() -> impl IntoView {
    let ctx = provide_swap_context();
    let theme_class = move || ctx.view.with(|s| s.theme().css_class());

    view! {
        <div class=theme_class>
            <Navbar/>
            <SwapPage/>
            <Footer/>
        </div>
    }
}
