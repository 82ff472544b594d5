use leptos::prelude::*;

use crate::utils::constants::{AUTHOR_HANDLE, GITHUB_LOGO, GITHUB_URL};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"Built by " {AUTHOR_HANDLE}</p>
            <div class="social-links">
                <a href=GITHUB_URL target="_blank" rel="noopener noreferrer">
                    <img src=GITHUB_LOGO alt="GitHub" class="social-icon"/>
                </a>
            </div>
        </footer>
    }
}
