//! Dismissible notice area above the form

use leptos::prelude::*;
use lib_core::view::NoticeKind;
use lib_core::ViewState;

use crate::state::swap::use_swap_context;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let state = use_swap_context().view;

    move || {
        state.with(|s| s.notice().cloned()).map(|notice| {
            let class = match notice.kind {
                NoticeKind::Info => "notice notice-info",
                NoticeKind::Error => "notice notice-error",
            };
            view! {
                <div class=class role="alert">
                    <span>{notice.message}</span>
                    <button class="notice-dismiss" on:click=move |_| state.update(ViewState::dismiss_notice)>
                        "×"
                    </button>
                </div>
            }
        })
    }
}
