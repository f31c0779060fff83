//! Main browser component.
//!
//! The file explorer view: header, inline error banner, file list, the
//! tabular preview overlay, and the toast area.

use leptos::prelude::*;

use super::file_list::FileList;
use super::header::Header;
use super::preview::PreviewModal;
use super::toast::Toast;
use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/browser/browser.module.css");

/// File browser view component.
#[component]
pub fn Browser() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let state = ctx.browser.state;

    let last_error = Signal::derive(move || state.with(|s| s.last_error.clone()));
    let is_loading = Signal::derive(move || state.with(|s| s.is_loading));
    let preview_open = Signal::derive(move || state.with(|s| s.preview.is_some()));

    view! {
        <div class=css::browser>
            <Header />

            {move || last_error.get().map(|err| view! {
                <div class=css::errorBanner role="alert">{err}</div>
            })}

            <div class=css::body>
                <Show
                    when=move || !is_loading.get()
                    fallback=|| view! { <div class=css::loading>"Loading..."</div> }
                >
                    <FileList />
                </Show>
            </div>

            <Show when=move || preview_open.get()>
                <PreviewModal />
            </Show>

            <Toast />
        </div>
    }
}
