//! Toast notifications for upload results and validation failures.
//!
//! Driven by the controller's notice signal; auto-dismissal is handled by
//! the controller's notice timer.

use leptos::prelude::*;

use crate::app::{AppContext, NoticeKind};

stylance::import_crate_style!(css, "src/components/browser/toast.module.css");

#[component]
pub fn Toast() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let notice = ctx.browser.notice;

    view! {
        {move || notice.get().map(|n| {
            let class = match n.kind {
                NoticeKind::Success => format!("{} {}", css::toast, css::success),
                NoticeKind::Error => format!("{} {}", css::toast, css::error),
            };
            let dismiss = move |_: leptos::ev::MouseEvent| notice.set(None);
            view! {
                <div class=class role="status">
                    <span class=css::text>{n.text}</span>
                    <button class=css::closeButton on:click=dismiss>"Close"</button>
                </div>
            }
        })}
    }
}
