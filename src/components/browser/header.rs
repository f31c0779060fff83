//! Browser header component.
//!
//! Back navigation, current path label, upload progress, and the upload
//! action wired to a hidden file input.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::UPLOAD_ACCEPT;

stylance::import_crate_style!(css, "src/components/browser/browser.module.css");

/// Browser header with navigation and the upload action.
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let state = ctx.browser.state;

    let current_path = Signal::derive(move || state.with(|s| s.current_path.clone()));
    let can_go_back = Signal::derive(move || state.with(|s| !s.history.is_empty()));
    let upload_progress = ctx.browser.upload_progress;

    let input_ref = NodeRef::<leptos::html::Input>::new();

    let on_back = move |_: leptos::ev::MouseEvent| ctx.browser.back();

    let on_upload_click = move |_: leptos::ev::MouseEvent| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_file_chosen = move |_: leptos::ev::Event| {
        let Some(input) = input_ref.get() else {
            return;
        };
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            ctx.browser.upload(file);
        }
        // Reset so picking the same file again re-fires the change event.
        input.set_value("");
    };

    view! {
        <header class=css::header>
            <button
                class=move || {
                    if can_go_back.get() {
                        css::navButton.to_string()
                    } else {
                        format!("{} {}", css::navButton, css::navButtonDisabled)
                    }
                }
                on:click=on_back
                disabled=move || !can_go_back.get()
                title="Go back"
            >
                <Icon icon=ic::CHEVRON_LEFT />
            </button>

            <div class=css::pathLabel title=move || current_path.get()>
                {move || current_path.get()}
            </div>

            <div class=css::actions>
                {move || upload_progress.get().map(|pct| view! {
                    <span class=css::uploadProgress>
                        {format!("Uploading {}%", pct)}
                    </span>
                })}
                <button class=css::actionButton on:click=on_upload_click title="Upload file">
                    <Icon icon=ic::UPLOAD />
                    <span class=css::actionLabel>"Upload"</span>
                </button>
            </div>

            <input
                node_ref=input_ref
                type="file"
                accept=UPLOAD_ACCEPT
                class=css::hiddenInput
                on:change=on_file_chosen
            />
        </header>
    }
}
