//! Tabular preview overlay for CSV/Excel files.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::TablePreview;

stylance::import_crate_style!(css, "src/components/browser/preview.module.css");

/// Modal overlay showing the parsed rows of the previewed file.
#[component]
pub fn PreviewModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Rendered only while the preview is open, so the unwrap_or_default
    // covers the close transition frame.
    let preview = Signal::derive(move || {
        ctx.browser
            .state
            .with(|s| s.preview.clone().unwrap_or_default())
    });

    let on_close = move |_: leptos::ev::MouseEvent| ctx.browser.close_preview();

    let handle_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ctx.browser.close_preview();
        }
    };

    view! {
        <div class=css::overlay on:keydown=handle_keydown tabindex="-1">
            <div class=css::dialog role="dialog" aria-label="File preview">
                <div class=css::dialogHeader>
                    <span class=css::dialogTitle>"File contents"</span>
                    <button class=css::closeButton on:click=on_close title="Close (Esc)">
                        <Icon icon=ic::CLOSE />
                    </button>
                </div>
                <div class=css::tableWrapper>
                    <Show
                        when=move || preview.with(|p| !p.rows.is_empty())
                        fallback=|| view! { <div class=css::empty>"This file has no rows"</div> }
                    >
                        <PreviewTable preview=preview />
                    </Show>
                </div>
            </div>
        </div>
    }
}

#[component]
fn PreviewTable(preview: Signal<TablePreview>) -> impl IntoView {
    view! {
        <table class=css::table>
            <thead>
                <tr>
                    <For
                        each=move || preview.get().columns
                        key=|column| column.clone()
                        children=move |column| view! { <th>{column}</th> }
                    />
                </tr>
            </thead>
            <tbody>
                {move || {
                    let preview = preview.get();
                    preview
                        .rows
                        .iter()
                        .map(|row| {
                            let cells = preview
                                .columns
                                .iter()
                                .map(|column| view! { <td>{preview.cell(row, column)}</td> })
                                .collect_view();
                            view! { <tr>{cells}</tr> }
                        })
                        .collect_view()
                }}
            </tbody>
        </table>
    }
}
