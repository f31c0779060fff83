//! File list component for the browser view.
//!
//! Displays directory entries in list format, directories first, with
//! per-row view/download actions and the upload highlight.

use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{FileEntry, FileKind};
use crate::utils::format::format_size;

stylance::import_crate_style!(css, "src/components/browser/file_list.module.css");

/// Icon for an entry: folder, spreadsheet, or generic file.
fn entry_icon(entry: &FileEntry) -> IconData {
    if entry.is_directory {
        ic::FOLDER
    } else {
        match entry.kind {
            FileKind::Csv | FileKind::Excel => ic::FILE_SPREADSHEET,
            FileKind::Other => ic::FILE,
        }
    }
}

#[component]
pub fn FileList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let entries = Signal::derive(move || ctx.browser.state.with(|s| s.entries.clone()));

    view! {
        <div class=css::list role="grid" aria-label="File list">
            <div class=css::listHeader role="row">
                <span class=css::headerIcon></span>
                <span class=css::headerName>"Name"</span>
                <span class=css::headerDate>"Modified"</span>
                <span class=css::headerSize>"Size"</span>
                <span class=css::headerActions></span>
            </div>
            <For
                each=move || entries.get()
                key=|entry| (entry.path.clone(), entry.recently_uploaded)
                children=move |entry| view! { <FileListItem entry=entry /> }
            />
            <Show when=move || entries.with(|e| e.is_empty())>
                <div class=css::empty>"This folder is empty"</div>
            </Show>
        </div>
    }
}

#[component]
fn FileListItem(entry: FileEntry) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let icon = entry_icon(&entry);
    let is_dir = entry.is_directory;
    let previewable = entry.is_previewable();
    let size = if is_dir {
        String::new()
    } else {
        format_size(entry.size)
    };
    let modified = entry.last_modified.clone();

    let entry_for_open = entry.clone();
    // Double click: descend into directories, preview tabular files.
    let on_open = move |_: leptos::ev::MouseEvent| {
        if entry_for_open.is_directory {
            ctx.browser.enter(&entry_for_open);
        } else if entry_for_open.is_previewable() {
            ctx.browser.view(&entry_for_open);
        }
    };

    let entry_for_view = entry.clone();
    let on_view = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        ctx.browser.view(&entry_for_view);
    };

    let entry_for_download = entry.clone();
    let on_download = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        ctx.browser.download(&entry_for_download);
    };

    let row_class = if entry.recently_uploaded {
        format!("{} {}", css::listItem, css::recentlyUploaded)
    } else {
        css::listItem.to_string()
    };

    let name_class = if is_dir {
        format!("{} {}", css::name, css::nameDir)
    } else {
        css::name.to_string()
    };

    let display_name = if is_dir {
        format!("{}/", entry.name)
    } else {
        entry.name.clone()
    };

    let aria_label = if is_dir {
        format!("Folder: {}", entry.name)
    } else {
        format!("File: {}", entry.name)
    };

    view! {
        <div
            class=row_class
            on:dblclick=on_open
            role="row"
            tabindex="0"
            aria-label=aria_label
        >
            <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>
            <span class=name_class>{display_name}</span>
            <span class=css::date>{modified}</span>
            <span class=css::size>{size}</span>
            <span class=css::rowActions>
                {previewable.then(|| view! {
                    <button class=css::rowButton on:click=on_view title="View contents">
                        <Icon icon=ic::EYE />
                    </button>
                })}
                {(!is_dir).then(|| view! {
                    <button class=css::rowButton on:click=on_download title="Download">
                        <Icon icon=ic::DOWNLOAD />
                    </button>
                })}
            </span>
        </div>
    }
}
