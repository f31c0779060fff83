//! Root application module.
//!
//! Contains the main App component, AppContext definition, and the
//! BrowserContext controller following Leptos conventions.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::Browser;
use crate::config::{DEFAULT_PATH, HIGHLIGHT_DURATION_MS, NOTICE_DURATION_MS};
use crate::core::{BrowserState, validate_upload_name};
use crate::models::{FileEntry, TablePreview};
use crate::utils::dom;

// ============================================================================
// Notifications
// ============================================================================

/// Toast flavor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient toast notification (upload results, validation failures).
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
}

// ============================================================================
// BrowserContext
// ============================================================================

/// Browser controller: the reactive owner of [`BrowserState`].
///
/// All fields are signals or stored values, so the struct is `Copy` and
/// can be captured freely by event handlers and spawned futures.
/// Completion handlers never poke fields directly; they go through
/// [`BrowserState`] update methods, which keeps every mutation auditable
/// in one place.
#[derive(Clone, Copy)]
pub struct BrowserContext {
    pub state: RwSignal<BrowserState>,
    /// Current toast, if any.
    pub notice: RwSignal<Option<Notice>>,
    /// Upload percentage while an upload is in flight.
    pub upload_progress: RwSignal<Option<u32>>,
    /// Pending highlight-clear timer; replaced, never stacked.
    highlight_timer: StoredValue<Option<Timeout>, LocalStorage>,
    /// Pending toast auto-dismiss timer.
    notice_timer: StoredValue<Option<Timeout>, LocalStorage>,
    /// Listing sequence counter; only the latest request may apply.
    load_seq: StoredValue<u64>,
}

impl BrowserContext {
    /// Creates a new controller pointed at the default starting path.
    /// Nothing is loaded until [`refresh`](Self::refresh) is called.
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(BrowserState::new(DEFAULT_PATH)),
            notice: RwSignal::new(None),
            upload_progress: RwSignal::new(None),
            highlight_timer: StoredValue::new_local(None),
            notice_timer: StoredValue::new_local(None),
            load_seq: StoredValue::new(0),
        }
    }

    /// Load the entries of `path`, optionally highlighting a fresh upload.
    ///
    /// Each call takes a new sequence number; a response arriving after a
    /// newer call started is dropped wholesale, so the last request wins
    /// when the user navigates faster than the backend answers.
    pub fn load_files(self, path: String, just_uploaded: Option<String>) {
        let seq = self.load_seq.get_value() + 1;
        self.load_seq.set_value(seq);
        self.state.update(|s| s.begin_load());

        spawn_local(async move {
            let result = api::list(&path).await;
            if self.load_seq.get_value() != seq {
                return; // superseded by a newer navigation
            }
            match result {
                Ok(entries) => {
                    self.state
                        .update(|s| s.finish_load(entries, just_uploaded.as_deref()));
                    if self.state.with_untracked(|s| s.uploaded_name.is_some()) {
                        self.schedule_highlight_clear();
                    }
                }
                Err(e) => self
                    .state
                    .update(|s| s.fail(format!("Failed to load files: {}", e))),
            }
        });
    }

    /// Reload the current directory.
    pub fn refresh(self) {
        let path = self.state.with_untracked(|s| s.current_path.clone());
        self.load_files(path, None);
    }

    /// Navigate into a directory entry. No-op for files.
    pub fn enter(self, entry: &FileEntry) {
        if let Some(path) = self.state.try_update(|s| s.enter(entry)).flatten() {
            self.load_files(path, None);
        }
    }

    /// Navigate back to the previously visited path. No-op when the
    /// history is empty.
    pub fn back(self) {
        if let Some(path) = self.state.try_update(|s| s.back()).flatten() {
            self.load_files(path, None);
        }
    }

    /// Open the tabular preview for a CSV/Excel entry. No-op otherwise.
    pub fn view(self, entry: &FileEntry) {
        if !entry.is_previewable() {
            return;
        }
        let path = entry.path.clone();
        self.state.update(|s| s.begin_request());

        spawn_local(async move {
            match api::read_tabular(&path).await {
                Ok(rows) => self
                    .state
                    .update(|s| s.show_preview(TablePreview::from_rows(rows))),
                Err(e) => self
                    .state
                    .update(|s| s.fail(format!("Failed to read file: {}", e))),
            }
        });
    }

    pub fn close_preview(self) {
        self.state.update(|s| s.close_preview());
    }

    /// Download a file entry and trigger a client-side save. No-op for
    /// directories.
    pub fn download(self, entry: &FileEntry) {
        if entry.is_directory {
            return;
        }
        let path = entry.path.clone();
        let name = entry.name.clone();

        spawn_local(async move {
            match api::download(&path).await {
                Ok((bytes, suggested)) => {
                    let file_name = suggested.unwrap_or(name);
                    if let Err(e) = dom::save_bytes(&bytes, &file_name) {
                        self.state
                            .update(|s| s.fail(format!("Failed to download file: {}", e)));
                    }
                }
                Err(e) => self
                    .state
                    .update(|s| s.fail(format!("Failed to download file: {}", e))),
            }
        });
    }

    /// Validate and upload a file into the current directory.
    ///
    /// Validation failures are reported as a toast and abort before any
    /// request. On success the listing is reloaded with the uploaded name
    /// so the new entry is highlighted at the head of the file group.
    pub fn upload(self, file: web_sys::File) {
        let name = file.name();
        if let Err(e) = validate_upload_name(&name) {
            self.notify(NoticeKind::Error, e.to_string());
            return;
        }

        let dest = self.state.with_untracked(|s| s.current_path.clone());
        self.state.update(|s| s.begin_request());
        self.upload_progress.set(Some(0));

        spawn_local(async move {
            let progress = self.upload_progress;
            let result = api::upload(&file, &dest, move |pct| progress.set(Some(pct))).await;
            self.upload_progress.set(None);

            match result {
                Ok(()) => {
                    self.notify(
                        NoticeKind::Success,
                        format!("File \"{}\" uploaded successfully", name),
                    );
                    self.load_files(dest, Some(name));
                }
                Err(e) => {
                    dom::console_warn(&format!("Upload failed: {}", e));
                    self.notify(NoticeKind::Error, format!("Upload failed: {}", e.detail()));
                    self.state.update(|s| s.finish_request());
                }
            }
        });
    }

    /// Show a toast, replacing any visible one and rearming its dismissal.
    pub fn notify(self, kind: NoticeKind, text: String) {
        self.notice.set(Some(Notice { text, kind }));
        let notice = self.notice;
        let timer = Timeout::new(NOTICE_DURATION_MS, move || notice.set(None));
        // Dropping the previous handle cancels it.
        self.notice_timer.update_value(|slot| *slot = Some(timer));
    }

    /// Arm the highlight-clear timer. A pending timer from a previous
    /// upload is cancelled by the handle swap, so timers replace instead
    /// of stacking.
    fn schedule_highlight_clear(self) {
        let state = self.state;
        let timer = Timeout::new(HIGHLIGHT_DURATION_MS, move || {
            state.update(|s| s.clear_highlight());
        });
        // A fired handle left in the slot is dropped on the next swap;
        // cancelling it then is a no-op.
        self.highlight_timer
            .update_value(|pending| *pending = Some(timer));
    }

    /// Drop pending timers; called on teardown.
    pub fn cancel_timers(self) {
        self.highlight_timer.set_value(None);
        self.notice_timer.set_value(None);
    }
}

impl Default for BrowserContext {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// component with `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// File browser controller.
    pub browser: BrowserContext,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            browser: BrowserContext::new(),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// Creates and provides the global AppContext, kicks off the initial
/// directory listing, and renders the browser view.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    // Initial listing runs once
    let started = StoredValue::new(false);
    Effect::new(move || {
        if !started.get_value() {
            started.set_value(true);
            ctx.browser.refresh();
        }
    });

    on_cleanup(move || ctx.browser.cancel_timers());

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    font-family: sans-serif;
                ">
                    <h1 style="color: #c62828; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <p style="color: #555; margin-bottom: 1rem;">
                        "An unexpected error occurred. Please try reloading the page."
                    </p>
                    <ul style="color: #c62828; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                </div>
            }
        >
            <Browser />
        </ErrorBoundary>
    }
}
