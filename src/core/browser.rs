//! Browser state machine for the IFS explorer.
//!
//! Owns everything the view renders: current path, navigation history,
//! sorted entries, preview, loading and error flags. All mutation goes
//! through the methods here so the async completion handlers in `app.rs`
//! stay thin and the interesting transitions can be tested on the host.

use crate::models::{FileEntry, TablePreview};

/// State of the file browser view.
#[derive(Clone, Debug, Default)]
pub struct BrowserState {
    /// Directory currently shown.
    pub current_path: String,
    /// Paths visited on the way here; push on descend, pop on back.
    pub history: Vec<String>,
    /// Entries of `current_path`, directories first, then files by name.
    pub entries: Vec<FileEntry>,
    pub is_loading: bool,
    /// Recoverable error shown inline above the list.
    pub last_error: Option<String>,
    /// Open tabular preview; `Some` means the preview is visible.
    pub preview: Option<TablePreview>,
    /// Name of the last uploaded file, kept until the highlight expires.
    pub uploaded_name: Option<String>,
}

impl BrowserState {
    pub fn new(start_path: impl Into<String>) -> Self {
        Self {
            current_path: start_path.into(),
            ..Self::default()
        }
    }

    /// Start a listing request: loading on, stale error and preview gone.
    pub fn begin_load(&mut self) {
        self.is_loading = true;
        self.last_error = None;
        self.preview = None;
    }

    /// Install a fresh listing.
    ///
    /// Entries are sorted directories-first; when `just_uploaded` names a
    /// file present in the listing, that file is marked and moved to the
    /// head of the file group. An absent name places nothing.
    pub fn finish_load(&mut self, mut entries: Vec<FileEntry>, just_uploaded: Option<&str>) {
        sort_entries(&mut entries);
        self.uploaded_name = None;
        if let Some(name) = just_uploaded
            && place_uploaded(&mut entries, name)
        {
            self.uploaded_name = Some(name.to_string());
        }
        self.entries = entries;
        self.is_loading = false;
    }

    /// A request failed: record the error, keep everything else intact.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
        self.is_loading = false;
    }

    /// Start a non-listing request (preview read, upload).
    pub fn begin_request(&mut self) {
        self.is_loading = true;
    }

    /// A request finished without touching any other state (upload failure
    /// path, where the error goes to a toast instead of `last_error`).
    pub fn finish_request(&mut self) {
        self.is_loading = false;
    }

    /// Descend into a directory entry.
    ///
    /// Returns the path to list next, or `None` when the entry is a file
    /// (in which case nothing changed).
    pub fn enter(&mut self, entry: &FileEntry) -> Option<String> {
        if !entry.is_directory {
            return None;
        }
        let previous = std::mem::replace(&mut self.current_path, entry.path.clone());
        self.history.push(previous);
        Some(self.current_path.clone())
    }

    /// Go back to the most recently visited path.
    ///
    /// Returns the path to list next, or `None` when the history is empty
    /// (in which case nothing changed).
    pub fn back(&mut self) -> Option<String> {
        let previous = self.history.pop()?;
        self.current_path = previous.clone();
        Some(previous)
    }

    /// Install a successful tabular read.
    pub fn show_preview(&mut self, preview: TablePreview) {
        self.preview = Some(preview);
        self.is_loading = false;
    }

    pub fn close_preview(&mut self) {
        self.preview = None;
    }

    /// Drop the upload highlight.
    ///
    /// Looks the entry up by name again so an entry that moved or vanished
    /// since the upload is tolerated; firing twice is a no-op.
    pub fn clear_highlight(&mut self) {
        if let Some(name) = self.uploaded_name.take()
            && let Some(entry) = self.entries.iter_mut().find(|e| e.name == name)
        {
            entry.recently_uploaded = false;
        }
    }
}

/// Sort entries: directories before files, then case-insensitive ascending
/// by name with the raw name as tiebreaker (a strict weak ordering).
pub fn sort_entries(entries: &mut [FileEntry]) {
    entries.sort_by(|a, b| {
        b.is_directory
            .cmp(&a.is_directory)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            .then_with(|| a.name.cmp(&b.name))
    });
}

/// Move the named file to the head of the file group and mark it as
/// recently uploaded. Returns whether a matching non-directory entry was
/// found. Expects `entries` to be sorted already.
pub fn place_uploaded(entries: &mut Vec<FileEntry>, name: &str) -> bool {
    let Some(pos) = entries
        .iter()
        .position(|e| !e.is_directory && e.name == name)
    else {
        return false;
    };
    let mut entry = entries.remove(pos);
    entry.recently_uploaded = true;
    let first_file = entries
        .iter()
        .position(|e| !e.is_directory)
        .unwrap_or(entries.len());
    entries.insert(first_file, entry);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FileKind;

    fn entry(name: &str, is_directory: bool, kind: FileKind) -> FileEntry {
        FileEntry {
            name: name.to_string(),
            path: format!("/home/test/{}", name),
            size: 128,
            last_modified: "2024-05-01 12:00:00".to_string(),
            is_directory,
            kind,
            recently_uploaded: false,
        }
    }

    fn dir(name: &str) -> FileEntry {
        entry(name, true, FileKind::Other)
    }

    fn file(name: &str) -> FileEntry {
        entry(name, false, FileKind::Csv)
    }

    fn names(state: &BrowserState) -> Vec<&str> {
        state.entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn directories_sort_before_files() {
        let mut state = BrowserState::new("/home/test");
        state.finish_load(vec![file("b"), dir("A"), file("a")], None);

        assert_eq!(names(&state), ["A", "a", "b"]);
        assert!(state.entries[0].is_directory);
        assert!(!state.is_loading);
    }

    #[test]
    fn name_order_is_case_insensitive_within_groups() {
        let mut state = BrowserState::new("/home/test");
        state.finish_load(
            vec![file("Zebra.csv"), file("apple.csv"), dir("beta"), dir("Alpha")],
            None,
        );

        assert_eq!(names(&state), ["Alpha", "beta", "apple.csv", "Zebra.csv"]);
    }

    #[test]
    fn uploaded_file_moves_to_head_of_file_group() {
        let mut state = BrowserState::new("/home/test");
        state.finish_load(
            vec![file("existing.csv"), dir("Dir2"), file("new.csv"), dir("Dir1")],
            Some("new.csv"),
        );

        assert_eq!(names(&state), ["Dir1", "Dir2", "new.csv", "existing.csv"]);
        let flagged: Vec<&str> = state
            .entries
            .iter()
            .filter(|e| e.recently_uploaded)
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(flagged, ["new.csv"]);
        assert_eq!(state.uploaded_name.as_deref(), Some("new.csv"));
    }

    #[test]
    fn uploaded_name_matching_a_directory_is_ignored() {
        let mut state = BrowserState::new("/home/test");
        state.finish_load(vec![dir("new.csv"), file("other.csv")], Some("new.csv"));

        assert_eq!(names(&state), ["new.csv", "other.csv"]);
        assert!(state.entries.iter().all(|e| !e.recently_uploaded));
        assert!(state.uploaded_name.is_none());
    }

    #[test]
    fn uploaded_name_absent_from_listing_places_nothing() {
        let mut state = BrowserState::new("/home/test");
        state.finish_load(vec![file("a.csv"), file("b.csv")], Some("ghost.csv"));

        assert_eq!(names(&state), ["a.csv", "b.csv"]);
        assert!(state.uploaded_name.is_none());
    }

    #[test]
    fn highlight_clear_is_idempotent() {
        let mut state = BrowserState::new("/home/test");
        state.finish_load(vec![file("new.csv"), dir("d")], Some("new.csv"));

        state.clear_highlight();
        state.clear_highlight();

        assert!(state.entries.iter().all(|e| !e.recently_uploaded));
        assert!(state.uploaded_name.is_none());
    }

    #[test]
    fn highlight_clear_tolerates_a_removed_entry() {
        let mut state = BrowserState::new("/home/test");
        state.finish_load(vec![file("new.csv")], Some("new.csv"));
        state.entries.clear();

        state.clear_highlight();

        assert!(state.uploaded_name.is_none());
    }

    #[test]
    fn enter_on_a_file_is_a_noop() {
        let mut state = BrowserState::new("/home/test");
        state.finish_load(vec![file("a.csv")], None);
        let before = state.entries.clone();

        assert_eq!(state.enter(&file("a.csv")), None);
        assert_eq!(state.current_path, "/home/test");
        assert!(state.history.is_empty());
        assert_eq!(state.entries, before);
    }

    #[test]
    fn enter_pushes_the_previous_path() {
        let mut state = BrowserState::new("/home/test");

        let next = state.enter(&dir("sub"));

        assert_eq!(next.as_deref(), Some("/home/test/sub"));
        assert_eq!(state.current_path, "/home/test/sub");
        assert_eq!(state.history, ["/home/test"]);
    }

    #[test]
    fn back_on_empty_history_is_a_noop() {
        let mut state = BrowserState::new("/home/test");
        state.finish_load(vec![file("a.csv")], None);
        let before = state.entries.clone();

        assert_eq!(state.back(), None);
        assert_eq!(state.current_path, "/home/test");
        assert_eq!(state.entries, before);
    }

    #[test]
    fn back_pops_the_most_recent_path() {
        let mut state = BrowserState::new("/home/test");
        state.enter(&dir("one"));
        state.enter(&dir("two"));

        assert_eq!(state.back().as_deref(), Some("/home/test/one"));
        assert_eq!(state.current_path, "/home/test/one");
        assert_eq!(state.back().as_deref(), Some("/home/test"));
        assert_eq!(state.back(), None);
    }

    #[test]
    fn begin_load_closes_the_preview_and_clears_the_error() {
        let mut state = BrowserState::new("/home/test");
        state.show_preview(TablePreview::default());
        state.fail("Failed to load files: boom");

        state.begin_load();

        assert!(state.is_loading);
        assert!(state.preview.is_none());
        assert!(state.last_error.is_none());
    }

    #[test]
    fn fail_keeps_previous_entries() {
        let mut state = BrowserState::new("/home/test");
        state.finish_load(vec![file("a.csv")], None);

        state.begin_load();
        state.fail("Failed to load files: boom");

        assert_eq!(names(&state), ["a.csv"]);
        assert_eq!(
            state.last_error.as_deref(),
            Some("Failed to load files: boom")
        );
        assert!(!state.is_loading);
    }

    #[test]
    fn preview_failure_leaves_the_open_preview_alone() {
        let mut state = BrowserState::new("/home/test");
        state.show_preview(TablePreview::default());

        state.begin_request();
        state.fail("Failed to read file: boom");

        assert!(state.preview.is_some());
        assert!(!state.is_loading);
    }
}
