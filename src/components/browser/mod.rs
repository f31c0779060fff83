//! File browser UI components.
//!
//! Components:
//! - [`Browser`] - main browser view
//! - `Header` - back navigation, current path, upload action
//! - `FileList` - directory listing rows
//! - `PreviewModal` - tabular CSV/Excel preview overlay
//! - `Toast` - transient notifications

#[allow(clippy::module_inception)]
mod browser;
mod file_list;
mod header;
mod preview;
mod toast;

pub use browser::Browser;
