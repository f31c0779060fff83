//! Data models for the IFS browser.
//!
//! - [`FileEntry`], [`FileKind`] - directory listing entries
//! - [`TablePreview`] - parsed tabular file content for the preview

mod file;
mod preview;

pub use file::{FileEntry, FileKind};
pub use preview::TablePreview;
