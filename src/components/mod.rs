//! UI components built with Leptos.
//!
//! - [`browser`] - the IFS file browser view
//! - [`icons`] - centralized icon definitions (change theme in config.rs)

pub mod browser;
pub mod icons;

pub use browser::Browser;
