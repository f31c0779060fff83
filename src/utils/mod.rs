//! Utility modules for DOM access and display formatting.

pub mod dom;
pub mod format;
