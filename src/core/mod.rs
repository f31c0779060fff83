//! Core browser logic, kept free of web APIs so it tests on the host.
//!
//! This module provides:
//! - [`BrowserState`] - the file-list / navigation / preview state machine
//! - [`validate_upload_name`] - pre-request upload validation
//! - [`ApiError`] - request-level error taxonomy

mod browser;
pub mod error;
mod upload;

pub use browser::BrowserState;
pub use error::ApiError;
pub use upload::{UploadValidationError, validate_upload_name};
