//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Backend
// =============================================================================

/// Base URL of the IFS backend API.
pub const API_BASE_URL: &str = "http://localhost:8080/api/ifs";

/// Directory shown when the browser starts.
pub const DEFAULT_PATH: &str = "/home/BulkAccUplSA";

// =============================================================================
// Upload Rules
// =============================================================================

/// Maximum file name length accepted by the IFS namespace.
pub const MAX_UPLOAD_NAME_LEN: usize = 44;

/// Extensions accepted for upload (lowercase, without the dot).
pub const ALLOWED_UPLOAD_EXTENSIONS: &[&str] = &["csv", "xls", "xlsx"];

/// `accept` attribute for the hidden upload file input.
pub const UPLOAD_ACCEPT: &str = ".csv,.xls,.xlsx";

// =============================================================================
// Timers
// =============================================================================

/// How long a just-uploaded entry stays highlighted (milliseconds).
pub const HIGHLIGHT_DURATION_MS: u32 = 2000;

/// How long a toast notification stays visible (milliseconds).
pub const NOTICE_DURATION_MS: u32 = 3000;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
