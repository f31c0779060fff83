//! Formatting utilities for display values.

/// Binary units used by [`format_size`].
const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Format a byte count with binary units (1 KB = 1024 B).
///
/// At most two decimal places, trailing zeros stripped; zero formats as
/// "0 B". Sizes past the last unit stay in GB.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let magnitude = format!("{:.2}", value);
    let magnitude = magnitude.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", magnitude, UNITS[unit])
}
