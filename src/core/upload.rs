//! Client-side validation run before an upload request is issued.
//!
//! Rejected files never reach the network; the error is shown to the user
//! as a notification and the action is aborted.

use std::fmt;

use crate::config::{ALLOWED_UPLOAD_EXTENSIONS, MAX_UPLOAD_NAME_LEN};

/// Why a file was rejected before any request was made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadValidationError {
    /// File name exceeds the IFS member-name limit.
    NameTooLong { len: usize, max: usize },
    /// Extension is not in the upload allow-list.
    UnsupportedType,
}

impl fmt::Display for UploadValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameTooLong { len, max } => write!(
                f,
                "File name is too long ({} characters). Maximum allowed is {} characters.",
                len, max
            ),
            Self::UnsupportedType => write!(
                f,
                "Unsupported file type. Please upload CSV, XLS, or XLSX files only."
            ),
        }
    }
}

impl std::error::Error for UploadValidationError {}

/// Validate an upload candidate's file name.
///
/// Checks run in order and stop at the first failure: name length first,
/// then the extension (case-insensitive suffix after the last dot).
pub fn validate_upload_name(name: &str) -> Result<(), UploadValidationError> {
    let len = name.chars().count();
    if len > MAX_UPLOAD_NAME_LEN {
        return Err(UploadValidationError::NameTooLong {
            len,
            max: MAX_UPLOAD_NAME_LEN,
        });
    }

    match name.rsplit_once('.') {
        Some((_, ext)) if ALLOWED_UPLOAD_EXTENSIONS.contains(&ext.to_lowercase().as_str()) => {
            Ok(())
        }
        _ => Err(UploadValidationError::UnsupportedType),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_at_the_limit_passes() {
        let name = format!("{}.csv", "a".repeat(40));
        assert_eq!(name.chars().count(), 44);
        assert_eq!(validate_upload_name(&name), Ok(()));
    }

    #[test]
    fn name_over_the_limit_reports_both_lengths() {
        let name = format!("{}.csv", "a".repeat(41));
        let err = validate_upload_name(&name).unwrap_err();
        assert_eq!(err, UploadValidationError::NameTooLong { len: 45, max: 44 });
        let msg = err.to_string();
        assert!(msg.contains("45"));
        assert!(msg.contains("44"));
    }

    #[test]
    fn length_is_checked_before_the_extension() {
        let name = format!("{}.txt", "a".repeat(41));
        assert!(matches!(
            validate_upload_name(&name),
            Err(UploadValidationError::NameTooLong { .. })
        ));
    }

    #[test]
    fn disallowed_extension_is_rejected_regardless_of_length() {
        assert_eq!(
            validate_upload_name("notes.txt"),
            Err(UploadValidationError::UnsupportedType)
        );
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        assert_eq!(validate_upload_name("REPORT.XLSX"), Ok(()));
        assert_eq!(validate_upload_name("data.Xls"), Ok(()));
    }

    #[test]
    fn name_without_an_extension_is_rejected() {
        assert_eq!(
            validate_upload_name("README"),
            Err(UploadValidationError::UnsupportedType)
        );
        assert_eq!(
            validate_upload_name("trailing."),
            Err(UploadValidationError::UnsupportedType)
        );
    }
}
