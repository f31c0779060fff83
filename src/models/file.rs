//! Directory entry types returned by the IFS listing endpoint.

use serde::Deserialize;

/// File kind tag assigned by the server ("csv", "excel", anything else).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum FileKind {
    Csv,
    Excel,
    #[default]
    Other,
}

impl From<String> for FileKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "csv" => Self::Csv,
            "excel" => Self::Excel,
            _ => Self::Other,
        }
    }
}

/// One entry of a directory listing.
///
/// Field names follow the server's JSON (`lastModified`, `directory`,
/// `type`). `recently_uploaded` is never sent by the server; it is set
/// locally after an upload and cleared by the highlight timer.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    pub name: String,
    /// Absolute path in the server's namespace.
    pub path: String,
    pub size: u64,
    pub last_modified: String,
    #[serde(rename = "directory")]
    pub is_directory: bool,
    #[serde(rename = "type", default)]
    pub kind: FileKind,
    #[serde(default)]
    pub recently_uploaded: bool,
}

impl FileEntry {
    /// Whether the entry can be opened in the tabular preview.
    ///
    /// A directory's kind tag is not meaningful here; only CSV and Excel
    /// files qualify.
    pub fn is_previewable(&self) -> bool {
        !self.is_directory && matches!(self.kind, FileKind::Csv | FileKind::Excel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_the_server_field_names() {
        let json = r#"[{
            "name": "accounts.csv",
            "path": "/home/BulkAccUplSA/accounts.csv",
            "size": 2048,
            "lastModified": "2024-05-01 12:00:00",
            "directory": false,
            "type": "csv"
        }]"#;

        let entries: Vec<FileEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.name, "accounts.csv");
        assert_eq!(entry.size, 2048);
        assert!(!entry.is_directory);
        assert_eq!(entry.kind, FileKind::Csv);
        assert!(!entry.recently_uploaded);
    }

    #[test]
    fn unknown_kind_tags_fall_back_to_other() {
        let json = r#"{
            "name": "notes.txt",
            "path": "/home/x/notes.txt",
            "size": 10,
            "lastModified": "2024-05-01 12:00:00",
            "directory": false,
            "type": "text"
        }"#;

        let entry: FileEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.kind, FileKind::Other);
    }

    #[test]
    fn previewable_requires_a_tabular_file() {
        let mut entry: FileEntry = serde_json::from_str(
            r#"{"name":"d","path":"/d","size":0,
                "lastModified":"","directory":true,"type":"csv"}"#,
        )
        .unwrap();
        // Directory kind tags carry no preview meaning.
        assert!(!entry.is_previewable());

        entry.is_directory = false;
        assert!(entry.is_previewable());

        entry.kind = FileKind::Other;
        assert!(!entry.is_previewable());

        entry.kind = FileKind::Excel;
        assert!(entry.is_previewable());
    }
}
