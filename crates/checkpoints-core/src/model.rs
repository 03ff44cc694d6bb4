use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata describing one checkpoint.
///
/// Always derived from the checkpoint file's modification time at query time;
/// never persisted separately, so it has no lifecycle of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckpointRecord {
    /// Slot identifier, `checkpoint0..checkpoint{N-1}`. Scoped per document
    /// path, not globally unique.
    pub id: String,
    /// Modification time of the checkpoint file.
    pub last_modified: DateTime<Utc>,
}

/// Declared or detected encoding of raw file content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentFormat {
    Text,
    Base64,
}

/// What `create` snapshots into a checkpoint file.
#[derive(Debug, Clone)]
pub enum ContentSource {
    /// The live document's raw bytes, wherever the document store keeps them.
    Live,
    /// A structured document supplied by the caller.
    Document(serde_json::Value),
    /// Raw file content with a declared format.
    File {
        bytes: Vec<u8>,
        format: ContentFormat,
    },
}

/// Raw file content read back from a checkpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContent {
    pub bytes: Vec<u8>,
    /// Detected on read: valid UTF-8 comes back as `Text`, anything else as
    /// `Base64`.
    pub format: ContentFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_with_utc_timestamp() {
        let record = CheckpointRecord {
            id: "checkpoint0".to_string(),
            last_modified: "2026-01-15T10:30:00Z".parse().unwrap(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], "checkpoint0");
        assert_eq!(json["last_modified"], "2026-01-15T10:30:00Z");
    }

    #[test]
    fn test_format_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ContentFormat::Base64).unwrap(),
            "\"base64\""
        );
    }
}
