use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const KIB: f64 = 1024.0;
const MIB: u64 = 1024 * 1024;

/// One stored file as exposed to clients.
///
/// Built fresh from the filesystem on every listing; the file on disk is the only
/// source of truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MediaFileRecord {
    /// Base name of the stored file, no directory components.
    pub file_name: String,
    /// Size on disk at query time.
    pub file_size_bytes: u64,
    /// Human-readable size, e.g. `"1.5 KB"` or `"12.3 MB"`.
    pub file_size_display: String,
}

impl MediaFileRecord {
    pub fn new(file_name: impl Into<String>, file_size_bytes: u64) -> Self {
        Self {
            file_name: file_name.into(),
            file_size_bytes,
            file_size_display: format_file_size(file_size_bytes),
        }
    }
}

/// KB below one MiB, MB from one MiB up, one decimal place.
pub fn format_file_size(bytes: u64) -> String {
    if bytes >= MIB {
        format!("{:.1} MB", bytes as f64 / (KIB * KIB))
    } else {
        format!("{:.1} KB", bytes as f64 / KIB)
    }
}

/// Acknowledgment returned by a successful upload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UploadResponse {
    pub message: String,
}

impl UploadResponse {
    pub fn success() -> Self {
        Self {
            message: "Upload successful.".to_string(),
        }
    }
}
