//! Fixed values of the catalogue.

/// The single recognized media extension (compared case-insensitively, without the dot).
pub const MEDIA_EXTENSION: &str = "mp4";

/// Name of the storage root directory inside the web root.
pub const MEDIA_DIR_NAME: &str = "media";

/// Public path segment under which stored files are served.
pub const MEDIA_URL_PREFIX: &str = "/media";

/// Maximum total size of one upload request (200 MiB).
pub const MAX_UPLOAD_BYTES: usize = 200 * 1024 * 1024;

/// Multipart field name carrying uploaded files. Repeated once per file.
pub const UPLOAD_FIELD_NAME: &str = "files";
