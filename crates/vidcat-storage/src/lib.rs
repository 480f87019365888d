//! Vidcat Storage Library
//!
//! This crate owns the storage root and the media store built on top of it.
//!
//! # Layout
//!
//! The catalogue is a single flat directory. A stored file's path is always
//! `<storage root>/<safe name>`, where the safe name is the final path component of the
//! client-supplied name. There is no manifest or sidecar metadata: listing re-scans the
//! directory every time.

pub mod local;
pub mod naming;
pub mod root;
pub mod traits;

// Re-export commonly used types
pub use local::LocalMediaStore;
pub use naming::safe_file_name;
pub use root::StorageRoot;
pub use traits::{MediaCandidate, MediaStore, StorageError, StorageResult, UploadedFile};
