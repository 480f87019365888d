pub mod health;
pub mod media;

pub use health::HealthResponse;
pub use media::{format_file_size, MediaFileRecord, UploadResponse};
