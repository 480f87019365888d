//! Application state and sub-state extractors.
//!
//! Handlers receive `Arc<AppState>`; the media sub-state groups everything the
//! catalogue endpoints touch.

use std::sync::Arc;
use vidcat_core::Config;
use vidcat_processing::MediaValidator;
use vidcat_storage::MediaStore;

/// Media store and upload validation rules.
#[derive(Clone)]
pub struct MediaState {
    pub store: Arc<dyn MediaStore>,
    pub validator: MediaValidator,
}

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub media: MediaState,
}
