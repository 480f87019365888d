//! Vidcat API Library
//!
//! This crate provides the HTTP handlers, the upload service and application setup for
//! the media catalogue.

// Module declarations
mod api_doc;
mod handlers;
mod middleware;
mod services;
pub mod setup;
mod telemetry;
mod utils;

// Public modules
pub mod error;
pub mod state;

// Re-exports
pub use error::{ErrorResponse, HttpAppError};
pub use services::upload::MediaUploadService;
pub use state::{AppState, MediaState};
