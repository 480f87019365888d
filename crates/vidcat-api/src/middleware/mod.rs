//! Response middleware shared by the routes.

pub mod error_redaction;
pub mod payload_limit;

pub use error_redaction::redact_error_details;
pub use payload_limit::payload_too_large_as_json;
