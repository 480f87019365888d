//! Upload checks that run before anything touches storage.

pub mod validator;

pub use validator::{MediaValidator, ValidationError};
