//! YAML scalar resolution diagnostics
//!
//! This crate provides the error handling infrastructure for scalar
//! resolution: the closed error taxonomy and the structured error codes
//! attached to every failure class.

mod error;
mod error_code;

pub use error::*;
pub use error_code::*;

/// Result type for scalar resolution
pub type ResolveResult<T> = std::result::Result<T, ResolveError>;
