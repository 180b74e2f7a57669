//! YAML 1.1 core schema scalar resolution for Rust
//!
//! This crate bundles the pieces a decoding pipeline needs to turn scalar
//! nodes into native values:
//! - The data model: scalar events, target kinds and resolved values
//! - The error taxonomy with structured error codes
//! - Typed resolution, dynamic inference and tag-directed resolution
//!
//! # Example
//!
//! ```
//! use yaml_scalar::{ResolvedValue, ScalarEvent, TargetKind, resolve, resolve_dynamic};
//!
//! let sexagesimal = ScalarEvent::plain("1:30.5");
//! assert_eq!(resolve(&sexagesimal, TargetKind::F64)?, ResolvedValue::Float(90.5));
//!
//! let quoted = ScalarEvent::quoted("123");
//! assert_eq!(resolve_dynamic(&quoted), ResolvedValue::from("123"));
//! # Ok::<(), yaml_scalar::ResolveError>(())
//! ```

// Re-export all public APIs from internal crates
pub use yaml_scalar_diagnostics as diagnostics;
pub use yaml_scalar_resolve as resolver;
pub use yaml_scalar_types as types;

// Convenience re-exports
pub use yaml_scalar_diagnostics::{ErrorCode, ErrorKind, ResolveError, ResolveResult};
pub use yaml_scalar_resolve::{resolve, resolve_dynamic, resolve_tagged};
pub use yaml_scalar_types::{
    CoreTag, FloatPrecision, IntWidth, ResolvedValue, ScalarEvent, TargetKind, Timestamp,
    UintWidth,
};
