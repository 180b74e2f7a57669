//! YAML scalar data model
//!
//! This crate defines the values exchanged with scalar resolution:
//! - The scalar event delivered by the parser (text, tag, implicit flag)
//! - Target kinds, including numeric widths and float precision
//! - Core schema tags
//! - Resolved values

pub mod event;
pub mod tag;
pub mod target;
pub mod value;

pub use event::ScalarEvent;
pub use tag::CoreTag;
pub use target::{FloatPrecision, IntWidth, ParseTargetKindError, TargetKind, UintWidth};
pub use value::{ResolvedValue, Timestamp};
