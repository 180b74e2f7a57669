//! YAML 1.1 core schema scalar resolution
//!
//! Converts the text of a scalar node into a typed native value, either
//! into a target kind chosen by the caller or by inferring the type from
//! the scalar's shape.
//!
//! - **Null**: `""`, `~`, `null`, `Null`, `NULL` resolve to the zero value of any target
//! - **Booleans**: `y|yes|true|on`, `n|no|false|off`, in any letter case
//! - **Integers**: decimal, `0b` binary, `0x` hex, `0` octal, base 60 (`1:30`), width-checked
//! - **Floats**: decimal, base 60, `.inf`, `-.inf`, `.nan`, precision-checked
//! - **Timestamps**: `YYYY-M-D` and full date-times with fraction and zone
//! - **Binary**: standard base64
//!
//! # Example
//!
//! ```
//! use yaml_scalar_resolve::{resolve, resolve_dynamic};
//! use yaml_scalar_types::{ResolvedValue, ScalarEvent, TargetKind};
//!
//! let event = ScalarEvent::plain("0x1F");
//! assert_eq!(resolve(&event, TargetKind::I64).unwrap(), ResolvedValue::Int(31));
//!
//! let event = ScalarEvent::plain("yes");
//! assert_eq!(resolve_dynamic(&event), ResolvedValue::Bool(true));
//! ```
//!
//! All converters are pure functions. The vocabularies they read are built
//! once and shared read-only, so resolution is safe from any thread.

pub mod converters;
pub mod infer;
pub mod resolver;
pub mod vocabulary;

pub use converters::{
    resolve_binary, resolve_bool, resolve_float, resolve_int, resolve_timestamp, resolve_uint,
};
pub use infer::infer;
pub use resolver::{resolve, resolve_dynamic, resolve_tagged};
pub use vocabulary::{NULL_SPELLINGS, is_null};
