//! Resolved values - the native representation of a resolved scalar
//!
//! `Display` renders a value as scalar text that resolves back to an equal
//! value, so a value can be written out and read back in.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::TargetKind;

/// An absolute point in time with the offset it was written in
pub type Timestamp = DateTime<FixedOffset>;

/// The result of resolving a scalar.
///
/// Dynamic resolution produces any of these variants; typed resolution
/// produces the variant matching its target kind, or `Null` for targets
/// without a natural zero value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum ResolvedValue {
    /// Absence of a value
    Null,
    Bool(bool),
    /// Signed integer, narrowed to the target width
    Int(i64),
    /// Unsigned integer, narrowed to the target width
    Uint(u64),
    /// Float, rounded to the target precision
    Float(f64),
    Timestamp(Timestamp),
    Binary(Vec<u8>),
    String(String),
}

impl ResolvedValue {
    /// The value a null scalar takes when resolved into `kind`
    pub fn zero(kind: TargetKind) -> Self {
        match kind {
            TargetKind::String => Self::String(String::new()),
            TargetKind::Bool => Self::Bool(false),
            TargetKind::SignedInt(_) => Self::Int(0),
            TargetKind::UnsignedInt(_) => Self::Uint(0),
            TargetKind::Float(_) => Self::Float(0.0),
            TargetKind::Binary => Self::Binary(Vec::new()),
            TargetKind::Timestamp
            | TargetKind::Dynamic
            | TargetKind::Sequence
            | TargetKind::Mapping => Self::Null,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Uint(u) => Some(*u),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<&Timestamp> {
        match self {
            Self::Timestamp(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Binary(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Short name of the variant
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Uint(_) => "uint",
            Self::Float(_) => "float",
            Self::Timestamp(_) => "timestamp",
            Self::Binary(_) => "binary",
            Self::String(_) => "str",
        }
    }
}

impl fmt::Display for ResolvedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Uint(u) => write!(f, "{u}"),
            Self::Float(v) => format_float(*v, f),
            Self::Timestamp(t) => f.write_str(&t.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            Self::Binary(bytes) => f.write_str(&STANDARD.encode(bytes)),
            Self::String(s) => f.write_str(s),
        }
    }
}

// Debug formatting always keeps a decimal point or exponent, so the text
// never reads back as an integer.
fn format_float(v: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if v.is_nan() {
        f.write_str(".nan")
    } else if v.is_infinite() {
        f.write_str(if v > 0.0 { ".inf" } else { "-.inf" })
    } else {
        write!(f, "{v:?}")
    }
}

impl From<bool> for ResolvedValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for ResolvedValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<u64> for ResolvedValue {
    fn from(u: u64) -> Self {
        Self::Uint(u)
    }
}

impl From<f64> for ResolvedValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<Timestamp> for ResolvedValue {
    fn from(t: Timestamp) -> Self {
        Self::Timestamp(t)
    }
}

impl From<Vec<u8>> for ResolvedValue {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Binary(bytes)
    }
}

impl From<String> for ResolvedValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for ResolvedValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}
