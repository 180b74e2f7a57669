//! Target kinds a scalar can be resolved into

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Bit width of a signed integer target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntWidth {
    W8,
    W16,
    W32,
    W64,
}

impl IntWidth {
    pub const fn bits(&self) -> u32 {
        match self {
            Self::W8 => 8,
            Self::W16 => 16,
            Self::W32 => 32,
            Self::W64 => 64,
        }
    }

    /// Smallest representable value
    pub const fn min(&self) -> i64 {
        match self {
            Self::W8 => i8::MIN as i64,
            Self::W16 => i16::MIN as i64,
            Self::W32 => i32::MIN as i64,
            Self::W64 => i64::MIN,
        }
    }

    /// Largest representable value
    pub const fn max(&self) -> i64 {
        match self {
            Self::W8 => i8::MAX as i64,
            Self::W16 => i16::MAX as i64,
            Self::W32 => i32::MAX as i64,
            Self::W64 => i64::MAX,
        }
    }

    pub const fn contains(&self, value: i128) -> bool {
        value >= self.min() as i128 && value <= self.max() as i128
    }
}

/// Bit width of an unsigned integer target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UintWidth {
    W8,
    W16,
    W32,
    W64,
}

impl UintWidth {
    pub const fn bits(&self) -> u32 {
        match self {
            Self::W8 => 8,
            Self::W16 => 16,
            Self::W32 => 32,
            Self::W64 => 64,
        }
    }

    /// Largest representable value
    pub const fn max(&self) -> u64 {
        match self {
            Self::W8 => u8::MAX as u64,
            Self::W16 => u16::MAX as u64,
            Self::W32 => u32::MAX as u64,
            Self::W64 => u64::MAX,
        }
    }
}

/// Precision of a floating-point target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FloatPrecision {
    F32,
    F64,
}

impl FloatPrecision {
    pub const fn bits(&self) -> u32 {
        match self {
            Self::F32 => 32,
            Self::F64 => 64,
        }
    }

    /// Round a value to this precision.
    ///
    /// Returns `None` when a finite value falls outside the representable
    /// range.
    pub fn narrow(&self, value: f64) -> Option<f64> {
        let narrowed = match self {
            Self::F32 => value as f32 as f64,
            Self::F64 => value,
        };
        if value.is_finite() && narrowed.is_infinite() {
            None
        } else {
            Some(narrowed)
        }
    }
}

/// The kind of native value a scalar is resolved into.
///
/// Supplied by the caller on each resolution. `Dynamic` asks for the type
/// to be inferred from the scalar itself. `Sequence` and `Mapping` stand for
/// collection-shaped destinations, which no scalar can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetKind {
    String,
    Bool,
    SignedInt(IntWidth),
    UnsignedInt(UintWidth),
    Float(FloatPrecision),
    Timestamp,
    Binary,
    Dynamic,
    Sequence,
    Mapping,
}

impl TargetKind {
    pub const I64: Self = Self::SignedInt(IntWidth::W64);
    pub const U64: Self = Self::UnsignedInt(UintWidth::W64);
    pub const F64: Self = Self::Float(FloatPrecision::F64);

    /// Short name, as accepted by [`FromStr`]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::String => "str",
            Self::Bool => "bool",
            Self::SignedInt(IntWidth::W8) => "i8",
            Self::SignedInt(IntWidth::W16) => "i16",
            Self::SignedInt(IntWidth::W32) => "i32",
            Self::SignedInt(IntWidth::W64) => "i64",
            Self::UnsignedInt(UintWidth::W8) => "u8",
            Self::UnsignedInt(UintWidth::W16) => "u16",
            Self::UnsignedInt(UintWidth::W32) => "u32",
            Self::UnsignedInt(UintWidth::W64) => "u64",
            Self::Float(FloatPrecision::F32) => "f32",
            Self::Float(FloatPrecision::F64) => "f64",
            Self::Timestamp => "timestamp",
            Self::Binary => "binary",
            Self::Dynamic => "any",
            Self::Sequence => "seq",
            Self::Mapping => "map",
        }
    }

    /// Check if this kind is numeric
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::SignedInt(_) | Self::UnsignedInt(_) | Self::Float(_)
        )
    }

    /// Check if a scalar can ever be resolved into this kind
    pub const fn is_scalar(&self) -> bool {
        !matches!(self, Self::Sequence | Self::Mapping)
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a target kind name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown target kind: {0}")]
pub struct ParseTargetKindError(String);

impl FromStr for TargetKind {
    type Err = ParseTargetKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s {
            "str" | "string" => Self::String,
            "bool" => Self::Bool,
            "i8" => Self::SignedInt(IntWidth::W8),
            "i16" => Self::SignedInt(IntWidth::W16),
            "i32" => Self::SignedInt(IntWidth::W32),
            "i64" | "int" => Self::SignedInt(IntWidth::W64),
            "u8" => Self::UnsignedInt(UintWidth::W8),
            "u16" => Self::UnsignedInt(UintWidth::W16),
            "u32" => Self::UnsignedInt(UintWidth::W32),
            "u64" => Self::UnsignedInt(UintWidth::W64),
            "f32" => Self::Float(FloatPrecision::F32),
            "f64" | "float" => Self::Float(FloatPrecision::F64),
            "timestamp" => Self::Timestamp,
            "binary" => Self::Binary,
            "any" => Self::Dynamic,
            "seq" => Self::Sequence,
            "map" => Self::Mapping,
            other => return Err(ParseTargetKindError(other.to_string())),
        };
        Ok(kind)
    }
}
