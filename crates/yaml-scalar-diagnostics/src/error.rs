//! Scalar resolution error types

use crate::{
    ErrorCode, YSR0001, YSR0002, YSR0003, YSR0004, YSR0005, YSR0006, YSR0100, YSR0101, YSR0102,
    YSR0103, YSR0200,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Failure class of a [`ResolveError`], for branching without the payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    InvalidBoolean,
    InvalidInteger,
    IntegerOverflow,
    UnsignedWithNegativeSign,
    InvalidUnsignedInteger,
    UnsignedOverflow,
    InvalidFloat,
    FloatOverflow,
    InvalidTimestamp,
    InvalidBinary,
    UnsupportedTargetKind,
}

impl ErrorKind {
    /// Structured code for this failure class
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidBoolean => YSR0001,
            Self::InvalidInteger => YSR0002,
            Self::InvalidUnsignedInteger => YSR0003,
            Self::InvalidFloat => YSR0004,
            Self::InvalidTimestamp => YSR0005,
            Self::InvalidBinary => YSR0006,
            Self::IntegerOverflow => YSR0100,
            Self::UnsignedOverflow => YSR0101,
            Self::FloatOverflow => YSR0102,
            Self::UnsignedWithNegativeSign => YSR0103,
            Self::UnsupportedTargetKind => YSR0200,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code().info().description)
    }
}

/// Errors raised when a scalar cannot be resolved into its target kind.
///
/// Every variant carries the offending scalar text verbatim. Range errors
/// also name the target that was too narrow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("invalid boolean: {value}")]
    InvalidBoolean { value: String },

    #[error("invalid integer: {value}")]
    InvalidInteger { value: String },

    #[error("integer {value} overflows {target}")]
    IntegerOverflow { value: String, target: String },

    #[error("unsigned integer with negative sign: {value}")]
    UnsignedWithNegativeSign { value: String },

    #[error("invalid unsigned integer: {value}")]
    InvalidUnsignedInteger { value: String },

    #[error("unsigned integer {value} overflows {target}")]
    UnsignedOverflow { value: String, target: String },

    #[error("invalid float: {value}")]
    InvalidFloat { value: String },

    #[error("float {value} overflows {target}")]
    FloatOverflow { value: String, target: String },

    #[error("invalid timestamp: {value}")]
    InvalidTimestamp { value: String },

    #[error("invalid base64 binary: {value}")]
    InvalidBinary { value: String },

    #[error("cannot resolve scalar {value:?} into {target}")]
    UnsupportedTargetKind { target: String, value: String },
}

impl ResolveError {
    pub fn invalid_boolean(value: impl Into<String>) -> Self {
        Self::InvalidBoolean {
            value: value.into(),
        }
    }

    pub fn invalid_integer(value: impl Into<String>) -> Self {
        Self::InvalidInteger {
            value: value.into(),
        }
    }

    pub fn integer_overflow(value: impl Into<String>, target: impl fmt::Display) -> Self {
        Self::IntegerOverflow {
            value: value.into(),
            target: target.to_string(),
        }
    }

    pub fn unsigned_with_negative_sign(value: impl Into<String>) -> Self {
        Self::UnsignedWithNegativeSign {
            value: value.into(),
        }
    }

    pub fn invalid_unsigned_integer(value: impl Into<String>) -> Self {
        Self::InvalidUnsignedInteger {
            value: value.into(),
        }
    }

    pub fn unsigned_overflow(value: impl Into<String>, target: impl fmt::Display) -> Self {
        Self::UnsignedOverflow {
            value: value.into(),
            target: target.to_string(),
        }
    }

    pub fn invalid_float(value: impl Into<String>) -> Self {
        Self::InvalidFloat {
            value: value.into(),
        }
    }

    pub fn float_overflow(value: impl Into<String>, target: impl fmt::Display) -> Self {
        Self::FloatOverflow {
            value: value.into(),
            target: target.to_string(),
        }
    }

    pub fn invalid_timestamp(value: impl Into<String>) -> Self {
        Self::InvalidTimestamp {
            value: value.into(),
        }
    }

    pub fn invalid_binary(value: impl Into<String>) -> Self {
        Self::InvalidBinary {
            value: value.into(),
        }
    }

    pub fn unsupported_target_kind(target: impl fmt::Display, value: impl Into<String>) -> Self {
        Self::UnsupportedTargetKind {
            target: target.to_string(),
            value: value.into(),
        }
    }

    /// Failure class of this error
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidBoolean { .. } => ErrorKind::InvalidBoolean,
            Self::InvalidInteger { .. } => ErrorKind::InvalidInteger,
            Self::IntegerOverflow { .. } => ErrorKind::IntegerOverflow,
            Self::UnsignedWithNegativeSign { .. } => ErrorKind::UnsignedWithNegativeSign,
            Self::InvalidUnsignedInteger { .. } => ErrorKind::InvalidUnsignedInteger,
            Self::UnsignedOverflow { .. } => ErrorKind::UnsignedOverflow,
            Self::InvalidFloat { .. } => ErrorKind::InvalidFloat,
            Self::FloatOverflow { .. } => ErrorKind::FloatOverflow,
            Self::InvalidTimestamp { .. } => ErrorKind::InvalidTimestamp,
            Self::InvalidBinary { .. } => ErrorKind::InvalidBinary,
            Self::UnsupportedTargetKind { .. } => ErrorKind::UnsupportedTargetKind,
        }
    }

    /// Structured error code
    pub const fn code(&self) -> ErrorCode {
        self.kind().code()
    }

    /// The scalar text that failed to resolve
    pub fn value(&self) -> &str {
        match self {
            Self::InvalidBoolean { value }
            | Self::InvalidInteger { value }
            | Self::IntegerOverflow { value, .. }
            | Self::UnsignedWithNegativeSign { value }
            | Self::InvalidUnsignedInteger { value }
            | Self::UnsignedOverflow { value, .. }
            | Self::InvalidFloat { value }
            | Self::FloatOverflow { value, .. }
            | Self::InvalidTimestamp { value }
            | Self::InvalidBinary { value }
            | Self::UnsupportedTargetKind { value, .. } => value,
        }
    }

    /// Check if the text was a well-formed literal that did not fit its target
    pub const fn is_range_error(&self) -> bool {
        self.code().is_range_error()
    }
}
