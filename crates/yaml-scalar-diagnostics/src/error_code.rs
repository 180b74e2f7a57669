//! Resolution error codes following a structured numbering system
//!
//! Error code ranges:
//! - YSR0001-YSR0099: Shape errors (text is not a valid literal of the kind)
//! - YSR0100-YSR0199: Range errors (valid literal that does not fit the target)
//! - YSR0200-YSR0299: Dispatch errors (target kind cannot hold a scalar)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    /// Check if this is a shape error (0001-0099)
    pub const fn is_shape_error(&self) -> bool {
        self.0 >= 1 && self.0 < 100
    }

    /// Check if this is a range error (0100-0199)
    pub const fn is_range_error(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }

    /// Check if this is a dispatch error (0200-0299)
    pub const fn is_dispatch_error(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "YSR{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Shape errors (0001-0099)
    map.insert(
        1,
        ErrorInfo::new("Invalid boolean")
            .with_help("Accepted spellings are y, yes, true, on, n, no, false, off in any case"),
    );
    map.insert(
        2,
        ErrorInfo::new("Invalid integer")
            .with_help("Use decimal, 0b binary, 0x hex, 0-prefixed octal or colon-separated base 60"),
    );
    map.insert(3, ErrorInfo::new("Invalid unsigned integer"));
    map.insert(
        4,
        ErrorInfo::new("Invalid float").with_help("Use a decimal float, base 60, .inf, -.inf or .nan"),
    );
    map.insert(
        5,
        ErrorInfo::new("Invalid timestamp")
            .with_help("Use YYYY-M-D or YYYY-M-DTHH:MM:SS[.fraction][Z|+HH[:MM]]"),
    );
    map.insert(6, ErrorInfo::new("Invalid base64 binary"));

    // Range errors (0100-0199)
    map.insert(100, ErrorInfo::new("Integer overflow"));
    map.insert(101, ErrorInfo::new("Unsigned integer overflow"));
    map.insert(102, ErrorInfo::new("Float overflow"));
    map.insert(
        103,
        ErrorInfo::new("Negative sign on unsigned integer")
            .with_help("Resolve into a signed target to accept negative values"),
    );

    // Dispatch errors (0200-0299)
    map.insert(200, ErrorInfo::new("Unsupported target kind"));

    map
});

// Shape errors
pub const YSR0001: ErrorCode = ErrorCode::new(1);
pub const YSR0002: ErrorCode = ErrorCode::new(2);
pub const YSR0003: ErrorCode = ErrorCode::new(3);
pub const YSR0004: ErrorCode = ErrorCode::new(4);
pub const YSR0005: ErrorCode = ErrorCode::new(5);
pub const YSR0006: ErrorCode = ErrorCode::new(6);

// Range errors
pub const YSR0100: ErrorCode = ErrorCode::new(100);
pub const YSR0101: ErrorCode = ErrorCode::new(101);
pub const YSR0102: ErrorCode = ErrorCode::new(102);
pub const YSR0103: ErrorCode = ErrorCode::new(103);

// Dispatch errors
pub const YSR0200: ErrorCode = ErrorCode::new(200);
