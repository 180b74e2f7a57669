//! Typed converters, one per target kind family
//!
//! Each converter takes the raw scalar text and either produces a complete
//! native value or fails with the error class of its kind. Errors always
//! carry the text as the caller supplied it, before separator stripping.

pub mod binary;
pub mod boolean;
pub mod float;
pub mod integer;
pub(crate) mod sexagesimal;
pub mod timestamp;

pub use binary::resolve_binary;
pub use boolean::resolve_bool;
pub use float::resolve_float;
pub use integer::{resolve_int, resolve_uint};
pub use timestamp::resolve_timestamp;

use std::borrow::Cow;

/// Why a numeric body failed to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NumberError {
    Invalid,
    Overflow,
}

/// Remove `_` digit separators
pub(crate) fn strip_separators(text: &str) -> Cow<'_, str> {
    if text.contains('_') {
        Cow::Owned(text.replace('_', ""))
    } else {
        Cow::Borrowed(text)
    }
}

/// Split one leading sign off, returning whether it was negative
pub(crate) fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else {
        (false, text.strip_prefix('+').unwrap_or(text))
    }
}

/// Parse a non-empty run of digits in `radix`. Signs are not digits.
pub(crate) fn parse_digits(digits: &str, radix: u32) -> Result<u64, NumberError> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(NumberError::Invalid);
    }
    u64::from_str_radix(digits, radix).map_err(|_| NumberError::Overflow)
}

/// Parse a plain decimal float: digits, `.`, and an optional exponent.
///
/// Spelled-out `inf`/`nan` are rejected; the `.inf`/`.nan` tokens are
/// handled by the float converter itself.
pub(crate) fn parse_decimal_float(text: &str) -> Result<f64, NumberError> {
    let well_formed = text.starts_with(|c: char| c.is_ascii_digit() || c == '.')
        && text.bytes().any(|b| b.is_ascii_digit())
        && text
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !well_formed {
        return Err(NumberError::Invalid);
    }
    let value: f64 = text.parse().map_err(|_| NumberError::Invalid)?;
    if value.is_infinite() {
        return Err(NumberError::Overflow);
    }
    Ok(value)
}
