//! Signed and unsigned integer converters
//!
//! Accepted forms, after `_` separators are removed and an optional sign is
//! consumed:
//! - `0` exactly
//! - `0b` binary, `0x` hexadecimal, a leading `0` for octal
//! - colon-separated base 60 (`1:30` is 90)
//! - plain decimal
//!
//! Base prefixes are checked before the base 60 form, so `0:30` is an
//! invalid octal literal rather than 30.

use super::{NumberError, parse_digits, sexagesimal, split_sign, strip_separators};
use yaml_scalar_diagnostics::{ResolveError, ResolveResult};
use yaml_scalar_types::{IntWidth, TargetKind, UintWidth};

/// Resolve a signed integer that fits in `width`
pub fn resolve_int(text: &str, width: IntWidth) -> ResolveResult<i64> {
    let target = TargetKind::SignedInt(width);
    let cleaned = strip_separators(text);
    let (negative, body) = split_sign(&cleaned);

    let magnitude = parse_magnitude(body).map_err(|err| match err {
        NumberError::Invalid => ResolveError::invalid_integer(text),
        NumberError::Overflow => ResolveError::integer_overflow(text, target),
    })?;

    let value = if negative {
        -i128::from(magnitude)
    } else {
        i128::from(magnitude)
    };
    if !width.contains(value) {
        return Err(ResolveError::integer_overflow(text, target));
    }
    Ok(value as i64)
}

/// Resolve an unsigned integer that fits in `width`. A leading `-` is
/// rejected outright, even on zero.
pub fn resolve_uint(text: &str, width: UintWidth) -> ResolveResult<u64> {
    let target = TargetKind::UnsignedInt(width);
    let cleaned = strip_separators(text);
    if cleaned.starts_with('-') {
        return Err(ResolveError::unsigned_with_negative_sign(text));
    }
    let body = cleaned.strip_prefix('+').unwrap_or(&cleaned);

    let value = parse_magnitude(body).map_err(|err| match err {
        NumberError::Invalid => ResolveError::invalid_unsigned_integer(text),
        NumberError::Overflow => ResolveError::unsigned_overflow(text, target),
    })?;
    if value > width.max() {
        return Err(ResolveError::unsigned_overflow(text, target));
    }
    Ok(value)
}

/// Parse an unsigned integer body, choosing the base from its prefix
fn parse_magnitude(body: &str) -> Result<u64, NumberError> {
    if body == "0" {
        return Ok(0);
    }
    if let Some(digits) = body.strip_prefix("0b") {
        parse_digits(digits, 2)
    } else if let Some(digits) = body.strip_prefix("0x") {
        parse_digits(digits, 16)
    } else if let Some(digits) = body.strip_prefix('0') {
        parse_digits(digits, 8)
    } else if body.contains(':') {
        sexagesimal::parse(body)
    } else {
        parse_digits(body, 10)
    }
}
