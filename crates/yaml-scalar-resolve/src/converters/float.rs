//! Float converter
//!
//! Handles `.inf`/`.nan` in any letter case, base 60 with fractional
//! groups, and plain decimal floats. `_` separators and one leading sign
//! are accepted; the sign is ignored for `.nan`.

use super::{NumberError, parse_decimal_float, sexagesimal, split_sign, strip_separators};
use yaml_scalar_diagnostics::{ResolveError, ResolveResult};
use yaml_scalar_types::{FloatPrecision, TargetKind};

/// Resolve a float representable at `precision`
pub fn resolve_float(text: &str, precision: FloatPrecision) -> ResolveResult<f64> {
    let target = TargetKind::Float(precision);
    let cleaned = strip_separators(text);
    let (negative, body) = split_sign(&cleaned);
    let sign = if negative { -1.0 } else { 1.0 };

    if body.eq_ignore_ascii_case(".inf") {
        return Ok(sign * f64::INFINITY);
    }
    if body.eq_ignore_ascii_case(".nan") {
        return Ok(f64::NAN);
    }

    let magnitude = if body.contains(':') {
        sexagesimal::parse::<f64>(body)
    } else {
        parse_decimal_float(body)
    };
    let magnitude = magnitude.map_err(|err| match err {
        NumberError::Invalid => ResolveError::invalid_float(text),
        NumberError::Overflow => ResolveError::float_overflow(text, target),
    })?;

    precision
        .narrow(sign * magnitude)
        .ok_or_else(|| ResolveError::float_overflow(text, target))
}
