//! Dynamic type inference for scalars resolved without a target kind
//!
//! The first byte of the text picks which converters are tried:
//!
//! | first byte          | attempts, in order              |
//! |---------------------|---------------------------------|
//! | digit               | int, float, timestamp           |
//! | `+` `-`             | int, float                      |
//! | `~` `n` `N`         | null spelling, bool             |
//! | `.`                 | float                           |
//! | `t T f F y Y o O`   | bool                            |
//!
//! Anything else, and anything no attempt accepted, is the literal string.
//! Signed text is never tried as a timestamp, so `-2001-12-15` stays a
//! string.

use crate::converters::{resolve_bool, resolve_float, resolve_int, resolve_timestamp};
use crate::vocabulary::{BOOL_LEADERS, NULL_LEADERS, SIGN_LEADERS, is_null};
use log::trace;
use yaml_scalar_types::{FloatPrecision, IntWidth, ResolvedValue, ScalarEvent};

/// Infer the type of a scalar from its shape. Never fails.
///
/// Empty text is null. A quoted scalar without a tag is always a string.
pub fn infer(event: &ScalarEvent<'_>) -> ResolvedValue {
    let text = event.value;
    let Some(&lead) = text.as_bytes().first() else {
        return ResolvedValue::Null;
    };
    if event.is_quoted_untagged() {
        return ResolvedValue::String(text.to_string());
    }

    let inferred = if lead.is_ascii_digit() || SIGN_LEADERS.contains(&lead) {
        infer_number(text, lead.is_ascii_digit())
    } else if NULL_LEADERS.contains(&lead) {
        if is_null(text) {
            Some(ResolvedValue::Null)
        } else {
            resolve_bool(text).ok().map(ResolvedValue::Bool)
        }
    } else if lead == b'.' {
        resolve_float(text, FloatPrecision::F64)
            .ok()
            .map(ResolvedValue::Float)
    } else if BOOL_LEADERS.contains(&lead) {
        resolve_bool(text).ok().map(ResolvedValue::Bool)
    } else {
        None
    };

    inferred.unwrap_or_else(|| {
        trace!("scalar {text:?} inferred as string");
        ResolvedValue::String(text.to_string())
    })
}

fn infer_number(text: &str, allow_timestamp: bool) -> Option<ResolvedValue> {
    if let Ok(i) = resolve_int(text, IntWidth::W64) {
        return Some(ResolvedValue::Int(i));
    }
    if let Ok(f) = resolve_float(text, FloatPrecision::F64) {
        return Some(ResolvedValue::Float(f));
    }
    if allow_timestamp {
        return resolve_timestamp(text).ok().map(ResolvedValue::Timestamp);
    }
    None
}
