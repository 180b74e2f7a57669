//! Resolution entry points used by the decoding pipeline

use crate::converters::{
    resolve_binary, resolve_bool, resolve_float, resolve_int, resolve_timestamp, resolve_uint,
};
use crate::infer::infer;
use crate::vocabulary::is_null;
use log::{debug, trace};
use yaml_scalar_diagnostics::{ResolveError, ResolveResult};
use yaml_scalar_types::{CoreTag, ResolvedValue, ScalarEvent, TargetKind};

/// Resolve a scalar into `kind`.
///
/// Null spellings resolve to the zero value of the kind before any
/// conversion is attempted, so they never fail. This holds for quoted
/// scalars too. `TargetKind::Dynamic` delegates to [`resolve_dynamic`].
pub fn resolve(event: &ScalarEvent<'_>, kind: TargetKind) -> ResolveResult<ResolvedValue> {
    let text = event.value;
    if is_null(text) {
        return Ok(ResolvedValue::zero(kind));
    }
    trace!("resolving {text:?} into {kind}");

    let resolved = match kind {
        TargetKind::String => Ok(ResolvedValue::String(text.to_string())),
        TargetKind::Bool => resolve_bool(text).map(ResolvedValue::Bool),
        TargetKind::SignedInt(width) => resolve_int(text, width).map(ResolvedValue::Int),
        TargetKind::UnsignedInt(width) => resolve_uint(text, width).map(ResolvedValue::Uint),
        TargetKind::Float(precision) => resolve_float(text, precision).map(ResolvedValue::Float),
        TargetKind::Timestamp => resolve_timestamp(text).map(ResolvedValue::Timestamp),
        TargetKind::Binary => resolve_binary(text).map(ResolvedValue::Binary),
        TargetKind::Dynamic => Ok(infer(event)),
        TargetKind::Sequence | TargetKind::Mapping => {
            Err(ResolveError::unsupported_target_kind(kind, text))
        }
    };

    if let Err(err) = &resolved {
        debug!("{}: {err}", err.code());
    }
    resolved
}

/// Resolve a scalar without a target kind, inferring its type. Never fails.
pub fn resolve_dynamic(event: &ScalarEvent<'_>) -> ResolvedValue {
    infer(event)
}

/// Resolve a scalar by its tag.
///
/// A core schema tag (`!!int`, `tag:yaml.org,2002:float`, ...) selects the
/// target kind; any other tag, or none, falls back to inference.
pub fn resolve_tagged(event: &ScalarEvent<'_>) -> ResolveResult<ResolvedValue> {
    match event.tag().and_then(CoreTag::from_tag) {
        Some(tag) => resolve(event, tag.target_kind()),
        None => Ok(infer(event)),
    }
}
