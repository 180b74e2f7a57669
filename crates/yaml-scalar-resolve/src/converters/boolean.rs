//! Boolean converter

use crate::vocabulary::lookup_bool;
use yaml_scalar_diagnostics::{ResolveError, ResolveResult};

/// Resolve `y|yes|true|on` and `n|no|false|off`, in any letter case
pub fn resolve_bool(text: &str) -> ResolveResult<bool> {
    lookup_bool(text).ok_or_else(|| ResolveError::invalid_boolean(text))
}
