//! Binary converter: standard base64, possibly wrapped across lines

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::borrow::Cow;
use yaml_scalar_diagnostics::{ResolveError, ResolveResult};

/// Decode base64 text into bytes. Line breaks are ignored.
pub fn resolve_binary(text: &str) -> ResolveResult<Vec<u8>> {
    let compact = if text.contains(['\r', '\n']) {
        Cow::Owned(text.replace(['\r', '\n'], ""))
    } else {
        Cow::Borrowed(text)
    };
    STANDARD
        .decode(compact.as_bytes())
        .map_err(|_| ResolveError::invalid_binary(text))
}
