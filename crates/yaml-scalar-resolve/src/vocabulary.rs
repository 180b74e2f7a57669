//! Fixed vocabularies of the core schema
//!
//! All tables here are built on first use and never mutated afterwards, so
//! they can be read from any thread without synchronization.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Spellings that resolve to the absence of a value
pub const NULL_SPELLINGS: [&str; 5] = ["", "~", "null", "Null", "NULL"];

/// Leading characters that route dynamic inference to the numeric converters
pub(crate) const SIGN_LEADERS: &[u8] = b"-+";
/// Leading characters of the null spellings
pub(crate) const NULL_LEADERS: &[u8] = b"~nN";
/// Leading characters of the boolean spellings
pub(crate) const BOOL_LEADERS: &[u8] = b"tTfFyYnNoO";

static BOOL_VALUES: LazyLock<HashMap<&'static str, bool>> = LazyLock::new(|| {
    HashMap::from([
        ("y", true),
        ("yes", true),
        ("true", true),
        ("on", true),
        ("n", false),
        ("no", false),
        ("false", false),
        ("off", false),
    ])
});

/// `YYYY-M-D`
pub(crate) static DATE_ONLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{1,2})-([0-9]{1,2})$").expect("date pattern is valid")
});

/// `YYYY-M-D` then `T`/`t` or blanks, `H:MM:SS`, optional fraction, optional zone
pub(crate) static DATE_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^([0-9]{4})-([0-9]{1,2})-([0-9]{1,2})",
        r"(?:[Tt]|[ \t]+)",
        r"([0-9]{1,2}):([0-9]{2}):([0-9]{2})",
        r"(?:\.([0-9]*))?",
        r"(?:[ \t]*(?:Z|([-+][0-9]{1,2})(?::([0-9]{2})?)?))?$",
    ))
    .expect("timestamp pattern is valid")
});

/// Check if the text is one of the null spellings
pub fn is_null(text: &str) -> bool {
    NULL_SPELLINGS.contains(&text)
}

/// Look up a boolean spelling, ignoring case
pub fn lookup_bool(text: &str) -> Option<bool> {
    BOOL_VALUES.get(text.to_lowercase().as_str()).copied()
}
