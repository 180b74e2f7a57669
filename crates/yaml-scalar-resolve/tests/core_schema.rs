//! Tests for typed and dynamic resolution against the core schema
//!
//! Covers:
//! - Null spellings against every target kind
//! - Booleans in every letter case
//! - Integer bases, signs, base 60 and overflow
//! - Floats, special tokens and overflow
//! - Timestamps with and without zones
//! - Binary
//! - Dispatch errors and tag-directed resolution

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use rstest::rstest;
use yaml_scalar_diagnostics::ErrorKind;
use yaml_scalar_resolve::{resolve, resolve_dynamic, resolve_tagged};
use yaml_scalar_types::{
    FloatPrecision, IntWidth, ResolvedValue, ScalarEvent, TargetKind, UintWidth,
};

const ALL_KINDS: [TargetKind; 12] = [
    TargetKind::String,
    TargetKind::Bool,
    TargetKind::SignedInt(IntWidth::W8),
    TargetKind::SignedInt(IntWidth::W64),
    TargetKind::UnsignedInt(UintWidth::W8),
    TargetKind::UnsignedInt(UintWidth::W64),
    TargetKind::Float(FloatPrecision::F32),
    TargetKind::Float(FloatPrecision::F64),
    TargetKind::Timestamp,
    TargetKind::Binary,
    TargetKind::Dynamic,
    TargetKind::Sequence,
];

fn typed(text: &str, kind: TargetKind) -> ResolvedValue {
    resolve(&ScalarEvent::plain(text), kind)
        .unwrap_or_else(|e| panic!("Failed to resolve '{}' as {}: {}", text, kind, e))
}

fn error_kind(text: &str, kind: TargetKind) -> ErrorKind {
    match resolve(&ScalarEvent::plain(text), kind) {
        Ok(value) => panic!("Expected '{}' as {} to fail, got: {:?}", text, kind, value),
        Err(err) => err.kind(),
    }
}

// === Null ===

#[rstest]
fn test_null_spellings_resolve_to_zero(#[values("", "~", "null", "Null", "NULL")] text: &str) {
    for kind in ALL_KINDS {
        let value = typed(text, kind);
        assert_eq!(value, ResolvedValue::zero(kind), "{text:?} as {kind}");
    }
}

#[test]
fn test_null_zero_values() {
    assert_eq!(typed("~", TargetKind::String), ResolvedValue::from(""));
    assert_eq!(typed("~", TargetKind::Bool), ResolvedValue::Bool(false));
    assert_eq!(typed("~", TargetKind::I64), ResolvedValue::Int(0));
    assert_eq!(typed("~", TargetKind::F64), ResolvedValue::Float(0.0));
    assert_eq!(typed("~", TargetKind::Binary), ResolvedValue::Binary(vec![]));
    assert_eq!(typed("~", TargetKind::Dynamic), ResolvedValue::Null);
}

#[test]
fn test_quoted_null_spelling_is_null_for_typed_dynamic() {
    let quoted = ScalarEvent::quoted("null");
    assert_eq!(resolve(&quoted, TargetKind::Dynamic).unwrap(), ResolvedValue::Null);
    assert_eq!(resolve_dynamic(&quoted), ResolvedValue::from("null"));
}

// === Booleans ===

#[rstest]
#[case("y", true)]
#[case("Y", true)]
#[case("yes", true)]
#[case("YeS", true)]
#[case("true", true)]
#[case("TRUE", true)]
#[case("on", true)]
#[case("On", true)]
#[case("n", false)]
#[case("N", false)]
#[case("no", false)]
#[case("NO", false)]
#[case("false", false)]
#[case("False", false)]
#[case("off", false)]
#[case("OFF", false)]
fn test_bool_spellings(#[case] text: &str, #[case] expected: bool) {
    assert_eq!(typed(text, TargetKind::Bool), ResolvedValue::Bool(expected));
}

#[rstest]
fn test_bool_rejects(#[values("1", "0", "t", "f", "yess", "o", "enabled", " yes")] text: &str) {
    assert_eq!(error_kind(text, TargetKind::Bool), ErrorKind::InvalidBoolean);
}

// === Integers ===

#[rstest]
#[case("0b101", 5)]
#[case("017", 15)]
#[case("0x1F", 31)]
#[case("1:2", 62)]
#[case("-10", -10)]
#[case("+685_230", 685_230)]
#[case("02472256", 685_230)]
#[case("0x_0A_74_AE", 685_230)]
#[case("0b1010_0111_0100_1010_1110", 685_230)]
#[case("190:20:30", 685_230)]
#[case("0", 0)]
fn test_int_forms(#[case] text: &str, #[case] expected: i64) {
    assert_eq!(typed(text, TargetKind::I64), ResolvedValue::Int(expected));
}

#[test]
fn test_int_overflow() {
    assert_eq!(
        error_kind("99999999999999999999", TargetKind::I64),
        ErrorKind::IntegerOverflow
    );
    assert_eq!(
        error_kind("40000", TargetKind::SignedInt(IntWidth::W16)),
        ErrorKind::IntegerOverflow
    );
    assert_eq!(
        error_kind("-600:0", TargetKind::SignedInt(IntWidth::W16)),
        ErrorKind::IntegerOverflow
    );
    assert_eq!(
        typed("-32768", TargetKind::SignedInt(IntWidth::W16)),
        ResolvedValue::Int(-32768)
    );
}

#[rstest]
fn test_int_rejects(#[values("abc", "1.0", "0x", "0b", "12e3", "1:", "--1")] text: &str) {
    assert_eq!(error_kind(text, TargetKind::I64), ErrorKind::InvalidInteger);
}

#[test]
fn test_unsigned() {
    assert_eq!(typed("0xFF", TargetKind::UnsignedInt(UintWidth::W8)), ResolvedValue::Uint(255));
    assert_eq!(typed("+1:0", TargetKind::U64), ResolvedValue::Uint(60));
    assert_eq!(error_kind("-1", TargetKind::U64), ErrorKind::UnsignedWithNegativeSign);
    assert_eq!(
        error_kind("0x100", TargetKind::UnsignedInt(UintWidth::W8)),
        ErrorKind::UnsignedOverflow
    );
    assert_eq!(error_kind("one", TargetKind::U64), ErrorKind::InvalidUnsignedInteger);
}

// === Floats ===

#[test]
fn test_float_specials() {
    assert_eq!(typed(".inf", TargetKind::F64), ResolvedValue::Float(f64::INFINITY));
    assert_eq!(typed("-.inf", TargetKind::F64), ResolvedValue::Float(f64::NEG_INFINITY));
    assert_eq!(typed("+.Inf", TargetKind::F64), ResolvedValue::Float(f64::INFINITY));
    let nan = typed(".nan", TargetKind::F64).as_f64().unwrap();
    assert!(nan.is_nan());
    let nan = typed(".NaN", TargetKind::Float(FloatPrecision::F32)).as_f64().unwrap();
    assert!(nan.is_nan());
}

#[rstest]
#[case("1:30.5", 90.5)]
#[case("190:20:30.5", 685_230.5)]
#[case("6.8523015e+5", 685_230.15)]
#[case("-1_0.25", -10.25)]
#[case("0.", 0.0)]
#[case("3", 3.0)]
fn test_float_forms(#[case] text: &str, #[case] expected: f64) {
    assert_eq!(typed(text, TargetKind::F64), ResolvedValue::Float(expected));
}

#[test]
fn test_float_errors() {
    assert_eq!(error_kind("1e309", TargetKind::F64), ErrorKind::FloatOverflow);
    assert_eq!(
        error_kind("3.5e38", TargetKind::Float(FloatPrecision::F32)),
        ErrorKind::FloatOverflow
    );
    assert_eq!(error_kind("infinity", TargetKind::F64), ErrorKind::InvalidFloat);
    assert_eq!(error_kind("1,5", TargetKind::F64), ErrorKind::InvalidFloat);
}

#[test]
fn test_f32_rounds() {
    let value = typed("0.1", TargetKind::Float(FloatPrecision::F32));
    assert_eq!(value, ResolvedValue::Float(0.1f32 as f64));
}

// === Timestamps ===

#[test]
fn test_timestamp_canonical() {
    let value = typed("2001-12-15T02:59:43.1Z", TargetKind::Timestamp);
    let expected = Utc.with_ymd_and_hms(2001, 12, 15, 2, 59, 43).unwrap()
        + chrono::TimeDelta::milliseconds(100);
    assert_eq!(value.as_timestamp().unwrap(), &expected);
}

#[test]
fn test_timestamp_offset_equivalence() {
    let local = typed("2001-12-14t21:59:43.10-05:00", TargetKind::Timestamp);
    let canonical = typed("2001-12-15T02:59:43.1Z", TargetKind::Timestamp);
    assert_eq!(local, canonical);
}

#[test]
fn test_timestamp_date_only() {
    let value = typed("2002-12-14", TargetKind::Timestamp);
    let expected = Utc.with_ymd_and_hms(2002, 12, 14, 0, 0, 0).unwrap();
    assert_eq!(value.as_timestamp().unwrap(), &expected);
}

#[rstest]
fn test_timestamp_rejects(#[values("not-a-date", "2002/12/14", "2002-12-14T", "12:30:45")] text: &str) {
    assert_eq!(error_kind(text, TargetKind::Timestamp), ErrorKind::InvalidTimestamp);
}

// === Binary ===

#[test]
fn test_binary() {
    let value = typed("R0lGODlhDAAMAIQAAP//9/X1", TargetKind::Binary);
    assert_eq!(&value.as_bytes().unwrap()[..6], b"GIF89a");
    assert_eq!(error_kind("not base64!", TargetKind::Binary), ErrorKind::InvalidBinary);
}

// === Strings and dispatch ===

#[test]
fn test_string_target_keeps_text() {
    assert_eq!(typed("123", TargetKind::String), ResolvedValue::from("123"));
    assert_eq!(typed("yes", TargetKind::String), ResolvedValue::from("yes"));
}

#[test]
fn test_composite_targets_unsupported() {
    assert_eq!(error_kind("a", TargetKind::Sequence), ErrorKind::UnsupportedTargetKind);
    assert_eq!(error_kind("a", TargetKind::Mapping), ErrorKind::UnsupportedTargetKind);
}

#[test]
fn test_dynamic_target_kind_infers() {
    assert_eq!(typed("12", TargetKind::Dynamic), ResolvedValue::Int(12));
    assert_eq!(typed("off", TargetKind::Dynamic), ResolvedValue::Bool(false));
}

// === Tag-directed resolution ===

#[rstest]
#[case("123", "!!str", ResolvedValue::from("123"))]
#[case("123", "tag:yaml.org,2002:float", ResolvedValue::Float(123.0))]
#[case("0o", "!!str", ResolvedValue::from("0o"))]
#[case("yes", "!!bool", ResolvedValue::Bool(true))]
#[case("aGk=", "!!binary", ResolvedValue::Binary(b"hi".to_vec()))]
#[case("123", "!custom", ResolvedValue::Int(123))]
fn test_tagged(#[case] text: &str, #[case] tag: &str, #[case] expected: ResolvedValue) {
    let event = ScalarEvent::tagged(text, tag);
    assert_eq!(resolve_tagged(&event).unwrap(), expected);
}

#[test]
fn test_tagged_errors() {
    let event = ScalarEvent::tagged("abc", "!!int");
    assert_eq!(resolve_tagged(&event).unwrap_err().kind(), ErrorKind::InvalidInteger);

    let event = ScalarEvent::tagged("abc", "!!seq");
    assert_eq!(
        resolve_tagged(&event).unwrap_err().kind(),
        ErrorKind::UnsupportedTargetKind
    );
}

#[test]
fn test_untagged_falls_back_to_inference() {
    assert_eq!(resolve_tagged(&ScalarEvent::plain("1.5")).unwrap(), ResolvedValue::Float(1.5));
    assert_eq!(resolve_tagged(&ScalarEvent::quoted("1.5")).unwrap(), ResolvedValue::from("1.5"));
}
