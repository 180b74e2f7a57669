//! Timestamp converter
//!
//! Two grammars, tried in order:
//! - `YYYY-M-D`, midnight UTC
//! - `YYYY-M-D` then `T`, `t` or blanks, then `H:MM:SS`, an optional
//!   `.fraction`, and an optional zone: `Z` or `±H[H][:MM]`, UTC when absent
//!
//! The fraction is decimal (`.1` is 100 ms) and is truncated to nanosecond
//! resolution. Fields outside their calendar or clock range are rejected.

use crate::vocabulary::{DATE_ONLY, DATE_TIME};
use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use regex::Captures;
use std::str::FromStr;
use yaml_scalar_diagnostics::{ResolveError, ResolveResult};
use yaml_scalar_types::Timestamp;

const NANOS_DIGITS: usize = 9;

/// Resolve a date or date-time into an absolute point in time
pub fn resolve_timestamp(text: &str) -> ResolveResult<Timestamp> {
    parse_timestamp(text).ok_or_else(|| ResolveError::invalid_timestamp(text))
}

fn parse_timestamp(text: &str) -> Option<Timestamp> {
    if let Some(caps) = DATE_ONLY.captures(text) {
        let date = parse_date(&caps)?;
        return utc()?.from_local_datetime(&date.and_hms_opt(0, 0, 0)?).single();
    }

    let caps = DATE_TIME.captures(text)?;
    let date = parse_date(&caps)?;
    let nanos = caps.get(7).map_or(Some(0), |m| fraction_nanos(m.as_str()))?;
    let time = NaiveTime::from_hms_nano_opt(
        field(&caps, 4)?,
        field(&caps, 5)?,
        field(&caps, 6)?,
        nanos,
    )?;
    let offset = parse_offset(&caps)?;
    offset
        .from_local_datetime(&NaiveDateTime::new(date, time))
        .single()
}

fn parse_date(caps: &Captures<'_>) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(field(caps, 1)?, field(caps, 2)?, field(caps, 3)?)
}

/// `Z` and a missing zone both mean UTC
fn parse_offset(caps: &Captures<'_>) -> Option<FixedOffset> {
    let Some(hours) = caps.get(8) else {
        return utc();
    };
    let (sign, hours) = hours.as_str().split_at(1);
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = match caps.get(9) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    let seconds = (hours * 60 + minutes) * 60;
    FixedOffset::east_opt(if sign == "-" { -seconds } else { seconds })
}

/// Scale a fraction digit string to nanoseconds
fn fraction_nanos(digits: &str) -> Option<u32> {
    let kept = &digits[..digits.len().min(NANOS_DIGITS)];
    if kept.is_empty() {
        return Some(0);
    }
    let scale = 10u32.pow((NANOS_DIGITS - kept.len()) as u32);
    kept.parse::<u32>().ok().map(|n| n * scale)
}

fn field<T: FromStr>(caps: &Captures<'_>, index: usize) -> Option<T> {
    caps.get(index)?.as_str().parse().ok()
}

fn utc() -> Option<FixedOffset> {
    FixedOffset::east_opt(0)
}
