//! Base 60 numbers: colon-separated groups, most significant first.
//!
//! Each group is an ordinary base 10 magnitude and is not limited to 0-59,
//! so `1:75` is `135`. The integer and float converters share this routine
//! and differ only in how a single group is parsed and accumulated.

use super::{NumberError, parse_decimal_float, parse_digits};

/// A magnitude that can be assembled from base 60 groups
pub(crate) trait Sexagesimal: Copy {
    const ZERO: Self;

    fn parse_group(group: &str) -> Result<Self, NumberError>;

    /// `acc * 60 + group`
    fn shift_in(acc: Self, group: Self) -> Result<Self, NumberError>;
}

impl Sexagesimal for u64 {
    const ZERO: Self = 0;

    fn parse_group(group: &str) -> Result<Self, NumberError> {
        parse_digits(group, 10)
    }

    fn shift_in(acc: Self, group: Self) -> Result<Self, NumberError> {
        acc.checked_mul(60)
            .and_then(|shifted| shifted.checked_add(group))
            .ok_or(NumberError::Overflow)
    }
}

impl Sexagesimal for f64 {
    const ZERO: Self = 0.0;

    fn parse_group(group: &str) -> Result<Self, NumberError> {
        parse_decimal_float(group)
    }

    fn shift_in(acc: Self, group: Self) -> Result<Self, NumberError> {
        let value = acc * 60.0 + group;
        if value.is_infinite() {
            Err(NumberError::Overflow)
        } else {
            Ok(value)
        }
    }
}

/// Combine the colon-separated groups of `body` into one magnitude
pub(crate) fn parse<T: Sexagesimal>(body: &str) -> Result<T, NumberError> {
    body.split(':')
        .try_fold(T::ZERO, |acc, group| T::shift_in(acc, T::parse_group(group)?))
}
