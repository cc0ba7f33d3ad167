// poscard/src/expiry.rs
//! Card expiry dates in the `MM/yy` form.
//!
//! The parser is strict: exactly two ASCII digits for the month, a `/`, and
//! exactly two ASCII digits for the year. Signs, padding and trailing input
//! are rejected. The two digit year resolves into 2000..=2099.

use std::fmt;
use std::str::FromStr;

use crate::constants::{EXPIRY_SEPARATOR, MIN_EXPIRY_YEAR, TWO_DIGIT_YEAR_BASE};
use crate::error::ExpiryError;

/// Month and absolute year of a card expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExpiryDate {
    // field order gives chronological Ord
    year: u16,
    month: u8,
}

impl ExpiryDate {
    /// Build an expiry from a month (1-12) and an absolute year (>= 1000).
    pub fn new(month: u8, year: u16) -> Result<Self, ExpiryError> {
        if !(1..=12).contains(&month) {
            return Err(ExpiryError::MonthOutOfRange(month));
        }
        if year < MIN_EXPIRY_YEAR {
            return Err(ExpiryError::YearOutOfRange(year));
        }
        Ok(Self { year, month })
    }

    /// Month, 1-12
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Absolute year, e.g. 2024
    pub fn year(&self) -> u16 {
        self.year
    }
}

/// Parse `input` against `MM/yy`.
pub fn parse_expiry(input: &str) -> Result<ExpiryDate, ExpiryError> {
    let malformed = || ExpiryError::Malformed(input.to_string());

    let (mm, yy) = input.split_once(EXPIRY_SEPARATOR).ok_or_else(malformed)?;
    let month = two_digits(mm).ok_or_else(malformed)?;
    let year = two_digits(yy).ok_or_else(malformed)?;

    ExpiryDate::new(month, TWO_DIGIT_YEAR_BASE + u16::from(year))
}

// Exactly two ASCII digits; `u8::from_str` would also accept a leading '+'.
fn two_digits(s: &str) -> Option<u8> {
    match s.as_bytes() {
        [hi, lo] if hi.is_ascii_digit() && lo.is_ascii_digit() => {
            Some((hi - b'0') * 10 + (lo - b'0'))
        }
        _ => None,
    }
}

impl FromStr for ExpiryDate {
    type Err = ExpiryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_expiry(s)
    }
}

impl fmt::Display for ExpiryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}{}{:02}",
            self.month,
            EXPIRY_SEPARATOR,
            self.year % 100
        )
    }
}
