// poscard/src/types.rs
//! Validated newtypes for card fields.

use std::convert::TryFrom;
use std::fmt;

use derive_more::Display;

use crate::Error;
use crate::constants::{CARD_NUMBER_LEN, CVV_LENGTHS, CVV_PLACEHOLDER};

/// Remove every whitespace character, wherever it appears.
pub fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// CardNumber - Newtype Pattern (16 characters, whitespace removed)
///
/// Only the length is checked; the characters themselves are not required
/// to be digits.
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash)]
pub struct CardNumber(String);

impl CardNumber {
    /// Borrow the stripped number
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the stripped number
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<&str> for CardNumber {
    type Error = Error;

    fn try_from(input: &str) -> Result<Self, Self::Error> {
        let stripped = strip_whitespace(input);
        let actual = stripped.chars().count();
        if actual != CARD_NUMBER_LEN {
            return Err(Error::InvalidCardNumberLength {
                expected: CARD_NUMBER_LEN,
                actual,
            });
        }
        Ok(Self(stripped))
    }
}

/// Cvv - Newtype Pattern (3 or 4 characters)
///
/// There is no `Display` impl and `Debug` prints a placeholder, so the value
/// cannot leak through formatting.
#[derive(Clone, PartialEq, Eq)]
pub struct Cvv(String);

impl Cvv {
    /// Expose the raw code. Callers take responsibility for not printing it.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Take the raw code
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<&str> for Cvv {
    type Error = Error;

    fn try_from(input: &str) -> Result<Self, Self::Error> {
        let actual = input.chars().count();
        if !CVV_LENGTHS.contains(&actual) {
            return Err(Error::InvalidCvvLength { actual });
        }
        Ok(Self(input.to_string()))
    }
}

impl fmt::Debug for Cvv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cvv").field(&CVV_PLACEHOLDER).finish()
    }
}
