// poscard/src/error.rs
//! Error types for the typed validation layer.

use thiserror::Error;

/// Common error type for the typed validation layer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Card number does not have 16 characters once whitespace is removed
    #[error("invalid card number length: expected {expected}, got {actual}")]
    InvalidCardNumberLength {
        /// Required length
        expected: usize,
        /// Length after stripping whitespace
        actual: usize,
    },

    /// CVV is neither 3 nor 4 characters long
    #[error("invalid cvv length: expected 3 or 4, got {actual}")]
    InvalidCvvLength {
        /// Length of the rejected input
        actual: usize,
    },

    /// Expiry date rejected by the parser
    #[error("invalid expiry date: {0}")]
    Expiry(#[from] ExpiryError),
}

/// Reasons an expiry date string is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpiryError {
    /// The input does not have the `MM/yy` shape
    #[error("malformed expiry date '{0}', expected MM/yy")]
    Malformed(String),

    /// Month outside 1-12
    #[error("month out of range: {0}")]
    MonthOutOfRange(u8),

    /// Absolute year below 1000
    #[error("year out of range: {0}")]
    YearOutOfRange(u16),
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;
