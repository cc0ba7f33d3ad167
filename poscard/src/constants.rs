// poscard/src/constants.rs
//! Validation constants shared across the crate

/// Number of characters a card number must have once whitespace is removed
pub const CARD_NUMBER_LEN: usize = 16;

/// Accepted CVV lengths in characters
pub const CVV_LENGTHS: [usize; 2] = [3, 4];

/// Expiry date pattern accepted by the parser (two digit month and year)
pub const EXPIRY_PATTERN: &str = "MM/yy";

/// Separator between month and year in an expiry date
pub const EXPIRY_SEPARATOR: char = '/';

/// Base added to a two digit expiry year ("24" resolves to 2024)
pub const TWO_DIGIT_YEAR_BASE: u16 = 2000;

/// Smallest absolute year an expiry date may carry
pub const MIN_EXPIRY_YEAR: u16 = 1000;

/// Placeholder written instead of the CVV in every textual dump
pub const CVV_PLACEHOLDER: &str = "NOT PRINTED";
