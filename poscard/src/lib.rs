// poscard/src/lib.rs

//! poscard
//!
//! Payment card transfer object with field-level validation.
//!
//! ```
//! use poscard::Card;
//!
//! let mut card = Card::new();
//! assert!(card.set_card_number("0000 0000 0000 0000"));
//! assert!(card.set_cvv("846"));
//! assert!(!card.set_expiry_date("14/24"));
//! assert_eq!(card.card_number(), "0000000000000000");
//! assert!(!card.to_string().contains("846"));
//! ```
#![warn(missing_docs)]

pub mod card;
pub mod constants;
pub mod error;
pub mod events;
pub mod expiry;
pub mod prelude;
pub mod test_support;
pub mod types;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
