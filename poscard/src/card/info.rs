//! CVV-free view of a card.

use std::fmt;

use crate::constants::CVV_PLACEHOLDER;
use crate::expiry::ExpiryDate;

/// Printable part of a card: everything except the CVV.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardInfo {
    /// Card holder name
    pub name: String,
    /// Expiry date as stored on the card
    pub expiry_date: String,
    /// Card number with whitespace removed
    pub card_number: String,
}

impl CardInfo {
    /// Build from the three printable fields
    pub fn new(
        name: impl Into<String>,
        expiry_date: impl Into<String>,
        card_number: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            expiry_date: expiry_date.into(),
            card_number: card_number.into(),
        }
    }

    /// Card holder name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Expiry date as stored on the card
    pub fn expiry_date(&self) -> &str {
        &self.expiry_date
    }

    /// Card number with whitespace removed
    pub fn card_number(&self) -> &str {
        &self.card_number
    }

    /// Parse the expiry date; `None` if it is unset or malformed
    pub fn parsed_expiry(&self) -> Option<ExpiryDate> {
        self.expiry_date.parse().ok()
    }
}

impl<S> From<&crate::card::Card<S>> for CardInfo {
    fn from(card: &crate::card::Card<S>) -> Self {
        CardInfo::new(card.name(), card.expiry_date(), card.card_number())
    }
}

impl fmt::Display for CardInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Card{{name={}, expiryDate={}, cardNumber={}, cvv={}}}",
            self.name, self.expiry_date, self.card_number, CVV_PLACEHOLDER
        )
    }
}
