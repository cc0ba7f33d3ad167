//! Plain transfer form of a [`Card`].
//!
//! With the `serde` feature the record (de)serializes with camelCase keys.
//! Turning a record back into a card re-runs every validation.

use std::convert::TryFrom;
use std::fmt;

use crate::card::{Card, CardBuilder};
use crate::constants::CVV_PLACEHOLDER;
use crate::{Error, Result};

/// All five card fields as plain strings.
///
/// This is the form a card takes when it crosses a boundary, so unlike the
/// textual dumps it carries the CVV: serialization writes it out in clear.
/// Only `Debug` masks it.
#[derive(Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct CardRecord {
    /// Card number, whitespace already removed when taken from a card
    pub card_number: String,
    /// CVV in clear
    pub cvv: String,
    /// Expiry date as `MM/yy`
    pub expiry_date: String,
    /// Card holder name
    pub name: String,
    /// Issue number
    pub issue_number: String,
}

impl CardRecord {
    /// Validate into a card reporting to `sink`. Empty fields stay unset.
    pub fn into_card_with_sink<S: crate::events::EventSink>(self, sink: S) -> Result<Card<S>> {
        let mut builder = CardBuilder::new()
            .name(self.name)
            .issue_number(self.issue_number);
        if !self.card_number.is_empty() {
            builder = builder.card_number(self.card_number);
        }
        if !self.cvv.is_empty() {
            builder = builder.cvv(self.cvv);
        }
        if !self.expiry_date.is_empty() {
            builder = builder.expiry_date(self.expiry_date);
        }
        builder.build_with_sink(sink)
    }
}

impl<S> From<&Card<S>> for CardRecord {
    fn from(card: &Card<S>) -> Self {
        Self {
            card_number: card.card_number().to_string(),
            cvv: card.cvv().to_string(),
            expiry_date: card.expiry_date().to_string(),
            name: card.name().to_string(),
            issue_number: card.issue_number().to_string(),
        }
    }
}

impl TryFrom<CardRecord> for Card {
    type Error = Error;

    fn try_from(record: CardRecord) -> Result<Self> {
        record.into_card_with_sink(crate::events::LogSink)
    }
}

impl fmt::Debug for CardRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardRecord")
            .field("card_number", &self.card_number)
            .field("cvv", &CVV_PLACEHOLDER)
            .field("expiry_date", &self.expiry_date)
            .field("name", &self.name)
            .field("issue_number", &self.issue_number)
            .finish()
    }
}
