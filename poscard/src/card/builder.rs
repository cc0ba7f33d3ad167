//! Builder for [`Card`].

use std::fmt;

use crate::Result;
use crate::card::Card;
use crate::constants::CVV_PLACEHOLDER;
use crate::events::{EventSink, LogSink};

/// One-shot construction of a [`Card`].
///
/// Each provided field goes through the card's own validating setter, so
/// `build` fails with the first typed error instead of a bare `false`.
/// Fields left out keep their empty default.
#[derive(Clone, Default)]
pub struct CardBuilder {
    card_number: Option<String>,
    cvv: Option<String>,
    expiry_date: Option<String>,
    name: Option<String>,
    issue_number: Option<String>,
}

impl CardBuilder {
    /// Builder with every field unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Card number; whitespace is removed on build
    pub fn card_number(mut self, card_number: impl Into<String>) -> Self {
        self.card_number = Some(card_number.into());
        self
    }

    /// CVV of 3 or 4 characters
    pub fn cvv(mut self, cvv: impl Into<String>) -> Self {
        self.cvv = Some(cvv.into());
        self
    }

    /// Expiry date as `MM/yy`
    pub fn expiry_date(mut self, expiry_date: impl Into<String>) -> Self {
        self.expiry_date = Some(expiry_date.into());
        self
    }

    /// Card holder name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Issue number
    pub fn issue_number(mut self, issue_number: impl Into<String>) -> Self {
        self.issue_number = Some(issue_number.into());
        self
    }

    /// Validate and build a card reporting to the `log` facade
    pub fn build(self) -> Result<Card> {
        self.build_with_sink(LogSink)
    }

    /// Validate and build a card reporting to `sink`
    pub fn build_with_sink<S: EventSink>(self, sink: S) -> Result<Card<S>> {
        let mut card = Card::with_sink(sink);
        if let Some(number) = &self.card_number {
            card.try_set_card_number(number)?;
        }
        if let Some(cvv) = &self.cvv {
            card.try_set_cvv(cvv)?;
        }
        if let Some(expiry) = &self.expiry_date {
            card.try_set_expiry_date(expiry)?;
        }
        if let Some(name) = &self.name {
            card.set_name(name);
        }
        if let Some(issue) = &self.issue_number {
            card.set_issue_number(issue);
        }
        Ok(card)
    }
}

impl fmt::Debug for CardBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardBuilder")
            .field("card_number", &self.card_number)
            .field("cvv", &self.cvv.as_ref().map(|_| CVV_PLACEHOLDER))
            .field("expiry_date", &self.expiry_date)
            .field("name", &self.name)
            .field("issue_number", &self.issue_number)
            .finish()
    }
}
