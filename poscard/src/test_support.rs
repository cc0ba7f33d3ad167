//! Test support helpers intended for use by unit and integration tests.
//!
//! `RecordingSink` keeps validation events in memory so tests can assert on
//! them without installing a global logger.
#![allow(dead_code)]

use crate::card::Card;
use crate::events::{CardEvent, EventSink, Outcome};

/// Sink that stores every event in call order.
#[doc(hidden)]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingSink {
    events: Vec<CardEvent>,
}

impl RecordingSink {
    /// Empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far, oldest first
    pub fn events(&self) -> &[CardEvent] {
        &self.events
    }

    /// Events rendered the way `LogSink` would log them.
    pub fn lines(&self) -> Vec<String> {
        self.events.iter().map(|e| e.to_string()).collect()
    }

    /// Number of rejected values
    pub fn failures(&self) -> usize {
        self.events
            .iter()
            .filter(|e| e.outcome == Outcome::Failed)
            .count()
    }

    /// Forget recorded events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl EventSink for RecordingSink {
    fn record(&mut self, event: CardEvent) {
        self.events.push(event);
    }
}

/// Convenience: an empty card wired to a fresh `RecordingSink`.
#[doc(hidden)]
pub fn recording_card() -> Card<RecordingSink> {
    Card::with_sink(RecordingSink::new())
}

/// Card holding one valid value per field.
#[doc(hidden)]
pub fn sample_card() -> Card<RecordingSink> {
    let mut card = recording_card();
    card.set_card_number("4444 3333 2222 1111");
    card.set_cvv("846");
    card.set_expiry_date("05/21");
    card.set_name("Joe Bloggs");
    card.set_issue_number("02");
    card
}
