// poscard/src/events.rs
//! Validation events emitted by the card setters.
//!
//! Every setter reports what it did to an [`EventSink`] held by the card.
//! [`LogSink`] forwards events to the `log` facade; tests inject a sink that
//! keeps them in memory instead.

use std::fmt;

use derive_more::Display;

/// Card field a setter operates on
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Field {
    #[display(fmt = "Card Number")]
    CardNumber,
    #[display(fmt = "CVV")]
    Cvv,
    #[display(fmt = "Expiry Date")]
    ExpiryDate,
    #[display(fmt = "Name")]
    Name,
    #[display(fmt = "Issue Number")]
    IssueNumber,
}

/// Result of a single validation
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Value stored
    #[display(fmt = "Success")]
    Success,
    /// Value rejected, field unchanged
    #[display(fmt = "Failed")]
    Failed,
}

/// One setter call as seen by the sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardEvent {
    /// Field the setter targeted
    pub field: Field,
    /// Whether the value was stored
    pub outcome: Outcome,
    /// Raw input, only for fields whose value may be logged
    pub attempted: Option<String>,
    /// Why validation failed, if it did
    pub reason: Option<String>,
}

impl CardEvent {
    /// Event for an accepted value
    pub fn success(field: Field, attempted: Option<&str>) -> Self {
        Self {
            field,
            outcome: Outcome::Success,
            attempted: attempted.map(str::to_string),
            reason: None,
        }
    }

    /// Event for a rejected value, with the reason
    pub fn failed(field: Field, attempted: Option<&str>, reason: impl fmt::Display) -> Self {
        Self {
            field,
            outcome: Outcome::Failed,
            attempted: attempted.map(str::to_string),
            reason: Some(reason.to_string()),
        }
    }

    /// True when the value was stored
    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Success
    }
}

impl fmt::Display for CardEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Set {} Validation - {}", self.field, self.outcome)?;
        if let Some(reason) = &self.reason {
            write!(f, " ({})", reason)?;
        }
        if let Some(attempted) = &self.attempted {
            write!(f, ": {}", attempted)?;
        }
        Ok(())
    }
}

/// Capability that records validation events.
pub trait EventSink {
    /// Record one event
    fn record(&mut self, event: CardEvent);
}

/// Default sink: writes every event to the `log` facade at info level.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LogSink;

impl EventSink for LogSink {
    fn record(&mut self, event: CardEvent) {
        log::info!("{}", event);
    }
}

/// Sink that drops every event.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&mut self, _event: CardEvent) {}
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn record(&mut self, event: CardEvent) {
        (**self).record(event)
    }
}

impl<S: EventSink + ?Sized> EventSink for Box<S> {
    fn record(&mut self, event: CardEvent) {
        (**self).record(event)
    }
}
