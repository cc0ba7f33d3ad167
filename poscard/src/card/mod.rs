// poscard/src/card/mod.rs
//! The card transfer object and its companions.

use std::convert::TryFrom;
use std::fmt;

use crate::constants::CVV_PLACEHOLDER;
use crate::events::{CardEvent, EventSink, Field, LogSink};
use crate::expiry::{ExpiryDate, parse_expiry};
use crate::types::{CardNumber, Cvv};
use crate::{Error, Result};

mod info;
pub use info::CardInfo;

pub mod builder;
pub mod record;

pub use builder::CardBuilder;
pub use record::CardRecord;

/// Payment card transfer object.
///
/// Every field is a string, starts out empty and can only be changed through
/// its setter. Setters are independent of each other and a rejected value
/// leaves the stored one untouched.
pub struct Card<S = LogSink> {
    card_number: String,
    cvv: String,
    expiry_date: String,
    name: String,
    issue_number: String,
    sink: S,
}

impl Card<LogSink> {
    /// Empty card reporting to the `log` facade.
    pub fn new() -> Self {
        Self::with_sink(LogSink)
    }

    /// Start a [`CardBuilder`]
    pub fn builder() -> CardBuilder {
        CardBuilder::new()
    }
}

impl Default for Card<LogSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Card<S> {
    /// Empty card reporting validation events to `sink`.
    pub fn with_sink(sink: S) -> Self {
        Self {
            card_number: String::new(),
            cvv: String::new(),
            expiry_date: String::new(),
            name: String::new(),
            issue_number: String::new(),
            sink,
        }
    }

    /// Card number with whitespace removed
    pub fn card_number(&self) -> &str {
        &self.card_number
    }

    /// The stored CVV. Never included in `Display` or `Debug` output.
    pub fn cvv(&self) -> &str {
        &self.cvv
    }

    /// Card holder name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Expiry date exactly as it was given, in the form `MM/yy`.
    pub fn expiry_date(&self) -> &str {
        &self.expiry_date
    }

    /// Issue number as given
    pub fn issue_number(&self) -> &str {
        &self.issue_number
    }

    /// Parse the stored expiry date; `None` while it is unset.
    pub fn parsed_expiry(&self) -> Option<ExpiryDate> {
        parse_expiry(&self.expiry_date).ok()
    }

    /// Snapshot of the printable fields.
    pub fn info(&self) -> CardInfo {
        CardInfo::from(self)
    }

    /// Sink receiving this card's validation events
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the card, keeping its sink
    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S: EventSink> Card<S> {
    /// Remove all whitespace from `input` and store it if 16 characters
    /// remain. Returns whether the value was accepted.
    pub fn set_card_number(&mut self, input: &str) -> bool {
        self.try_set_card_number(input).is_ok()
    }

    /// Like [`Card::set_card_number`], with the rejection reason
    pub fn try_set_card_number(&mut self, input: &str) -> Result<()> {
        match CardNumber::try_from(input) {
            Ok(number) => {
                self.sink
                    .record(CardEvent::success(Field::CardNumber, Some(number.as_str())));
                self.card_number = number.into_inner();
                Ok(())
            }
            Err(e) => {
                let stripped = crate::types::strip_whitespace(input);
                self.sink
                    .record(CardEvent::failed(Field::CardNumber, Some(stripped.as_str()), &e));
                Err(e)
            }
        }
    }

    /// Store a CVV of 3 or 4 characters. Returns whether it was accepted.
    pub fn set_cvv(&mut self, input: &str) -> bool {
        self.try_set_cvv(input).is_ok()
    }

    /// Like [`Card::set_cvv`], with the rejection reason
    pub fn try_set_cvv(&mut self, input: &str) -> Result<()> {
        // the code itself is never handed to the sink
        match Cvv::try_from(input) {
            Ok(cvv) => {
                self.sink.record(CardEvent::success(Field::Cvv, None));
                self.cvv = cvv.into_inner();
                Ok(())
            }
            Err(e) => {
                self.sink.record(CardEvent::failed(Field::Cvv, None, &e));
                Err(e)
            }
        }
    }

    /// Store `input` verbatim if it parses as `MM/yy`. Returns whether it was
    /// accepted.
    pub fn set_expiry_date(&mut self, input: &str) -> bool {
        self.try_set_expiry_date(input).is_ok()
    }

    /// Like [`Card::set_expiry_date`], with the rejection reason
    pub fn try_set_expiry_date(&mut self, input: &str) -> Result<()> {
        match parse_expiry(input) {
            Ok(_) => {
                self.sink
                    .record(CardEvent::success(Field::ExpiryDate, Some(input)));
                self.expiry_date = input.to_string();
                Ok(())
            }
            Err(e) => {
                self.sink
                    .record(CardEvent::failed(Field::ExpiryDate, Some(input), &e));
                Err(Error::from(e))
            }
        }
    }

    /// Names are not validated; always returns true.
    pub fn set_name(&mut self, input: &str) -> bool {
        self.sink.record(CardEvent::success(Field::Name, None));
        self.name = input.to_string();
        true
    }

    /// Issue numbers are not validated; always returns true.
    pub fn set_issue_number(&mut self, input: &str) -> bool {
        self.sink.record(CardEvent::success(Field::IssueNumber, None));
        self.issue_number = input.to_string();
        true
    }
}

impl<S: Clone> Clone for Card<S> {
    fn clone(&self) -> Self {
        Self {
            card_number: self.card_number.clone(),
            cvv: self.cvv.clone(),
            expiry_date: self.expiry_date.clone(),
            name: self.name.clone(),
            issue_number: self.issue_number.clone(),
            sink: self.sink.clone(),
        }
    }
}

// Card data only; the sink is not part of a card's value.
impl<S, T> PartialEq<Card<T>> for Card<S> {
    fn eq(&self, other: &Card<T>) -> bool {
        self.card_number == other.card_number
            && self.cvv == other.cvv
            && self.expiry_date == other.expiry_date
            && self.name == other.name
            && self.issue_number == other.issue_number
    }
}

impl<S> Eq for Card<S> {}

impl<S> fmt::Display for Card<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.info(), f)
    }
}

impl<S> fmt::Debug for Card<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Card")
            .field("card_number", &self.card_number)
            .field("cvv", &CVV_PLACEHOLDER)
            .field("expiry_date", &self.expiry_date)
            .field("name", &self.name)
            .field("issue_number", &self.issue_number)
            .finish_non_exhaustive()
    }
}
