// poscard/src/prelude.rs
//! Common imports: `use poscard::prelude::*;`

pub use crate::card::{Card, CardBuilder, CardInfo, CardRecord};
pub use crate::events::{CardEvent, EventSink, Field, LogSink, NullSink, Outcome};
pub use crate::expiry::{ExpiryDate, parse_expiry};
pub use crate::types::{CardNumber, Cvv};
pub use crate::{Error, ExpiryError, Result};
