//! Core types and logic for the semcal ecosystem.
//!
//! This crate provides everything except the terminal surface:
//! - `Event` and `Holiday` data types
//! - `validate` for the Sunday-date input gate
//! - `generate` for building the merged semester calendar
//! - `ics` for iCalendar export of a generated calendar

pub mod error;
pub mod event;
pub mod generate;
pub mod holiday;
pub mod ics;
pub mod semester;
pub mod validate;

pub use error::{SemcalError, SemcalResult};
pub use event::{Event, EventKind};
pub use generate::{CalendarRequest, GeneratedCalendar};
pub use holiday::Holiday;
