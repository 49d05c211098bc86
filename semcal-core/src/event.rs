//! Calendar event types.
//!
//! Events carry a calendar day only. Equality and ordering are by date,
//! never by timestamp, so two events on the same day compare equal on
//! `date` regardless of how they were produced.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single entry in a generated semester calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    pub date: NaiveDate,
    pub kind: EventKind,
}

/// The kind of a calendar event.
///
/// The upstream data set also names workshop/seminar/lab categories,
/// but the builder never produces them; they are future extension
/// points, not variants of this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Semester start and end markers.
    Regular,
    /// Continuous Internal Assessment exam dates.
    Cia,
    /// National holidays falling inside the semester window.
    Holiday,
}

impl Event {
    pub fn new(title: impl Into<String>, date: NaiveDate, kind: EventKind) -> Self {
        Event {
            title: title.into(),
            date,
            kind,
        }
    }
}

impl EventKind {
    /// Short human-readable label, used by list renderers.
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Regular => "Regular",
            EventKind::Cia => "CIA Exam",
            EventKind::Holiday => "Holiday",
        }
    }
}
