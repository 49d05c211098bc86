//! Semester calendar generation.
//!
//! `generate` is a pure function from a request plus a read-only
//! holiday table to a sorted event list and a working-day count. Each
//! call recomputes from scratch; nothing persists between calls.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{SemcalError, SemcalResult};
use crate::event::{Event, EventKind};
use crate::holiday::Holiday;
use crate::semester::{semester_label, SemesterBound};
use crate::validate::{parse_optional, parse_required};

/// Raw inputs for one generation run.
///
/// All dates arrive as ISO-8601 strings; empty strings mean "not
/// provided". CIA slots are optional, the semester window is not.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalendarRequest {
    pub semester: String,
    pub start: String,
    pub end: String,
    pub cia1: String,
    pub cia2: String,
    pub cia3: String,
}

/// The output of one generation run: the chronologically ordered event
/// list and the count of working days in the semester window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedCalendar {
    pub events: Vec<Event>,
    pub working_days: u32,
}

/// Build the semester calendar for `request` against `holidays`.
///
/// Event construction order is semester start, CIA 1-3, holidays in
/// table order, semester end; the final sort is stable and ascending by
/// date, so events sharing a day keep that order. The semester-end
/// marker takes part in the sort like any other event rather than
/// being pinned last, which keeps the output total even when a CIA or
/// holiday date lands after the window end.
pub fn generate(request: &CalendarRequest, holidays: &[Holiday]) -> SemcalResult<GeneratedCalendar> {
    let start = parse_required(&request.start, "semester start")?;
    let end = parse_required(&request.end, "semester end")?;
    if end < start {
        return Err(SemcalError::InvalidDate(format!(
            "semester end {} precedes start {}",
            end, start
        )));
    }

    let semester = request.semester.as_str();
    let mut events = vec![Event::new(
        semester_label(semester, SemesterBound::Start),
        start,
        EventKind::Regular,
    )];

    let cia_slots = [
        (&request.cia1, "CIA 1"),
        (&request.cia2, "CIA 2"),
        (&request.cia3, "CIA 3"),
    ];
    for (raw, title) in cia_slots {
        if let Some(date) = parse_optional(raw, title)? {
            events.push(Event::new(title, date, EventKind::Cia));
        }
    }

    events.extend(
        holidays
            .iter()
            .filter(|h| h.in_window(start, end))
            .map(|h| Event::new(h.title.clone(), h.date, EventKind::Holiday)),
    );

    events.push(Event::new(
        semester_label(semester, SemesterBound::End),
        end,
        EventKind::Regular,
    ));

    // Vec::sort_by_key is stable, so construction order breaks ties.
    events.sort_by_key(|event| event.date);

    let working_days = count_working_days(start, end, &events);

    Ok(GeneratedCalendar {
        events,
        working_days,
    })
}

/// Count every Monday-Friday day in `[start, end]` inclusive that does
/// not coincide with a holiday event. Saturdays never count, even
/// though they are accepted as input dates.
fn count_working_days(start: NaiveDate, end: NaiveDate, events: &[Event]) -> u32 {
    let holidays: Vec<NaiveDate> = events
        .iter()
        .filter(|e| e.kind == EventKind::Holiday)
        .map(|e| e.date)
        .collect();

    let mut days = 0;
    let mut current = start;
    while current <= end {
        let weekend = matches!(current.weekday(), Weekday::Sat | Weekday::Sun);
        if !weekend && !holidays.contains(&current) {
            days += 1;
        }
        // Days::new(1) cannot overflow within any real semester window.
        match current.checked_add_days(Days::new(1)) {
            Some(next) => current = next,
            None => break,
        }
    }
    days
}
