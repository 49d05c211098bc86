//! Date parsing and the Sunday-date input gate.
//!
//! Every raw input reaches the builder through these functions. Dates
//! are compared as parsed calendar days, never as raw strings.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{SemcalError, SemcalResult};

/// Parse a strict ISO-8601 `YYYY-MM-DD` date string.
///
/// Malformed input is an explicit error rather than a silent pass-through.
pub fn parse_date(input: &str) -> SemcalResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| SemcalError::InvalidDate(input.to_string()))
}

/// Gate a single date input against the domain rule "no Sundays".
///
/// An empty string means "not yet provided" and is valid. A well-formed
/// date is valid unless its weekday is Sunday. A malformed non-empty
/// string is an `InvalidDate` error.
pub fn validate_date(input: &str) -> SemcalResult<bool> {
    if input.trim().is_empty() {
        return Ok(true);
    }

    let date = parse_date(input)?;
    Ok(date.weekday() != Weekday::Sun)
}

/// Parse an optional date slot: empty means `None`, otherwise the slot
/// must both parse and pass the Sunday gate.
pub fn parse_optional(input: &str, field: &'static str) -> SemcalResult<Option<NaiveDate>> {
    if input.trim().is_empty() {
        return Ok(None);
    }

    let date = parse_date(input)?;
    if date.weekday() == Weekday::Sun {
        return Err(SemcalError::SundayDate(format!("{} ({})", input.trim(), field)));
    }

    Ok(Some(date))
}

/// Parse a required date slot: empty is a `MissingRequired` error.
pub fn parse_required(input: &str, field: &'static str) -> SemcalResult<NaiveDate> {
    parse_optional(input, field)?.ok_or(SemcalError::MissingRequired(field))
}
