//! ICS file generation.

use icalendar::{Calendar, Component, Property, ValueType};
use uuid::Uuid;

use crate::error::SemcalResult;
use crate::event::EventKind;
use crate::generate::GeneratedCalendar;
use crate::semester::semester_suffix;

/// Generate .ics content for a generated semester calendar.
///
/// Every event is emitted as an all-day VEVENT; the working-day count
/// is carried on the calendar as an X- property so consumers can show
/// it without recomputing.
pub fn generate_ics(calendar: &GeneratedCalendar, semester: &str) -> SemcalResult<String> {
    let mut cal = Calendar::new();
    cal.append_property(Property::new(
        "X-WR-CALNAME",
        format!(
            "{}{} Semester Calendar",
            semester.trim(),
            semester_suffix(semester)
        ),
    ));
    cal.append_property(Property::new(
        "X-SEMCAL-WORKING-DAYS",
        calendar.working_days.to_string(),
    ));

    for event in &calendar.events {
        let mut ics_event = icalendar::Event::new();
        ics_event.uid(&format!("{}@semcal", Uuid::new_v4()));
        ics_event.summary(&event.title);

        add_date_property(&mut ics_event, "DTSTART", event);
        ics_event.add_property("CATEGORIES", category(event.kind));

        cal.push(ics_event.done());
    }

    let cal = cal.done();
    Ok(strip_ics_bloat(&cal.to_string()))
}

fn category(kind: EventKind) -> &'static str {
    match kind {
        EventKind::Regular => "SEMESTER",
        EventKind::Cia => "CIA",
        EventKind::Holiday => "HOLIDAY",
    }
}

/// Add a VALUE=DATE property for an all-day event.
fn add_date_property(ics_event: &mut icalendar::Event, name: &str, event: &crate::event::Event) {
    let mut prop = Property::new(name, event.date.format("%Y%m%d").to_string());
    prop.append_parameter(ValueType::Date);
    ics_event.append_property(prop);
}

/// Clean up ICS output from the icalendar crate
/// - Replace PRODID with SEMCAL (we post-process the output)
/// - Remove CALSCALE:GREGORIAN (it's the default)
fn strip_ics_bloat(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:SEMCAL\r\n");
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{generate, CalendarRequest};
    use crate::holiday::Holiday;
    use chrono::NaiveDate;

    fn make_test_calendar() -> GeneratedCalendar {
        let request = CalendarRequest {
            semester: "1".to_string(),
            start: "2024-08-05".to_string(),
            end: "2024-08-09".to_string(),
            cia1: "2024-08-07".to_string(),
            ..CalendarRequest::default()
        };
        let table = vec![Holiday::new(
            "Independence Day",
            NaiveDate::from_ymd_opt(2024, 8, 15).unwrap(),
        )];
        generate(&request, &table).unwrap()
    }

    #[test]
    fn emits_one_vevent_per_event() {
        let calendar = make_test_calendar();
        let ics = generate_ics(&calendar, "1").unwrap();

        let vevent_count = ics.lines().filter(|l| *l == "BEGIN:VEVENT").count();
        assert_eq!(
            vevent_count,
            calendar.events.len(),
            "Expected {} VEVENTs. ICS:\n{}",
            calendar.events.len(),
            ics
        );
    }

    #[test]
    fn events_are_all_day_dates() {
        let ics = generate_ics(&make_test_calendar(), "1").unwrap();
        assert!(ics.contains("DTSTART;VALUE=DATE:20240805"));
        assert!(ics.contains("DTSTART;VALUE=DATE:20240807"));
    }

    #[test]
    fn carries_working_day_count() {
        let calendar = make_test_calendar();
        let ics = generate_ics(&calendar, "1").unwrap();
        assert!(ics.contains(&format!("X-SEMCAL-WORKING-DAYS:{}", calendar.working_days)));
    }

    #[test]
    fn kinds_map_to_categories() {
        let ics = generate_ics(&make_test_calendar(), "1").unwrap();
        assert!(ics.contains("CATEGORIES:SEMESTER"));
        assert!(ics.contains("CATEGORIES:CIA"));
    }

    #[test]
    fn strips_calscale_and_rewrites_prodid() {
        let ics = generate_ics(&make_test_calendar(), "1").unwrap();
        assert!(!ics.contains("CALSCALE:GREGORIAN"));
        assert!(ics.contains("PRODID:SEMCAL"));
    }
}
