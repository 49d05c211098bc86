use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use semcal_core::generate::{generate, GeneratedCalendar};
use semcal_core::ics::generate_ics;
use semcal_core::semester::semester_suffix;

use crate::holiday_source;
use crate::GenerateArgs;

pub fn run(args: &GenerateArgs, out: &Path) -> Result<()> {
    let request = super::resolve_request(args)?;
    let table = holiday_source::load(args.holidays.as_deref())?;

    let calendar = generate(&request, &table).context("Could not generate calendar")?;

    let is_ics = out
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("ics"));

    let content = if is_ics {
        generate_ics(&calendar, &args.semester)?
    } else {
        text_document(&calendar, &args.semester)
    };

    std::fs::write(out, content)
        .with_context(|| format!("Could not write {}", out.display()))?;

    println!(
        "{}",
        format!("  Exported {} events to {}", calendar.events.len(), out.display()).green()
    );

    Ok(())
}

/// Plain-text table rendering of a generated calendar, the printable
/// counterpart of the on-screen listing.
fn text_document(calendar: &GeneratedCalendar, semester: &str) -> String {
    let mut lines = vec![
        format!(
            "{}{} Semester Calendar",
            semester.trim(),
            semester_suffix(semester)
        ),
        String::new(),
    ];

    for event in &calendar.events {
        lines.push(format!(
            "{}  {:<10} {}",
            event.date.format("%Y-%m-%d"),
            event.kind.label(),
            event.title
        ));
    }

    lines.push(String::new());
    lines.push(format!("Working days: {}", calendar.working_days));
    lines.push(String::new());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use semcal_core::CalendarRequest;

    fn make_calendar() -> GeneratedCalendar {
        let request = CalendarRequest {
            semester: "2".to_string(),
            start: "2024-08-05".to_string(),
            end: "2024-08-09".to_string(),
            ..CalendarRequest::default()
        };
        generate(&request, &[]).unwrap()
    }

    #[test]
    fn text_document_lists_every_event() {
        let calendar = make_calendar();
        let doc = text_document(&calendar, "2");

        assert!(doc.starts_with("2nd Semester Calendar"));
        assert!(doc.contains("2024-08-05  Regular    2nd Semester Start"));
        assert!(doc.contains("2024-08-09  Regular    2nd Semester End"));
        assert!(doc.contains("Working days: 5"));
    }
}
