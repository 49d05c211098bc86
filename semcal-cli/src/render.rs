//! TUI rendering traits for semcal types.
//!
//! Extension traits that add colored terminal rendering to semcal-core
//! types using owo_colors.

use owo_colors::OwoColorize;
use semcal_core::{Event, EventKind, GeneratedCalendar, Holiday};

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// Colorize text according to the event kind
fn colorize_kind(kind: EventKind, text: &str) -> String {
    match kind {
        EventKind::Regular => text.blue().to_string(),
        EventKind::Cia => text.magenta().to_string(),
        EventKind::Holiday => text.red().to_string(),
    }
}

impl Render for Event {
    fn render(&self) -> String {
        let date = self.date.format("%a %b %-d %Y").to_string();
        let tag = format!("[{}]", self.kind.label());

        format!(
            "  {:<16} {} {}",
            date,
            colorize_kind(self.kind, &self.title),
            tag.dimmed()
        )
    }
}

impl Render for Holiday {
    fn render(&self) -> String {
        let date = self.date.format("%a %b %-d %Y").to_string();
        format!("  {:<16} {}", date, self.title.red())
    }
}

impl Render for GeneratedCalendar {
    fn render(&self) -> String {
        let mut lines: Vec<String> = self.events.iter().map(Render::render).collect();

        lines.push(String::new());
        lines.push(format!(
            "  {} {}",
            "Working days:".bold(),
            self.working_days
        ));

        lines.join("\n")
    }
}
