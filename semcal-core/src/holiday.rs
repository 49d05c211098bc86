//! Holiday table types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One entry of the national-holiday reference table.
///
/// The table is supplied by the hosting application and is read-only
/// to the calendar builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub title: String,
    pub date: NaiveDate,
}

impl Holiday {
    pub fn new(title: impl Into<String>, date: NaiveDate) -> Self {
        Holiday {
            title: title.into(),
            date,
        }
    }

    /// Whether this holiday falls inside the inclusive `[start, end]`
    /// window.
    pub fn in_window(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.date >= start && self.date <= end
    }

    /// The built-in national holiday table, used when no user-supplied
    /// table is configured. Covers the 2024-25 and 2025-26 academic
    /// years.
    pub fn national() -> Vec<Holiday> {
        fn d(y: i32, m: u32, day: u32) -> NaiveDate {
            // All entries are known-valid calendar days.
            NaiveDate::from_ymd_opt(y, m, day).unwrap()
        }

        vec![
            Holiday::new("Republic Day", d(2024, 1, 26)),
            Holiday::new("Mahashivratri", d(2024, 3, 8)),
            Holiday::new("Holi", d(2024, 3, 25)),
            Holiday::new("Good Friday", d(2024, 3, 29)),
            Holiday::new("May Day", d(2024, 5, 1)),
            Holiday::new("Independence Day", d(2024, 8, 15)),
            Holiday::new("Ganesh Chaturthi", d(2024, 9, 7)),
            Holiday::new("Gandhi Jayanti", d(2024, 10, 2)),
            Holiday::new("Vijayadashami", d(2024, 10, 12)),
            Holiday::new("Kannada Rajyotsava", d(2024, 11, 1)),
            Holiday::new("Christmas", d(2024, 12, 25)),
            Holiday::new("Republic Day", d(2025, 1, 26)),
            Holiday::new("Ugadi", d(2025, 3, 30)),
            Holiday::new("May Day", d(2025, 5, 1)),
            Holiday::new("Independence Day", d(2025, 8, 15)),
            Holiday::new("Ganesh Chaturthi", d(2025, 8, 27)),
            Holiday::new("Gandhi Jayanti", d(2025, 10, 2)),
            Holiday::new("Kannada Rajyotsava", d(2025, 11, 1)),
            Holiday::new("Christmas", d(2025, 12, 25)),
            Holiday::new("Republic Day", d(2026, 1, 26)),
        ]
    }
}
