//! iCalendar export of a generated semester calendar.

mod generate;

pub use generate::generate_ics;
