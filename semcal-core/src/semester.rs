//! Semester label formatting.

/// Which end of the semester a label refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemesterBound {
    Start,
    End,
}

/// Ordinal suffix for a semester number.
///
/// Fixed lookup, not a general English-ordinal rule: the domain caps at
/// 8 semesters and anything unrecognized falls back to "th".
pub fn semester_suffix(semester: &str) -> &'static str {
    match semester.trim() {
        "1" => "st",
        "2" => "nd",
        "3" => "rd",
        _ => "th",
    }
}

/// Display label for a semester boundary, e.g. `"3rd Semester Start"`.
pub fn semester_label(semester: &str, bound: SemesterBound) -> String {
    let which = match bound {
        SemesterBound::Start => "Start",
        SemesterBound::End => "End",
    };
    format!("{}{} Semester {}", semester.trim(), semester_suffix(semester), which)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffixes_for_single_digits() {
        assert_eq!(semester_suffix("1"), "st");
        assert_eq!(semester_suffix("2"), "nd");
        assert_eq!(semester_suffix("3"), "rd");
        for sem in ["4", "5", "6", "7", "8"] {
            assert_eq!(semester_suffix(sem), "th");
        }
    }

    #[test]
    fn unrecognized_semester_falls_back_to_th() {
        assert_eq!(semester_suffix(""), "th");
        assert_eq!(semester_suffix("22"), "th");
        assert_eq!(semester_suffix("spring"), "th");
    }

    #[test]
    fn labels_combine_suffix_and_bound() {
        assert_eq!(semester_label("1", SemesterBound::Start), "1st Semester Start");
        assert_eq!(semester_label("2", SemesterBound::End), "2nd Semester End");
        assert_eq!(semester_label("5", SemesterBound::Start), "5th Semester Start");
    }
}
