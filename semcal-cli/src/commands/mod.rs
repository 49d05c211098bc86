pub mod export;
pub mod generate;
pub mod holidays;

use anyhow::Result;
use dialoguer::Input;
use owo_colors::OwoColorize;
use semcal_core::validate::validate_date;
use semcal_core::CalendarRequest;

use crate::GenerateArgs;

/// The single shared validation message, matching the on-screen form.
const SUNDAY_MESSAGE: &str = "Invalid input: Selected date falls on a Sunday";

/// Turn CLI arguments into a calendar request, prompting for missing
/// fields when the semester window was not supplied on the command
/// line. CIA prompts may be skipped with an empty answer.
pub fn resolve_request(args: &GenerateArgs) -> Result<CalendarRequest> {
    let interactive = args.start.is_none() || args.end.is_none();

    let start = match &args.start {
        Some(s) => s.clone(),
        None => prompt_date("  Semester start (YYYY-MM-DD)", false)?,
    };
    let end = match &args.end {
        Some(s) => s.clone(),
        None => prompt_date("  Semester end (YYYY-MM-DD)", false)?,
    };

    let mut cia = [
        args.cia1.clone().unwrap_or_default(),
        args.cia2.clone().unwrap_or_default(),
        args.cia3.clone().unwrap_or_default(),
    ];
    if interactive {
        for (i, slot) in cia.iter_mut().enumerate() {
            if slot.is_empty() {
                *slot = prompt_date(&format!("  CIA {} date (skip)", i + 1), true)?;
            }
        }
    }

    let [cia1, cia2, cia3] = cia;
    Ok(CalendarRequest {
        semester: args.semester.clone(),
        start,
        end,
        cia1,
        cia2,
        cia3,
    })
}

/// Prompt for a date with retry until it parses and is not a Sunday.
fn prompt_date(prompt: &str, allow_empty: bool) -> Result<String> {
    loop {
        let input: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(allow_empty)
            .interact_text()?;

        match validate_date(&input) {
            Ok(true) => return Ok(input),
            Ok(false) => eprintln!("  {}", SUNDAY_MESSAGE.red()),
            Err(e) => eprintln!("  {}", e.to_string().red()),
        }
    }
}
