use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use semcal_core::generate::generate;
use semcal_core::semester::semester_suffix;

use crate::holiday_source;
use crate::render::Render;
use crate::GenerateArgs;

pub fn run(args: &GenerateArgs, json: bool) -> Result<()> {
    let request = super::resolve_request(args)?;
    let table = holiday_source::load(args.holidays.as_deref())?;

    let calendar = generate(&request, &table).context("Could not generate calendar")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&calendar)?);
        return Ok(());
    }

    let heading = format!(
        "{}{} Semester Calendar",
        args.semester.trim(),
        semester_suffix(&args.semester)
    );
    println!();
    println!("  {}", heading.bold());
    println!();
    println!("{}", calendar.render());

    Ok(())
}
