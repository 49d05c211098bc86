use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use semcal_core::validate::parse_date;

use crate::holiday_source;
use crate::render::Render;

pub fn run(from: Option<&str>, to: Option<&str>, holidays: Option<&Path>) -> Result<()> {
    let table = holiday_source::load(holidays)?;

    let from = from.map(parse_date).transpose()?;
    let to = to.map(parse_date).transpose()?;

    let visible: Vec<_> = table
        .iter()
        .filter(|h| from.map_or(true, |d| h.date >= d))
        .filter(|h| to.map_or(true, |d| h.date <= d))
        .collect();

    if visible.is_empty() {
        println!("{}", "No holidays in range".dimmed());
        return Ok(());
    }

    for holiday in visible {
        println!("{}", holiday.render());
    }

    Ok(())
}
