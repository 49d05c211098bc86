//! Holiday table loading.
//!
//! Resolution order: an explicit `--holidays <path>` wins, then the
//! user's config file at `~/.config/semcal/holidays.toml`, then the
//! built-in national table.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, File};
use semcal_core::Holiday;
use serde::Deserialize;

/// On-disk shape of a holiday table file: a list of `[[holiday]]`
/// entries with `title` and `date` (YYYY-MM-DD) keys.
#[derive(Deserialize)]
struct HolidayFile {
    holiday: Vec<Holiday>,
}

/// Path of the user's holiday table, whether or not it exists.
pub fn user_table_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join("semcal");

    Ok(config_dir.join("holidays.toml"))
}

/// Load the active holiday table.
pub fn load(explicit: Option<&Path>) -> Result<Vec<Holiday>> {
    if let Some(path) = explicit {
        return load_file(path, true);
    }

    let user_path = user_table_path()?;
    if user_path.exists() {
        return load_file(&user_path, false);
    }

    Ok(Holiday::national())
}

fn load_file(path: &Path, required: bool) -> Result<Vec<Holiday>> {
    let table: HolidayFile = Config::builder()
        .add_source(File::from(path.to_path_buf()).required(required))
        .build()
        .with_context(|| format!("Could not read holiday table {}", path.display()))?
        .try_deserialize()
        .with_context(|| format!("Malformed holiday table {}", path.display()))?;

    Ok(table.holiday)
}
