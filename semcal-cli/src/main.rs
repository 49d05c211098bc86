mod commands;
mod holiday_source;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "semcal")]
#[command(about = "Generate a semester academic calendar with CIA dates, holidays and working days")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Shared inputs for anything that generates a calendar.
#[derive(Args)]
struct GenerateArgs {
    /// Semester number (1-8)
    #[arg(short, long, default_value = "1")]
    semester: String,

    /// Semester start date (YYYY-MM-DD); prompted for if omitted
    #[arg(long)]
    start: Option<String>,

    /// Semester end date (YYYY-MM-DD); prompted for if omitted
    #[arg(long)]
    end: Option<String>,

    /// CIA 1 exam date (YYYY-MM-DD)
    #[arg(long)]
    cia1: Option<String>,

    /// CIA 2 exam date (YYYY-MM-DD)
    #[arg(long)]
    cia2: Option<String>,

    /// CIA 3 exam date (YYYY-MM-DD)
    #[arg(long)]
    cia3: Option<String>,

    /// Holiday table TOML file (defaults to the user config file,
    /// then the built-in national table)
    #[arg(long)]
    holidays: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate and print the semester calendar
    Generate {
        #[command(flatten)]
        args: GenerateArgs,

        /// Print the result as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List the active holiday table
    Holidays {
        /// Only show holidays from this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Only show holidays until this date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Holiday table TOML file
        #[arg(long)]
        holidays: Option<PathBuf>,
    },
    /// Generate the calendar and write it to a file
    Export {
        #[command(flatten)]
        args: GenerateArgs,

        /// Output path; an .ics extension selects iCalendar output,
        /// anything else a plain-text table
        #[arg(short, long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { args, json } => commands::generate::run(&args, json),
        Commands::Holidays { from, to, holidays } => {
            commands::holidays::run(from.as_deref(), to.as_deref(), holidays.as_deref())
        }
        Commands::Export { args, out } => commands::export::run(&args, &out),
    }
}
