use std::path::PathBuf;

use clap::Parser;

use crate::models::Day;
use crate::planner::constants::DEFAULT_DAYS;

/// Daily Macros — totals calories and macros per training day from a meal plan.
#[derive(Parser, Debug)]
#[command(name = "daily_macros")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the menu YAML file.
    #[arg(short, long, default_value = "menu.yaml")]
    pub menu: PathBuf,

    /// Path to the nutrition facts markdown table.
    #[arg(short, long, default_value = "nutrition_facts.md")]
    pub nutrition: PathBuf,

    /// Path the markdown report is written to.
    #[arg(short, long, default_value = "out.md")]
    pub output: PathBuf,

    /// Also write the totals as JSON to this path.
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Days to report (comma-separated).
    #[arg(long, default_value_t = DEFAULT_DAYS.join(","))]
    pub days: String,

    /// Log match decisions and skipped rows.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parsed day labels, skipping blanks.
    pub fn day_list(&self) -> Vec<Day> {
        parse_days(&self.days)
    }
}

fn parse_days(s: &str) -> Vec<Day> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(Day::new)
        .collect()
}
