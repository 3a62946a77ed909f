use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};

use super::config::DEFAULT_CONFIG_FILENAME;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

/// Check ride availability for one date and alert on a watched driver.
#[derive(Debug, Parser)]
#[command(name = "ridewatch", version)]
pub struct Cli {
    /// Ride date as YYYY-MM-DD; defaults to today.
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    /// Also write the rides to this CSV file.
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Driver name substring to alert on; overrides the config file.
    #[arg(short, long)]
    pub watch: Option<String>,

    #[arg(long, default_value = DEFAULT_CONFIG_FILENAME)]
    pub config: PathBuf,

    #[arg(short, long)]
    pub verbose: bool,

    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn search_date(&self) -> String {
        self.date
            .unwrap_or_else(|| Local::now().date_naive())
            .format("%Y-%m-%d")
            .to_string()
    }
}

#[cfg(test)]
impl Cli {
    pub(crate) fn for_tests(watch: Option<&str>) -> Self {
        Self::parse_from(
            ["ridewatch"]
                .into_iter()
                .map(str::to_string)
                .chain(watch.map(|w| format!("--watch={w}"))),
        )
    }
}
