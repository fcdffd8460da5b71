use crate::export::ExportFormat;
use clap::Parser;
use std::path::PathBuf;

/// Command-line interface definition for rWorklog
/// Reads a plain-text work log and reports the overtime balance of every day
#[derive(Parser, Debug)]
#[command(
    name = "rworklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Parse a work log and compute daily and total overtime/undertime",
    long_about = None
)]
pub struct Cli {
    /// Work log file.
    ///
    /// One entry per line:
    ///   DD/MM - HH:MM (HH:MM)? in.
    ///   HH:MM - HH:MM break.
    ///   HH:MM - HH:MM (HH:MM)? lunch.
    #[arg(value_name = "LOG_FILE")]
    pub file: PathBuf,

    /// Use this configuration file instead of ~/.rworklog/rworklog.conf
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Nominal length of a work day in hours (default 9)
    #[arg(long = "work-hours", value_name = "HOURS")]
    pub work_hours: Option<f64>,

    /// Year of the DD/MM dates in the log (default: current year)
    #[arg(long, value_name = "YEAR")]
    pub year: Option<i32>,

    /// Also write the per-day summaries to FILE
    #[arg(long, value_name = "FILE")]
    pub export: Option<PathBuf>,

    /// Export format: csv, json
    #[arg(long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Overwrite the export file if it already exists
    #[arg(long, short = 'f')]
    pub force: bool,
}
