//! rWorklog library root.
//! Parses plain-text work logs into work days, reports their overtime
//! balance and optionally exports the per-day summaries.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use crate::cli::Cli;
use crate::config::Config;
use crate::core::{parser::LogParser, reporter::Reporter};
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::Sink;

/// Resolve the effective configuration: file first, then command-line overrides.
pub fn resolve_config(cli: &Cli) -> AppResult<Config> {
    let mut cfg = Config::load(cli.config.as_deref())?;

    if let Some(hours) = cli.work_hours {
        cfg.work_hours = hours;
    }
    if let Some(year) = cli.year {
        cfg.year = Some(year);
    }

    cfg.validate()?;
    Ok(cfg)
}

/// Entry point used by main.rs.
///
/// Nothing is printed unless the whole log parses. Returns the total
/// overtime in minutes.
pub fn run(cli: &Cli, sink: &mut dyn Sink) -> AppResult<i64> {
    let cfg = resolve_config(cli)?;

    let days = LogParser::with_year(cfg.year).parse_file(&cli.file)?;

    let total = Reporter::new(&mut *sink, cfg.work_hours).generate_report(&days);

    if let Some(path) = &cli.export {
        ExportLogic::export(sink, &days, cfg.work_hours, cli.format, path, cli.force)?;
    }

    Ok(total)
}
