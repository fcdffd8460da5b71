// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::{ReportExport, notify_export_success};
use crate::ui::messages::Sink;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(
    sink: &mut dyn Sink,
    report: &ReportExport,
    path: &Path,
) -> AppResult<()> {
    let json_data = serde_json::to_string_pretty(report)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success(sink, "JSON", path);
    Ok(())
}

/// Export CSV, one row per day (header derived by serde).
pub(crate) fn export_csv(
    sink: &mut dyn Sink,
    report: &ReportExport,
    path: &Path,
) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for day in &report.days {
        wtr.serialize(day)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;

    notify_export_success(sink, "CSV", path);
    Ok(())
}
