// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::{ExportFormat, ReportExport};
use crate::models::WorkDay;
use crate::ui::messages::Sink;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Write the per-day summaries of `days` to `path`.
    ///
    /// An existing file is only replaced when `force` is set.
    pub fn export(
        sink: &mut dyn Sink,
        days: &[WorkDay],
        work_hours: f64,
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(sink, path, force)?;

        let report = ReportExport::build(days, work_hours);

        match format {
            ExportFormat::Json => export_json(sink, &report, path),
            ExportFormat::Csv => export_csv(sink, &report, path),
        }
    }
}
