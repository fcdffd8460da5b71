// src/export/model.rs

use crate::models::{DaySummary, WorkDay};
use serde::Serialize;

/// Whole report in exportable form.
#[derive(Serialize, Clone, Debug)]
pub struct ReportExport {
    pub days: Vec<DaySummary>,
    pub total_overtime_minutes: i64,
}

impl ReportExport {
    pub fn build(days: &[WorkDay], work_hours: f64) -> Self {
        let days: Vec<DaySummary> = days
            .iter()
            .map(|d| DaySummary::from_day(d, work_hours))
            .collect();
        let total_overtime_minutes = days.iter().map(|d| d.overtime_minutes).sum();

        Self {
            days,
            total_overtime_minutes,
        }
    }
}
