use super::work_day::WorkDay;
use crate::utils::time::{format_date, format_time};
use serde::Serialize;

/// Flat, printable view of one work day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySummary {
    pub date: String,
    pub logged_start: String,
    pub actual_start: String,
    pub start_delay_minutes: i64,
    pub breaks: usize,
    pub overtime_minutes: i64,
    pub expected_out: String,
    pub adjusted_expected_out: String,
}

impl DaySummary {
    pub fn from_day(day: &WorkDay, work_hours: f64) -> Self {
        let start = &day.start_interval;
        Self {
            date: format_date(&day.date),
            logged_start: format_time(&start.start),
            actual_start: format_time(&start.actual_end),
            start_delay_minutes: start.overtime_minutes() as i64,
            breaks: day.breaks.len(),
            overtime_minutes: day.calculate_overtime() as i64,
            expected_out: format_time(&day.expected_out(work_hours)),
            adjusted_expected_out: format_time(&day.adjusted_expected_out(work_hours)),
        }
    }
}
