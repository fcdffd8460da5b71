use super::{entry_kind::EntryKind, time_interval::TimeInterval};
use crate::utils::time::add_hours;
use chrono::{NaiveDate, NaiveDateTime};

/// Nominal length of a work day, in hours.
pub const DEFAULT_WORK_HOURS: f64 = 9.0;

#[derive(Debug, Clone, PartialEq)]
pub struct WorkDay {
    pub date: NaiveDate,
    pub start_interval: TimeInterval,
    pub breaks: Vec<(EntryKind, TimeInterval)>,
}

impl WorkDay {
    /// Open a day from its `in.` entry. The date comes from the scheduled start.
    pub fn open(start_interval: TimeInterval) -> Self {
        Self {
            date: start_interval.scheduled_end.date(),
            start_interval,
            breaks: Vec::new(),
        }
    }

    pub fn add_break(&mut self, kind: EntryKind, interval: TimeInterval) {
        self.breaks.push((kind, interval));
    }

    /// Late start plus every break overage, in minutes.
    pub fn calculate_overtime(&self) -> f64 {
        let delay = self.start_interval.overtime_minutes();
        let pauses: f64 = self.breaks.iter().map(|(_, b)| b.overtime_minutes()).sum();
        delay + pauses
    }

    /// Logged start plus `work_hours`. Does not include the day's overtime.
    pub fn expected_out(&self, work_hours: f64) -> NaiveDateTime {
        add_hours(&self.start_interval.start, work_hours)
    }

    /// Expected out shifted by the (truncated) overtime of the day.
    pub fn adjusted_expected_out(&self, work_hours: f64) -> NaiveDateTime {
        let overtime = self.calculate_overtime() as i64;
        self.expected_out(work_hours + overtime as f64 / 60.0)
    }
}
