use crate::utils::time::minutes_between;
use chrono::NaiveDateTime;

/// A span with a start, the end it was meant to have and the end it really had.
///
/// Shapes produced by the grammar:
/// - `in`:    `start == scheduled_end`, `actual_end` = real clock-in
/// - `break`: `start == scheduled_end`, `actual_end` = end of the break
/// - `lunch`: `scheduled_end` = planned end, `actual_end` = real end (or the planned one)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeInterval {
    pub start: NaiveDateTime,
    pub scheduled_end: NaiveDateTime,
    pub actual_end: NaiveDateTime,
}

impl TimeInterval {
    pub fn new(
        start: NaiveDateTime,
        scheduled_end: NaiveDateTime,
        actual_end: NaiveDateTime,
    ) -> Self {
        Self {
            start,
            scheduled_end,
            actual_end,
        }
    }

    /// Minutes past the scheduled end. Positive = debt, negative = credit.
    pub fn overtime_minutes(&self) -> f64 {
        minutes_between(&self.scheduled_end, &self.actual_end)
    }
}
