//! Text report over the parsed work days.

use crate::models::{DaySummary, WorkDay};
use crate::ui::messages::Sink;
use crate::utils::time::{format_duration, format_time};

/// `("+", "debt")` for a non-negative balance, `("-", "credit")` otherwise.
pub fn balance_label(minutes: i64) -> (&'static str, &'static str) {
    if minutes < 0 { ("-", "credit") } else { ("+", "debt") }
}

pub struct Reporter<'a> {
    sink: &'a mut dyn Sink,
    work_hours: f64,
}

impl<'a> Reporter<'a> {
    pub fn new(sink: &'a mut dyn Sink, work_hours: f64) -> Self {
        Self { sink, work_hours }
    }

    /// Print every day followed by the overall balance. Returns the total
    /// overtime in whole minutes.
    pub fn generate_report(&mut self, days: &[WorkDay]) -> i64 {
        self.sink.info("\n📊 Work Log Summary");

        let total: i64 = days.iter().map(|day| self.report_day(day)).sum();

        self.sink.info("\n📈 Overall Summary");
        let (sign, kind) = balance_label(total);
        self.sink.info(&format!(
            "Total accumulated time {}: {}{}",
            kind,
            sign,
            format_duration(total)
        ));

        total
    }

    fn report_day(&mut self, day: &WorkDay) -> i64 {
        let summary = DaySummary::from_day(day, self.work_hours);

        self.sink.info(&format!("\n▸ Date: {}", summary.date));

        let delay = summary.start_delay_minutes;
        let balance = if delay != 0 {
            format!("({}m debt)", delay)
        } else {
            String::new()
        };
        self.sink.info(&format!(
            "\tLogged start: {} \t[Actual start: {}] {}",
            summary.logged_start, summary.actual_start, balance
        ));

        for (kind, pause) in &day.breaks {
            let overtime = pause.overtime_minutes() as i64;
            let status = if overtime != 0 {
                let (_, label) = balance_label(overtime);
                format!("({}m {})", overtime.abs(), label)
            } else {
                String::new()
            };

            self.sink.info(&format!(
                "\t• {}: {} - {} [ended {}] {}",
                kind.as_str(),
                format_time(&pause.start),
                format_time(&pause.scheduled_end),
                format_time(&pause.actual_end),
                status
            ));
        }

        let overtime = summary.overtime_minutes;
        let extra = if overtime != 0 {
            let (sign, label) = balance_label(overtime);
            format!("({}{}m for 0 day {})", sign, overtime.abs(), label)
        } else {
            String::new()
        };
        self.sink.info(&format!(
            "\tExpected out: {} {} {}",
            summary.expected_out, extra, summary.adjusted_expected_out
        ));

        overtime
    }
}
