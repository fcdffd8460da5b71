pub mod day_summary;
pub mod entry_kind;
pub mod time_interval;
pub mod work_day;

pub use day_summary::DaySummary;
pub use entry_kind::EntryKind;
pub use time_interval::TimeInterval;
pub use work_day::{DEFAULT_WORK_HOURS, WorkDay};
