//! Time utilities: parsing HH:MM and DD/MM, minute arithmetic, formatting.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;

static TIME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{1,2}:\d{2}$").unwrap());
static DATE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d{2})/(\d{2})$").unwrap());

/// Date used for bare times parsed without a day context.
pub fn bare_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap()
}

/// Parse `HH:MM` (24h). With `base_date` the result lands on that day,
/// otherwise on [`bare_date`].
pub fn parse_time(t: &str, base_date: Option<NaiveDate>) -> AppResult<NaiveDateTime> {
    let t = t.trim();
    if !TIME_RE.is_match(t) {
        return Err(AppError::InvalidTime(t.to_string()));
    }
    let time =
        NaiveTime::parse_from_str(t, "%H:%M").map_err(|_| AppError::InvalidTime(t.to_string()))?;

    Ok(base_date.unwrap_or_else(bare_date).and_time(time))
}

/// Parse `DD/MM` in the current system year.
pub fn parse_date(d: &str) -> AppResult<NaiveDate> {
    parse_date_in_year(d, chrono::Local::now().year())
}

/// Parse `DD/MM` in an explicit year.
pub fn parse_date_in_year(d: &str, year: i32) -> AppResult<NaiveDate> {
    let d = d.trim();
    let caps = DATE_RE
        .captures(d)
        .ok_or_else(|| AppError::InvalidDate(d.to_string()))?;

    let day: u32 = caps[1].parse().map_err(|_| AppError::InvalidDate(d.to_string()))?;
    let month: u32 = caps[2].parse().map_err(|_| AppError::InvalidDate(d.to_string()))?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| AppError::InvalidDate(d.to_string()))
}

pub fn format_time(ts: &NaiveDateTime) -> String {
    ts.format("%H:%M").to_string()
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format("%d/%m").to_string()
}

/// `"{h}h {m}m"`, or `"{m}m"` under one hour. Always unsigned.
pub fn format_duration(mins: i64) -> String {
    let m = mins.abs();
    let (hours, minutes) = (m / 60, m % 60);

    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// Signed minutes from `start` to `end`, keeping fractions of a minute.
pub fn minutes_between(start: &NaiveDateTime, end: &NaiveDateTime) -> f64 {
    (*end - *start).num_seconds() as f64 / 60.0
}

/// Shift a timestamp by a (possibly fractional, possibly negative) number of hours.
/// Saturates at the bounds of `NaiveDateTime`.
pub fn add_hours(ts: &NaiveDateTime, hours: f64) -> NaiveDateTime {
    let millis = (hours * 3_600_000.0).round() as i64;
    let saturated = if millis < 0 { NaiveDateTime::MIN } else { NaiveDateTime::MAX };

    Duration::try_milliseconds(millis)
        .and_then(|delta| ts.checked_add_signed(delta))
        .unwrap_or(saturated)
}
