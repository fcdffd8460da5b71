//! Line grammar of the work log.
//!
//! Two entry shapes are recognised, tried in this order:
//! - `DD/MM - HH:MM (HH:MM)? in.`            → start of a work day
//! - `HH:MM - HH:MM (HH:MM)? (break|lunch).` → pause inside the open day
//!
//! Anything else is not an entry and yields `Ok(None)`.

use crate::errors::{AppError, AppResult};
use crate::models::{EntryKind, TimeInterval};
use crate::utils::time::{parse_date, parse_date_in_year, parse_time};
use chrono::NaiveDate;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static START_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{2}/\d{2})\s*-\s*(\d{1,2}:\d{2})\s*(?:\((\d{1,2}:\d{2})\))?\s*in\.").unwrap()
});

static PAUSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(\d{1,2}:\d{2})\s*-\s*(\d{1,2}:\d{2})\s*(?:\((\d{1,2}:\d{2})\))?\s*(break|lunch)\.",
    )
    .unwrap()
});

/// One classified line of the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub kind: EntryKind,
    pub interval: TimeInterval,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMatcher {
    /// `DD/MM - HH:MM (HH:MM)? in.`
    Start,
    /// `HH:MM - HH:MM (HH:MM)? break.` / `... lunch.`
    Pause,
}

/// Matchers in priority order.
pub const MATCHERS: [LineMatcher; 2] = [LineMatcher::Start, LineMatcher::Pause];

impl LineMatcher {
    fn pattern(&self) -> &'static Regex {
        match self {
            LineMatcher::Start => &*START_RE,
            LineMatcher::Pause => &*PAUSE_RE,
        }
    }

    pub fn can_parse(&self, line: &str) -> bool {
        self.pattern().is_match(line)
    }

    /// Whether entries of this shape need the date of an open day.
    pub fn needs_day(&self) -> bool {
        matches!(self, LineMatcher::Pause)
    }

    /// Parse `line`, with `DD/MM` dates taken in the current year.
    pub fn parse(&self, line: &str, base_date: Option<NaiveDate>) -> AppResult<Option<Entry>> {
        self.parse_in_year(line, base_date, None)
    }

    /// Parse `line`. `Ok(None)` when the line has another shape; a typed
    /// error when it has this shape but carries a bad date or time.
    pub fn parse_in_year(
        &self,
        line: &str,
        base_date: Option<NaiveDate>,
        year: Option<i32>,
    ) -> AppResult<Option<Entry>> {
        let Some(caps) = self.pattern().captures(line) else {
            return Ok(None);
        };

        let entry = match self {
            LineMatcher::Start => parse_start(&caps, year)?,
            LineMatcher::Pause => {
                let base = base_date.ok_or_else(|| AppError::MissingDayContext(line.to_string()))?;
                parse_pause(&caps, base)?
            }
        };

        Ok(Some(entry))
    }
}

fn parse_start(caps: &Captures, year: Option<i32>) -> AppResult<Entry> {
    let date = match year {
        Some(y) => parse_date_in_year(&caps[1], y)?,
        None => parse_date(&caps[1])?,
    };

    let scheduled = parse_time(&caps[2], Some(date))?;
    let actual = match caps.get(3) {
        Some(m) => parse_time(m.as_str(), Some(date))?,
        None => scheduled,
    };

    Ok(Entry {
        kind: EntryKind::Start,
        interval: TimeInterval::new(scheduled, scheduled, actual),
    })
}

fn parse_pause(caps: &Captures, base: NaiveDate) -> AppResult<Entry> {
    let start = parse_time(&caps[1], Some(base))?;
    let second = parse_time(&caps[2], Some(base))?;
    let third = caps
        .get(3)
        .map(|m| parse_time(m.as_str(), Some(base)))
        .transpose()?;

    let (kind, interval) = match &caps[4] {
        // a break has no planned length: all of it is overage
        "break" => (EntryKind::Break, TimeInterval::new(start, start, second)),
        "lunch" => (
            EntryKind::Lunch,
            TimeInterval::new(start, second, third.unwrap_or(second)),
        ),
        other => unreachable!("pause pattern admitted keyword {other:?}"),
    };

    Ok(Entry { kind, interval })
}

/// Run the matchers in priority order; the first one that accepts the line wins.
pub fn classify(
    line: &str,
    base_date: Option<NaiveDate>,
    year: Option<i32>,
) -> AppResult<Option<Entry>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    match matcher_for(line) {
        Some(m) => m.parse_in_year(line, base_date, year),
        None => Ok(None),
    }
}

/// First matcher accepting `line`, if any.
pub fn matcher_for(line: &str) -> Option<LineMatcher> {
    MATCHERS.into_iter().find(|m| m.can_parse(line))
}
