//! Work log parser: feeds each line through the grammar and groups the
//! entries into [`WorkDay`]s, in file order.

use crate::core::grammar::{Entry, classify, matcher_for};
use crate::errors::{AppError, AppResult};
use crate::models::{EntryKind, WorkDay};
use chrono::NaiveDate;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Accumulator threaded through the lines of one log.
#[derive(Debug, Default)]
struct ParseState {
    current: Option<WorkDay>,
    days: Vec<WorkDay>,
}

impl ParseState {
    fn feed(mut self, line: &str, year: Option<i32>) -> AppResult<Self> {
        let line = line.trim();
        let Some(matcher) = matcher_for(line) else {
            return Ok(self);
        };

        let base_date = self.current.as_ref().map(|d| d.date);

        // orphan break/lunch: nothing to attach it to
        if matcher.needs_day() && base_date.is_none() {
            return Ok(self);
        }

        if let Some(entry) = matcher.parse_in_year(line, base_date, year)? {
            self.apply(entry);
        }
        Ok(self)
    }

    fn apply(&mut self, entry: Entry) {
        match entry.kind {
            EntryKind::Start => {
                if let Some(day) = self.current.take() {
                    self.days.push(day);
                }
                self.current = Some(WorkDay::open(entry.interval));
            }
            kind => {
                if let Some(day) = self.current.as_mut() {
                    day.add_break(kind, entry.interval);
                }
            }
        }
    }

    fn finish(mut self) -> Vec<WorkDay> {
        if let Some(day) = self.current.take() {
            self.days.push(day);
        }
        self.days
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LogParser {
    /// Year for `DD/MM` dates; `None` means the current year.
    year: Option<i32>,
}

impl LogParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_year(year: Option<i32>) -> Self {
        Self { year }
    }

    /// Classify a single line against an optional open day.
    pub fn parse_line(&self, line: &str, base_date: Option<NaiveDate>) -> AppResult<Option<Entry>> {
        classify(line, base_date, self.year)
    }

    /// Parse a sequence of lines. The first malformed entry aborts the whole parse.
    pub fn parse_lines<I, S>(&self, lines: I) -> AppResult<Vec<WorkDay>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .try_fold(ParseState::default(), |state, line| state.feed(line.as_ref(), self.year))
            .map(ParseState::finish)
    }

    pub fn parse_str(&self, text: &str) -> AppResult<Vec<WorkDay>> {
        self.parse_lines(text.lines())
    }

    pub fn parse_file(&self, path: &Path) -> AppResult<Vec<WorkDay>> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => AppError::FileNotFound(path.display().to_string()),
            _ => AppError::Io(e),
        })?;

        BufReader::new(file)
            .lines()
            .try_fold(ParseState::default(), |state, line| state.feed(&line?, self.year))
            .map(ParseState::finish)
    }
}
