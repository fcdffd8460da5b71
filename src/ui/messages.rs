//! Output sinks. The report and every user-facing message go through a
//! [`Sink`] handed to whoever needs to print.

use ansi_term::{Colour, Style};

/// Icons
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub trait Sink {
    /// Plain report line, printed as-is.
    fn info(&mut self, msg: &str);
    fn success(&mut self, msg: &str);
    fn warning(&mut self, msg: &str);
    fn error(&mut self, msg: &str);
}

/// Writes to the terminal: info/success/warning to stdout, errors to stderr.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }

    fn tag(colour: Colour, icon: &str) -> String {
        Style::new().bold().fg(colour).paint(icon).to_string()
    }
}

impl Sink for ConsoleSink {
    fn info(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        println!("{} {}", Self::tag(Colour::Green, ICON_OK), msg);
    }

    fn warning(&mut self, msg: &str) {
        println!("{} {}", Self::tag(Colour::Yellow, ICON_WARN), msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{} {}", Self::tag(Colour::Red, ICON_ERR), msg);
    }
}

/// Level of a captured message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

/// Keeps every message in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub messages: Vec<(Level, String)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Info lines joined with `\n`, i.e. the report as it would be printed.
    pub fn text(&self) -> String {
        self.lines(Level::Info).join("\n")
    }

    pub fn lines(&self, level: Level) -> Vec<&str> {
        self.messages
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.as_str())
            .collect()
    }
}

impl Sink for MemorySink {
    fn info(&mut self, msg: &str) {
        self.messages.push((Level::Info, msg.to_string()));
    }

    fn success(&mut self, msg: &str) {
        self.messages.push((Level::Success, msg.to_string()));
    }

    fn warning(&mut self, msg: &str) {
        self.messages.push((Level::Warning, msg.to_string()));
    }

    fn error(&mut self, msg: &str) {
        self.messages.push((Level::Error, msg.to_string()));
    }
}
