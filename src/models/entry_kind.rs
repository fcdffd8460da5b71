#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Start,
    Break,
    Lunch,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Start => "start",
            EntryKind::Break => "break",
            EntryKind::Lunch => "lunch",
        }
    }
}
