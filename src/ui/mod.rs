pub mod messages;

pub use messages::{ConsoleSink, Level, MemorySink, Sink};
