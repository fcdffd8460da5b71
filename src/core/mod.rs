pub mod grammar;
pub mod parser;
pub mod reporter;
