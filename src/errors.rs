//! Unified application error type.
//! All modules (utils, core, export, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Could not find file: {0}")]
    FileNotFound(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid time format: {0}. Expected HH:MM")]
    InvalidTime(String),

    #[error("Invalid date format: {0}. Expected DD/MM")]
    InvalidDate(String),

    #[error("Base date required for break entries: {0}")]
    MissingDayContext(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
