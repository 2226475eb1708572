//! Unified application error type.
//! Every module (api, core, db, cli, export) returns AppError so that the
//! fetch pipeline can decide in one place which failures are fatal.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Local cache
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Cache error: {0}")]
    Cache(String),

    // ---------------------------
    // Fetch pipeline
    // ---------------------------
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Search failed: {0}")]
    Search(String),

    #[error("Thread fetch failed: {0}")]
    ThreadFetch(String),

    #[error("Thread contains no messages")]
    EmptyThread,

    // ---------------------------
    // Parsing / validation
    // ---------------------------
    #[error("Invalid month: {0} (expected YYYY-MM)")]
    InvalidMonth(String),

    #[error("Invalid day index: {0}")]
    InvalidDayIndex(usize),

    // ---------------------------
    // Export
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// Only configuration and search failures terminate a ledger fetch.
    pub fn is_fatal_for_fetch(&self) -> bool {
        matches!(self, AppError::Configuration(_) | AppError::Search(_))
    }

    /// Message shown in place of the ledger when a fetch fails.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Configuration(msg) => {
                format!("Slack settings are incomplete ({msg}). Check your configuration.")
            }
            AppError::Search(_) => {
                "Could not retrieve attendance records from Slack. Please try again later."
                    .to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
