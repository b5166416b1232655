//! Error types for the FPL season analysis CLI

use thiserror::Error;


pub type Result<T> = std::result::Result<T, FplError>;

#[derive(Error, Debug)]
pub enum FplError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Could not load {table}: {reason}")]
    MissingTable { table: String, reason: String },

    #[error("Invalid season: {season} (expected e.g. 2024-25)")]
    InvalidSeason { season: String },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Invalid fixture difficulty: {value} (expected 1-5)")]
    InvalidDifficulty { value: i64 },

    #[error("Player not found: {query}")]
    PlayerNotFound { query: String },

    #[error("Player name query is empty")]
    EmptyQuery,

    #[error("Invalid selection {choice}: enter a number between 1 and {count}")]
    InvalidSelection { choice: usize, count: usize },

    #[error("Team not found: {query}")]
    TeamNotFound { query: String },

    #[error("Chart error: {message}")]
    Chart { message: String },
}

impl From<anyhow::Error> for FplError {
    fn from(err: anyhow::Error) -> Self {
        FplError::Chart {
            message: format!("{:#}", err),
        }
    }
}
