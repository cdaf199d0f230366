//! Error types for Glossa.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid rule {index} in rule set '{set}': {message}")]
    InvalidRule {
        set: String,
        index: usize,
        message: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Table error: {0}")]
    Table(String),

    #[error("Lexicon error: {0}")]
    Lexicon(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
