//! Error types for the data-loader crate.
//!
//! Two failure classes are kept apart even though the user only ever sees
//! one message: transport problems (`Network`, `Status`) and payloads that do
//! not match the data model (`Parse`).

use thiserror::Error;

use crate::types::{MovieId, StrategyKey};

/// Errors that can occur while fetching a recommendation bundle
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request never produced a response (connect, timeout, body read)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Server returned status {status}")]
    Status { status: u16 },

    /// The body arrived but does not describe a valid bundle
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

impl FetchError {
    /// True for the transport/status class of failures
    pub fn is_network(&self) -> bool {
        matches!(self, FetchError::Network(_) | FetchError::Status { .. })
    }

    /// True when the payload failed validation
    pub fn is_parse(&self) -> bool {
        matches!(self, FetchError::Parse(_))
    }
}

/// Reasons a response body is rejected
#[derive(Error, Debug)]
pub enum ParseError {
    /// Not JSON, wrong field types, or a missing field (including a strategy key)
    #[error("Invalid bundle payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    /// The same movie appears twice in one strategy's list
    #[error("Duplicate MovieID {movie_id} in {strategy} list")]
    DuplicateMovie {
        strategy: StrategyKey,
        movie_id: MovieId,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, FetchError>;
