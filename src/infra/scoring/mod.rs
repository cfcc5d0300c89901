//! Boundary to the remote scoring service.

use crate::domain::model::PuzzleId;
use async_trait::async_trait;

pub mod client;

pub use client::HttpScoringClient;

#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    /// The service could not be reached or answered with a failure status.
    #[error("could not reach scoring service: {0}")]
    Transport(String),
    /// The request target itself is invalid.
    #[error("invalid scoring service address {target}: {reason}")]
    Address { target: String, reason: String },
}

/// Sends one guess for one puzzle and returns the raw reply text.
///
/// Implementations must not retry; a failure is final for that guess.
#[async_trait]
pub trait ScoringClient: Send + Sync {
    async fn submit(&self, guess: &str, puzzle_id: PuzzleId) -> Result<String, ScoringError>;
}
