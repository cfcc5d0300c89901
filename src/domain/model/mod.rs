//! Domain model for the guess history: puzzle ids, outcomes and rows.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Primary column text shown for a winning guess.
pub const WIN_LABEL: &str = "you win!";

/// Error code used for failures synthesized on this side of the wire
/// (unreachable service, bad address, unparseable reply).
pub const LOCAL_FAILURE_CODE: u8 = 0;

/// A positive puzzle number understood by the scoring service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PuzzleId(u32);

impl PuzzleId {
    pub const MIN: PuzzleId = PuzzleId(1);

    /// Returns `None` for zero, negative or out-of-range values.
    pub fn new(value: i64) -> Option<Self> {
        match u32::try_from(value) {
            Ok(v) if v > 0 => Some(Self(v)),
            _ => None,
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Terminal classification of a guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Win,
    Score {
        common_letters: u8,
        correct_positions: u8,
    },
    ServiceError {
        code: u8,
        detail: String,
    },
}

impl Outcome {
    /// Builds the `ServiceError` recorded when a guess fails before a usable reply exists.
    pub fn local_failure(err: &dyn std::error::Error) -> Self {
        Outcome::ServiceError {
            code: LOCAL_FAILURE_CODE,
            detail: err.to_string(),
        }
    }

    pub fn is_win(&self) -> bool {
        matches!(self, Outcome::Win)
    }

    /// The two feedback columns a renderer shows next to the guess text.
    pub fn columns(&self) -> (String, String) {
        match self {
            Outcome::Win => (WIN_LABEL.to_string(), String::new()),
            Outcome::Score {
                common_letters,
                correct_positions,
            } => (common_letters.to_string(), correct_positions.to_string()),
            Outcome::ServiceError { code, detail } if detail.is_empty() => {
                (format!("error {}", code), String::new())
            }
            Outcome::ServiceError { detail, .. } => (detail.clone(), String::new()),
        }
    }
}

/// A row is `Pending` from reservation until its outcome is committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "outcome", rename_all = "snake_case")]
pub enum RowState {
    Pending,
    Resolved(Outcome),
}

impl RowState {
    pub fn outcome(&self) -> Option<&Outcome> {
        match self {
            RowState::Pending => None,
            RowState::Resolved(outcome) => Some(outcome),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryRow {
    pub guess: String,
    pub state: RowState,
    pub puzzle_id: PuzzleId,
    pub submitted_at: DateTime<Utc>,
}

impl HistoryRow {
    pub fn columns(&self) -> (String, String) {
        match &self.state {
            RowState::Pending => (String::new(), String::new()),
            RowState::Resolved(outcome) => outcome.columns(),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, RowState::Pending)
    }
}

/// Handle returned by a reservation. The generation pins the ticket to the
/// table contents that existed when the row was appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowTicket {
    pub index: usize,
    pub generation: u64,
    pub puzzle_id: PuzzleId,
}

/// The puzzle a session was started against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleStamp {
    pub puzzle_id: PuzzleId,
    pub generation: u64,
}
