use crate::app::{GameService, HistorySnapshot};
use crate::domain::model::{HistoryRow, Outcome, RowState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub game: GameService,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn ok(data: impl Serialize) -> Self {
        match serde_json::to_value(data) {
            Ok(value) => Self {
                success: true,
                data: Some(value),
                error: None,
            },
            Err(e) => Self::failure(format!("failed to encode response: {}", e)),
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct SubmitGuessRequest {
    pub guess: String,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct SubmitGuessResponse {
    /// Row the guess was written to; stays valid until the puzzle changes.
    pub row: usize,
    pub puzzle_id: u32,
    pub generation: u64,
}

#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct ChangePuzzleRequest {
    /// Omit, or send a non-positive number, for a random puzzle.
    #[serde(default)]
    pub puzzle_id: Option<i64>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct PuzzleResponse {
    pub puzzle_id: u32,
    pub generation: u64,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RowStatus {
    Pending,
    Win,
    Score,
    Error,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct HistoryRowView {
    pub row: usize,
    pub guess: String,
    /// "Number of letters in common", "you win!", or the error text.
    pub primary: String,
    /// "Number of letters in position"; empty for wins and errors.
    pub secondary: String,
    pub status: RowStatus,
    pub submitted_at: DateTime<Utc>,
}

impl HistoryRowView {
    pub fn from_row(row: usize, history_row: &HistoryRow) -> Self {
        let (primary, secondary) = history_row.columns();
        let status = match &history_row.state {
            RowState::Pending => RowStatus::Pending,
            RowState::Resolved(Outcome::Win) => RowStatus::Win,
            RowState::Resolved(Outcome::Score { .. }) => RowStatus::Score,
            RowState::Resolved(Outcome::ServiceError { .. }) => RowStatus::Error,
        };
        Self {
            row,
            guess: history_row.guess.clone(),
            primary,
            secondary,
            status,
            submitted_at: history_row.submitted_at,
        }
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct HistoryResponse {
    pub puzzle_id: u32,
    pub generation: u64,
    pub rows: Vec<HistoryRowView>,
}

impl From<HistorySnapshot> for HistoryResponse {
    fn from(snapshot: HistorySnapshot) -> Self {
        Self {
            puzzle_id: snapshot.puzzle.puzzle_id.get(),
            generation: snapshot.puzzle.generation,
            rows: snapshot
                .rows
                .iter()
                .enumerate()
                .map(|(i, r)| HistoryRowView::from_row(i, r))
                .collect(),
        }
    }
}
