//! One guess, end to end: reserve a row, ask the scoring service, parse, and
//! commit the outcome unless the puzzle changed in the meantime.

use crate::app::game_service::GameState;
use crate::domain::model::{Outcome, PuzzleStamp, RowTicket};
use crate::domain::reply;
use crate::infra::scoring::ScoringClient;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Created,
    RequestSent,
    Parsed,
    Committed,
    Discarded,
}

impl SessionState {
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionState::Committed | SessionState::Discarded)
    }
}

enum Stage {
    Created,
    RequestSent {
        stamp: PuzzleStamp,
        ticket: RowTicket,
    },
    Parsed {
        stamp: PuzzleStamp,
        ticket: RowTicket,
        outcome: Outcome,
    },
    Committed {
        ticket: RowTicket,
        outcome: Outcome,
    },
    Discarded {
        ticket: RowTicket,
        outcome: Outcome,
    },
}

/// What a finished session did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub guess: String,
    pub state: SessionState,
    pub ticket: Option<RowTicket>,
    pub outcome: Option<Outcome>,
}

pub struct GuessSession {
    game: Arc<Mutex<GameState>>,
    guess: String,
    stage: Stage,
}

impl GuessSession {
    pub fn new(game: Arc<Mutex<GameState>>, guess: impl Into<String>) -> Self {
        Self {
            game,
            guess: guess.into(),
            stage: Stage::Created,
        }
    }

    pub fn guess(&self) -> &str {
        &self.guess
    }

    pub fn state(&self) -> SessionState {
        match self.stage {
            Stage::Created => SessionState::Created,
            Stage::RequestSent { .. } => SessionState::RequestSent,
            Stage::Parsed { .. } => SessionState::Parsed,
            Stage::Committed { .. } => SessionState::Committed,
            Stage::Discarded { .. } => SessionState::Discarded,
        }
    }

    pub fn ticket(&self) -> Option<RowTicket> {
        match &self.stage {
            Stage::Created => None,
            Stage::RequestSent { ticket, .. }
            | Stage::Parsed { ticket, .. }
            | Stage::Committed { ticket, .. }
            | Stage::Discarded { ticket, .. } => Some(*ticket),
        }
    }

    /// Captures the current puzzle and appends a pending row for this guess.
    ///
    /// The row is visible to renderers as soon as this returns. Calling it again
    /// after the first reservation returns the existing ticket.
    pub async fn reserve(&mut self) -> RowTicket {
        if let Some(ticket) = self.ticket() {
            return ticket;
        }

        let (stamp, ticket) = {
            let mut game = self.game.lock().await;
            let stamp = game.context.stamp();
            let ticket = game.table.reserve(self.guess.clone(), stamp.puzzle_id);
            (stamp, ticket)
        };

        tracing::debug!(
            guess = %self.guess,
            row = ticket.index,
            puzzle_id = %stamp.puzzle_id,
            "row reserved"
        );
        self.stage = Stage::RequestSent { stamp, ticket };
        ticket
    }

    /// Asks the scoring service and turns whatever comes back into an outcome.
    /// Transport, address and parse failures all become a `ServiceError`.
    async fn request(&mut self, client: &dyn ScoringClient) {
        let (stamp, ticket) = match self.stage {
            Stage::RequestSent { stamp, ticket } => (stamp, ticket),
            _ => return,
        };

        let outcome = match client.submit(&self.guess, stamp.puzzle_id).await {
            Ok(raw) => match reply::parse(&raw) {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::warn!(guess = %self.guess, row = ticket.index, error = %e, "unusable reply");
                    Outcome::local_failure(&e)
                }
            },
            Err(e) => {
                tracing::warn!(guess = %self.guess, row = ticket.index, error = %e, "scoring request failed");
                Outcome::local_failure(&e)
            }
        };

        if outcome.is_win() {
            tracing::info!(guess = %self.guess, puzzle_id = %stamp.puzzle_id, "you win!");
        }

        self.stage = Stage::Parsed {
            stamp,
            ticket,
            outcome,
        };
    }

    /// Commits the parsed outcome if the puzzle generation is unchanged,
    /// otherwise drops it without touching the table.
    async fn settle(&mut self) {
        let (stamp, ticket, outcome) = match &self.stage {
            Stage::Parsed {
                stamp,
                ticket,
                outcome,
            } => (*stamp, *ticket, outcome.clone()),
            _ => return,
        };

        let mut game = self.game.lock().await;
        if game.context.generation() != stamp.generation {
            drop(game);
            tracing::info!(
                guess = %self.guess,
                row = ticket.index,
                puzzle_id = %stamp.puzzle_id,
                "puzzle changed while request was outstanding, reply discarded"
            );
            self.stage = Stage::Discarded { ticket, outcome };
            return;
        }

        match game.table.commit(&ticket, outcome.clone()) {
            Ok(()) => {
                drop(game);
                tracing::debug!(guess = %self.guess, row = ticket.index, "outcome committed");
                self.stage = Stage::Committed { ticket, outcome };
            }
            Err(rejected) => {
                drop(game);
                tracing::warn!(guess = %self.guess, error = %rejected, "commit rejected");
                self.stage = Stage::Discarded { ticket, outcome };
            }
        }
    }

    /// Drives the session to a terminal state.
    pub async fn run(mut self, client: &dyn ScoringClient) -> SessionReport {
        self.reserve().await;
        self.request(client).await;
        self.settle().await;
        self.into_report()
    }

    fn into_report(self) -> SessionReport {
        let state = self.state();
        let ticket = self.ticket();
        let outcome = match self.stage {
            Stage::Parsed { outcome, .. }
            | Stage::Committed { outcome, .. }
            | Stage::Discarded { outcome, .. } => Some(outcome),
            Stage::Created | Stage::RequestSent { .. } => None,
        };
        SessionReport {
            guess: self.guess,
            state,
            ticket,
            outcome,
        }
    }
}
