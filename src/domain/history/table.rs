//! The guess ledger: an append-only, row-indexed table of guesses and outcomes.
//!
//! The table itself is not synchronized. It lives inside `GameState`, behind the
//! single lock that also guards the puzzle context, so every method here runs
//! with exclusive access.

use crate::domain::model::{HistoryRow, Outcome, PuzzleId, RowState, RowTicket};
use chrono::Utc;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommitRejected {
    /// The table was cleared after the row was reserved.
    #[error("row {index} belongs to generation {ticket_generation}, table is at {table_generation}")]
    StaleGeneration {
        index: usize,
        ticket_generation: u64,
        table_generation: u64,
    },
    #[error("row {index} already has an outcome")]
    AlreadyResolved { index: usize },
    #[error("row {index} does not exist")]
    UnknownRow { index: usize },
}

#[derive(Debug, Default)]
pub struct HistoryTable {
    rows: Vec<HistoryRow>,
    /// Bumped by every `clear`.
    generation: u64,
}

impl HistoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pending row and returns the ticket needed to resolve it.
    pub fn reserve(&mut self, guess: impl Into<String>, puzzle_id: PuzzleId) -> RowTicket {
        let index = self.rows.len();
        self.rows.push(HistoryRow {
            guess: guess.into(),
            state: RowState::Pending,
            puzzle_id,
            submitted_at: Utc::now(),
        });
        RowTicket {
            index,
            generation: self.generation,
            puzzle_id,
        }
    }

    /// Stores the outcome for a reserved row.
    ///
    /// Rejected when the table has been cleared since the reservation or the row
    /// was already resolved; the table is left untouched in both cases.
    pub fn commit(&mut self, ticket: &RowTicket, outcome: Outcome) -> Result<(), CommitRejected> {
        if ticket.generation != self.generation {
            return Err(CommitRejected::StaleGeneration {
                index: ticket.index,
                ticket_generation: ticket.generation,
                table_generation: self.generation,
            });
        }

        let row = self
            .rows
            .get_mut(ticket.index)
            .ok_or(CommitRejected::UnknownRow {
                index: ticket.index,
            })?;

        if !row.is_pending() {
            return Err(CommitRejected::AlreadyResolved {
                index: ticket.index,
            });
        }

        row.state = RowState::Resolved(outcome);
        Ok(())
    }

    /// Drops every row and starts a new generation. Returns the new generation.
    pub(crate) fn clear(&mut self) -> u64 {
        self.rows.clear();
        self.generation += 1;
        self.generation
    }

    /// Owned copy of the rows, in index order.
    pub fn snapshot(&self) -> Vec<HistoryRow> {
        self.rows.clone()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
