//! The game service: owns the shared puzzle/history state and spawns one
//! session task per submitted guess.
//!
//! `GameState` holds both the puzzle context and the history table behind a
//! single `tokio::sync::Mutex`, so a puzzle change and the table clear it
//! implies are observed as one step by every session. The mutex is fair, which
//! keeps row indices in the order guesses were submitted.

use crate::app::session::{GuessSession, SessionReport, SessionState};
use crate::domain::history::HistoryTable;
use crate::domain::model::{HistoryRow, PuzzleId, PuzzleStamp, RowTicket};
use crate::domain::puzzle::PuzzleContext;
use crate::infra::scoring::ScoringClient;
use std::sync::Arc;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;

pub struct GameState {
    pub(crate) context: PuzzleContext,
    pub(crate) table: HistoryTable,
}

impl GameState {
    pub fn new(initial: PuzzleId) -> Self {
        Self {
            context: PuzzleContext::new(initial),
            table: HistoryTable::new(),
        }
    }

    pub fn context(&self) -> &PuzzleContext {
        &self.context
    }

    pub fn table(&self) -> &HistoryTable {
        &self.table
    }

    /// Changes the puzzle and clears the history together.
    pub fn change_puzzle(&mut self, requested: Option<i64>) -> PuzzleId {
        self.context.change_to(requested, &mut self.table)
    }
}

/// A point-in-time view of the game for renderers.
#[derive(Debug, Clone)]
pub struct HistorySnapshot {
    pub puzzle: PuzzleStamp,
    pub rows: Vec<HistoryRow>,
}

/// A guess that has its row and is now waiting on the scoring service.
pub struct GuessHandle {
    pub ticket: RowTicket,
    pub task: JoinHandle<SessionReport>,
}

#[derive(Clone)]
pub struct GameService {
    state: Arc<Mutex<GameState>>,
    client: Arc<dyn ScoringClient>,
    /// Bumped after every visible change to the table or puzzle.
    revision: Arc<watch::Sender<u64>>,
}

impl GameService {
    pub fn new(initial: PuzzleId, client: Arc<dyn ScoringClient>) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            state: Arc::new(Mutex::new(GameState::new(initial))),
            client,
            revision: Arc::new(revision),
        }
    }

    /// Reserves a row for `guess` and spawns the session that resolves it.
    ///
    /// The row exists when this returns; the returned handle can be awaited for
    /// the session's final report. The guess text is trimmed first.
    pub async fn submit_guess(&self, guess: &str) -> GuessHandle {
        let mut session = GuessSession::new(self.state.clone(), guess.trim());
        let ticket = session.reserve().await;
        self.bump_revision();

        let client = self.client.clone();
        let revision = self.revision.clone();
        let task = tokio::spawn(async move {
            let report = session.run(client.as_ref()).await;
            if report.state == SessionState::Committed {
                revision.send_modify(|r| *r += 1);
            }
            report
        });

        GuessHandle { ticket, task }
    }

    /// Switches puzzles (random when `requested` is absent or not positive)
    /// and clears the history. In-flight sessions for the old puzzle keep
    /// running but their replies are dropped.
    pub async fn change_puzzle(&self, requested: Option<i64>) -> PuzzleStamp {
        let stamp = {
            let mut game = self.state.lock().await;
            game.change_puzzle(requested);
            game.context.stamp()
        };
        self.bump_revision();
        stamp
    }

    pub async fn current_puzzle(&self) -> PuzzleStamp {
        self.state.lock().await.context.stamp()
    }

    pub async fn snapshot(&self) -> HistorySnapshot {
        let game = self.state.lock().await;
        HistorySnapshot {
            puzzle: game.context.stamp(),
            rows: game.table.snapshot(),
        }
    }

    /// Receiver that changes whenever rows are added, resolved or cleared.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    fn bump_revision(&self) {
        self.revision.send_modify(|r| *r += 1);
    }
}
