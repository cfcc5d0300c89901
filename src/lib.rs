pub mod app;
pub mod domain;
pub mod infra;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::{GameService, GuessSession, SessionReport, SessionState};
pub use domain::history::{CommitRejected, HistoryTable};
pub use domain::model::{HistoryRow, Outcome, PuzzleId, RowState, RowTicket};
pub use domain::puzzle::PuzzleContext;
pub use domain::reply::{parse, ReplyError};
pub use infra::scoring::{HttpScoringClient, ScoringClient, ScoringError};
