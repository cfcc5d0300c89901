pub mod game_service;
pub mod session;

pub use game_service::{GameService, GameState, GuessHandle, HistorySnapshot};
pub use session::{GuessSession, SessionReport, SessionState};
