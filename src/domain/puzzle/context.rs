//! The current puzzle and the generation counter used to detect stale replies.

use crate::domain::history::HistoryTable;
use crate::domain::model::{PuzzleId, PuzzleStamp};
use rand::Rng;

/// Upper bound (inclusive) for randomly chosen puzzle numbers.
pub const RANDOM_PUZZLE_CEILING: u32 = 1_000_000;

#[derive(Debug)]
pub struct PuzzleContext {
    current: PuzzleId,
    /// Incremented on every puzzle change, including a change to the same id.
    generation: u64,
}

impl PuzzleContext {
    pub fn new(initial: PuzzleId) -> Self {
        Self {
            current: initial,
            generation: 0,
        }
    }

    pub fn current(&self) -> PuzzleId {
        self.current
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn stamp(&self) -> PuzzleStamp {
        PuzzleStamp {
            puzzle_id: self.current,
            generation: self.generation,
        }
    }

    /// Switches to `requested`, or to a random puzzle when it is absent or not
    /// positive, and clears `table` in the same step.
    pub fn change_to(&mut self, requested: Option<i64>, table: &mut HistoryTable) -> PuzzleId {
        let next = requested
            .and_then(PuzzleId::new)
            .unwrap_or_else(random_puzzle_id);

        self.current = next;
        self.generation += 1;
        let table_generation = table.clear();

        tracing::info!(
            puzzle_id = %next,
            generation = self.generation,
            table_generation,
            "puzzle changed, history cleared"
        );
        next
    }
}

/// Uniformly picks a puzzle in `1..=RANDOM_PUZZLE_CEILING`.
pub fn random_puzzle_id() -> PuzzleId {
    let n = rand::thread_rng().gen_range(1..=RANDOM_PUZZLE_CEILING);
    PuzzleId::new(i64::from(n)).unwrap_or(PuzzleId::MIN)
}
