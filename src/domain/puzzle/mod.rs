pub mod context;

pub use context::{random_puzzle_id, PuzzleContext, RANDOM_PUZZLE_CEILING};
