//! Scoring-service reply grammar.

pub mod parser;

pub use parser::{parse, ReplyError, VICTORY_REPLY};
