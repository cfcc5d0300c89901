//! Test doubles for the scoring service.

#![allow(dead_code)]

use async_trait::async_trait;
use jotto_client::{PuzzleId, ScoringClient, ScoringError};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use tokio::sync::oneshot;

pub type Reply = Result<String, ScoringError>;

/// Holds every request open until the test releases its reply, so tests can
/// pick the order in which replies land.
#[derive(Default)]
pub struct ScriptedScoringClient {
    pending: Mutex<HashMap<String, VecDeque<oneshot::Receiver<Reply>>>>,
    calls: Mutex<Vec<(String, PuzzleId)>>,
}

impl ScriptedScoringClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the next request for `guess`; the returned sender releases its reply.
    pub fn expect(&self, guess: &str) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.pending
            .lock()
            .unwrap()
            .entry(guess.to_string())
            .or_default()
            .push_back(rx);
        tx
    }

    pub fn calls(&self) -> Vec<(String, PuzzleId)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ScoringClient for ScriptedScoringClient {
    async fn submit(&self, guess: &str, puzzle_id: PuzzleId) -> Result<String, ScoringError> {
        self.calls
            .lock()
            .unwrap()
            .push((guess.to_string(), puzzle_id));
        let rx = self
            .pending
            .lock()
            .unwrap()
            .get_mut(guess)
            .and_then(VecDeque::pop_front);
        match rx {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(ScoringError::Transport("script dropped".into()))),
            None => Err(ScoringError::Transport(format!("unscripted guess {}", guess))),
        }
    }
}

/// Answers immediately from a closure.
pub struct FnScoringClient<F>(F);

impl<F> FnScoringClient<F>
where
    F: Fn(&str, PuzzleId) -> Reply + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

#[async_trait]
impl<F> ScoringClient for FnScoringClient<F>
where
    F: Fn(&str, PuzzleId) -> Reply + Send + Sync,
{
    async fn submit(&self, guess: &str, puzzle_id: PuzzleId) -> Result<String, ScoringError> {
        (self.0)(guess, puzzle_id)
    }
}

pub fn puzzle(n: i64) -> PuzzleId {
    PuzzleId::new(n).expect("positive puzzle id")
}
