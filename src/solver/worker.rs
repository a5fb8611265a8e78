//! Solving off the caller's thread
//!
//! The interactive game starts a solve the moment a board is dealt and only
//! needs the answer once the round ends. Benchmarks solve many boards at once.

use super::{Solver, WordSet};
use crate::core::Board;
use crate::wordlists::Dictionary;
use rayon::prelude::*;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// A finished background solve
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    pub board: Board,
    pub words: WordSet,
    pub elapsed: Duration,
}

impl SolveOutcome {
    fn compute(dictionary: &Dictionary, board: Board) -> Self {
        let start = Instant::now();
        let words = Solver::new(dictionary.trie()).solve(&board);
        Self {
            board,
            words,
            elapsed: start.elapsed(),
        }
    }
}

/// Handle to a solve running on its own thread
#[derive(Debug)]
pub struct SolveTask {
    receiver: Option<Receiver<SolveOutcome>>,
    outcome: Option<SolveOutcome>,
}

impl SolveTask {
    /// Start solving `board` in the background
    ///
    /// Falls back to solving inline if the OS refuses a new thread, so the
    /// handle always yields an outcome.
    #[must_use]
    pub fn spawn(dictionary: Arc<Dictionary>, board: Board) -> Self {
        let (sender, receiver) = mpsc::channel();
        let fallback = board.clone();

        let spawned = thread::Builder::new()
            .name("board-solver".to_string())
            .spawn({
                let dictionary = Arc::clone(&dictionary);
                move || {
                    let outcome = SolveOutcome::compute(&dictionary, board);
                    debug!(words = outcome.words.len(), "background solve finished");
                    // The receiver may already be gone if the game was abandoned
                    let _ = sender.send(outcome);
                }
            });

        match spawned {
            Ok(_) => Self {
                receiver: Some(receiver),
                outcome: None,
            },
            Err(err) => {
                warn!(%err, "could not spawn solver thread, solving inline");
                Self::ready(SolveOutcome::compute(&dictionary, fallback))
            }
        }
    }

    /// A task that is already complete
    #[must_use]
    pub const fn ready(outcome: SolveOutcome) -> Self {
        Self {
            receiver: None,
            outcome: Some(outcome),
        }
    }

    /// Poll without blocking
    pub fn try_take(&mut self) -> Option<&SolveOutcome> {
        if self.outcome.is_none()
            && let Some(receiver) = &self.receiver
        {
            match receiver.try_recv() {
                Ok(outcome) => {
                    self.outcome = Some(outcome);
                    self.receiver = None;
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    warn!("solver thread exited without a result");
                    self.receiver = None;
                }
            }
        }
        self.outcome.as_ref()
    }

    /// True once the outcome is available
    pub fn is_done(&mut self) -> bool {
        self.try_take().is_some()
    }

    /// Block until the solve finishes
    ///
    /// Returns `None` only if the worker thread died before sending.
    #[must_use]
    pub fn wait(mut self) -> Option<SolveOutcome> {
        if self.outcome.is_none()
            && let Some(receiver) = self.receiver.take()
        {
            self.outcome = receiver.recv().ok();
        }
        self.outcome
    }
}

/// Solve many boards in parallel, results in input order
#[must_use]
pub fn solve_batch(dictionary: &Dictionary, boards: &[Board]) -> Vec<WordSet> {
    let solver = Solver::new(dictionary.trie());
    boards.par_iter().map(|board| solver.solve(board)).collect()
}
