//! Board solving
//!
//! Exhaustive search for every dictionary word on a board, single-word path
//! tracing, and helpers to run solves off the calling thread.

mod engine;
mod path;
mod worker;

use std::collections::BTreeSet;

/// Words found on a board, sorted and free of duplicates
pub type WordSet = BTreeSet<String>;

pub use engine::{MIN_WORD_LEN, Solver};
pub use path::find_path;
pub use worker::{SolveOutcome, SolveTask, solve_batch};
