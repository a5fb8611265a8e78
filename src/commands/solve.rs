//! Board solving command
//!
//! Resolves which board to use and lists every word on it.

use crate::core::{Board, Position};
use crate::dice::{daily_board, generate_board, generate_board_with_seed, parse_custom_board};
use crate::game::GameKind;
use crate::scoring::max_score;
use crate::solver::{Solver, WordSet, find_path};
use crate::wordlists::Dictionary;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;
use std::time::{Duration, Instant};

/// Where a board comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardSource {
    Random,
    Seed(i64),
    Custom(String),
    Daily(NaiveDate),
}

impl BoardSource {
    /// Deal the board
    ///
    /// # Errors
    ///
    /// Returns an error if a custom board does not hold exactly 16 letters.
    pub fn resolve(&self) -> Result<(Board, GameKind)> {
        match self {
            Self::Random => Ok((generate_board(), GameKind::Random)),
            Self::Seed(seed) => Ok((
                generate_board_with_seed(*seed),
                GameKind::Seeded { seed: *seed },
            )),
            Self::Custom(letters) => {
                let board = parse_custom_board(letters)
                    .with_context(|| format!("invalid custom board '{letters}'"))?;
                Ok((board, GameKind::Custom))
            }
            Self::Daily(date) => {
                let daily = daily_board(*date);
                Ok((
                    daily.board,
                    GameKind::Daily {
                        seed: daily.seed,
                        date: daily.date,
                    },
                ))
            }
        }
    }
}

/// Every word on a board
#[derive(Debug, Clone, Serialize)]
pub struct SolveResult {
    pub board: Board,
    pub kind: GameKind,
    pub words: WordSet,
    pub max_score: i32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub paths: Vec<(String, Vec<Position>)>,
    #[serde(skip)]
    pub duration: Duration,
}

/// Solve the board picked by `source`
///
/// With `with_paths`, each word also carries one tile path spelling it.
///
/// # Errors
///
/// Propagates board resolution errors.
pub fn solve_board(
    dictionary: &Dictionary,
    source: &BoardSource,
    with_paths: bool,
) -> Result<SolveResult> {
    let (board, kind) = source.resolve()?;

    let start = Instant::now();
    let words = Solver::new(dictionary.trie()).solve(&board);
    let duration = start.elapsed();

    let paths = if with_paths {
        words
            .iter()
            .filter_map(|word| find_path(&board, word).map(|path| (word.clone(), path)))
            .collect()
    } else {
        Vec::new()
    };

    Ok(SolveResult {
        max_score: max_score(&words),
        board,
        kind,
        words,
        paths,
        duration,
    })
}
