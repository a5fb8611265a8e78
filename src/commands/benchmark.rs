//! Benchmark command
//!
//! Solves a run of seeded boards in parallel and reports timing and word-count
//! statistics.

use crate::dice::generate_board_with_seed;
use crate::scoring::max_score;
use crate::solver::Solver;
use crate::wordlists::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Statistics for one solved board
#[derive(Debug, Clone, Copy)]
pub struct BoardStats {
    pub seed: i64,
    pub words: usize,
    pub max_score: i32,
    pub duration: Duration,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_boards: usize,
    pub total_words: usize,
    pub average_words: f64,
    pub min_words: usize,
    pub max_words: usize,
    /// Richest board by word count
    pub best: Option<BoardStats>,
    /// Boards bucketed by word count, in steps of `BUCKET_SIZE`
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub slowest_solve: Duration,
    pub boards_per_second: f64,
}

/// Width of a word-count bucket in the distribution
pub const BUCKET_SIZE: usize = 25;

/// Solve `count` boards with seeds `first_seed..first_seed + count`
///
/// Pass `show_progress` to draw a progress bar on stderr.
#[must_use]
pub fn run_benchmark(
    dictionary: &Dictionary,
    count: usize,
    first_seed: i64,
    show_progress: bool,
) -> BenchmarkResult {
    let progress = if show_progress {
        progress_bar(count as u64)
    } else {
        ProgressBar::hidden()
    };

    let solver = Solver::new(dictionary.trie());
    let start = Instant::now();

    let stats: Vec<BoardStats> = (0..count as i64)
        .into_par_iter()
        .map(|offset| {
            let seed = first_seed.wrapping_add(offset);
            let board = generate_board_with_seed(seed);
            let solve_start = Instant::now();
            let words = solver.solve(&board);
            progress.inc(1);
            BoardStats {
                seed,
                words: words.len(),
                max_score: max_score(&words),
                duration: solve_start.elapsed(),
            }
        })
        .collect();

    let duration = start.elapsed();
    progress.finish_and_clear();

    let result = summarize(&stats, duration);
    info!(
        boards = result.total_boards,
        elapsed_ms = duration.as_millis(),
        "benchmark finished"
    );
    result
}

fn summarize(stats: &[BoardStats], duration: Duration) -> BenchmarkResult {
    let total_boards = stats.len();
    let total_words: usize = stats.iter().map(|s| s.words).sum();

    let mut distribution = BTreeMap::new();
    for s in stats {
        *distribution.entry(s.words / BUCKET_SIZE * BUCKET_SIZE).or_insert(0) += 1;
    }

    BenchmarkResult {
        total_boards,
        total_words,
        average_words: if total_boards == 0 {
            0.0
        } else {
            total_words as f64 / total_boards as f64
        },
        min_words: stats.iter().map(|s| s.words).min().unwrap_or(0),
        max_words: stats.iter().map(|s| s.words).max().unwrap_or(0),
        // Ties go to the lowest seed
        best: stats
            .iter()
            .copied()
            .max_by(|a, b| a.words.cmp(&b.words).then(b.seed.cmp(&a.seed))),
        distribution,
        duration,
        slowest_solve: stats.iter().map(|s| s.duration).max().unwrap_or_default(),
        boards_per_second: total_boards as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

fn progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {per_sec}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}
