//! Daily board preview

use crate::analytics::words_by_length;
use crate::dice::{DailyBoard, daily_board};
use crate::scoring::max_score;
use crate::solver::Solver;
use crate::wordlists::Dictionary;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// A day's board and what it holds
#[derive(Debug, Clone, Serialize)]
pub struct DailyPreview {
    pub daily: DailyBoard,
    pub weekday: String,
    pub word_count: usize,
    pub max_score: i32,
    /// Longest words first
    pub top_words: Vec<String>,
}

/// How many words the preview lists
const TOP_WORDS: usize = 10;

/// Solve the daily board for `date`
#[must_use]
pub fn preview_daily(dictionary: &Dictionary, date: NaiveDate) -> DailyPreview {
    let daily = daily_board(date);
    let words = Solver::new(dictionary.trie()).solve(&daily.board);

    let mut top_words = words_by_length(&words);
    top_words.truncate(TOP_WORDS);

    DailyPreview {
        weekday: date.weekday().to_string(),
        word_count: words.len(),
        max_score: max_score(&words),
        top_words,
        daily,
    }
}
