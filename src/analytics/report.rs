//! Post-game report

use super::{AnagramSet, CoreChain, analyze_anagrams, analyze_core_chains};
use crate::scoring::{Score, max_score, total_score};
use crate::solver::WordSet;
use serde::Serialize;
use std::cmp::Reverse;

/// Words ordered longest first, alphabetical within a length
#[must_use]
pub fn words_by_length<'a, I>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut sorted: Vec<String> = words.into_iter().cloned().collect();
    sorted.sort_by(|a, b| Reverse(a.len()).cmp(&Reverse(b.len())).then_with(|| a.cmp(b)));
    sorted
}

/// Everything shown after a round ends
#[derive(Debug, Clone, Serialize)]
pub struct GameReport {
    pub score: Score,
    pub max_score: i32,
    pub found_count: usize,
    pub possible_count: usize,
    /// Percentage of possible words found
    pub completion: f64,
    pub longest_word: Option<String>,
    pub missed: Vec<String>,
    pub chains: Vec<CoreChain>,
    pub anagrams: Vec<AnagramSet>,
}

impl GameReport {
    /// Build from the board's possible words and the player's submissions
    #[must_use]
    pub fn build(possible: &WordSet, found: &[String], penalized: &[String]) -> Self {
        let all = words_by_length(possible);
        let missed = all
            .iter()
            .filter(|word| !found.contains(word))
            .cloned()
            .collect();

        let completion = if possible.is_empty() {
            0.0
        } else {
            found.len() as f64 / possible.len() as f64 * 100.0
        };

        Self {
            score: total_score(found, penalized),
            max_score: max_score(possible),
            found_count: found.len(),
            possible_count: possible.len(),
            completion,
            longest_word: all.first().cloned(),
            missed,
            chains: analyze_core_chains(possible),
            anagrams: analyze_anagrams(possible),
        }
    }
}
