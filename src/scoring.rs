//! Point tables for found words and wrong guesses

use serde::Serialize;
use std::fmt;

/// Points earned for a valid word
///
/// | Letters | Points |
/// |---|---|
/// | 3-4 | 1 |
/// | 5 | 2 |
/// | 6 | 3 |
/// | 7 | 5 |
/// | 8 | 7 |
/// | 9+ | 11 |
///
/// Shorter words score nothing.
///
/// # Examples
/// ```
/// use boggle_solver::scoring::word_score;
///
/// assert_eq!(word_score("CAT"), 1);
/// assert_eq!(word_score("WATERFALL"), 11);
/// ```
#[must_use]
pub const fn word_score(word: &str) -> i32 {
    match word.len() {
        0..=2 => 0,
        3 | 4 => 1,
        5 => 2,
        6 => 3,
        7 => 5,
        8 => 7,
        _ => 11,
    }
}

/// Points lost for a rejected guess (zero or negative)
#[must_use]
pub const fn word_penalty(word: &str) -> i32 {
    match word.len() {
        0..=2 => 0,
        3..=5 => -1,
        6 => -2,
        7 => -3,
        _ => -4,
    }
}

/// Gross, penalty and net points of a game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Score {
    pub gross: i32,
    pub penalty: i32,
    pub net: i32,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} {})", self.net, self.gross, self.penalty)
    }
}

/// Score a game from its found and penalized words
///
/// Net is not clamped and may go below zero.
#[must_use]
pub fn total_score<F, P>(found: F, penalized: P) -> Score
where
    F: IntoIterator,
    F::Item: AsRef<str>,
    P: IntoIterator,
    P::Item: AsRef<str>,
{
    let gross = found.into_iter().map(|w| word_score(w.as_ref())).sum();
    let penalty = penalized.into_iter().map(|w| word_penalty(w.as_ref())).sum();
    Score {
        gross,
        penalty,
        net: gross + penalty,
    }
}

/// Best possible gross score for a set of words
#[must_use]
pub fn max_score<I>(words: I) -> i32
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    words.into_iter().map(|w| word_score(w.as_ref())).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_table() {
        assert_eq!(word_score("CAT"), 1);
        assert_eq!(word_score("TREE"), 1);
        assert_eq!(word_score("HOUSE"), 2);
        assert_eq!(word_score("PICNIC"), 3);
        assert_eq!(word_score("JOURNEY"), 5);
        assert_eq!(word_score("ELEPHANT"), 7);
        assert_eq!(word_score("WATERFALL"), 11);
        assert_eq!(word_score("QUARTERBACKS"), 11);
    }

    #[test]
    fn short_words_score_zero() {
        assert_eq!(word_score(""), 0);
        assert_eq!(word_score("AT"), 0);
        assert_eq!(word_penalty("AT"), 0);
    }

    #[test]
    fn penalty_table() {
        assert_eq!(word_penalty("ABC"), -1);
        assert_eq!(word_penalty("ABCDE"), -1);
        assert_eq!(word_penalty("ABCDEF"), -2);
        assert_eq!(word_penalty("ABCDEFG"), -3);
        assert_eq!(word_penalty("ABCDEFGH"), -4);
        assert_eq!(word_penalty("ABCDEFGHIJKL"), -4);
    }

    #[test]
    fn total_combines_found_and_penalized() {
        let score = total_score(["CAT", "DOG"], ["ZQX"]);
        assert_eq!(
            score,
            Score {
                gross: 2,
                penalty: -1,
                net: 1
            }
        );
    }

    #[test]
    fn net_can_go_negative() {
        let score = total_score(["CAT"], ["ABCDEFGH", "ABCDEF"]);
        assert_eq!(score.gross, 1);
        assert_eq!(score.penalty, -6);
        assert_eq!(score.net, -5);
    }

    #[test]
    fn empty_game_scores_zero() {
        assert_eq!(
            total_score(Vec::<String>::new(), Vec::<String>::new()),
            Score::default()
        );
    }

    #[test]
    fn max_score_sums_every_word() {
        assert_eq!(max_score(["CAT", "HOUSE", "WATERFALL"]), 14);
    }
}
