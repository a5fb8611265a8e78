//! 2×2 practice quizzes
//!
//! Small boards with a target word count, for warming up between rounds.

use crate::core::{Board, BoardError, Tile, Trie};
use crate::dice::parse_practice_letters;
use crate::solver::{Solver, WordSet};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use tracing::debug;

/// Letters ordered by how often they appear in English words
const LETTER_FREQUENCY: &[u8] = b"EARIOTNSLCUDPMHGBFYWKVXZJQ";
const VOWELS: &[u8] = b"AEIOU";
const CONSONANTS: &[u8] = b"BCDFGHJKLMNPQRSTVWXYZ";

/// Boards tried before settling for the closest miss
const MAX_ATTEMPTS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Acceptable number of words on the board
    #[must_use]
    pub const fn word_range(self) -> RangeInclusive<usize> {
        match self {
            Self::Easy => 3..=8,
            Self::Medium => 8..=15,
            Self::Hard => 15..=30,
        }
    }

    /// Classify a board by how many words it holds
    #[must_use]
    pub const fn from_word_count(count: usize) -> Self {
        if count < 8 {
            Self::Easy
        } else if count > 15 {
            Self::Hard
        } else {
            Self::Medium
        }
    }

    /// Distance from the middle of the target range
    fn miss(self, count: usize) -> f64 {
        let range = self.word_range();
        let midpoint = (*range.start() + *range.end()) as f64 / 2.0;
        (count as f64 - midpoint).abs()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        };
        f.pad(name)
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" | "e" => Ok(Self::Easy),
            "medium" | "m" => Ok(Self::Medium),
            "hard" | "h" => Ok(Self::Hard),
            other => Err(format!("unknown difficulty '{other}' (easy, medium, hard)")),
        }
    }
}

/// A practice board and its answers
#[derive(Debug, Clone, Serialize)]
pub struct PracticeQuiz {
    pub board: Board,
    pub letters: String,
    pub words: WordSet,
    pub difficulty: Difficulty,
}

impl PracticeQuiz {
    fn new(board: Board, trie: &Trie, difficulty: Option<Difficulty>) -> Self {
        let words = Solver::new(trie).solve(&board);
        Self {
            letters: board.letters(),
            difficulty: difficulty.unwrap_or_else(|| Difficulty::from_word_count(words.len())),
            board,
            words,
        }
    }
}

/// Deal a practice board aiming for `difficulty`
///
/// Each attempt draws a common letter, a vowel or consonant (even odds) and two
/// more common letters, then shuffles them into the grid. The first board in
/// range wins; after the last attempt the board closest to the middle of the
/// range is used.
pub fn generate_practice_quiz<R: Rng + ?Sized>(
    trie: &Trie,
    difficulty: Difficulty,
    rng: &mut R,
) -> PracticeQuiz {
    let target = difficulty.word_range();
    let mut closest = deal(trie, difficulty, rng);
    let mut attempts = 1;

    // An in-range board is always nearer the midpoint than any board outside it
    while !target.contains(&closest.words.len()) && attempts < MAX_ATTEMPTS {
        let quiz = deal(trie, difficulty, rng);
        if difficulty.miss(quiz.words.len()) < difficulty.miss(closest.words.len()) {
            closest = quiz;
        }
        attempts += 1;
    }

    debug!(
        %difficulty,
        attempts,
        count = closest.words.len(),
        letters = %closest.letters,
        "practice board dealt"
    );
    closest
}

/// Practice quiz on four chosen letters
///
/// # Errors
///
/// Returns `BoardError::InvalidLength` unless exactly four letters remain after
/// dropping everything outside A-Z.
pub fn practice_quiz_from_letters(letters: &str, trie: &Trie) -> Result<PracticeQuiz, BoardError> {
    let board = parse_practice_letters(letters)?;
    Ok(PracticeQuiz::new(board, trie, None))
}

fn deal<R: Rng + ?Sized>(trie: &Trie, difficulty: Difficulty, rng: &mut R) -> PracticeQuiz {
    let tiles = draw_letters(rng).map(Tile::Letter);
    PracticeQuiz::new(Board::square(tiles), trie, Some(difficulty))
}

fn draw_letters<R: Rng + ?Sized>(rng: &mut R) -> [u8; 4] {
    let pick = |rng: &mut R, pool: &[u8]| pool[rng.random_range(0..pool.len())];

    let first = pick(rng, &LETTER_FREQUENCY[..10]);
    let second = if rng.random_bool(0.5) {
        pick(rng, VOWELS)
    } else {
        pick(rng, CONSONANTS)
    };
    let third = pick(rng, &LETTER_FREQUENCY[..15]);
    let fourth = pick(rng, &LETTER_FREQUENCY[..15]);

    let mut letters = [first, second, third, fourth];
    letters.shuffle(rng);
    letters
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn trie() -> Trie {
        [
            "ATE", "EAT", "ETA", "TEA", "TAE", "SAT", "SEA", "SET", "TEAS", "SEAT", "EATS", "ETAS",
            "EAST", "SATE", "TAES", "AES", "ARE", "EAR", "ERA", "RAT", "TAR", "ART", "RATE",
            "TEAR", "TARE",
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn difficulty_ranges() {
        assert_eq!(Difficulty::Easy.word_range(), 3..=8);
        assert_eq!(Difficulty::Medium.word_range(), 8..=15);
        assert_eq!(Difficulty::Hard.word_range(), 15..=30);
    }

    #[test]
    fn classifies_by_count() {
        assert_eq!(Difficulty::from_word_count(0), Difficulty::Easy);
        assert_eq!(Difficulty::from_word_count(7), Difficulty::Easy);
        assert_eq!(Difficulty::from_word_count(8), Difficulty::Medium);
        assert_eq!(Difficulty::from_word_count(15), Difficulty::Medium);
        assert_eq!(Difficulty::from_word_count(16), Difficulty::Hard);
    }

    #[test]
    fn parses_difficulty() {
        assert_eq!("Hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!("e".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert!("extreme".parse::<Difficulty>().is_err());
    }

    #[test]
    fn quiz_from_letters_solves_grid() {
        // T E
        // A S  -> every cell touches every other
        let quiz = practice_quiz_from_letters("te as", &trie()).unwrap();
        assert_eq!(quiz.letters, "TEAS");
        assert_eq!(quiz.board.rows(), 2);
        assert!(quiz.words.contains("TEA"));
        assert!(quiz.words.contains("EAST"));
        assert!(!quiz.words.contains("RAT"));
        // Every listed word without an R
        assert_eq!(quiz.words.len(), 16);
        assert_eq!(quiz.difficulty, Difficulty::Hard);
    }

    #[test]
    fn quiz_from_letters_requires_four() {
        assert!(practice_quiz_from_letters("TEA", &trie()).is_err());
        assert!(practice_quiz_from_letters("TEASE", &trie()).is_err());
    }

    #[test]
    fn practice_q_is_plain() {
        let trie: Trie = ["QAT"].into_iter().collect();
        let quiz = practice_quiz_from_letters("QATX", &trie).unwrap();
        assert!(quiz.words.contains("QAT"));
        assert_eq!(quiz.letters, "QATX");
    }

    #[test]
    fn drawn_letters_follow_pools() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let letters = draw_letters(&mut rng);
            assert!(letters.iter().all(u8::is_ascii_uppercase));
            let common = letters
                .iter()
                .filter(|c| LETTER_FREQUENCY[..15].contains(c))
                .count();
            // Three of the four always come from the common pool
            assert!(common >= 3);
        }
    }

    #[test]
    fn generated_quiz_is_consistent() {
        let trie = trie();
        let mut rng = StdRng::seed_from_u64(42);
        let quiz = generate_practice_quiz(&trie, Difficulty::Easy, &mut rng);

        assert_eq!(quiz.difficulty, Difficulty::Easy);
        assert_eq!(quiz.board.len(), 4);
        assert_eq!(quiz.words, Solver::new(&trie).solve(&quiz.board));
    }

    #[test]
    fn unreachable_target_returns_closest() {
        // No four-letter grid can hold 15 words from a two-word list
        let trie: Trie = ["EAT", "TEA"].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(1);
        let quiz = generate_practice_quiz(&trie, Difficulty::Hard, &mut rng);
        assert_eq!(quiz.difficulty, Difficulty::Hard);
        assert!(quiz.words.len() <= 2);
    }
}
