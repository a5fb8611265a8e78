//! 2×2 practice command
//!
//! Deals practice boards on stdin until the player quits.

use super::simple::get_user_input;
use crate::game::{Difficulty, PracticeQuiz, generate_practice_quiz, practice_quiz_from_letters};
use crate::output::{print_practice_quiz, print_word_columns};
use crate::solver::WordSet;
use crate::wordlists::Dictionary;
use anyhow::{Context, Result};
use colored::Colorize;

/// Progress through one practice board
#[derive(Debug, Default)]
pub struct PracticeRound {
    found: WordSet,
}

/// Result of one practice guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PracticeGuess {
    Found,
    Repeat,
    Wrong,
}

impl PracticeRound {
    /// Check a guess against the quiz; matching is case-insensitive
    pub fn guess(&mut self, quiz: &PracticeQuiz, input: &str) -> PracticeGuess {
        let word = input.trim().to_uppercase();
        if self.found.contains(&word) {
            PracticeGuess::Repeat
        } else if quiz.words.contains(&word) {
            self.found.insert(word);
            PracticeGuess::Found
        } else {
            PracticeGuess::Wrong
        }
    }

    #[must_use]
    pub const fn found(&self) -> &WordSet {
        &self.found
    }

    #[must_use]
    pub fn is_complete(&self, quiz: &PracticeQuiz) -> bool {
        self.found.len() == quiz.words.len()
    }
}

/// Play practice boards until the player quits
///
/// The first board uses `letters` when given; later boards are dealt at
/// `difficulty`.
///
/// # Errors
///
/// Returns an error if `letters` is not exactly four letters or stdin fails.
pub fn run_practice(
    dictionary: &Dictionary,
    letters: Option<&str>,
    difficulty: Difficulty,
) -> Result<()> {
    println!("\n{}", "🧩 Practice: find every word on a 2×2 grid".bright_cyan().bold());
    println!("Commands: '?' to reveal, 'new' for another board, 'quit' to stop\n");

    let mut rng = rand::rng();
    let mut quiz = match letters {
        Some(letters) => practice_quiz_from_letters(letters, dictionary.trie())
            .with_context(|| format!("cannot build a practice board from '{letters}'"))?,
        None => generate_practice_quiz(dictionary.trie(), difficulty, &mut rng),
    };

    loop {
        let mut round = PracticeRound::default();
        print_practice_quiz(&quiz);

        loop {
            if round.is_complete(&quiz) {
                println!("\n{}", "🎉 All words found!".green().bold());
                break;
            }

            let prompt = format!("{}/{}", round.found().len(), quiz.words.len());
            let Some(input) = get_user_input(&prompt)? else {
                return Ok(());
            };

            match input.to_lowercase().as_str() {
                "quit" | "q" | "exit" => return Ok(()),
                "new" | "n" => break,
                "?" | "reveal" => {
                    print_word_columns(&quiz.words, round.found());
                    break;
                }
                _ => match round.guess(&quiz, &input) {
                    PracticeGuess::Found => println!("  {}", "✓ Found".green()),
                    PracticeGuess::Repeat => println!("  {}", "Already found".yellow()),
                    PracticeGuess::Wrong => println!("  {}", "✗ Not here".red()),
                },
            }
        }

        quiz = generate_practice_quiz(dictionary.trie(), difficulty, &mut rng);
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Trie;

    fn quiz() -> PracticeQuiz {
        let trie: Trie = ["TEA", "EAT", "ATE", "SEAT"].into_iter().collect();
        practice_quiz_from_letters("TEAS", &trie).unwrap()
    }

    #[test]
    fn round_tracks_guesses() {
        let quiz = quiz();
        let mut round = PracticeRound::default();

        assert_eq!(round.guess(&quiz, "tea"), PracticeGuess::Found);
        assert_eq!(round.guess(&quiz, "TEA"), PracticeGuess::Repeat);
        assert_eq!(round.guess(&quiz, "TAS"), PracticeGuess::Wrong);
        assert!(!round.is_complete(&quiz));

        for word in ["EAT", "ATE", "SEAT"] {
            round.guess(&quiz, word);
        }
        assert!(round.is_complete(&quiz));
    }
}
