//! Post-game analysis command
//!
//! Replays a list of guesses against a board and reports on the round.

use super::solve::BoardSource;
use crate::analytics::GameReport;
use crate::core::Board;
use crate::game::{GameConfig, GameSession, RejectReason, SubmitOutcome};
use crate::solver::Solver;
use crate::wordlists::Dictionary;
use anyhow::Result;
use serde::Serialize;

/// Report for a replayed round
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub board: Board,
    pub report: GameReport,
    pub rejected: Vec<(String, RejectReason)>,
    /// Guesses that scored nothing either way (too short, repeats)
    pub skipped: Vec<String>,
}

/// Score `guesses` on the board from `source` and build the report
///
/// Guesses go through the normal submission rules, so repeats and short words
/// are skipped and wrong words are penalized.
///
/// # Errors
///
/// Propagates board resolution errors.
pub fn analyze_game(
    dictionary: &Dictionary,
    source: &BoardSource,
    guesses: &[String],
) -> Result<AnalysisResult> {
    let (board, kind) = source.resolve()?;
    let possible = Solver::new(dictionary.trie()).solve(&board);

    let mut session = GameSession::new(board, possible, kind, GameConfig::default());
    session.start();

    let mut rejected = Vec::new();
    let mut skipped = Vec::new();
    for guess in guesses {
        match session.submit(guess, dictionary) {
            SubmitOutcome::Valid { .. } => {}
            SubmitOutcome::Invalid { word, reason, .. } => rejected.push((word, reason)),
            _ => skipped.push(guess.clone()),
        }
    }

    Ok(AnalysisResult {
        report: session.report(),
        board: session.board().clone(),
        rejected,
        skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guesses(words: &[&str]) -> Vec<String> {
        words.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn analysis_scores_guesses() {
        let dictionary = Dictionary::from_words(["CAT", "CATS", "DOG"]);
        let source = BoardSource::Custom("CATSXXXXXXXXXXXX".to_string());
        let result =
            analyze_game(&dictionary, &source, &guesses(&["cat", "dog", "cat", "qq", "zzzz"]))
                .unwrap();

        assert_eq!(result.report.found_count, 1);
        assert_eq!(result.report.possible_count, 2);
        assert_eq!(result.report.missed, ["CATS"]);
        assert_eq!(result.report.score.net, -1);
        assert_eq!(
            result.rejected,
            [
                ("DOG".to_string(), RejectReason::NotOnBoard),
                ("ZZZZ".to_string(), RejectReason::NotInDictionary)
            ]
        );
        assert_eq!(result.skipped, ["cat", "qq"]);
    }

    #[test]
    fn quit_command_stops_the_replay() {
        let dictionary = Dictionary::from_words(["CAT", "CATS"]);
        let source = BoardSource::Custom("CATSXXXXXXXXXXXX".to_string());
        let result = analyze_game(&dictionary, &source, &guesses(&["-1", "CAT"])).unwrap();
        assert_eq!(result.report.found_count, 0);
        assert_eq!(result.skipped, ["-1", "CAT"]);
    }
}
