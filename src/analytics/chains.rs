//! Core chains: families of words built around a shared substring

use crate::scoring::word_score;
use crate::solver::WordSet;
use serde::Serialize;
use std::cmp::Reverse;

/// Smallest family worth reporting
const MIN_CHAIN_LEN: usize = 3;

/// Most chains reported per game
pub const MAX_CHAINS: usize = 8;

/// A word and every possible word containing it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoreChain {
    pub core: String,
    /// Shortest first
    pub words: Vec<String>,
    pub total_score: i32,
}

/// Top chains among the possible words of a board
///
/// Every word is tried as a core. Its chain is the words containing it as a
/// substring (itself included); chains shorter than three are dropped. Chains
/// rank by total score descending, then by shorter core, then alphabetically.
/// A chain whose words all appear in a higher-ranked accepted chain is skipped.
///
/// # Examples
/// ```
/// use boggle_solver::analytics::analyze_core_chains;
/// use boggle_solver::solver::WordSet;
///
/// let words: WordSet = ["EAT", "EATS", "SEAT", "SEATS"].map(String::from).into();
/// let chains = analyze_core_chains(&words);
/// assert_eq!(chains.len(), 1);
/// assert_eq!(chains[0].core, "EAT");
/// assert_eq!(chains[0].total_score, 5);
/// ```
#[must_use]
pub fn analyze_core_chains(words: &WordSet) -> Vec<CoreChain> {
    let mut candidates: Vec<CoreChain> = words
        .iter()
        .filter_map(|core| {
            let family: Vec<&String> = words.iter().filter(|w| w.contains(core.as_str())).collect();
            (family.len() >= MIN_CHAIN_LEN).then(|| CoreChain {
                core: core.clone(),
                total_score: family.iter().map(|w| word_score(w)).sum(),
                words: family.into_iter().cloned().collect(),
            })
        })
        .collect();

    candidates.sort_by(|a, b| {
        Reverse(a.total_score)
            .cmp(&Reverse(b.total_score))
            .then(a.core.len().cmp(&b.core.len()))
            .then_with(|| a.core.cmp(&b.core))
    });

    let mut accepted: Vec<CoreChain> = Vec::new();
    for mut chain in candidates {
        let covered = accepted
            .iter()
            .any(|prior| chain.words.iter().all(|w| prior.words.contains(w)));
        if covered {
            continue;
        }

        chain.words.sort_by_key(String::len);
        accepted.push(chain);
        if accepted.len() == MAX_CHAINS {
            break;
        }
    }
    accepted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> WordSet {
        words.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn groups_words_around_core() {
        let words = set(&["ART", "ARTS", "CART", "CARTS", "DART", "DARTS", "STAR", "START"]);
        let chains = analyze_core_chains(&words);

        assert_eq!(chains.len(), 1);
        let chain = &chains[0];
        assert_eq!(chain.core, "ART");
        assert_eq!(
            chain.words,
            ["ART", "ARTS", "CART", "DART", "CARTS", "DARTS", "START"]
        );
        assert_eq!(chain.total_score, 10);
    }

    #[test]
    fn subsets_of_accepted_chains_are_dropped() {
        // ARTS -> {ARTS, CARTS, DARTS} sits inside the ART chain
        let words = set(&["ART", "ARTS", "CARTS", "DARTS"]);
        let chains = analyze_core_chains(&words);
        assert_eq!(chains.len(), 1);
        assert_eq!(chains[0].core, "ART");
    }

    #[test]
    fn ranks_by_score_then_core_length() {
        let words = set(&[
            "ART", "ARTS", "CART", "CARTS", "DART", "DARTS", "EAT", "EATS", "SEAT", "SEATS",
        ]);
        let chains = analyze_core_chains(&words);
        let cores: Vec<&str> = chains.iter().map(|c| c.core.as_str()).collect();
        assert_eq!(cores, ["ART", "EAT"]);
        assert!(chains[0].total_score > chains[1].total_score);
    }

    #[test]
    fn equal_scores_prefer_shorter_core() {
        // Both chains score 5; the three-letter core ranks first
        let words = set(&["ABOAT", "BOAT", "BOATS", "GRIM", "PRIM", "RIM", "RIMS", "TRIM"]);
        let chains = analyze_core_chains(&words);
        let cores: Vec<&str> = chains.iter().map(|c| c.core.as_str()).collect();
        assert_eq!(cores, ["RIM", "BOAT"]);
        assert_eq!(chains[0].total_score, chains[1].total_score);
    }

    #[test]
    fn small_families_are_ignored() {
        let words = set(&["CAT", "CATS", "DOG"]);
        assert!(analyze_core_chains(&words).is_empty());
        assert!(analyze_core_chains(&WordSet::new()).is_empty());
    }

    #[test]
    fn caps_at_eight_chains() {
        let words: WordSet = b"BCDFGHJKLM"
            .iter()
            .flat_map(|&c| {
                let c = c as char;
                [format!("{c}AA"), format!("{c}AAS"), format!("S{c}AA")]
            })
            .collect();
        let chains = analyze_core_chains(&words);
        assert_eq!(chains.len(), MAX_CHAINS);
    }
}
