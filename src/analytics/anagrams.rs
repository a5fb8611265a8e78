//! Anagram sets among the possible words

use crate::solver::WordSet;
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Smallest anagram group worth reporting
const MIN_SET_LEN: usize = 3;

/// Most anagram sets reported per game
pub const MAX_ANAGRAM_SETS: usize = 8;

/// Words sharing exactly the same letters, alphabetical
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnagramSet {
    pub words: Vec<String>,
}

/// Letters of `word` in sorted order
fn anagram_key(word: &str) -> Vec<u8> {
    let mut key = word.as_bytes().to_vec();
    key.sort_unstable();
    key
}

/// Largest anagram groups of three or more words
///
/// Bigger groups first; groups of equal size keep alphabetical order of their
/// first word.
#[must_use]
pub fn analyze_anagrams(words: &WordSet) -> Vec<AnagramSet> {
    let mut groups: FxHashMap<Vec<u8>, Vec<String>> = FxHashMap::default();
    for word in words {
        groups.entry(anagram_key(word)).or_default().push(word.clone());
    }

    // Words arrive sorted from the set, so each group is already alphabetical
    let mut sets: Vec<AnagramSet> = groups
        .into_values()
        .filter(|group| group.len() >= MIN_SET_LEN)
        .map(|words| AnagramSet { words })
        .collect();

    sets.sort_by(|a, b| {
        b.words
            .len()
            .cmp(&a.words.len())
            .then_with(|| a.words.cmp(&b.words))
    });
    sets.truncate(MAX_ANAGRAM_SETS);
    sets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> WordSet {
        words.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn groups_anagrams() {
        let words = set(&["TEA", "EAT", "ATE", "APE", "PEA", "CAT"]);
        let sets = analyze_anagrams(&words);
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].words, ["ATE", "EAT", "TEA"]);
    }

    #[test]
    fn larger_groups_come_first() {
        let words = set(&[
            "APE", "PEA", "APEX", "ATE", "EAT", "ETA", "TEA", "SPAT", "PATS", "TAPS", "PAST",
            "SPA",
        ]);
        let sets = analyze_anagrams(&words);
        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0].words, ["ATE", "EAT", "ETA", "TEA"]);
        assert_eq!(sets[1].words, ["PAST", "PATS", "SPAT", "TAPS"]);
    }

    #[test]
    fn caps_at_eight_sets() {
        let words: WordSet = b"BCDFGHJKLM"
            .iter()
            .flat_map(|&c| {
                let c = c as char;
                [format!("{c}AE"), format!("A{c}E"), format!("AE{c}")]
            })
            .collect();
        let sets = analyze_anagrams(&words);
        assert_eq!(sets.len(), MAX_ANAGRAM_SETS);
        assert_eq!(sets[0].words, ["ABE", "AEB", "BAE"]);
    }

    #[test]
    fn no_groups_without_anagrams() {
        assert!(analyze_anagrams(&set(&["CAT", "DOG", "TAC"])).is_empty());
        assert!(analyze_anagrams(&WordSet::new()).is_empty());
    }
}
