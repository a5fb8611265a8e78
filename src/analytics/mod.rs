//! Post-game analysis of a board's possible words

mod anagrams;
mod chains;
mod report;

pub use anagrams::{AnagramSet, MAX_ANAGRAM_SETS, analyze_anagrams};
pub use chains::{CoreChain, MAX_CHAINS, analyze_core_chains};
pub use report::{GameReport, words_by_length};
