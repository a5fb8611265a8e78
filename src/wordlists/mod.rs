//! Dictionaries for Boggle solving
//!
//! A `Dictionary` pairs the flat word set (to tell "not on board" from "not a
//! word") with the prefix tree the solver walks. The default list is compiled into
//! the binary.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn embedded_words_are_uppercase() {
        for &word in DICTIONARY {
            assert!(word.len() >= 3, "Word '{word}' is too short");
            assert!(
                word.bytes().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn embedded_dictionary_builds() {
        let dictionary = Dictionary::embedded();
        assert_eq!(dictionary.len(), DICTIONARY_COUNT);
        assert!(dictionary.contains("WATERFALL"));
        assert!(dictionary.contains("QUIT"));
    }
}
