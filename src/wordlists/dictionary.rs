//! Dictionary: word set plus prefix tree

use super::embedded::DICTIONARY;
use crate::core::Trie;
use rustc_hash::FxHashSet;
use std::time::Instant;
use tracing::{info, warn};

/// A built dictionary, shared read-only by every solve
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<String>,
    trie: Trie,
}

impl Dictionary {
    /// Build from raw words
    ///
    /// Entries are trimmed and uppercased; anything still containing characters
    /// outside `A-Z` is skipped.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["cat", " Dog ", "e-mail"]);
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.contains("DOG"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let start = Instant::now();
        let mut dictionary = Self::default();
        let mut skipped = 0usize;

        for raw in words {
            match normalize(raw.as_ref()) {
                Some(word) => dictionary.insert(word),
                None => skipped += 1,
            }
        }

        if dictionary.is_empty() {
            warn!("dictionary is empty; every board will solve to zero words");
        }
        info!(
            words = dictionary.len(),
            skipped,
            elapsed_ms = start.elapsed().as_millis(),
            "dictionary built"
        );
        dictionary
    }

    /// The word list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(DICTIONARY)
    }

    fn insert(&mut self, word: String) {
        if self.trie.insert(&word) {
            self.words.insert(word);
        }
    }

    /// True if `word` (already uppercase) is a dictionary entry
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[inline]
    #[must_use]
    pub const fn trie(&self) -> &Trie {
        &self.trie
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// Trim and uppercase; `None` for blank or non-alphabetic entries
fn normalize(raw: &str) -> Option<String> {
    let word = raw.trim().to_ascii_uppercase();
    (!word.is_empty() && word.bytes().all(|c| c.is_ascii_uppercase())).then_some(word)
}
