//! Prefix tree over uppercase words
//!
//! Each node owns its children keyed by a single byte. The solver walks nodes
//! directly, advancing one tile at a time instead of re-querying from the root.

use rustc_hash::FxHashMap;

/// A single trie node
#[derive(Debug, Default, Clone)]
pub struct TrieNode {
    children: FxHashMap<u8, TrieNode>,
    is_word: bool,
}

impl TrieNode {
    /// Child reached by one letter, if any dictionary word continues that way
    #[inline]
    #[must_use]
    pub fn child(&self, letter: u8) -> Option<&Self> {
        self.children.get(&letter)
    }

    /// Walk several letters from this node
    ///
    /// Returns `None` as soon as a letter has no matching child.
    #[inline]
    #[must_use]
    pub fn advance(&self, letters: &[u8]) -> Option<&Self> {
        letters
            .iter()
            .try_fold(self, |node, &letter| node.child(letter))
    }

    /// True if the path from the root to this node spells a complete word
    #[inline]
    #[must_use]
    pub const fn is_word(&self) -> bool {
        self.is_word
    }

    #[inline]
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Dictionary prefix tree
///
/// # Examples
/// ```
/// use boggle_solver::core::Trie;
///
/// let trie: Trie = ["CAT", "CATS"].into_iter().collect();
/// assert!(trie.contains("CAT"));
/// assert!(!trie.contains("CA"));
/// assert!(trie.has_prefix("CA"));
/// ```
#[derive(Debug, Default, Clone)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word, one node per character
    ///
    /// The word is expected to be normalized already. Returns `true` if the word
    /// was not present before; inserting the same word again changes nothing.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut node = &mut self.root;
        for letter in word.bytes() {
            node = node.children.entry(letter).or_default();
        }

        if node.is_word {
            false
        } else {
            node.is_word = true;
            self.len += 1;
            true
        }
    }

    /// True if `word` was inserted
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.node(word).is_some_and(TrieNode::is_word)
    }

    /// True if any inserted word starts with `prefix`
    ///
    /// The empty prefix always matches.
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.node(prefix).is_some()
    }

    /// Node at the end of `prefix`, for resuming a walk
    #[must_use]
    pub fn node(&self, prefix: &str) -> Option<&TrieNode> {
        self.root.advance(prefix.as_bytes())
    }

    #[inline]
    #[must_use]
    pub const fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of distinct words stored
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Self::new();
        for word in iter {
            trie.insert(word.as_ref());
        }
        trie
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}
