//! Exhaustive board solver
//!
//! Depth-first search from every cell. Each frame carries the trie node reached
//! so far, so extending a path costs one child lookup per letter. A branch whose
//! letters have no trie child is abandoned on the spot.

use super::WordSet;
use crate::core::{Board, Tile, Trie, TrieNode};
use std::time::Instant;
use tracing::debug;

/// Shortest word that counts
pub const MIN_WORD_LEN: usize = 3;

/// Finds every dictionary word on a board
///
/// Works on any board shape; the 4×4 game and 2×2 practice grids share it.
#[derive(Debug, Clone, Copy)]
pub struct Solver<'a> {
    trie: &'a Trie,
    min_word_len: usize,
}

impl<'a> Solver<'a> {
    /// Create a solver over a built trie
    #[must_use]
    pub const fn new(trie: &'a Trie) -> Self {
        Self {
            trie,
            min_word_len: MIN_WORD_LEN,
        }
    }

    /// Override the minimum word length (in letters, "QU" counts as two)
    #[must_use]
    pub const fn with_min_word_len(mut self, min_word_len: usize) -> Self {
        self.min_word_len = min_word_len;
        self
    }

    /// All dictionary words traceable on `board`
    ///
    /// A word is traceable if a path of 8-way adjacent cells, each used at most
    /// once, spells it. A `Qu` cell spells either "QU" or a lone "Q". Words
    /// reachable along several paths appear once.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::{Board, Trie};
    /// use boggle_solver::solver::Solver;
    ///
    /// let trie: Trie = ["TEA", "EAT", "ATE", "TEE"].into_iter().collect();
    /// let board = Board::from_letters(2, "TEAX").unwrap();
    /// let words = Solver::new(&trie).solve(&board);
    /// assert_eq!(words.into_iter().collect::<Vec<_>>(), ["ATE", "EAT", "TEA"]);
    /// ```
    #[must_use]
    pub fn solve(&self, board: &Board) -> WordSet {
        let start = Instant::now();
        let adjacency = board.adjacency();
        let mut search = Search {
            tiles: board.tiles(),
            adjacency: &adjacency,
            min_word_len: self.min_word_len,
            word: String::with_capacity(board.len() * 2),
            found: WordSet::new(),
        };

        for cell in 0..board.len() {
            search.visit(cell, self.trie.root(), 0);
        }

        debug!(
            board = %board.letters(),
            words = search.found.len(),
            elapsed_us = start.elapsed().as_micros(),
            "board solved"
        );
        search.found
    }

    /// True if `word` is in the dictionary and traceable on `board`
    #[must_use]
    pub fn is_word_on_board(&self, board: &Board, word: &str) -> bool {
        word.len() >= self.min_word_len
            && self.trie.contains(word)
            && super::find_path(board, word).is_some()
    }
}

/// Mutable state of one solve
struct Search<'s> {
    tiles: &'s [Tile],
    adjacency: &'s [Vec<usize>],
    min_word_len: usize,
    word: String,
    found: WordSet,
}

impl Search<'_> {
    /// Step onto `cell` from a path ending at `node`
    fn visit(&mut self, cell: usize, node: &TrieNode, visited: u64) {
        let visited = visited | (1 << cell);
        let tile = self.tiles[cell];

        if let Some(next) = node.advance(tile.bytes()) {
            self.extend(cell, next, visited, tile.text());
        }

        // A Qu face also stands in for a bare Q
        if tile.is_qu()
            && let Some(q) = node.child(b'Q')
        {
            self.extend(cell, q, visited, "Q");
        }
    }

    /// Record the word at `node` if complete, then continue into free neighbors
    fn extend(&mut self, cell: usize, node: &TrieNode, visited: u64, letters: &str) {
        let mark = self.word.len();
        self.word.push_str(letters);

        if node.is_word() && self.word.len() >= self.min_word_len && !self.found.contains(&self.word)
        {
            self.found.insert(self.word.clone());
        }

        if node.has_children() {
            let adjacency = self.adjacency;
            for &next in &adjacency[cell] {
                if visited & (1 << next) == 0 {
                    self.visit(next, node, visited);
                }
            }
        }

        self.word.truncate(mark);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::parse_custom_board;
    use crate::solver::find_path;
    use proptest::prelude::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    fn solve(trie_words: &[&str], board: &Board) -> Vec<String> {
        let trie: Trie = trie_words.iter().collect();
        Solver::new(&trie).solve(board).into_iter().collect()
    }

    #[test]
    fn finds_words_along_adjacent_paths() {
        // C A T S
        // X O D G
        // X X X X
        // X X X X
        let board = parse_custom_board("CATSXODGXXXXXXXX").unwrap();
        // DOG and ACT are spelled by non-adjacent cells
        let found = solve(&["CAT", "CATS", "DOG", "COD", "ACT", "TOAD"], &board);
        assert_eq!(found, words(&["CAT", "CATS", "COD", "TOAD"]));
    }

    #[test]
    fn diagonal_moves_are_allowed() {
        // A X
        // X B   -> A and B touch diagonally
        let board = Board::from_letters(2, "AXYB").unwrap();
        let found = solve(&["AB", "ABY", "AXB", "BYA"], &board);
        assert_eq!(found, words(&["ABY", "AXB", "BYA"]));
    }

    #[test]
    fn cells_are_not_reused() {
        // Only one E on the board
        let board = parse_custom_board("TEAXXXXXXXXXXXXX").unwrap();
        let found = solve(&["TEA", "TEE", "ETE"], &board);
        assert_eq!(found, words(&["TEA"]));
    }

    #[test]
    fn repeated_letters_can_be_used_once_each() {
        let board = parse_custom_board("TEEXXXXXXXXXXXXX").unwrap();
        let found = solve(&["TEE"], &board);
        assert_eq!(found, words(&["TEE"]));
    }

    #[test]
    fn short_words_are_ignored() {
        let board = parse_custom_board("ATXXXXXXXXXXXXXX").unwrap();
        assert!(solve(&["AT", "TA"], &board).is_empty());
    }

    #[test]
    fn uniform_board_finds_nothing() {
        let board = parse_custom_board("EEEEEEEEEEEEEEEE").unwrap();
        assert!(solve(&["TEA", "EAT", "EYE", "BEE"], &board).is_empty());
    }

    #[test]
    fn empty_dictionary_finds_nothing() {
        let board = parse_custom_board("ABCDEFGHIJKLMNOP").unwrap();
        assert!(solve(&[], &board).is_empty());
    }

    #[test]
    fn qu_tile_matches_full_qu() {
        // Qu I T
        let board = parse_custom_board("QITXXXXXXXXXXXXX").unwrap();
        let found = solve(&["QUIT"], &board);
        assert_eq!(found, words(&["QUIT"]));
    }

    #[test]
    fn qu_tile_matches_bare_q() {
        // Qu A T -> QAT uses the Qu face as a lone Q
        let board = parse_custom_board("QATXXXXXXXXXXXXX").unwrap();
        let found = solve(&["QAT", "QUAT"], &board);
        assert_eq!(found, words(&["QAT", "QUAT"]));
    }

    #[test]
    fn qu_tile_both_branches_on_one_board() {
        // Qu I T
        // A  X X
        let board = parse_custom_board("QITXAXXXXXXXXXXX").unwrap();
        let found = solve(&["QUIT", "QAT", "QUA"], &board);
        assert_eq!(found, words(&["QUA", "QUIT"]));

        let board = parse_custom_board("QITXATXXXXXXXXXX").unwrap();
        let found = solve(&["QUIT", "QAT"], &board);
        assert_eq!(found, words(&["QAT", "QUIT"]));
    }

    #[test]
    fn qu_counts_two_letters_toward_minimum() {
        let board = parse_custom_board("QAXXXXXXXXXXXXXX").unwrap();
        assert_eq!(solve(&["QUA", "QA"], &board), words(&["QUA"]));
    }

    #[test]
    fn blank_cells_block_paths() {
        let board = parse_custom_board("C_TAXXXXXXXXXXXX").unwrap();
        // The blank never matches a letter
        let found = solve(&["CAT", "TA", "TAX"], &board);
        assert_eq!(found, words(&["TAX"]));
    }

    #[test]
    fn min_word_len_is_configurable() {
        let trie: Trie = ["AT", "CAT"].into_iter().collect();
        let board = parse_custom_board("CATXXXXXXXXXXXXX").unwrap();
        let found = Solver::new(&trie).with_min_word_len(2).solve(&board);
        assert!(found.contains("AT"));
        assert!(found.contains("CAT"));
    }

    #[test]
    fn solve_is_deterministic() {
        let trie: Trie = ["TEA", "EAT", "ATE", "SEAT", "EAST", "TEAS"].into_iter().collect();
        let board = parse_custom_board("SEATTEASXXXXXXXX").unwrap();
        let solver = Solver::new(&trie);
        assert_eq!(solver.solve(&board), solver.solve(&board));
    }

    #[test]
    fn is_word_on_board_checks_dictionary_and_path() {
        let trie: Trie = ["CAT", "DOG"].into_iter().collect();
        let board = parse_custom_board("CATXXXXXXXXXXXXX").unwrap();
        let solver = Solver::new(&trie);
        assert!(solver.is_word_on_board(&board, "CAT"));
        assert!(!solver.is_word_on_board(&board, "DOG"));
        assert!(!solver.is_word_on_board(&board, "TAC"));
    }

    #[test]
    fn full_sixteen_cell_path() {
        // Snake through every cell
        let board = parse_custom_board("ABCDHGFEIJKLPONM").unwrap();
        let found = solve(&["ABCDEFGHIJKLMNOP"], &board);
        assert_eq!(found, words(&["ABCDEFGHIJKLMNOP"]));
    }

    const ALPHABET: &[u8] = b"AEIOSTRNLQ";

    fn small_dictionary() -> Vec<String> {
        words(&[
            "TEA", "EAT", "ATE", "SEA", "SET", "TOE", "ROT", "NOR", "LIE", "LOT", "TOTS", "RATE",
            "TEAR", "REST", "STONE", "NOTES", "ONSET", "QUIT", "QUITE", "QAT", "QATS", "SQUAT",
            "QUOTE", "QUIET", "TREES", "ENTER", "ISLE", "RAIL", "LIAR", "TRAIL", "TRIAL", "SNARL",
        ])
    }

    proptest! {
        #[test]
        fn solver_matches_path_tracing(cells in proptest::collection::vec(0..ALPHABET.len(), 16)) {
            let letters: String = cells.iter().map(|&i| ALPHABET[i] as char).collect();
            let board = parse_custom_board(&letters).unwrap();
            let dictionary = small_dictionary();
            let trie: Trie = dictionary.iter().collect();
            let found = Solver::new(&trie).solve(&board);

            // Every result is a dictionary word with a real path
            for word in &found {
                prop_assert!(trie.contains(word));
                prop_assert!(find_path(&board, word).is_some());
            }
            // Every traceable dictionary word is a result
            for word in &dictionary {
                let traceable = find_path(&board, word).is_some();
                prop_assert_eq!(traceable, found.contains(word.as_str()), "word {}", word);
            }
        }
    }
}
