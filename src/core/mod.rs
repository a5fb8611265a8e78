//! Core domain types for Boggle
//!
//! Boards, tiles and the dictionary prefix tree. Everything here is pure data
//! with no I/O.

mod board;
mod trie;

pub use board::{Board, BoardError, MAX_CELLS, Position, Tile};
pub use trie::{Trie, TrieNode};
