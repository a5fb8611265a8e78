//! Tracing a single word on the board
//!
//! Independent of the dictionary: answers "which cells spell this word", used to
//! highlight guesses and to cross-check solver output.

use crate::core::{Board, Position, Tile};

/// One simple path of adjacent cells spelling `word`, if any
///
/// A `Qu` cell may consume either "QU" or a lone "Q" from the word.
///
/// # Examples
/// ```
/// use boggle_solver::core::Position;
/// use boggle_solver::dice::parse_custom_board;
/// use boggle_solver::solver::find_path;
///
/// let board = parse_custom_board("QITXXXXXXXXXXXXX").unwrap();
/// let path = find_path(&board, "QUIT").unwrap();
/// assert_eq!(path, vec![Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)]);
/// assert!(find_path(&board, "QUT").is_none());
/// ```
#[must_use]
pub fn find_path(board: &Board, word: &str) -> Option<Vec<Position>> {
    let target = word.as_bytes();
    if target.is_empty() {
        return None;
    }

    let adjacency = board.adjacency();
    let mut path = Vec::with_capacity(target.len());

    let found = (0..board.len())
        .any(|start| trace(board.tiles(), &adjacency, target, start, 0, &mut path));
    found.then(|| path.iter().map(|&cell| board.position_of(cell)).collect())
}

fn trace(
    tiles: &[Tile],
    adjacency: &[Vec<usize>],
    rest: &[u8],
    cell: usize,
    visited: u64,
    path: &mut Vec<usize>,
) -> bool {
    let visited = visited | (1 << cell);
    path.push(cell);

    for consumed in tile_spellings(tiles[cell], rest).into_iter().flatten() {
        let remaining = &rest[consumed..];
        if remaining.is_empty() {
            return true;
        }
        for &next in &adjacency[cell] {
            if visited & (1 << next) == 0 && trace(tiles, adjacency, remaining, next, visited, path)
            {
                return true;
            }
        }
    }

    path.pop();
    false
}

/// How many leading letters of `rest` this tile can spell
fn tile_spellings(tile: Tile, rest: &[u8]) -> [Option<usize>; 2] {
    let full = rest.starts_with(tile.bytes()).then_some(tile.bytes().len());
    let bare_q = (tile.is_qu() && rest.first() == Some(&b'Q')).then_some(1);
    [full, bare_q]
}
