//! Boggle board representation
//!
//! A board is an immutable row-major grid of tiles. The classic game uses 4×4,
//! practice mode uses 2×2; every routine here is written against the board's own
//! dimensions.

use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Largest board the solver supports (visited cells are tracked in a `u64`)
pub const MAX_CELLS: usize = 64;

/// One physical die face on the board
///
/// Almost always a single letter. The `Qu` face is a single tile that spells "QU".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    /// A single uppercase letter, or `_` for a blank cell on custom boards
    Letter(u8),
    /// The two-letter "QU" face
    Qu,
}

impl Tile {
    /// Create a tile from a rolled die face or custom-board character
    ///
    /// Lowercase input is normalized; `Q` always becomes the `Qu` tile.
    ///
    /// # Errors
    /// Returns `BoardError::InvalidTile` for anything outside `A-Z` and `_`.
    pub fn from_face(face: u8) -> Result<Self, BoardError> {
        match face.to_ascii_uppercase() {
            b'Q' => Ok(Self::Qu),
            ch @ (b'A'..=b'Z' | b'_') => Ok(Self::Letter(ch)),
            _ => Err(BoardError::InvalidTile(face as char)),
        }
    }

    /// Letters this tile contributes to a word
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        match self {
            Self::Letter(ch) => std::slice::from_ref(ch),
            Self::Qu => b"QU",
        }
    }

    /// Tile text as spelled in words ("QU" for the Qu face)
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        // Tiles only ever hold ASCII
        std::str::from_utf8(self.bytes()).unwrap_or("")
    }

    #[inline]
    #[must_use]
    pub const fn is_qu(self) -> bool {
        matches!(self, Self::Qu)
    }

    /// Compact single-character form used by the custom board format
    #[inline]
    #[must_use]
    pub const fn compact(self) -> char {
        match self {
            Self::Letter(ch) => ch as char,
            Self::Qu => 'Q',
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(_) => f.pad(self.text()),
            Self::Qu => f.pad("Qu"),
        }
    }
}

impl Serialize for Tile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.text())
    }
}

/// A cell coordinate on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Errors produced while building or parsing a board
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board must contain exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("board dimensions {rows}x{cols} are not supported")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("invalid tile character '{0}'")]
    InvalidTile(char),
}

/// An immutable grid of tiles
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    tiles: Vec<Tile>,
}

impl Board {
    /// Side length of the standard game board
    pub const SIZE: usize = 4;

    /// Build a board from row-major tiles
    ///
    /// # Errors
    /// Returns `BoardError` if a dimension is zero, the board exceeds `MAX_CELLS`,
    /// or the tile count does not match `rows * cols`.
    pub fn new(rows: usize, cols: usize, tiles: Vec<Tile>) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 || rows * cols > MAX_CELLS {
            return Err(BoardError::InvalidDimensions { rows, cols });
        }
        if tiles.len() != rows * cols {
            return Err(BoardError::InvalidLength {
                expected: rows * cols,
                actual: tiles.len(),
            });
        }
        Ok(Self { rows, cols, tiles })
    }

    /// Build a square board from a fixed number of tiles
    ///
    /// `N` must be a non-zero perfect square no larger than `MAX_CELLS`; other
    /// sizes fail to compile.
    #[must_use]
    pub fn square<const N: usize>(tiles: [Tile; N]) -> Self {
        const {
            assert!(N > 0 && N <= MAX_CELLS && N.isqrt() * N.isqrt() == N);
        }
        let size = N.isqrt();
        Self {
            rows: size,
            cols: size,
            tiles: tiles.to_vec(),
        }
    }

    /// Build a square board from a string of faces, one character per cell
    ///
    /// `Q` maps to the `Qu` tile.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::{Board, Tile};
    ///
    /// let board = Board::from_letters(2, "CATQ").unwrap();
    /// assert_eq!(board.tiles()[3], Tile::Qu);
    /// assert_eq!(board.to_string(), "C  A\nT  Qu");
    /// ```
    ///
    /// # Errors
    /// Returns `BoardError` on a bad character or a letter count other than `size²`.
    pub fn from_letters(size: usize, letters: &str) -> Result<Self, BoardError> {
        let tiles = letters
            .bytes()
            .map(Tile::from_face)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(size, size, tiles)
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tile at a position
    ///
    /// # Panics
    /// Panics if the position is outside the board.
    #[inline]
    #[must_use]
    pub fn tile(&self, pos: Position) -> Tile {
        self.tiles[self.index_of(pos)]
    }

    #[inline]
    #[must_use]
    pub const fn index_of(&self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }

    #[inline]
    #[must_use]
    pub const fn position_of(&self, index: usize) -> Position {
        Position::new(index / self.cols, index % self.cols)
    }

    /// All in-bounds neighbors of a cell, diagonals included
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        const OFFSETS: [(isize, isize); 8] = [
            (-1, -1),
            (-1, 0),
            (-1, 1),
            (0, -1),
            (0, 1),
            (1, -1),
            (1, 0),
            (1, 1),
        ];

        OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let row = pos.row.checked_add_signed(dr)?;
            let col = pos.col.checked_add_signed(dc)?;
            (row < self.rows && col < self.cols).then_some(Position::new(row, col))
        })
    }

    /// Neighbor indices for every cell, indexed by cell
    ///
    /// Computed once per solve so the search never re-derives bounds.
    #[must_use]
    pub fn adjacency(&self) -> Vec<Vec<usize>> {
        (0..self.len())
            .map(|index| {
                self.neighbors(self.position_of(index))
                    .map(|pos| self.index_of(pos))
                    .collect()
            })
            .collect()
    }

    /// Iterate rows as tile slices
    pub fn row_slices(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.cols)
    }

    /// Grid of tile strings ("QU" for the Qu face)
    #[must_use]
    pub fn to_grid(&self) -> Vec<Vec<String>> {
        self.row_slices()
            .map(|row| row.iter().map(|tile| tile.text().to_string()).collect())
            .collect()
    }

    /// Compact letters in the custom board format (`Q` for the Qu face)
    ///
    /// Parsing this string with `parse_custom_board` yields the same board.
    #[must_use]
    pub fn letters(&self) -> String {
        self.tiles.iter().map(|tile| tile.compact()).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.row_slices().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let cells: Vec<String> = row.iter().map(|tile| format!("{tile:<2}")).collect();
            write!(f, "{}", cells.join(" ").trim_end())?;
        }
        Ok(())
    }
}

impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_grid().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_from_face_maps_q() {
        assert_eq!(Tile::from_face(b'Q').unwrap(), Tile::Qu);
        assert_eq!(Tile::from_face(b'q').unwrap(), Tile::Qu);
        assert_eq!(Tile::from_face(b'a').unwrap(), Tile::Letter(b'A'));
        assert_eq!(Tile::from_face(b'_').unwrap(), Tile::Letter(b'_'));
        assert_eq!(Tile::from_face(b'3'), Err(BoardError::InvalidTile('3')));
    }

    #[test]
    fn tile_text_and_bytes() {
        assert_eq!(Tile::Qu.text(), "QU");
        assert_eq!(Tile::Qu.bytes(), b"QU");
        assert_eq!(Tile::Letter(b'E').text(), "E");
        assert_eq!(Tile::Qu.to_string(), "Qu");
    }

    #[test]
    fn board_rejects_bad_dimensions() {
        assert!(matches!(
            Board::new(0, 4, vec![]),
            Err(BoardError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Board::new(9, 9, vec![Tile::Letter(b'A'); 81]),
            Err(BoardError::InvalidDimensions { .. })
        ));
        assert_eq!(
            Board::new(2, 2, vec![Tile::Letter(b'A'); 3]),
            Err(BoardError::InvalidLength {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn corner_has_three_neighbors() {
        let board = Board::from_letters(4, "ABCDEFGHIJKLMNOP").unwrap();
        let neighbors: Vec<Position> = board.neighbors(Position::new(0, 0)).collect();
        assert_eq!(
            neighbors,
            vec![Position::new(0, 1), Position::new(1, 0), Position::new(1, 1)]
        );
    }

    #[test]
    fn center_has_eight_neighbors() {
        let board = Board::from_letters(4, "ABCDEFGHIJKLMNOP").unwrap();
        assert_eq!(board.neighbors(Position::new(1, 2)).count(), 8);
        assert_eq!(board.neighbors(Position::new(3, 1)).count(), 5);
    }

    #[test]
    fn adjacency_is_symmetric() {
        let board = Board::from_letters(4, "ABCDEFGHIJKLMNOP").unwrap();
        let adjacency = board.adjacency();
        for (cell, neighbors) in adjacency.iter().enumerate() {
            assert!(!neighbors.contains(&cell));
            for &other in neighbors {
                assert!(adjacency[other].contains(&cell));
            }
        }
    }

    #[test]
    fn letters_round_trip_compact_form() {
        let board = Board::from_letters(4, "QABCDEFGHIJKLMNO").unwrap();
        assert_eq!(board.letters(), "QABCDEFGHIJKLMNO");
        assert_eq!(board.to_grid()[0][0], "QU");
    }

    #[test]
    fn board_serializes_as_grid() {
        let board = Board::from_letters(2, "QABC").unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, r#"[["QU","A"],["B","C"]]"#);
    }
}
