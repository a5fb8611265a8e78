//! User-entered board text
//!
//! The custom format is case-insensitive letters in row-major order. Anything
//! other than `A-Z` and `_` (spaces, commas, newlines) is stripped first.

use crate::core::{Board, BoardError, Tile};

/// Cells on a standard board
const CUSTOM_BOARD_CELLS: usize = Board::SIZE * Board::SIZE;

/// Side length of a practice grid
pub const PRACTICE_SIZE: usize = 2;

/// Parse a 16-letter custom board
///
/// `Q` becomes the `Qu` tile and `_` is kept as a blank cell.
///
/// # Errors
/// Returns `BoardError::InvalidLength` unless exactly 16 valid characters remain
/// after stripping.
///
/// # Examples
/// ```
/// use boggle_solver::dice::parse_custom_board;
///
/// let board = parse_custom_board("abcd efgh ijkl mnoq").unwrap();
/// assert_eq!(board.letters(), "ABCDEFGHIJKLMNOQ");
/// assert!(parse_custom_board("ABC").is_err());
/// ```
pub fn parse_custom_board(input: &str) -> Result<Board, BoardError> {
    let clean: Vec<u8> = input
        .bytes()
        .map(|ch| ch.to_ascii_uppercase())
        .filter(|ch| ch.is_ascii_uppercase() || *ch == b'_')
        .collect();

    if clean.len() != CUSTOM_BOARD_CELLS {
        return Err(BoardError::InvalidLength {
            expected: CUSTOM_BOARD_CELLS,
            actual: clean.len(),
        });
    }

    let tiles = clean
        .into_iter()
        .map(Tile::from_face)
        .collect::<Result<Vec<_>, _>>()?;
    Board::new(Board::SIZE, Board::SIZE, tiles)
}

/// Parse four letters into a 2×2 practice grid
///
/// Practice grids keep `Q` as a plain letter; only `A-Z` survive stripping.
///
/// # Errors
/// Returns `BoardError::InvalidLength` unless exactly four letters remain.
pub fn parse_practice_letters(input: &str) -> Result<Board, BoardError> {
    let tiles: Vec<Tile> = input
        .bytes()
        .map(|ch| ch.to_ascii_uppercase())
        .filter(u8::is_ascii_uppercase)
        .map(Tile::Letter)
        .collect();

    let expected = PRACTICE_SIZE * PRACTICE_SIZE;
    if tiles.len() != expected {
        return Err(BoardError::InvalidLength {
            expected,
            actual: tiles.len(),
        });
    }

    Board::new(PRACTICE_SIZE, PRACTICE_SIZE, tiles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;

    #[test]
    fn parses_row_major() {
        let board = parse_custom_board("ABCDEFGHIJKLMNOP").unwrap();
        assert_eq!(board.tile(Position::new(0, 0)), Tile::Letter(b'A'));
        assert_eq!(board.tile(Position::new(0, 3)), Tile::Letter(b'D'));
        assert_eq!(board.tile(Position::new(1, 0)), Tile::Letter(b'E'));
        assert_eq!(board.tile(Position::new(3, 3)), Tile::Letter(b'P'));
    }

    #[test]
    fn strips_separators_and_normalizes_case() {
        let board = parse_custom_board("a-b-c-d / e,f,g,h\ni j k l\tm n o p").unwrap();
        assert_eq!(board.letters(), "ABCDEFGHIJKLMNOP");
    }

    #[test]
    fn q_becomes_qu_tile() {
        let board = parse_custom_board("QQQQAAAAEEEEIIII").unwrap();
        assert!(board.tiles()[..4].iter().all(|tile| *tile == Tile::Qu));
        assert_eq!(board.to_grid()[0][0], "QU");
    }

    #[test]
    fn underscore_is_kept() {
        let board = parse_custom_board("____AAAAEEEEIIII").unwrap();
        assert_eq!(board.tiles()[0], Tile::Letter(b'_'));
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert_eq!(
            parse_custom_board("ABCDEFGHIJKLMNO"),
            Err(BoardError::InvalidLength {
                expected: 16,
                actual: 15
            })
        );
        assert!(parse_custom_board("ABCDEFGHIJKLMNOPQ").is_err());
        assert!(parse_custom_board("").is_err());
        // Digits are stripped, not counted
        assert!(parse_custom_board("ABCDEFGHIJKLMNO1").is_err());
    }

    #[test]
    fn practice_letters_make_two_by_two() {
        let board = parse_practice_letters("t e a s").unwrap();
        assert_eq!(board.rows(), 2);
        assert_eq!(board.cols(), 2);
        assert_eq!(board.letters(), "TEAS");
    }

    #[test]
    fn practice_letters_keep_plain_q() {
        let board = parse_practice_letters("QATS").unwrap();
        assert_eq!(board.tiles()[0], Tile::Letter(b'Q'));
    }

    #[test]
    fn practice_letters_reject_wrong_count() {
        assert!(parse_practice_letters("ABC").is_err());
        assert!(parse_practice_letters("AB_C").is_err());
        assert!(parse_practice_letters("ABCDE").is_err());
    }
}
