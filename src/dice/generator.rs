//! Board generation from the New Boggle dice
//!
//! Boards are produced by shuffling the 16 dice into the grid and rolling one
//! face per die. A rolled `Q` becomes the `Qu` tile.

use super::rng::Mulberry32;
use crate::core::{Board, Tile};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use tracing::debug;

/// The 16 dice of New Boggle, one string of faces per die
///
/// The `HIMNUQU` die carries seven entries; seeded rolls pick among all seven so
/// existing daily seeds keep producing the same boards.
pub const NEW_BOGGLE_DICE: [&str; 16] = [
    "AAEEGN", "ABBJOO", "ACHOPS", "AFFKPS", "AOOTTW", "CIMOTU", "DEILRX", "DELRVY", "DISTTY",
    "EEGHNW", "EEINSU", "EHRTVW", "EIOSST", "ELRTTY", "HIMNUQU", "HLNNRZ",
];

/// Generate a random 4×4 board from the thread-local RNG
#[must_use]
pub fn generate_board() -> Board {
    generate_board_with(&mut rand::rng())
}

/// Generate a random 4×4 board from any RNG
pub fn generate_board_with<R: Rng + ?Sized>(rng: &mut R) -> Board {
    let mut dice = NEW_BOGGLE_DICE;
    dice.shuffle(rng);

    let faces = dice.map(|die| die.as_bytes().choose(rng).copied().unwrap_or(b'_'));
    board_from_faces(faces)
}

/// Generate the board identified by `seed`
///
/// The stream is consumed in a fixed order: 15 Fisher–Yates swap draws
/// (`i` from 15 down to 1, `j = below(i + 1)`), then one face draw per die in
/// shuffled order. Any change to this order changes every daily board.
///
/// # Examples
/// ```
/// use boggle_solver::dice::generate_board_with_seed;
///
/// let board = generate_board_with_seed(42);
/// assert_eq!(board, generate_board_with_seed(42));
/// assert_eq!(board.letters(), "SVEHOOAUELCCTTDE");
/// ```
#[must_use]
pub fn generate_board_with_seed(seed: i64) -> Board {
    let mut rng = Mulberry32::new(seed);

    let mut dice = NEW_BOGGLE_DICE;
    for i in (1..dice.len()).rev() {
        let j = rng.below(i + 1);
        dice.swap(i, j);
    }

    let faces = dice.map(|die| die.as_bytes()[rng.below(die.len())]);

    let board = board_from_faces(faces);
    debug!(seed, letters = %board.letters(), "generated seeded board");
    board
}

fn board_from_faces(faces: [u8; 16]) -> Board {
    // Die faces are all uppercase letters, so the blank fallback never shows
    Board::square(faces.map(|face| Tile::from_face(face).unwrap_or(Tile::Letter(b'_'))))
}
