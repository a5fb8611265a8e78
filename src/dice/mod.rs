//! Board sources: dice rolls, seeded daily boards and custom input

mod custom;
mod daily;
mod generator;
mod rng;

pub use custom::{PRACTICE_SIZE, parse_custom_board, parse_practice_letters};
pub use daily::{DailyBoard, daily_board, daily_seed, todays_daily_board};
pub use generator::{NEW_BOGGLE_DICE, generate_board, generate_board_with, generate_board_with_seed};
pub use rng::Mulberry32;
