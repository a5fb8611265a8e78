//! Daily challenge boards
//!
//! Every player gets the same board on the same calendar day. The seed is derived
//! from the date alone and fed to the seeded generator.

use super::generator::generate_board_with_seed;
use crate::core::Board;
use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;
use tracing::info;

/// The board for one calendar day
#[derive(Debug, Clone, Serialize)]
pub struct DailyBoard {
    pub board: Board,
    pub seed: i64,
    pub date: NaiveDate,
}

/// Seed for a calendar date
///
/// `YYYYMMDD` read as an integer, plus seven per weekday counted from Sunday = 0.
///
/// # Examples
/// ```
/// use boggle_solver::dice::daily_seed;
/// use chrono::NaiveDate;
///
/// let monday = NaiveDate::from_ymd_opt(2026, 2, 9).unwrap();
/// assert_eq!(daily_seed(monday), 20_260_216);
/// ```
#[must_use]
pub fn daily_seed(date: NaiveDate) -> i64 {
    let base = i64::from(date.year()) * 10_000 + i64::from(date.month()) * 100 + i64::from(date.day());
    let day_offset = i64::from(date.weekday().num_days_from_sunday()) * 7;
    base + day_offset
}

/// Board for a specific date
#[must_use]
pub fn daily_board(date: NaiveDate) -> DailyBoard {
    let seed = daily_seed(date);
    let board = generate_board_with_seed(seed);
    info!(%date, seed, "daily board ready");
    DailyBoard { board, seed, date }
}

/// Board for today's local calendar date
#[must_use]
pub fn todays_daily_board() -> DailyBoard {
    daily_board(Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn sunday_has_no_offset() {
        assert_eq!(daily_seed(date(2026, 2, 15)), 20_260_215);
    }

    #[test]
    fn weekday_offsets() {
        assert_eq!(daily_seed(date(2026, 2, 9)), 20_260_216); // Monday
        assert_eq!(daily_seed(date(2026, 10, 16)), 20_261_051); // Friday
        assert_eq!(daily_seed(date(2024, 2, 29)), 20_240_257); // Thursday
    }

    #[test]
    fn daily_board_matches_seeded_generator() {
        let daily = daily_board(date(2026, 2, 9));
        assert_eq!(daily.seed, 20_260_216);
        assert_eq!(daily.board.letters(), "ATLRTUOTCVEUTREO");
        assert_eq!(daily.date, date(2026, 2, 9));
    }

    #[test]
    fn friday_board_is_stable() {
        assert_eq!(
            daily_board(date(2026, 10, 16)).board.letters(),
            "DEAGRWNNDPIRSJCS"
        );
    }

    #[test]
    fn same_date_same_board() {
        let a = daily_board(date(2025, 12, 25));
        let b = daily_board(date(2025, 12, 25));
        assert_eq!(a.board, b.board);
        assert_ne!(a.board, daily_board(date(2025, 12, 26)).board);
    }
}
