//! Formatting utilities for terminal output

use crate::core::Board;
use std::time::Duration;

/// Width of one tile in board drawings
pub const TILE_WIDTH: usize = 4;

/// Format a countdown as `m:ss`
#[must_use]
pub fn format_clock(remaining: Duration) -> String {
    let secs = remaining.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Signed point label, `+3` or `-2`
#[must_use]
pub fn format_points(points: i32) -> String {
    if points > 0 {
        format!("+{points}")
    } else {
        points.to_string()
    }
}

/// One string per board row, each tile centered in `TILE_WIDTH` columns
#[must_use]
pub fn board_lines(board: &Board) -> Vec<String> {
    board
        .row_slices()
        .map(|row| {
            row.iter()
                .map(|tile| format!("{tile:^TILE_WIDTH$}"))
                .collect::<String>()
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Cast is safe: values are clamped to [0, width]
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
