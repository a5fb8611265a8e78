//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis_result, print_benchmark_result, print_board, print_daily_preview,
    print_practice_quiz, print_report, print_solve_result, print_submit_outcome,
    print_word_columns,
};
pub use formatters::{format_clock, format_points};
