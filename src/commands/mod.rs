//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod daily;
pub mod practice;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_game};
pub use benchmark::{BenchmarkResult, BoardStats, run_benchmark};
pub use daily::{DailyPreview, preview_daily};
pub use practice::run_practice;
pub use simple::run_simple;
pub use solve::{BoardSource, SolveResult, solve_board};
