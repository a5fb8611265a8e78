//! Boggle Solver - CLI
//!
//! Boggle game and solver with TUI and CLI modes.

use anyhow::{Context, Result, bail};
use boggle_solver::{
    commands::{
        BoardSource, analyze_game, preview_daily, run_benchmark, run_practice, run_simple,
        solve_board,
    },
    game::{DEFAULT_DURATION_SECS, Difficulty, GameConfig},
    output::{
        print_analysis_result, print_benchmark_result, print_daily_preview, print_solve_result,
    },
    wordlists::{Dictionary, loader},
};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "boggle_solver",
    about = "Boggle game and solver: trie-pruned search, seeded daily boards and post-game analytics",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default) or path to a word list (one per line or JSON array)
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Round length in seconds
    #[arg(short = 't', long, global = true, default_value_t = DEFAULT_DURATION_SECS)]
    duration: u64,

    #[command(flatten)]
    board: BoardArgs,
}

/// Which board to play or solve
#[derive(Args, Clone, Default)]
struct BoardArgs {
    /// Deal the board from a numeric seed
    #[arg(short, long, global = true, conflicts_with_all = ["board", "daily", "date"])]
    seed: Option<i64>,

    /// Use a custom board of 16 letters (Q stands for Qu)
    #[arg(short, long, global = true, conflicts_with_all = ["daily", "date"])]
    board: Option<String>,

    /// Use the daily challenge board
    #[arg(short, long, global = true)]
    daily: bool,

    /// Date for the daily board (YYYY-MM-DD, implies --daily)
    #[arg(long, global = true)]
    date: Option<NaiveDate>,
}

impl BoardArgs {
    fn source(&self) -> BoardSource {
        if let Some(seed) = self.seed {
            BoardSource::Seed(seed)
        } else if let Some(letters) = &self.board {
            BoardSource::Custom(letters.clone())
        } else if self.daily || self.date.is_some() {
            BoardSource::Daily(self.date.unwrap_or_else(today))
        } else {
            BoardSource::Random
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Simple CLI game (type words on stdin)
    Simple,

    /// List every word on a board
    Solve {
        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,

        /// Show the tile path of each word
        #[arg(short, long)]
        verbose: bool,
    },

    /// Preview the daily challenge board
    Daily {
        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Score a finished round and show the post-game report
    Analyze {
        /// Words the player submitted, in order
        #[arg(required = true)]
        words: Vec<String>,

        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Find every word on a 2×2 board
    Practice {
        /// Four letters for the first board (random when omitted)
        letters: Option<String>,

        /// Difficulty for dealt boards: easy, medium, hard
        #[arg(short = 'l', long, default_value = "medium")]
        difficulty: Difficulty,
    },

    /// Benchmark solver performance on seeded boards
    Benchmark {
        /// Number of boards to solve
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// First seed of the run
        #[arg(short = 'f', long, default_value = "0")]
        first_seed: i64,
    },
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize result")?;
    println!("{json}");
    Ok(())
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    if cli.duration == 0 {
        bail!("--duration must be at least one second");
    }
    let config = GameConfig::with_duration_secs(cli.duration);

    let dictionary = loader::load(&cli.dictionary)
        .with_context(|| format!("failed to load dictionary '{}'", cli.dictionary))?;
    info!(words = dictionary.len(), source = %cli.dictionary, "dictionary ready");

    let source = cli.board.source();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(dictionary, source, config),
        Commands::Simple => run_simple(&dictionary, &source, config),
        Commands::Solve { json, verbose } => {
            let result = solve_board(&dictionary, &source, verbose || json)?;
            if json {
                print_json(&result)
            } else {
                print_solve_result(&result, verbose);
                Ok(())
            }
        }
        Commands::Daily { json } => {
            let preview = preview_daily(&dictionary, cli.board.date.unwrap_or_else(today));
            if json {
                print_json(&preview)
            } else {
                print_daily_preview(&preview);
                Ok(())
            }
        }
        Commands::Analyze { words, json } => {
            let result = analyze_game(&dictionary, &source, &words)?;
            if json {
                print_json(&result)
            } else {
                print_analysis_result(&result);
                Ok(())
            }
        }
        Commands::Practice {
            letters,
            difficulty,
        } => run_practice(&dictionary, letters.as_deref(), difficulty),
        Commands::Benchmark { count, first_seed } => {
            println!("Solving {count} boards from seed {first_seed}...");
            let result = run_benchmark(&dictionary, count, first_seed, true);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(dictionary: Dictionary, source: BoardSource, config: GameConfig) -> Result<()> {
    use boggle_solver::interactive::{App, run_tui};

    let app = App::new(Arc::new(dictionary), source, config);
    run_tui(app)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_selects_daily_board() {
        let cli = Cli::try_parse_from(["boggle_solver", "solve", "--date", "2026-02-09"]).unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 2, 9).unwrap();
        assert_eq!(cli.board.source(), BoardSource::Daily(date));
    }

    #[test]
    fn date_conflicts_with_other_boards() {
        for args in [
            ["boggle_solver", "solve", "--seed", "7", "--date", "2026-02-09"],
            ["boggle_solver", "solve", "--board", "CATS", "--date", "2026-02-09"],
        ] {
            assert!(Cli::try_parse_from(args).is_err());
        }
    }

    #[test]
    fn seed_selects_seeded_board() {
        let cli = Cli::try_parse_from(["boggle_solver", "--seed", "42"]).unwrap();
        assert_eq!(cli.board.source(), BoardSource::Seed(42));
    }
}
