//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. The clock is checked whenever a line is
//! entered; a word typed after time ran out does not count.

use super::solve::BoardSource;
use crate::game::{GameConfig, GameKind, GameSession, QUIT_COMMAND, SubmitOutcome};
use crate::output::{format_clock, print_board, print_report, print_submit_outcome};
use crate::solver::Solver;
use crate::wordlists::Dictionary;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// Run one round on stdin
///
/// # Errors
///
/// Returns an error if the board cannot be resolved or stdin/stdout fail.
pub fn run_simple(dictionary: &Dictionary, source: &BoardSource, config: GameConfig) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Boggle - Interactive Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let (board, kind) = source.resolve()?;
    let possible = Solver::new(dictionary.trie()).solve(&board);
    let mut session = GameSession::new(board, possible, kind, config);

    println!("{}", kind.to_string().bright_cyan().bold());
    println!(
        "Find words of {}+ letters by linking neighboring tiles (diagonals count).",
        config.min_word_len
    );
    println!("Commands: 'board' to redraw, 'words' for your list, '{QUIT_COMMAND}' to finish early\n");

    if kind == GameKind::Custom {
        print_board(session.board());
        println!(
            "\n{} words on this board.",
            session.possible_words().len().to_string().bright_yellow()
        );
        if get_user_input("Press Enter to start")?.is_none() {
            return Ok(());
        }
    }

    session.start();
    print_board(session.board());
    println!();

    while session.is_active() {
        let prompt = format!("[{}] Word", format_clock(session.time_left()));
        let Some(input) = get_user_input(&prompt)? else {
            session.finish(true);
            break;
        };

        if session.tick() {
            println!("\n{}", "⏰ Time's up! That last word came too late.".yellow().bold());
            break;
        }

        match input.to_lowercase().as_str() {
            "board" | "b" => {
                print_board(session.board());
                println!();
            }
            "words" | "w" => {
                let found: Vec<&str> = session.found().iter().map(String::as_str).collect();
                println!("  Found: {}", found.join(", ").green());
                println!("  Score: {}\n", session.score());
            }
            _ => print_submit_outcome(&session.submit(&input, dictionary)),
        }
    }

    print_report(&session.report());
    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Prompt and read one trimmed line; `None` at end of input
pub(crate) fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
