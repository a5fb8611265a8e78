//! Display functions for command results

use super::formatters::{TILE_WIDTH, board_lines, create_progress_bar, format_points};
use crate::analytics::{GameReport, words_by_length};
use crate::commands::{AnalysisResult, BenchmarkResult, DailyPreview, SolveResult};
use crate::core::Board;
use crate::game::{PracticeQuiz, SubmitOutcome};
use crate::scoring::word_score;
use crate::solver::WordSet;
use colored::Colorize;

/// Words shown per line in word lists
const WORDS_PER_LINE: usize = 6;

/// Print a board inside a box
pub fn print_board(board: &Board) {
    let width = board.cols() * TILE_WIDTH + 2;
    println!("  ┌{}┐", "─".repeat(width));
    for line in board_lines(board) {
        println!("  │ {} │", line.bright_white().bold());
    }
    println!("  └{}┘", "─".repeat(width));
}

/// Print words in fixed-width columns, longest first
fn print_word_list(words: &[String]) {
    let width = words.iter().map(String::len).max().unwrap_or(0) + 2;
    for line in words.chunks(WORDS_PER_LINE) {
        let row: String = line.iter().map(|w| format!("{w:<width$}")).collect();
        println!("   {}", row.trim_end());
    }
}

/// Print every word of a practice board, found ones highlighted
pub fn print_word_columns(words: &WordSet, found: &WordSet) {
    for line in words.iter().collect::<Vec<_>>().chunks(WORDS_PER_LINE) {
        let row: Vec<String> = line
            .iter()
            .map(|w| {
                let cell = format!("{w:<8}");
                if found.contains(*w) {
                    cell.green().bold().to_string()
                } else {
                    cell.bright_black().to_string()
                }
            })
            .collect();
        println!("   {}", row.join(""));
    }
}

/// Print the result of solving a board
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("{}", result.kind.to_string().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());
    print_board(&result.board);

    println!(
        "\n📊 {} words, {} points available (solved in {:.2}ms)",
        result.words.len().to_string().bright_yellow().bold(),
        result.max_score.to_string().bright_yellow().bold(),
        result.duration.as_secs_f64() * 1000.0
    );

    if verbose {
        println!();
        for (word, path) in &result.paths {
            let cells: Vec<String> = path.iter().map(ToString::to_string).collect();
            println!(
                "   {:<16} {:>3}  {}",
                word.bright_white(),
                format_points(word_score(word)).green(),
                cells.join(" → ").bright_black()
            );
        }
    } else {
        let words = words_by_length(&result.words);
        println!();
        print_word_list(&words);
    }
}

/// Print a daily board preview
pub fn print_daily_preview(preview: &DailyPreview) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ({}) ",
        "DAILY BOGGLE".bright_cyan().bold(),
        preview.daily.date.to_string().bright_yellow().bold(),
        preview.weekday
    );
    println!("{}", "═".repeat(60).cyan());
    println!("   Seed: {}\n", preview.daily.seed);
    print_board(&preview.daily.board);

    println!(
        "\n   {} words, {} points available",
        preview.word_count.to_string().bright_yellow(),
        preview.max_score.to_string().bright_yellow()
    );
    if !preview.top_words.is_empty() {
        println!("\n   {}", "Longest words:".bright_cyan());
        print_word_list(&preview.top_words);
    }
}

/// Print one submission result during a game
pub fn print_submit_outcome(outcome: &SubmitOutcome) {
    match outcome {
        SubmitOutcome::Valid { word, points } => {
            println!(
                "  {} {} {}",
                "✓".green().bold(),
                word.bright_white(),
                format_points(*points).green()
            );
        }
        SubmitOutcome::Invalid {
            word,
            reason,
            penalty,
        } => {
            println!(
                "  {} {} {} ({reason})",
                "✗".red().bold(),
                word.bright_white(),
                format_points(*penalty).red()
            );
        }
        SubmitOutcome::TooShort => println!("  {}", "Too short".yellow()),
        SubmitOutcome::Duplicate => println!("  {}", "Already tried".yellow()),
        SubmitOutcome::Quit => println!("  {}", "Game ended".bright_black()),
        SubmitOutcome::Empty | SubmitOutcome::Ignored => {}
    }
}

/// Print the post-game report
pub fn print_report(report: &GameReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ROUND REPORT".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let net = report.score.net.to_string();
    let net = if report.score.net < 0 {
        net.red().bold()
    } else {
        net.bright_yellow().bold()
    };
    println!("\n📊 {}", "Score:".bright_cyan().bold());
    println!("   Earned:    {}", format_points(report.score.gross).green());
    println!("   Penalties: {}", report.score.penalty.to_string().red());
    println!("   Net:       {net}");
    println!("   Possible:  {}", report.max_score);

    let bar = create_progress_bar(report.completion, 100.0, 30);
    println!(
        "\n   Found {}/{} words [{}] {:.1}%",
        report.found_count,
        report.possible_count,
        bar.green(),
        report.completion
    );
    if let Some(longest) = &report.longest_word {
        println!("   Longest possible: {}", longest.bright_white().bold());
    }

    if !report.chains.is_empty() {
        println!("\n🔗 {}", "Word chains:".bright_cyan().bold());
        for chain in &report.chains {
            println!(
                "   {:<10} {:>3} pts  {}",
                chain.core.bright_yellow(),
                chain.total_score,
                chain.words.join(", ")
            );
        }
    }

    if !report.anagrams.is_empty() {
        println!("\n🔀 {}", "Anagrams:".bright_cyan().bold());
        for set in &report.anagrams {
            println!("   {}", set.words.join(" · "));
        }
    }

    if !report.missed.is_empty() {
        println!("\n🕳  {} ({})", "Missed:".bright_cyan().bold(), report.missed.len());
        print_word_list(&report.missed);
    }
}

/// Print the analysis of a replayed round
pub fn print_analysis_result(result: &AnalysisResult) {
    print_board(&result.board);
    if !result.rejected.is_empty() {
        println!("\n❌ {}", "Penalized:".bright_cyan().bold());
        for (word, reason) in &result.rejected {
            println!("   {:<16} {}", word.red(), reason.to_string().bright_black());
        }
    }
    if !result.skipped.is_empty() {
        println!("\n   Not scored: {}", result.skipped.join(", ").bright_black());
    }
    print_report(&result.report);
}

/// Print a 2×2 practice board
pub fn print_practice_quiz(quiz: &PracticeQuiz) {
    print_board(&quiz.board);
    println!(
        "   {} words · {}",
        quiz.words.len().to_string().bright_yellow(),
        quiz.difficulty
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Boards solved:    {}", result.total_boards);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Boards/second:    {:.1}", result.boards_per_second);
    println!(
        "   Slowest solve:    {:.2}ms",
        result.slowest_solve.as_secs_f64() * 1000.0
    );

    println!("\n📖 {}", "Words per board:".bright_cyan().bold());
    println!(
        "   Average:          {}",
        format!("{:.1}", result.average_words).bright_yellow().bold()
    );
    println!("   Fewest:           {}", result.min_words.to_string().yellow());
    println!("   Most:             {}", result.max_words.to_string().green());
    if let Some(best) = result.best {
        println!(
            "   Richest board:    seed {} ({} words, {} points)",
            best.seed, best.words, best.max_score
        );
    }

    if result.total_boards == 0 {
        return;
    }
    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&bucket, &count) in &result.distribution {
        let pct = (count as f64 / result.total_boards as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!(
            "   {:>4}+: {} {count:4} ({pct:5.1}%)",
            bucket,
            bar.green()
        );
    }
}
