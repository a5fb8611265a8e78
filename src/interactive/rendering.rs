//! TUI rendering with ratatui
//!
//! Board, clock and round report views for the Boggle game.

use super::app::{App, MessageStyle, Screen};
use crate::analytics::GameReport;
use crate::core::Position;
use crate::game::{GameSession, SessionState};
use crate::output::{format_clock, format_points};
use crate::scoring::word_score;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Missed words listed on the results screen
const MISSED_SHOWN: usize = 30;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    match (app.screen, &app.report) {
        (Screen::Results, Some(report)) => {
            render_report(f, report, main_chunks[0]);
            render_analytics(f, report, main_chunks[1]);
        }
        _ => {
            render_main_panel(f, app, main_chunks[0]);
            render_info_panel(f, app, main_chunks[1]);
        }
    }

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = app.session.as_ref().map_or_else(
        || "🎲 BOGGLE".to_string(),
        |session| format!("🎲 BOGGLE - {}", session.kind()),
    );
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),    // Board
            Constraint::Length(3), // Clock
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_clock(f, app, chunks[1]);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Board ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(session) = &app.session else {
        let waiting = Paragraph::new("Dealing...")
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(waiting, area);
        return;
    };

    let board = session.board();
    // Letters stay hidden until the clock starts
    let hidden = session.state() == SessionState::Ready;

    let mut lines = vec![Line::from("")];
    for row in 0..board.rows() {
        let spans: Vec<Span> = (0..board.cols())
            .map(|col| {
                let pos = Position::new(row, col);
                let text = if hidden {
                    " ?  ".to_string()
                } else {
                    format!(" {:<2} ", board.tile(pos))
                };
                let style = if app.highlight.contains(&pos) {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Green)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD)
                };
                Span::styled(text, style)
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(paragraph, area);
}

fn render_clock(f: &mut Frame, app: &App, area: Rect) {
    let total = app.config.duration.as_secs_f64();
    let left = app.time_left();
    let pct = if total > 0.0 {
        ((left.as_secs_f64() / total) * 100.0).clamp(0.0, 100.0) as u16
    } else {
        0
    };
    let color = match pct {
        0..=15 => Color::Red,
        16..=40 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Time ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(pct)
        .label(format_clock(left));

    f.render_widget(gauge, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),      // Score
            Constraint::Percentage(60), // Words
            Constraint::Min(4),         // Messages
        ])
        .split(area);

    render_score(f, app.session.as_ref(), chunks[0]);
    render_words(f, app.session.as_ref(), chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_score(f: &mut Frame, session: Option<&GameSession>, area: Rect) {
    let content = session.map_or_else(
        || vec![Line::from("")],
        |session| {
            let score = session.score();
            vec![
                Line::from(vec![
                    Span::raw("Net: "),
                    Span::styled(
                        score.net.to_string(),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!("   ({} / {})", score.gross, score.penalty)),
                ]),
                Line::from(format!(
                    "Found {} of {}",
                    session.found().len(),
                    session.possible_words().len()
                )),
            ]
        },
    );

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Score ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_words(f: &mut Frame, session: Option<&GameSession>, area: Rect) {
    let mut items: Vec<ListItem> = Vec::new();
    if let Some(session) = session {
        // Newest first
        for word in session.found().iter().rev() {
            items.push(
                ListItem::new(format!("{word:<16} {}", format_points(word_score(word))))
                    .style(Style::default().fg(Color::Green)),
            );
        }
        for word in session.penalized().iter().rev() {
            items.push(ListItem::new(word.clone()).style(Style::default().fg(Color::Red)));
        }
    }

    let list = List::new(items).block(
        Block::default()
            .title(" Words ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(list, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_report(f: &mut Frame, report: &GameReport, area: Rect) {
    let mut lines = vec![
        Line::from(vec![
            Span::raw("Net score:  "),
            Span::styled(
                report.score.net.to_string(),
                Style::default()
                    .fg(if report.score.net < 0 {
                        Color::Red
                    } else {
                        Color::Yellow
                    })
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!(
            "Earned {}, penalties {}",
            format_points(report.score.gross),
            report.score.penalty
        )),
        Line::from(format!("Possible:   {} points", report.max_score)),
        Line::from(format!(
            "Found:      {}/{} ({:.1}%)",
            report.found_count, report.possible_count, report.completion
        )),
    ];
    if let Some(longest) = &report.longest_word {
        lines.push(Line::from(format!("Longest:    {longest}")));
    }

    if !report.missed.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Missed ({}):", report.missed.len()),
            Style::default().fg(Color::Cyan),
        )));
        let shown: Vec<&str> = report
            .missed
            .iter()
            .take(MISSED_SHOWN)
            .map(String::as_str)
            .collect();
        lines.push(Line::from(shown.join(" ")));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Round Over ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_analytics(f: &mut Frame, report: &GameReport, area: Rect) {
    let mut lines = Vec::new();

    if !report.chains.is_empty() {
        lines.push(Line::from(Span::styled(
            "Word chains",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        for chain in &report.chains {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<8}", chain.core),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(format!("{:>3} ", chain.total_score)),
                Span::raw(chain.words.join(" ")),
            ]));
        }
        lines.push(Line::from(""));
    }

    if !report.anagrams.is_empty() {
        lines.push(Line::from(Span::styled(
            "Anagrams",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        for set in &report.anagrams {
            lines.push(Line::from(set.words.join(" · ")));
        }
    }

    if lines.is_empty() {
        lines.push(Line::from("No patterns on this board"));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Patterns ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match (app.screen, app.session_state()) {
        (Screen::Dealing, _) => (" Finding every word on the board... ", "", Color::DarkGray),
        (Screen::Playing, Some(SessionState::Ready)) => {
            (" Press Enter to start the clock ", "", Color::Cyan)
        }
        (Screen::Playing, _) => (
            " Type a word and press Enter | ESC to end the round ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        (Screen::Results, _) => (
            " Press 'n' for a new board or 'q' to quit ",
            "",
            Color::Green,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = match app.screen {
        Screen::Dealing => "Mode: Dealing",
        Screen::Playing => "Mode: Playing",
        Screen::Results => "Mode: Results",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Best: {}",
        app.stats.games_played,
        app.stats
            .best_net
            .map_or_else(|| "-".to_string(), |best| best.to_string())
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let words_text = format!("Words found: {}", app.stats.total_words);
    let words = Paragraph::new(words_text).alignment(Alignment::Center);
    f.render_widget(words, chunks[2]);

    let help_text = match app.screen {
        Screen::Results => "q: Quit | n: New Board",
        _ => "Ctrl-C: Quit | Enter: Submit | ESC: End",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
