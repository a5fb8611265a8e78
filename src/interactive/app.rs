//! TUI application state and logic

use crate::analytics::GameReport;
use crate::commands::BoardSource;
use crate::core::{Board, Position};
use crate::game::{GameConfig, GameKind, GameSession, SessionState, SubmitOutcome};
use crate::output::format_points;
use crate::solver::{SolveTask, find_path};
use crate::wordlists::Dictionary;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::time::Duration;

/// How often the clock is redrawn while waiting for keys
const TICK_RATE: Duration = Duration::from_millis(200);

/// Longest guess the input box accepts
const MAX_INPUT_LEN: usize = 16;

/// Messages kept in the log panel
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    pub dictionary: Arc<Dictionary>,
    pub source: BoardSource,
    pub config: GameConfig,
    pub screen: Screen,
    pub session: Option<GameSession>,
    pub report: Option<GameReport>,
    pub input_buffer: String,
    /// Cells of the last accepted word, highlighted on the board
    pub highlight: Vec<Position>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pending: Option<(GameKind, SolveTask)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Waiting for the background solve of a new board
    Dealing,
    Playing,
    Results,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_played: usize,
    pub best_net: Option<i32>,
    pub total_words: usize,
}

impl App {
    #[must_use]
    pub fn new(dictionary: Arc<Dictionary>, source: BoardSource, config: GameConfig) -> Self {
        Self {
            dictionary,
            source,
            config,
            screen: Screen::Dealing,
            session: None,
            report: None,
            input_buffer: String::new(),
            highlight: Vec::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            pending: None,
        }
    }

    /// Deal a board and start solving it in the background
    ///
    /// # Errors
    ///
    /// Returns an error if the configured board source is invalid.
    pub fn new_game(&mut self) -> Result<()> {
        let (board, kind) = self.source.resolve()?;
        self.pending = Some((kind, SolveTask::spawn(Arc::clone(&self.dictionary), board)));
        self.session = None;
        self.report = None;
        self.highlight.clear();
        self.input_buffer.clear();
        self.screen = Screen::Dealing;
        self.add_message("Dealing a new board...", MessageStyle::Info);
        Ok(())
    }

    /// Advance background work and the clock
    pub fn on_tick(&mut self) {
        if let Some((kind, task)) = &mut self.pending
            && let Some(outcome) = task.try_take()
        {
            let kind = *kind;
            let mut session = GameSession::new(
                outcome.board.clone(),
                outcome.words.clone(),
                kind,
                self.config,
            );
            let count = session.possible_words().len();
            self.pending = None;

            if kind == GameKind::Custom {
                self.add_message(
                    &format!("Custom board loaded: {count} words. Press Enter to start."),
                    MessageStyle::Info,
                );
            } else {
                session.start();
                self.add_message(&format!("{count} words available. Go!"), MessageStyle::Success);
            }
            self.session = Some(session);
            self.screen = Screen::Playing;
        }

        if self.session.as_mut().is_some_and(GameSession::tick) {
            self.add_message("⏰ Time's up!", MessageStyle::Info);
            self.end_round();
        }
    }

    /// Submit the input box as a guess
    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        let Some(session) = self.session.as_mut() else {
            return;
        };

        // A word typed as the clock ran out does not count
        if session.tick() {
            self.add_message("⏰ Time's up!", MessageStyle::Info);
            self.end_round();
            return;
        }

        let outcome = session.submit(&input, &self.dictionary);
        let board = session.board().clone();
        self.record_outcome(&board, outcome);
    }

    fn record_outcome(&mut self, board: &Board, outcome: SubmitOutcome) {
        match outcome {
            SubmitOutcome::Valid { word, points } => {
                self.highlight = find_path(board, &word).unwrap_or_default();
                self.add_message(
                    &format!("✓ {word} {}", format_points(points)),
                    MessageStyle::Success,
                );
            }
            SubmitOutcome::Invalid {
                word,
                reason,
                penalty,
            } => {
                self.highlight.clear();
                self.add_message(
                    &format!("✗ {word} {} ({reason})", format_points(penalty)),
                    MessageStyle::Error,
                );
            }
            SubmitOutcome::TooShort => self.add_message("Too short", MessageStyle::Error),
            SubmitOutcome::Duplicate => self.add_message("Already tried", MessageStyle::Error),
            SubmitOutcome::Quit => self.end_round(),
            SubmitOutcome::Empty | SubmitOutcome::Ignored => {}
        }
    }

    /// Stop the clock early
    pub fn give_up(&mut self) {
        if let Some(session) = self.session.as_mut()
            && session.finish(true)
        {
            self.end_round();
        }
    }

    fn end_round(&mut self) {
        let Some(session) = &self.session else {
            return;
        };
        let report = session.report();
        self.stats.games_played += 1;
        self.stats.total_words += report.found_count;
        self.stats.best_net = Some(
            self.stats
                .best_net
                .map_or(report.score.net, |best| best.max(report.score.net)),
        );
        self.report = Some(report);
        self.highlight.clear();
        self.screen = Screen::Results;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn time_left(&self) -> Duration {
        self.session
            .as_ref()
            .map_or(self.config.duration, GameSession::time_left)
    }

    #[must_use]
    pub fn session_state(&self) -> Option<SessionState> {
        self.session.as_ref().map(GameSession::state)
    }

    /// Apply one key press
    ///
    /// # Errors
    ///
    /// Returns an error if starting a new game fails.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }

        match (self.screen, self.session_state()) {
            (Screen::Dealing, _) => {
                if key.code == KeyCode::Char('q') {
                    self.should_quit = true;
                }
            }
            (Screen::Playing, Some(SessionState::Ready)) => match key.code {
                KeyCode::Enter => {
                    if let Some(session) = self.session.as_mut() {
                        session.start();
                    }
                    self.add_message("Go!", MessageStyle::Success);
                }
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
            (Screen::Playing, _) => match key.code {
                KeyCode::Char(c) if c.is_ascii_alphabetic() || c == '-' || c == '1' => {
                    if self.input_buffer.len() < MAX_INPUT_LEN {
                        self.input_buffer.push(c.to_ascii_uppercase());
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_input(),
                KeyCode::Esc => self.give_up(),
                _ => {}
            },
            (Screen::Results, _) => match key.code {
                KeyCode::Char('n') => self.new_game()?,
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
        }
        Ok(())
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(mut app: App) -> Result<()> {
    // Fail on a bad board before touching the terminal
    app.new_game()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.on_tick();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK_RATE)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key)?;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
