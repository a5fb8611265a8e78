//! One timed round on one board
//!
//! Tracks found and penalized words, applies the submission rules and produces
//! the final result record.

use super::GameConfig;
use crate::analytics::GameReport;
use crate::core::Board;
use crate::scoring::{Score, total_score, word_penalty, word_score};
use crate::solver::WordSet;
use crate::wordlists::Dictionary;
use chrono::NaiveDate;
use indexmap::IndexSet;
use serde::Serialize;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Typing this instead of a word ends the round
pub const QUIT_COMMAND: &str = "-1";

/// Where the board came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameKind {
    Random,
    Seeded { seed: i64 },
    Daily { seed: i64, date: NaiveDate },
    Custom,
}

impl GameKind {
    #[must_use]
    pub const fn seed(self) -> Option<i64> {
        match self {
            Self::Seeded { seed } | Self::Daily { seed, .. } => Some(seed),
            Self::Random | Self::Custom => None,
        }
    }

    #[must_use]
    pub const fn is_daily(self) -> bool {
        matches!(self, Self::Daily { .. })
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Random => write!(f, "Random board"),
            Self::Seeded { seed } => write!(f, "Seed {seed}"),
            Self::Daily { date, .. } => write!(f, "Daily Boggle {date}"),
            Self::Custom => write!(f, "Custom board"),
        }
    }
}

/// Lifecycle of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Dealt but the clock has not started
    Ready,
    Active,
    /// `manual` is true when the player quit before time ran out
    Finished { manual: bool },
}

/// Why a guess cost points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RejectReason {
    /// A real word that cannot be traced on this board
    NotOnBoard,
    NotInDictionary,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotOnBoard => write!(f, "Not on board"),
            Self::NotInDictionary => write!(f, "Not in dictionary"),
        }
    }
}

/// What happened to a submitted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The round is not running
    Ignored,
    Empty,
    /// The player typed the quit command; the round is over
    Quit,
    TooShort,
    /// Already found or already penalized
    Duplicate,
    Valid { word: String, points: i32 },
    Invalid {
        word: String,
        reason: RejectReason,
        penalty: i32,
    },
}

/// Final record of a round
#[derive(Debug, Clone, Serialize)]
pub struct GameResult {
    pub gross_score: i32,
    pub penalty_score: i32,
    pub net_score: i32,
    pub words_found: Vec<String>,
    pub words_penalized: Vec<String>,
    pub total_possible_words: usize,
    pub duration_seconds: u64,
    pub board_state: Board,
    pub is_daily_challenge: bool,
    pub seed: Option<i64>,
}

/// A round in progress
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    possible: WordSet,
    kind: GameKind,
    config: GameConfig,
    state: SessionState,
    found: IndexSet<String>,
    penalized: IndexSet<String>,
    started_at: Option<Instant>,
    finished_at: Option<Instant>,
}

impl GameSession {
    /// Deal a round; custom boards wait in `Ready` until started
    #[must_use]
    pub fn new(board: Board, possible: WordSet, kind: GameKind, config: GameConfig) -> Self {
        info!(%kind, possible = possible.len(), "new game");
        Self {
            board,
            possible,
            kind,
            config,
            state: SessionState::Ready,
            found: IndexSet::new(),
            penalized: IndexSet::new(),
            started_at: None,
            finished_at: None,
        }
    }

    /// Start the clock. Returns false if the round was not `Ready`.
    pub fn start(&mut self) -> bool {
        if self.state != SessionState::Ready {
            return false;
        }
        self.state = SessionState::Active;
        self.started_at = Some(Instant::now());
        debug!("game started");
        true
    }

    /// End the round. Returns false if it was not running.
    pub fn finish(&mut self, manual: bool) -> bool {
        if self.state != SessionState::Active {
            return false;
        }
        self.state = SessionState::Finished { manual };
        self.finished_at = Some(Instant::now());

        let score = self.score();
        info!(
            manual,
            found = self.found.len(),
            penalized = self.penalized.len(),
            net = score.net,
            "game finished"
        );
        true
    }

    /// Finish the round if its time is up; returns true when it just ended
    pub fn tick(&mut self) -> bool {
        self.is_expired() && self.finish(false)
    }

    /// Apply the submission rules to one raw guess
    ///
    /// Rules are checked in order: inactive round, blank input, the quit command,
    /// minimum length, repeat guess, then board membership. A word's first
    /// classification is permanent.
    pub fn submit(&mut self, input: &str, dictionary: &Dictionary) -> SubmitOutcome {
        if !self.is_active() {
            return SubmitOutcome::Ignored;
        }

        let word = input.trim().to_uppercase();
        if word.is_empty() {
            return SubmitOutcome::Empty;
        }
        if word == QUIT_COMMAND {
            self.finish(true);
            return SubmitOutcome::Quit;
        }
        if word.chars().count() < self.config.min_word_len {
            return SubmitOutcome::TooShort;
        }
        if self.found.contains(&word) || self.penalized.contains(&word) {
            return SubmitOutcome::Duplicate;
        }

        if self.possible.contains(&word) {
            let points = word_score(&word);
            debug!(%word, points, "word accepted");
            self.found.insert(word.clone());
            SubmitOutcome::Valid { word, points }
        } else {
            let reason = if dictionary.contains(&word) {
                RejectReason::NotOnBoard
            } else {
                RejectReason::NotInDictionary
            };
            let penalty = word_penalty(&word);
            debug!(%word, %reason, penalty, "word penalized");
            self.penalized.insert(word.clone());
            SubmitOutcome::Invalid {
                word,
                reason,
                penalty,
            }
        }
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn possible_words(&self) -> &WordSet {
        &self.possible
    }

    #[must_use]
    pub const fn kind(&self) -> GameKind {
        self.kind
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state == SessionState::Active
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self.state, SessionState::Finished { .. })
    }

    /// Found words in the order they were entered
    #[must_use]
    pub const fn found(&self) -> &IndexSet<String> {
        &self.found
    }

    /// Penalized words in the order they were entered
    #[must_use]
    pub const fn penalized(&self) -> &IndexSet<String> {
        &self.penalized
    }

    /// Current score, recomputed from the word lists
    #[must_use]
    pub fn score(&self) -> Score {
        total_score(&self.found, &self.penalized)
    }

    /// Time on the clock since the round started, capped at the round length
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        let Some(started) = self.started_at else {
            return Duration::ZERO;
        };
        let end = self.finished_at.unwrap_or_else(Instant::now);
        end.duration_since(started).min(self.config.duration)
    }

    #[must_use]
    pub fn time_left(&self) -> Duration {
        if self.started_at.is_none() {
            return self.config.duration;
        }
        self.config.duration.saturating_sub(self.elapsed())
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.is_active() && self.time_left().is_zero()
    }

    /// Post-game report for the current word lists
    #[must_use]
    pub fn report(&self) -> GameReport {
        let found: Vec<String> = self.found.iter().cloned().collect();
        let penalized: Vec<String> = self.penalized.iter().cloned().collect();
        GameReport::build(&self.possible, &found, &penalized)
    }

    #[must_use]
    pub fn result(&self) -> GameResult {
        let score = self.score();
        GameResult {
            gross_score: score.gross,
            penalty_score: score.penalty,
            net_score: score.net,
            words_found: self.found.iter().cloned().collect(),
            words_penalized: self.penalized.iter().cloned().collect(),
            total_possible_words: self.possible.len(),
            duration_seconds: self.elapsed().as_secs(),
            board_state: self.board.clone(),
            is_daily_challenge: self.kind.is_daily(),
            seed: self.kind.seed(),
        }
    }
}
