//! Boggle Solver
//!
//! A Boggle engine: trie-pruned board solving, New Boggle dice with seeded and
//! daily boards, timed game sessions with penalties, and post-game analytics.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use boggle_solver::dice::generate_board_with_seed;
//! use boggle_solver::solver::Solver;
//! use boggle_solver::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::embedded();
//! let board = generate_board_with_seed(42);
//! let words = Solver::new(dictionary.trie()).solve(&board);
//! println!("{board}\n{} words", words.len());
//! ```

// Core domain types
pub mod core;

// Board generation
pub mod dice;

// Word search
pub mod solver;

// Points and penalties
pub mod scoring;

// Post-game analytics
pub mod analytics;

// Timed game rules
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
