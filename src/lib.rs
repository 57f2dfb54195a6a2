//! # Palavra
//!
//! A terminal word-guessing game. A secret word is drawn from a dictionary
//! and the player guesses it letter by letter, getting green/yellow/red
//! feedback after every attempt.
//!
//! Dictionary words are compared without accents or case, so word lists in
//! languages like Portuguese work out of the box.

pub mod config;
pub mod dictionary;
pub mod error;
pub mod feedback;
pub mod game;
pub mod input;
pub mod render;

pub use dictionary::{normalize_word, CacheStrategy, Dictionary, DictionarySource};
pub use error::{Error, Result};
pub use feedback::{Correction, Feedback, Scoring};
pub use game::{Attempt, ChanceBudget, Game, GameConfig, GameState, Outcome, Submission};
pub use input::Input;

/// Word length used when none is configured.
pub const DEFAULT_WORD_LENGTH: usize = 5;
