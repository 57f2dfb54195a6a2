//! Errors raised while loading a dictionary or playing a game.

use std::io;

/// Every error the library can produce.
///
/// `Io` and `EmptyDictionary` only happen while starting up; the other
/// variants are recoverable and leave the game untouched.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The word list (or hint file) could not be opened or read.
    #[error("failed to read word list: {0}")]
    Io(#[from] io::Error),

    /// No word of the requested length survived loading.
    #[error("the dictionary has no words with {length} letters")]
    EmptyDictionary { length: usize },

    /// The guess is not part of the candidate word set.
    #[error("'{0}' is not in the dictionary")]
    InvalidWord(String),

    #[error("no hints available")]
    NoHintsAvailable,

    /// The game already ended (won, lost or abandoned).
    #[error("the game is already over")]
    GameOver,
}

impl Error {
    /// Whether the error should abort the program instead of re-prompting.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Io(_) | Error::EmptyDictionary { .. })
    }
}

/// Shorthand used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
