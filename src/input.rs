//! Classifying raw player input.

use crate::dictionary::normalize_word;
use crate::game::Game;

/// Abandons the game.
pub const QUIT_TOKEN: &str = "0";
/// Asks for the next hint.
pub const HINT_TOKEN: &str = "1";

/// What a line typed by the player means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Quit,
    Hint,
    /// A normalized guess with the secret's length.
    Guess(String),
    /// Neither a command nor a guess of the right length.
    WrongLength(String),
}

impl Input {
    /// Decide what `line` means for `game`.
    ///
    /// A dictionary word always counts as a guess, even when it spells one
    /// of the reserved tokens.
    pub fn classify(line: &str, game: &Game) -> Self {
        let text = normalize_word(line.trim());

        if game.is_candidate(&text) {
            return Input::Guess(text);
        }
        match text.as_str() {
            QUIT_TOKEN => Input::Quit,
            HINT_TOKEN => Input::Hint,
            _ if text.chars().count() != game.word_length() => Input::WrongLength(text),
            _ => Input::Guess(text),
        }
    }
}
