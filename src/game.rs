//! The game engine.
//!
//! A `Game` owns the secret word and everything that changes while the
//! player guesses: the history of attempts, the hint queue and the game
//! state. All mutation goes through `submit_guess`, `consume_hint` and
//! `give_up`.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::dictionary::{normalize_word, Dictionary};
use crate::error::{Error, Result};
use crate::feedback::{Correction, Scoring};

/// How many valid guesses the player gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChanceBudget {
    #[default]
    Unlimited,
    /// Always at least one.
    Limited(usize),
}

impl FromStr for ChanceBudget {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("unlimited") || s == "-1" {
            return Ok(ChanceBudget::Unlimited);
        }
        match s.parse::<usize>() {
            Ok(0) => Err("the number of chances must be at least 1".to_string()),
            Ok(n) => Ok(ChanceBudget::Limited(n)),
            Err(_) => Err(format!("expected a positive number or 'unlimited', got '{}'", s)),
        }
    }
}

impl fmt::Display for ChanceBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChanceBudget::Unlimited => write!(f, "unlimited"),
            ChanceBudget::Limited(n) => write!(f, "{}", n),
        }
    }
}

/// Settings fixed for the lifetime of a game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameConfig {
    pub chances: ChanceBudget,
    pub hints: Vec<String>,
    pub scoring: Scoring,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won,
    Lost,
    Quit,
}

impl GameState {
    pub fn is_over(self) -> bool {
        self != GameState::Playing
    }
}

/// What an accepted guess did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every letter matched; the game is won.
    Correct,
    /// Not the secret, chances remain.
    Incorrect,
    /// Not the secret and that was the last chance.
    ChancesExhausted,
}

/// Result of `Game::submit_guess`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub outcome: Outcome,
    pub correction: Correction,
}

/// One accepted guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub word: String,
    pub correction: Correction,
}

#[derive(Debug, Clone)]
pub struct Game {
    secret: String,
    words: Dictionary,
    hints: VecDeque<String>,
    history: Vec<Attempt>,
    chances: ChanceBudget,
    scoring: Scoring,
    state: GameState,
}

impl Game {
    /// Start a game with a secret drawn uniformly from `words`.
    pub fn new<R: Rng + ?Sized>(words: Dictionary, config: GameConfig, rng: &mut R) -> Result<Self> {
        let secret = words
            .words()
            .choose(rng)
            .cloned()
            .ok_or(Error::EmptyDictionary {
                length: words.word_length(),
            })?;
        debug!("Drew secret word out of {} candidates", words.len());
        Ok(Self::start(secret, words, config))
    }

    /// Start a game on a known secret, which must be one of `words`.
    pub fn with_secret(words: Dictionary, config: GameConfig, secret: &str) -> Result<Self> {
        if words.is_empty() {
            return Err(Error::EmptyDictionary {
                length: words.word_length(),
            });
        }
        let secret = normalize_word(secret);
        if !words.contains(&secret) {
            return Err(Error::InvalidWord(secret));
        }
        Ok(Self::start(secret, words, config))
    }

    fn start(secret: String, words: Dictionary, config: GameConfig) -> Self {
        let chances = match config.chances {
            ChanceBudget::Limited(0) => ChanceBudget::Limited(1),
            other => other,
        };
        Self {
            secret,
            words,
            hints: config.hints.into(),
            history: Vec::new(),
            chances,
            scoring: config.scoring,
            state: GameState::Playing,
        }
    }

    /// Evaluate a guess of the same length as the secret.
    ///
    /// Words outside the dictionary are rejected without using a chance.
    pub fn submit_guess(&mut self, word: &str) -> Result<Submission> {
        if self.state.is_over() {
            return Err(Error::GameOver);
        }

        let word = normalize_word(word.trim());
        if !self.words.contains(&word) {
            trace!("Rejected guess not in dictionary");
            return Err(Error::InvalidWord(word));
        }

        let correction = Correction::calculate(&word, &self.secret, self.scoring);
        self.history.push(Attempt {
            word,
            correction: correction.clone(),
        });

        let outcome = if correction.is_win() {
            self.state = GameState::Won;
            Outcome::Correct
        } else if self.remaining_chances() == Some(0) {
            self.state = GameState::Lost;
            Outcome::ChancesExhausted
        } else {
            Outcome::Incorrect
        };
        debug!(
            "Guess {} evaluated as {} ({:?})",
            self.history.len(),
            correction,
            outcome
        );

        Ok(Submission {
            outcome,
            correction,
        })
    }

    /// Pop the next hint off the queue.
    pub fn consume_hint(&mut self) -> Result<String> {
        if self.state.is_over() {
            return Err(Error::GameOver);
        }
        self.hints.pop_front().ok_or(Error::NoHintsAvailable)
    }

    /// Chances left, or `None` when unlimited.
    pub fn remaining_chances(&self) -> Option<usize> {
        match self.chances {
            ChanceBudget::Unlimited => None,
            ChanceBudget::Limited(n) => Some(n.saturating_sub(self.history.len())),
        }
    }

    /// Abandon the game and reveal the secret.
    pub fn give_up(&mut self) -> &str {
        if self.state == GameState::Playing {
            self.state = GameState::Quit;
        }
        &self.secret
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn history(&self) -> &[Attempt] {
        &self.history
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn hints_left(&self) -> usize {
        self.hints.len()
    }

    pub fn budget(&self) -> ChanceBudget {
        self.chances
    }

    pub fn scoring(&self) -> Scoring {
        self.scoring
    }

    /// Length of the secret in letters.
    pub fn word_length(&self) -> usize {
        self.words.word_length()
    }

    /// Whether an already normalized word is a valid guess.
    pub fn is_candidate(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}
