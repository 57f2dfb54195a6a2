//! Feedback calculation for guesses.
//!
//! This module handles computing the correction row (green/yellow/red)
//! for a guess against the secret word.

/// Represents the feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Correct letter in correct position (green)
    Correct,
    /// Letter is in the secret but somewhere else (yellow)
    Present,
    /// Letter not in the secret (red)
    Absent,
}

impl Feedback {
    /// Convert to a character for display
    pub fn to_char(self) -> char {
        match self {
            Feedback::Correct => '🟩',
            Feedback::Present => '🟨',
            Feedback::Absent => '🟥',
        }
    }
}

/// How repeated letters are scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scoring {
    /// Every letter found anywhere in the secret is `Present`, even when the
    /// guess repeats it more often than the secret does.
    #[default]
    Naive,
    /// Standard Wordle rules: a secret letter can only explain one guess
    /// letter.
    DuplicateAware,
}

/// The per-letter feedback for one guess.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Correction(Vec<Feedback>);

impl Correction {
    /// Create a correction from individual feedback values
    pub fn new(feedbacks: Vec<Feedback>) -> Self {
        Self(feedbacks)
    }

    /// Calculate the correction for a guess against the secret word.
    ///
    /// Letters are compared per `char`. The caller checks that both words
    /// have the same length; positions missing from the secret are `Absent`.
    pub fn calculate(guess: &str, secret: &str, scoring: Scoring) -> Self {
        let guess: Vec<char> = guess.chars().collect();
        let secret: Vec<char> = secret.chars().collect();

        match scoring {
            Scoring::Naive => Self::naive(&guess, &secret),
            Scoring::DuplicateAware => Self::duplicate_aware(&guess, &secret),
        }
    }

    fn naive(guess: &[char], secret: &[char]) -> Self {
        let feedbacks = guess
            .iter()
            .enumerate()
            .map(|(i, letter)| {
                if secret.get(i) == Some(letter) {
                    Feedback::Correct
                } else if secret.contains(letter) {
                    Feedback::Present
                } else {
                    Feedback::Absent
                }
            })
            .collect();
        Self(feedbacks)
    }

    fn duplicate_aware(guess: &[char], secret: &[char]) -> Self {
        let mut feedback = vec![Feedback::Absent; guess.len()];
        // Secret letters not already matched in place.
        let mut secret_remaining: Vec<char> = Vec::with_capacity(secret.len());

        for (i, &letter) in secret.iter().enumerate() {
            if guess.get(i) == Some(&letter) {
                feedback[i] = Feedback::Correct;
            } else {
                secret_remaining.push(letter);
            }
        }

        for (i, letter) in guess.iter().enumerate() {
            if feedback[i] != Feedback::Correct {
                if let Some(pos) = secret_remaining.iter().position(|c| c == letter) {
                    feedback[i] = Feedback::Present;
                    secret_remaining.swap_remove(pos);
                }
            }
        }

        Self(feedback)
    }

    /// The per-letter feedback values
    pub fn feedbacks(&self) -> &[Feedback] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Feedback> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if this correction represents a win (all correct)
    pub fn is_win(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|fb| *fb == Feedback::Correct)
    }

    /// Display as emoji string
    pub fn to_emoji_string(&self) -> String {
        self.0.iter().map(|f| f.to_char()).collect()
    }
}

impl std::fmt::Display for Correction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_emoji_string())
    }
}
