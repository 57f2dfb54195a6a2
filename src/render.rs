//! Terminal rendering of the guess history.
//!
//! Everything writes to a generic `io::Write` so the output can be checked
//! in tests without a terminal.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, PrintStyledContent, Stylize};
use crossterm::terminal::{Clear, ClearType};

use crate::feedback::Feedback;
use crate::game::{Attempt, ChanceBudget, Game};

fn feedback_color(feedback: Feedback) -> Color {
    match feedback {
        Feedback::Correct => Color::Green,
        Feedback::Present => Color::Yellow,
        Feedback::Absent => Color::Red,
    }
}

/// Color of the attempt number: green for early guesses, red for the ones
/// close to the end of the budget. `None` when the budget is unlimited.
pub fn attempt_color(index: usize, budget: ChanceBudget) -> Option<Color> {
    let ChanceBudget::Limited(chances) = budget else {
        return None;
    };
    let chances = chances as f64;
    let third = (chances / 3.0).round();
    // index 0 divides by zero and rates as infinitely early
    let rating = (chances / index as f64).round();

    Some(if rating < third {
        Color::Red
    } else if rating < third * 2.0 {
        Color::Yellow
    } else {
        Color::Green
    })
}

/// Clear the screen and move the cursor to the top left corner.
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;
    out.flush()
}

/// Write one line per attempt, letters colored by their feedback.
pub fn render_history<W: Write>(out: &mut W, history: &[Attempt], budget: ChanceBudget) -> io::Result<()> {
    for (index, attempt) in history.iter().enumerate() {
        let number = (index + 1).to_string();
        match attempt_color(index, budget) {
            Some(color) => queue!(out, PrintStyledContent(number.with(color)))?,
            None => queue!(out, Print(number))?,
        }
        queue!(out, Print(" - "))?;

        for (i, (letter, feedback)) in attempt.word.chars().zip(attempt.correction.iter()).enumerate() {
            if i > 0 {
                queue!(out, Print(" | "))?;
            }
            queue!(out, PrintStyledContent(letter.with(feedback_color(feedback))))?;
        }
        queue!(out, Print("\n"))?;
    }
    queue!(out, Print("\n"))?;
    out.flush()
}

/// Redraw the whole board.
pub fn redraw<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    clear_screen(out)?;
    render_history(out, game.history(), game.budget())
}

/// The line shown before reading a guess.
pub fn prompt(game: &Game) -> String {
    let length = game.word_length();
    if game.hints_left() > 0 {
        format!(
            "The word has {} letters, type 1 for a hint ({} left) or type your guess: ",
            length,
            game.hints_left()
        )
    } else if let Some(left) = game.remaining_chances() {
        format!("The word has {} letters, you have {} chances left: ", length, left)
    } else {
        format!("The word has {} letters: ", length)
    }
}
