//! Palavra CLI
//!
//! Interactive terminal game: reads guesses from stdin and redraws the board
//! after every attempt.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, warn};

use palavra::config::Opts;
use palavra::render::{clear_screen, prompt, redraw};
use palavra::{Dictionary, Error, Game, Input, Outcome};

fn play(mut game: Game) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    clear_screen(&mut stdout)?;

    loop {
        print!("{}", prompt(&game));
        stdout.flush()?;

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => {
                println!();
                println!("Gave up! The word was: {}", game.give_up());
                break;
            }
            Ok(_) => {}
            Err(err) => {
                warn!("Failed to read input: {}", err);
                println!("Could not read your input, try again");
                continue;
            }
        }

        match Input::classify(&line, &game) {
            Input::Quit => {
                println!("Gave up! The word was: {}", game.give_up());
                break;
            }
            Input::Hint => {
                redraw(&mut stdout, &game)?;
                match game.consume_hint() {
                    Ok(hint) => println!("Hint: {}", hint),
                    Err(err) => println!("{}", capitalize(&err.to_string())),
                }
            }
            Input::WrongLength(_) => {
                redraw(&mut stdout, &game)?;
                println!("Wrong length, try again!");
            }
            Input::Guess(word) => match game.submit_guess(&word) {
                Ok(submission) => {
                    redraw(&mut stdout, &game)?;
                    match submission.outcome {
                        Outcome::Correct => {
                            match game.remaining_chances() {
                                Some(left) => println!(
                                    "Congratulations! You got the word with {} chances to spare!",
                                    left
                                ),
                                None => println!(
                                    "Congratulations! You got the word in {} guesses!",
                                    game.history().len()
                                ),
                            }
                            break;
                        }
                        Outcome::ChancesExhausted => {
                            println!("Out of chances, the word was: {}", game.secret());
                            break;
                        }
                        Outcome::Incorrect => {}
                    }
                }
                Err(Error::InvalidWord(word)) => {
                    redraw(&mut stdout, &game)?;
                    println!("'{}' is not in the dictionary", word);
                }
                Err(err) => return Err(err.into()),
            },
        }
    }

    debug!("Game ended in state {:?}", game.state());
    Ok(())
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let opts = Opts::parse();
    debug!("Command line options: {:?}", opts);

    let source = opts.dictionary_source();
    let words = Dictionary::load(&source, opts.word_length())
        .with_context(|| format!("failed to load dictionary {}", source.words.display()))?;
    let config = opts.game_config().context("failed to read hints")?;

    let game = Game::new(words, config, &mut rand::thread_rng())?;
    debug!(
        "Starting a {}-letter game with {} chances and {:?} scoring",
        game.word_length(),
        game.budget(),
        game.scoring()
    );
    play(game)
}
