//! Command line options.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::Parser;

use crate::dictionary::{read_lines, CacheStrategy, DictionarySource};
use crate::error::Result;
use crate::feedback::Scoring;
use crate::game::{ChanceBudget, GameConfig};

pub const DEFAULT_DICTIONARY: &str = "dictionary/words.txt";
pub const DEFAULT_CACHE: &str = "dictionary/parsedWords.txt";

/// Guess the secret word, letter by letter.
#[derive(Clone, Debug, Parser)]
#[command(version, about)]
pub struct Opts {
    /// Number of letters of the secret word.
    #[arg(short = 'l', long, default_value_t = crate::DEFAULT_WORD_LENGTH as u16, value_parser = clap::value_parser!(u16).range(1..))]
    pub letters: u16,

    /// Number of guesses allowed, or "unlimited".
    #[arg(short = 'c', long, default_value = "unlimited", allow_hyphen_values = true)]
    pub chances: ChanceBudget,

    /// Word list with one word per line.
    #[arg(short = 'd', long, default_value = DEFAULT_DICTIONARY)]
    pub dictionary: PathBuf,

    /// Where to keep the normalized copy of the word list.
    #[arg(long, default_value = DEFAULT_CACHE)]
    pub cache: PathBuf,

    /// Always normalize the word list instead of using the cache.
    #[arg(long)]
    pub no_cache: bool,

    /// A hint shown on request. Can be repeated.
    #[arg(long = "hint", value_name = "TEXT")]
    pub hints: Vec<String>,

    /// File with one hint per line, shown before the --hint values.
    #[arg(long = "hints", value_name = "FILE")]
    pub hints_file: Option<PathBuf>,

    /// Score repeated letters the way standard Wordle does.
    #[arg(long)]
    pub strict_duplicates: bool,
}

impl Opts {
    pub fn word_length(&self) -> usize {
        usize::from(self.letters)
    }

    pub fn dictionary_source(&self) -> DictionarySource {
        DictionarySource {
            words: self.dictionary.clone(),
            cache: if self.no_cache {
                CacheStrategy::Disabled
            } else {
                CacheStrategy::File(self.cache.clone())
            },
        }
    }

    /// Build the game settings, reading the hint file if one was given.
    pub fn game_config(&self) -> Result<GameConfig> {
        let mut hints = match &self.hints_file {
            Some(path) => read_lines(BufReader::new(File::open(path)?))?,
            None => Vec::new(),
        };
        hints.extend(self.hints.iter().cloned());

        Ok(GameConfig {
            chances: self.chances,
            hints,
            scoring: if self.strict_duplicates {
                Scoring::DuplicateAware
            } else {
                Scoring::Naive
            },
        })
    }
}
