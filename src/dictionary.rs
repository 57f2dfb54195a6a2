//! Word list loading and normalization.
//!
//! Words are stripped of diacritics and lowercased so that "Ação" and
//! "acao" are the same candidate. A normalized copy of the whole list can be
//! kept on disk to skip the normalization pass on later runs.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use rayon::prelude::*;
use tempfile::NamedTempFile;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::error::{Error, Result};

/// Where the normalized copy of the word list lives, if anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CacheStrategy {
    #[default]
    Disabled,
    File(PathBuf),
}

/// A word list on disk plus its optional cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionarySource {
    pub words: PathBuf,
    pub cache: CacheStrategy,
}

impl DictionarySource {
    pub fn new(words: impl Into<PathBuf>) -> Self {
        Self {
            words: words.into(),
            cache: CacheStrategy::Disabled,
        }
    }

    pub fn with_cache(mut self, cache: impl Into<PathBuf>) -> Self {
        self.cache = CacheStrategy::File(cache.into());
        self
    }
}

/// Strip diacritics and lowercase a word.
///
/// The word is decomposed (NFD), combining marks are dropped and the rest is
/// recomposed (NFC) before lowercasing.
pub fn normalize_word(word: &str) -> String {
    word.nfd()
        .filter(|c| !is_combining_mark(*c))
        .nfc()
        .collect::<String>()
        .to_lowercase()
}

/// Read trimmed lines, keeping blank ones out.
pub fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }
    Ok(lines)
}

fn normalize_all(lines: Vec<String>) -> Vec<String> {
    lines.par_iter().map(|line| normalize_word(line)).collect()
}

/// The candidate word set: every word of one length, normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
    word_length: usize,
}

impl Dictionary {
    /// Build a dictionary from raw words, normalizing and filtering them.
    pub fn from_words<I, S>(words: I, word_length: usize) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let raw: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .collect();
        Self::from_normalized(normalize_all(raw), word_length)
    }

    /// Read one word per line from `reader`.
    pub fn from_reader<R: BufRead>(reader: R, word_length: usize) -> Result<Self> {
        Self::from_normalized(normalize_all(read_lines(reader)?), word_length)
    }

    /// Load the words of `word_length` letters from `source`, going through
    /// the cache when one is configured.
    pub fn load(source: &DictionarySource, word_length: usize) -> Result<Self> {
        let normalized = match &source.cache {
            CacheStrategy::Disabled => read_normalized(&source.words)?,
            CacheStrategy::File(cache) => match read_cache(&source.words, cache) {
                Some(words) => {
                    info!("Using normalized word cache {}", cache.display());
                    words
                }
                None => {
                    let words = read_normalized(&source.words)?;
                    if let Err(err) = write_cache(cache, &words) {
                        warn!("Could not write word cache {}: {}", cache.display(), err);
                    } else {
                        info!("Rebuilt word cache {}", cache.display());
                    }
                    words
                }
            },
        };

        let dictionary = Self::from_normalized(normalized, word_length)?;
        info!(
            "Loaded {} words with {} letters from {}",
            dictionary.len(),
            word_length,
            source.words.display()
        );
        Ok(dictionary)
    }

    fn from_normalized(words: Vec<String>, word_length: usize) -> Result<Self> {
        let total = words.len();
        let words: Vec<String> = words
            .into_iter()
            .filter(|w| w.chars().count() == word_length)
            .collect();
        debug!("Kept {} of {} words with {} letters", words.len(), total, word_length);

        if words.is_empty() {
            return Err(Error::EmptyDictionary {
                length: word_length,
            });
        }
        Ok(Self { words, word_length })
    }

    pub fn word_length(&self) -> usize {
        self.word_length
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Exact membership test; `word` must already be normalized.
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

fn read_normalized(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let lines = read_lines(BufReader::new(file))?;
    debug!("Normalizing {} lines from {}", lines.len(), path.display());
    Ok(normalize_all(lines))
}

/// Returns the cached words when the cache exists and is at least as new as
/// the word list.
fn read_cache(words: &Path, cache: &Path) -> Option<Vec<String>> {
    let cache_modified = fs::metadata(cache).and_then(|m| m.modified()).ok()?;
    if let Ok(words_modified) = fs::metadata(words).and_then(|m| m.modified()) {
        if words_modified > cache_modified {
            debug!("Word cache {} is stale", cache.display());
            return None;
        }
    }

    match File::open(cache).map_err(Error::from).and_then(|f| read_lines(BufReader::new(f))) {
        Ok(lines) if lines.is_empty() => {
            warn!("Ignoring empty word cache {}", cache.display());
            None
        }
        Ok(lines) => Some(lines),
        Err(err) => {
            warn!("Ignoring unreadable word cache {}: {}", cache.display(), err);
            None
        }
    }
}

/// Write the cache next to its final path and rename it into place, so a
/// failed write never leaves a partial cache behind.
fn write_cache(cache: &Path, words: &[String]) -> std::io::Result<()> {
    let dir = cache
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    {
        let mut out = BufWriter::new(tmp.as_file_mut());
        for word in words {
            writeln!(out, "{}", word)?;
        }
        out.flush()?;
    }
    tmp.persist(cache)?;
    Ok(())
}
