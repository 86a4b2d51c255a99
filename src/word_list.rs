//! Word-list supplier.
//!
//! A [`WordList`] is the ordered, duplicate-preserving sequence of words a
//! [`HashDictionary`](crate::HashDictionary) is built from. Lists come from
//! line-oriented word files ([`WordList::from_lines`] /
//! [`WordList::from_file`]) or from running prose ([`WordList::from_text`]),
//! which strips punctuation with a word-token pattern. Words are
//! case-sensitive and kept exactly in input order.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::path::Path;
use std::{fs, io};

/// Word tokens: runs of letters or digits, with embedded apostrophes kept
/// so contractions survive tokenizing.
static WORD_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{L}\p{N}]+(?:'[\p{L}\p{N}]+)*").unwrap());

/// An ordered sequence of words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Wraps an already assembled word sequence.
    pub fn new(words: Vec<String>) -> Self {
        WordList { words }
    }

    /// Loads a word file from disk.
    ///
    /// Word files are line-oriented; see [`WordList::from_lines`] for the
    /// format.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path_str = path.as_ref().to_string_lossy().into_owned();
        let content = fs::read_to_string(&path).map_err(|err| {
            DictionaryError::IoError(format!("Failed to read file {}: {}", path_str, err))
        })?;
        Ok(Self::from_lines(&content))
    }

    /// Parses line-oriented word-list content.
    ///
    /// Each line holds one or more whitespace-separated words; blank lines
    /// are skipped. Words are taken verbatim, so punctuation stays attached.
    pub fn from_lines(content: &str) -> Self {
        let mut words = Vec::new();
        for line in content.lines() {
            words.extend(line.split_whitespace().map(str::to_string));
        }
        WordList { words }
    }

    /// Extracts word tokens from running prose, dropping punctuation.
    pub fn from_text(content: &str) -> Self {
        let words = WORD_TOKEN
            .find_iter(content)
            .map(|m| m.as_str().to_string())
            .collect();
        WordList { words }
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

    pub fn into_words(self) -> Vec<String> {
        self.words
    }
}

/// Errors raised while assembling or sizing a dictionary.
///
/// # Variants
/// - `InvalidInput(String)`: the word list is too short, so the table length
///   computes to zero and construction cannot proceed.
/// - `IoError(String)`: a word file could not be read.
#[derive(Debug)]
pub enum DictionaryError {
    InvalidInput(String),
    IoError(String),
}

impl std::fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DictionaryError::InvalidInput(msg) => write!(f, "Invalid Input: {}", msg),
            DictionaryError::IoError(msg) => write!(f, "I/O Error: {}", msg),
        }
    }
}

impl Error for DictionaryError {}

impl From<io::Error> for DictionaryError {
    fn from(err: io::Error) -> Self {
        DictionaryError::IoError(err.to_string())
    }
}
