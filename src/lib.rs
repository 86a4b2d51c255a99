//! Fixed-bucket word hash dictionary with separate chaining.
//!
//! A [`HashDictionary`] consumes an ordered sequence of words and a
//! multiplier constant (conventionally prime, see [`primes`]), hashes each
//! word with a multiplicative polynomial hash, and chains collisions inside
//! a table deliberately sized to half the word count. Construction is
//! one-shot: the finished table is read-only, and the collision statistics
//! gathered on the way in are the primary output.
//!
//! ```
//! use hashdict::HashDictionary;
//!
//! let words: Vec<String> = ["cat", "dog", "bird", "fish"]
//!     .iter()
//!     .map(|w| w.to_string())
//!     .collect();
//! let dict = HashDictionary::from_words(&words, 31).unwrap();
//! assert_eq!(dict.table_len(), 2);
//! assert!(dict.contains("cat"));
//! ```

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::path::Path;

pub mod chain_table;
pub mod primes;
pub mod utils;
pub mod word_list;

pub use crate::chain_table::{ChainTable, CollisionStats};
pub use crate::word_list::{DictionaryError, WordList};

/// A hash table over a word list, plus the collision statistics observed
/// while it was built.
#[derive(Debug)]
pub struct HashDictionary {
    table: ChainTable,
    stats: CollisionStats,
    word_count: usize,
    multiplier: isize,
}

impl HashDictionary {
    /// Builds a dictionary from the words in input order.
    ///
    /// The table gets `words.len() / 2` buckets (load factor ~2 on purpose,
    /// to exercise the chains). Fails with
    /// [`DictionaryError::InvalidInput`] when that computes to zero, since
    /// hashing needs a positive modulus.
    pub fn from_words(words: &[String], multiplier: isize) -> Result<Self, DictionaryError> {
        Self::from_words_with(words, multiplier, true)
    }

    /// Like [`HashDictionary::from_words`], with explicit control over the
    /// parallel hash precompute.
    ///
    /// The parallel path only moves the hash computation onto rayon; words
    /// are still inserted in input order, so collision counts, chains, and
    /// the longest-chain value are identical to the sequential path.
    pub fn from_words_with(
        words: &[String],
        multiplier: isize,
        is_parallel: bool,
    ) -> Result<Self, DictionaryError> {
        let table_len = words.len() / 2;
        if table_len == 0 {
            return Err(DictionaryError::InvalidInput(format!(
                "word list of {} word(s) sizes the table to 0 buckets",
                words.len()
            )));
        }

        let mut table = ChainTable::new(table_len, multiplier);
        let mut stats = CollisionStats::default();

        if is_parallel {
            let indices: Vec<usize> = words
                .par_iter()
                .map(|word| table.hash_index(word))
                .collect();
            for (word, index) in words.iter().zip(indices) {
                table.insert_at(index, word, &mut stats);
            }
        } else {
            for word in words {
                table.insert(word, &mut stats);
            }
        }

        Ok(HashDictionary {
            table,
            stats,
            word_count: words.len(),
            multiplier,
        })
    }

    /// Loads a word file and builds the dictionary from it.
    pub fn from_file<P: AsRef<Path>>(path: P, multiplier: isize) -> Result<Self, DictionaryError> {
        let word_list = WordList::from_file(path)?;
        Self::from_words(word_list.words(), multiplier)
    }

    /// Collisions recorded during construction.
    pub fn collisions(&self) -> usize {
        self.stats.collisions
    }

    /// Longest chain length reached during construction.
    pub fn longest_chain(&self) -> usize {
        self.stats.longest_chain
    }

    pub fn stats(&self) -> &CollisionStats {
        &self.stats
    }

    /// Number of buckets in the table.
    pub fn table_len(&self) -> usize {
        self.table.len()
    }

    /// Number of words consumed, duplicates included.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn multiplier(&self) -> isize {
        self.multiplier
    }

    /// The underlying table, read-only.
    pub fn table(&self) -> &ChainTable {
        &self.table
    }

    pub fn contains(&self, word: &str) -> bool {
        self.table.contains(word)
    }

    /// The chain at a bucket index, if any.
    pub fn chain_at(&self, index: usize) -> Option<&[String]> {
        self.table.chain_at(index)
    }

    /// Chain length -> bucket count, for load inspection.
    pub fn chain_length_distribution(&self) -> FxHashMap<usize, usize> {
        self.table.chain_length_distribution()
    }

    /// The two-line human-readable collision report.
    pub fn report(&self) -> String {
        self.stats.to_string()
    }
}
