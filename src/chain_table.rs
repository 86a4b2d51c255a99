//! Fixed-bucket chained hash table over words.
//!
//! This module defines [`ChainTable`], the bucket array that backs a
//! [`HashDictionary`](crate::HashDictionary), together with the
//! [`CollisionStats`] accumulated while it is filled. The table is sized once
//! at construction and never grows; colliding words are appended to a
//! per-bucket chain in insertion order.
//!
//! Users generally interact with this indirectly via `HashDictionary`, but
//! the table is exposed read-only for chain inspection.

use rustc_hash::FxHashMap;
use serde::Serialize;
use std::fmt;

/// Statistics gathered while a table is constructed.
///
/// `collisions` counts insertions that landed on an occupied bucket with a
/// word the chain did not already contain. Duplicate words are dropped
/// without counting. `longest_chain` is the longest chain length reached
/// during construction; it only moves when a chain grows past one element,
/// so a collision-free table reports `0`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CollisionStats {
    pub collisions: usize,
    pub longest_chain: usize,
}

impl fmt::Display for CollisionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "There are {} collisions in the table.", self.collisions)?;
        write!(f, "Longest chain is {}", self.longest_chain)
    }
}

/// A fixed number of buckets, each either empty or owning a chain of words.
///
/// Collision resolution is separate chaining: every word whose hash maps to
/// an occupied bucket is appended to that bucket's `Vec<String>`. A chain
/// never contains the same word twice.
#[derive(Debug)]
pub struct ChainTable {
    slots: Vec<Option<Vec<String>>>,
    multiplier: isize,
}

impl ChainTable {
    /// Creates an empty table. `len` must be positive; `HashDictionary`
    /// rejects degenerate inputs before calling this.
    pub(crate) fn new(len: usize, multiplier: isize) -> Self {
        let mut slots = Vec::with_capacity(len);
        slots.resize_with(len, || None);
        ChainTable { slots, multiplier }
    }

    /// Computes the bucket index for a word.
    ///
    /// Polynomial rolling hash over the word's code points, accumulated in a
    /// wrapping `isize`. Overflow is intentional and feeds dispersion, so the
    /// remainder can come out negative; the absolute value folds it back
    /// into `0..len`.
    pub fn hash_index(&self, word: &str) -> usize {
        let mut h: isize = 0;
        for ch in word.chars() {
            h = self.multiplier.wrapping_mul(h).wrapping_add(ch as isize);
        }
        (h % self.slots.len() as isize).unsigned_abs() as usize
    }

    /// Inserts one word, updating `stats` per the collision rules.
    pub(crate) fn insert(&mut self, word: &str, stats: &mut CollisionStats) {
        let index = self.hash_index(word);
        self.insert_at(index, word, stats);
    }

    /// Insertion with a precomputed bucket index (parallel hash path).
    pub(crate) fn insert_at(&mut self, index: usize, word: &str, stats: &mut CollisionStats) {
        let slot = &mut self.slots[index];
        match slot {
            Some(chain) => {
                if chain.iter().any(|w| w == word) {
                    return;
                }
                chain.push(word.to_string());
                stats.collisions += 1;
                if chain.len() > stats.longest_chain {
                    stats.longest_chain = chain.len();
                }
            }
            None => {
                *slot = Some(vec![word.to_string()]);
            }
        }
    }

    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The chain at a bucket index, if one was created there.
    pub fn chain_at(&self, index: usize) -> Option<&[String]> {
        self.slots.get(index).and_then(|slot| slot.as_deref())
    }

    /// Whether the word was inserted into the table.
    pub fn contains(&self, word: &str) -> bool {
        match self.chain_at(self.hash_index(word)) {
            Some(chain) => chain.iter().any(|w| w == word),
            None => false,
        }
    }

    /// Iterates the chains that exist, with their bucket indices.
    pub fn chains(&self) -> impl Iterator<Item = (usize, &[String])> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_deref().map(|chain| (i, chain)))
    }

    /// Maps chain length -> number of buckets holding a chain of that length.
    /// Empty buckets are not counted.
    pub fn chain_length_distribution(&self) -> FxHashMap<usize, usize> {
        let mut distribution = FxHashMap::default();
        for (_, chain) in self.chains() {
            *distribution.entry(chain.len()).or_insert(0) += 1;
        }
        distribution
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_index_is_deterministic() {
        let table = ChainTable::new(13, 31);
        for word in ["cat", "dog", "zebra", "licht", ""] {
            assert_eq!(table.hash_index(word), table.hash_index(word));
        }
    }

    #[test]
    fn hash_index_stays_in_range() {
        let table = ChainTable::new(7, 31);
        // Long words overflow the accumulator many times over
        let words = ["a", "antidisestablishmentarianism", "ääääääääääääääääääää", "\u{10FFFF}"];
        for word in words {
            assert!(table.hash_index(word) < table.len());
        }
    }

    #[test]
    fn empty_word_lands_in_bucket_zero() {
        let table = ChainTable::new(5, 31);
        assert_eq!(table.hash_index(""), 0);
    }

    #[test]
    fn single_bucket_maps_everything_to_zero() {
        let table = ChainTable::new(1, 7);
        assert_eq!(table.hash_index("anything"), 0);
        assert_eq!(table.hash_index("at"), 0);
    }

    #[test]
    fn insert_counts_collisions_and_skips_duplicates() {
        let mut table = ChainTable::new(1, 31);
        let mut stats = CollisionStats::default();

        table.insert("cat", &mut stats);
        assert_eq!(stats.collisions, 0);
        assert_eq!(stats.longest_chain, 0);

        table.insert("dog", &mut stats);
        assert_eq!(stats.collisions, 1);
        assert_eq!(stats.longest_chain, 2);

        // Duplicate: dropped, nothing counted
        table.insert("cat", &mut stats);
        assert_eq!(stats.collisions, 1);
        assert_eq!(table.chain_at(0).unwrap(), &["cat", "dog"]);
    }

    #[test]
    fn reinserting_a_sequence_changes_nothing() {
        let words = ["alpha", "beta", "gamma", "delta", "epsilon"];

        let mut once = ChainTable::new(2, 31);
        let mut once_stats = CollisionStats::default();
        for word in words {
            once.insert(word, &mut once_stats);
        }

        let mut twice = ChainTable::new(2, 31);
        let mut twice_stats = CollisionStats::default();
        for word in words.iter().copied().chain(words.iter().copied()) {
            twice.insert(word, &mut twice_stats);
        }

        assert_eq!(once_stats, twice_stats);
        for i in 0..once.len() {
            assert_eq!(once.chain_at(i), twice.chain_at(i));
        }
    }

    #[test]
    fn chains_never_hold_duplicates() {
        let mut table = ChainTable::new(3, 31);
        let mut stats = CollisionStats::default();
        for word in ["x", "y", "x", "z", "y", "x"] {
            table.insert(word, &mut stats);
        }
        for (_, chain) in table.chains() {
            for word in chain {
                assert_eq!(chain.iter().filter(|w| *w == word).count(), 1);
            }
        }
    }

    #[test]
    fn distribution_counts_buckets_by_chain_length() {
        let mut table = ChainTable::new(1, 31);
        let mut stats = CollisionStats::default();
        for word in ["one", "two", "three"] {
            table.insert(word, &mut stats);
        }
        let distribution = table.chain_length_distribution();
        assert_eq!(distribution.get(&3), Some(&1));
        assert_eq!(distribution.len(), 1);
    }

    #[test]
    fn stats_display_matches_report_format() {
        let stats = CollisionStats {
            collisions: 4,
            longest_chain: 3,
        };
        assert_eq!(
            stats.to_string(),
            "There are 4 collisions in the table.\nLongest chain is 3"
        );
    }
}
