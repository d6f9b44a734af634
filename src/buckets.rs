//! Anagram buckets
//!
//! Maps each canonical key to the distinct words sharing it, in the order
//! they were first seen. A word inserted twice keeps its first position.

use crate::canonical::{canonical_key, CanonicalKey};

use ahash::RandomState;
use hashbrown::HashMap;

/// Statistics for bucket construction
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BucketStats {
    /// Total words offered to the buckets
    pub total_processed: u64,
    /// Words stored (first occurrence within their bucket)
    pub unique_count: u64,
    /// Repeated words dropped
    pub duplicate_count: u64,
}

impl BucketStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_unique(&mut self) {
        self.total_processed += 1;
        self.unique_count += 1;
    }

    pub fn record_duplicate(&mut self) {
        self.total_processed += 1;
        self.duplicate_count += 1;
    }
}

/// Canonical key to ordered, de-duplicated words
#[derive(Debug, Default)]
pub struct Buckets<'a> {
    map: HashMap<CanonicalKey, Vec<&'a str>, RandomState>,
    stats: BucketStats,
}

impl<'a> Buckets<'a> {
    pub fn new() -> Self {
        Self {
            map: HashMap::with_hasher(RandomState::new()),
            stats: BucketStats::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
            stats: BucketStats::new(),
        }
    }

    /// Bucket for `key`, created empty on first access
    pub fn entry(&mut self, key: CanonicalKey) -> &mut Vec<&'a str> {
        self.map.entry(key).or_default()
    }

    /// Add a word to its bucket
    /// Returns true if the word was not already in the bucket
    pub fn insert(&mut self, word: &'a str) -> bool {
        let bucket = self.map.entry(canonical_key(word)).or_default();

        if bucket.contains(&word) {
            self.stats.record_duplicate();
            return false;
        }

        bucket.push(word);
        self.stats.record_unique();
        true
    }

    /// Words sharing `key`, if any were inserted
    pub fn get(&self, key: &CanonicalKey) -> Option<&[&'a str]> {
        self.map.get(key).map(Vec::as_slice)
    }

    /// Words sharing the canonical key of `word`
    pub fn bucket_of(&self, word: &str) -> Option<&[&'a str]> {
        self.get(&canonical_key(word))
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CanonicalKey, &[&'a str])> {
        self.map.iter().map(|(k, v)| (k, v.as_slice()))
    }

    pub fn stats(&self) -> BucketStats {
        self.stats
    }
}

/// Bucket every word of `words` by its canonical key
///
/// Input order decides position within a bucket; repeats are dropped.
pub fn build_buckets<'a, S: AsRef<str>>(words: &'a [S]) -> Buckets<'a> {
    let mut buckets = Buckets::with_capacity(words.len());

    for word in words {
        buckets.insert(word.as_ref());
    }

    log::debug!(
        "Built {} buckets from {} words ({} duplicates dropped)",
        buckets.len(),
        words.len(),
        buckets.stats().duplicate_count
    );

    buckets
}
