//! Anagram grouping
//!
//! Builds buckets from the full word list, then reports one group for every
//! distinct query word whose bucket passes the qualification rule.

use crate::buckets::{build_buckets, BucketStats};
use crate::canonical::canonical_key;
use crate::filter::filter_valid;

use ahash::RandomState;
use hashbrown::HashSet;
use std::fmt;

/// A query word followed by the other members of its bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnagramGroup<'a> {
    words: Vec<&'a str>,
}

impl<'a> AnagramGroup<'a> {
    /// The word this group was reported for
    pub fn query(&self) -> &'a str {
        self.words[0]
    }

    pub fn words(&self) -> &[&'a str] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl fmt::Display for AnagramGroup<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.words.join(","))
    }
}

/// Result of one grouping run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnagramReport<'a> {
    pub groups: Vec<AnagramGroup<'a>>,
    /// Number of query words with a qualifying bucket (equals `groups.len()`)
    pub match_count: usize,
    pub bucket_count: usize,
    pub bucket_stats: BucketStats,
}

/// Put `query` first, followed by the rest of `bucket` in bucket order
///
/// `query` is expected to be a member of `bucket`.
pub fn format_group<'a>(bucket: &[&'a str], query: &'a str) -> Vec<&'a str> {
    let mut group = Vec::with_capacity(bucket.len());
    group.push(query);
    group.extend(bucket.iter().copied().filter(|word| *word != query));
    group
}

/// Group `words` into anagram sets
///
/// Buckets are built from every word, so words shorter than `min_length`
/// still count toward a longer word's bucket. A bucket qualifies when it
/// holds at least as many distinct words as its key has letters.
pub fn get_anagrams<'a, S: AsRef<str>>(words: &'a [S], min_length: i64) -> AnagramReport<'a> {
    let buckets = build_buckets(words);
    let candidates = filter_valid(words, min_length);

    let mut queried: HashSet<&str, RandomState> =
        HashSet::with_capacity_and_hasher(candidates.len(), RandomState::new());
    let mut groups = Vec::new();

    for query in candidates {
        if !queried.insert(query) {
            continue;
        }

        let key = canonical_key(query);
        let Some(bucket) = buckets.get(&key) else {
            continue;
        };

        if bucket.len() >= key.letter_count() {
            groups.push(AnagramGroup {
                words: format_group(bucket, query),
            });
        }
    }

    log::debug!(
        "{} of {} query words have a qualifying anagram set",
        groups.len(),
        queried.len()
    );

    AnagramReport {
        match_count: groups.len(),
        bucket_count: buckets.len(),
        bucket_stats: buckets.stats(),
        groups,
    }
}
