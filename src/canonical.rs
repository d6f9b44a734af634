//! Canonical keys
//!
//! A word's canonical key is its characters sorted into `char` order. Two
//! words share a key exactly when one is a letter-permutation of the other.

use std::fmt;

/// Sorted-character form of a word, used to identify its anagram class
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    /// Number of letters in the key (equal to the source word's `char` count)
    #[inline]
    pub fn letter_count(&self) -> usize {
        if self.0.is_ascii() {
            self.0.len()
        } else {
            self.0.chars().count()
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compute the canonical key of a word
///
/// Total over all strings; the empty word maps to the empty key.
pub fn canonical_key(word: &str) -> CanonicalKey {
    // Fast path for ASCII: sort bytes directly
    if word.is_ascii() {
        let mut bytes = word.as_bytes().to_vec();
        bytes.sort_unstable();
        // Sorting ASCII bytes keeps the buffer valid UTF-8
        return CanonicalKey(bytes.into_iter().map(char::from).collect());
    }

    let mut chars: Vec<char> = word.chars().collect();
    chars.sort_unstable();
    CanonicalKey(chars.into_iter().collect())
}
