//! Word filtering module
//!
//! Provides the minimum-length filter that selects anagram query words and
//! the regex filter applied to dictionary lines at load time.

use regex::Regex;

/// Length of a word in letters
#[inline]
pub fn word_length(word: &str) -> usize {
    // Fast byte-length check for ASCII-only words
    if word.is_ascii() {
        word.len()
    } else {
        word.chars().count()
    }
}

/// Minimum-length filter for query words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinLengthFilter {
    min_length: i64,
}

impl MinLengthFilter {
    /// Any `min_length <= 0` accepts every word, including the empty one
    pub fn new(min_length: i64) -> Self {
        Self { min_length }
    }

    #[inline]
    pub fn matches(&self, word: &str) -> bool {
        if self.min_length <= 0 {
            return true;
        }
        word_length(word) as u64 >= self.min_length as u64
    }
}

/// Words of `words` with at least `min_length` letters, in input order
pub fn filter_valid<'a, S: AsRef<str>>(words: &'a [S], min_length: i64) -> Vec<&'a str> {
    let filter = MinLengthFilter::new(min_length);

    words
        .iter()
        .map(|word| word.as_ref())
        .filter(|word| filter.matches(word))
        .collect()
}

/// Pattern-only filter (no length restriction)
#[derive(Debug, Clone)]
pub struct PatternFilter {
    pattern: Regex,
}

impl PatternFilter {
    pub fn new(pattern: &str) -> anyhow::Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| anyhow::anyhow!("Invalid regex pattern '{}': {}", pattern, e))?;

        Ok(Self { pattern: regex })
    }

    #[inline]
    pub fn matches(&self, word: &str) -> bool {
        self.pattern.is_match(word)
    }

    pub fn pattern_str(&self) -> &str {
        self.pattern.as_str()
    }
}

/// Helper to validate a regex pattern before use
pub fn validate_pattern(pattern: &str) -> anyhow::Result<()> {
    Regex::new(pattern)
        .map_err(|e| anyhow::anyhow!("Invalid regex pattern '{}': {}", pattern, e))?;
    Ok(())
}

/// Common patterns for dictionary cleanup
pub mod patterns {
    /// Only lowercase letters (drops proper nouns and possessives)
    pub const LOWERCASE_ONLY: &str = r"^[a-z]+$";

    /// Letters in any script
    pub const UNICODE_LETTERS: &str = r"^\p{L}+$";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_length_filter() {
        let filter = MinLengthFilter::new(4);

        assert!(filter.matches("trap"));
        assert!(filter.matches("traps"));
        assert!(!filter.matches("tap"));
        assert!(!filter.matches(""));
    }

    #[test]
    fn test_non_positive_min_length() {
        for min in [0, -1, i64::MIN] {
            let filter = MinLengthFilter::new(min);
            assert!(filter.matches(""));
            assert!(filter.matches("a"));
        }
    }

    #[test]
    fn test_unicode_length() {
        let filter = MinLengthFilter::new(5);

        assert!(filter.matches("hëllo")); // 5 unicode chars
        assert!(!filter.matches("ëlle")); // 5 bytes, 4 chars
    }

    #[test]
    fn test_filter_valid_preserves_order() {
        let words = ["stop", "a", "pots", "to", "tops", "spot"];
        assert_eq!(filter_valid(&words, 3), vec!["stop", "pots", "tops", "spot"]);
        assert_eq!(filter_valid(&words, 0), words.to_vec());
    }

    #[test]
    fn test_filter_valid_monotonic() {
        let words = ["", "a", "ab", "abc", "abcd", "bcd", "b"];
        let mut previous = usize::MAX;

        for min in -2..=6 {
            let len = filter_valid(&words, min).len();
            assert!(len <= previous);
            previous = len;
        }
        assert_eq!(previous, 0);
    }

    #[test]
    fn test_pattern_filter() {
        let filter = PatternFilter::new(patterns::LOWERCASE_ONLY).unwrap();

        assert!(filter.matches("trap"));
        assert!(!filter.matches("Trap"));
        assert!(!filter.matches("trap's"));
        assert_eq!(filter.pattern_str(), patterns::LOWERCASE_ONLY);
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(validate_pattern("[a-z").is_err());
        assert!(PatternFilter::new("(unclosed").is_err());
        assert!(validate_pattern(patterns::UNICODE_LETTERS).is_ok());
    }
}
