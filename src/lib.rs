//! # Anagram Sets
//!
//! Finds anagram sets in a dictionary: words that are letter-permutations of
//! one another.
//!
//! ## How it works
//!
//! - **Canonical keys**: every word is reduced to its letters in sorted order
//! - **Buckets**: words sharing a key are collected in first-seen order,
//!   repeated words dropped
//! - **Groups**: each distinct word with at least `min_letters` letters
//!   reports its bucket with itself listed first, provided the bucket holds
//!   at least as many words as the word has letters
//!
//! ## Usage
//!
//! ```bash
//! anagram-sets --dict-file words.txt
//! anagram-sets --dict-file words.txt --caps --min-letters 5
//! ```
//!
//! ## Example
//!
//! ```rust
//! use anagram_sets::grouper::get_anagrams;
//!
//! let words = ["trap", "part", "rapt", "tarp"];
//! let report = get_anagrams(&words, 4);
//!
//! assert_eq!(report.match_count, 4);
//! assert_eq!(report.groups[1].to_string(), "part,trap,rapt,tarp");
//! ```

pub mod buckets;
pub mod canonical;
pub mod cli;
pub mod dictionary;
pub mod filter;
pub mod grouper;
pub mod output;
pub mod processor;
pub mod progress;

pub use buckets::{build_buckets, Buckets};
pub use canonical::{canonical_key, CanonicalKey};
pub use cli::Args;
pub use filter::filter_valid;
pub use grouper::{format_group, get_anagrams, AnagramGroup, AnagramReport};
pub use processor::{Processor, ProcessorConfig};
