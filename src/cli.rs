//! Command-line interface definition for anagram-sets
//!
//! Provides argument parsing and validation for the anagram finder.

use clap::Parser;
use std::path::PathBuf;

/// Default minimum word length for query words
pub const DEFAULT_MIN_LETTERS: i64 = 4;

/// Find anagram sets in a dictionary file
///
/// Groups words that are letter-permutations of one another.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "anagram-sets",
    author = "m0h1nd4",
    version,
    about = "Find all anagram sets in a dictionary file",
    long_about = r#"
Find all anagrams of each word in a newline-separated dictionary file.

Every word is reduced to its letters in sorted order; words sharing that key
are anagrams. For each word with at least --min-letters letters, its anagram
set is printed with the word itself first, provided the set holds at least as
many words as the word has letters.

EXAMPLES:
    # Anagram sets of 4+ letter words
    anagram-sets --dict-file words.txt

    # Ignore capitalisation
    anagram-sets --dict-file words.txt --caps

    # Only plain lowercase words, at least 5 letters, into a file
    anagram-sets -d words.txt -m 5 -p "^[a-z]+$" -o anagrams.txt

OUTPUT:
    acts,cast,cats,scat
    ales,leas,sale,seal
    ...
    Total valid words with at least 4 letters  = 1234
"#
)]
pub struct Args {
    /// Newline-separated dictionary file to read words from
    #[arg(short, long, required = true, value_name = "PATH")]
    pub dict_file: PathBuf,

    /// Lower-case every word before grouping
    #[arg(long, default_value_t = false, overrides_with = "no_caps")]
    pub caps: bool,

    /// Keep words exactly as written (default)
    #[arg(long, default_value_t = false, overrides_with = "caps")]
    pub no_caps: bool,

    /// Minimum number of letters in a word to return its anagrams
    #[arg(
        short,
        long,
        visible_alias = "min_letters",
        value_name = "NUM",
        default_value_t = DEFAULT_MIN_LETTERS,
        allow_negative_numbers = true
    )]
    pub min_letters: i64,

    /// Only keep dictionary words matching this regex
    #[arg(short, long, value_name = "PATTERN")]
    pub pattern: Option<String>,

    /// Write groups to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Sort output lines alphabetically
    #[arg(long, default_value_t = false)]
    pub sort: bool,

    /// Show detailed statistics
    #[arg(long, default_value_t = false)]
    pub stats: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Buffer size for writing output (default: 64KB)
    #[arg(long, value_name = "SIZE", default_value = "64KB")]
    pub buffer_size: String,
}

impl Args {
    /// Whether words are case-folded before grouping
    pub fn case_fold(&self) -> bool {
        self.caps && !self.no_caps
    }

    /// Parse buffer size string to bytes
    pub fn parse_buffer_size(&self) -> anyhow::Result<usize> {
        let size = parse_size(&self.buffer_size)?;
        if size == 0 {
            anyhow::bail!("Buffer size must be greater than zero");
        }
        Ok(size)
    }
}

/// Parse human-readable size string to bytes
pub fn parse_size(size_str: &str) -> anyhow::Result<usize> {
    let size_str = size_str.trim().to_uppercase();

    let (num_str, multiplier) = if let Some(n) = size_str.strip_suffix("GB") {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = size_str.strip_suffix("MB") {
        (n, 1024 * 1024)
    } else if let Some(n) = size_str.strip_suffix("KB") {
        (n, 1024)
    } else if let Some(n) = size_str.strip_suffix('B') {
        (n, 1)
    } else {
        (size_str.as_str(), 1)
    };

    let num: usize = num_str
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid size format: '{}'", size_str))?;

    num.checked_mul(multiplier)
        .ok_or_else(|| anyhow::anyhow!("Size too large: '{}'", size_str))
}
