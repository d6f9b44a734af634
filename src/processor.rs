//! Core processing engine
//!
//! Loads the dictionary, groups its words into anagram sets and writes the
//! result.

use crate::cli::Args;
use crate::dictionary::{load_dictionary, Dictionary, LoadOptions};
use crate::filter::PatternFilter;
use crate::grouper::{get_anagrams, AnagramReport};
use crate::output::OutputTarget;
use crate::progress::{create_spinner, print_header, print_info, print_success, print_warning, RunStats};

use bytesize::ByteSize;
use colored::*;
use indicatif::ProgressBar;
use std::path::PathBuf;

/// Processor configuration
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    pub dict_file: PathBuf,
    pub case_fold: bool,
    pub min_letters: i64,
    pub pattern: Option<String>,
    pub output: OutputTarget,
    pub sort_output: bool,
    pub buffer_size: usize,
    pub show_stats: bool,
    pub quiet: bool,
}

impl ProcessorConfig {
    pub fn from_args(args: &Args) -> anyhow::Result<Self> {
        Ok(Self {
            dict_file: args.dict_file.clone(),
            case_fold: args.case_fold(),
            min_letters: args.min_letters,
            pattern: args.pattern.clone(),
            output: OutputTarget::from_option(args.output.clone()),
            sort_output: args.sort,
            buffer_size: args.parse_buffer_size()?,
            show_stats: args.stats,
            quiet: args.quiet,
        })
    }

    fn load_options(&self) -> anyhow::Result<LoadOptions> {
        let pattern = match self.pattern.as_deref() {
            Some(p) if !p.is_empty() => Some(PatternFilter::new(p)?),
            _ => None,
        };

        Ok(LoadOptions {
            case_fold: self.case_fold,
            pattern,
        })
    }
}

/// Main processor
pub struct Processor {
    config: ProcessorConfig,
}

impl Processor {
    pub fn new(config: ProcessorConfig) -> Self {
        Self { config }
    }

    /// Run one load, group and write pass
    pub fn run(&self) -> anyhow::Result<RunStats> {
        let mut stats = RunStats::new();

        let dictionary = self.load()?;
        stats.dictionary_bytes = dictionary.bytes;
        stats.words_loaded = dictionary.words.len() as u64;
        stats.words_skipped = dictionary.skipped;

        if dictionary.words.is_empty() && !self.config.quiet {
            print_warning("Dictionary contains no words!");
        }

        let spinner = self.spinner("Grouping anagrams...");
        let report = get_anagrams(&dictionary.words, self.config.min_letters);
        spinner.finish_and_clear();

        stats.distinct_words = report.bucket_stats.unique_count;
        stats.duplicate_words = report.bucket_stats.duplicate_count;
        stats.buckets = report.bucket_count as u64;
        stats.groups = report.match_count as u64;

        stats.lines_written = self.write(&report)?;

        if !self.config.quiet {
            if let OutputTarget::File(ref path) = self.config.output {
                print_success(&format!("Output written to: {:?}", path));
            }
        }
        if self.config.show_stats && !self.config.quiet {
            stats.print_summary();
        }

        Ok(stats)
    }

    fn load(&self) -> anyhow::Result<Dictionary> {
        let options = self.config.load_options()?;

        if !self.config.quiet {
            print_header("Loading dictionary...");
            print_info(&format!("Input: {:?}", self.config.dict_file));
        }

        let spinner = self.spinner("Reading words...");
        let dictionary = load_dictionary(&self.config.dict_file, &options)?;
        spinner.finish_and_clear();

        if !self.config.quiet {
            print_info(&format!(
                "Loaded {} words ({}, {})",
                dictionary.words.len(),
                ByteSize(dictionary.bytes),
                dictionary.encoding
            ));
        }
        log::info!(
            "Loaded {} words from {:?} ({} skipped by pattern)",
            dictionary.words.len(),
            self.config.dict_file,
            dictionary.skipped
        );

        Ok(dictionary)
    }

    fn write(&self, report: &AnagramReport<'_>) -> anyhow::Result<u64> {
        let mut writer = self.config.output.open(self.config.buffer_size)?;

        writer.write_groups(&report.groups, self.config.sort_output)?;
        writer.write_summary(self.config.min_letters, report.match_count)?;
        writer.flush()?;

        Ok(writer.lines_written())
    }

    fn spinner(&self, msg: &str) -> ProgressBar {
        if self.config.quiet {
            ProgressBar::hidden()
        } else {
            create_spinner(&msg.dimmed().to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::DictionaryError;
    use std::io::Write;
    use tempfile::TempDir;

    fn config(dir: &TempDir, words: &str) -> ProcessorConfig {
        let dict_file = dir.path().join("words.txt");
        let mut file = std::fs::File::create(&dict_file).unwrap();
        file.write_all(words.as_bytes()).unwrap();

        ProcessorConfig {
            dict_file,
            case_fold: false,
            min_letters: 4,
            pattern: None,
            output: OutputTarget::File(dir.path().join("out.txt")),
            sort_output: false,
            buffer_size: 1024,
            show_stats: false,
            quiet: true,
        }
    }

    #[test]
    fn test_run_writes_groups() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir, "trap\npart\nrapt\ntarp\ndog\n");

        let stats = Processor::new(config).run().unwrap();
        assert_eq!(stats.words_loaded, 5);
        assert_eq!(stats.groups, 4);
        assert_eq!(stats.lines_written, 5);

        let content = std::fs::read_to_string(dir.path().join("out.txt")).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "trap,part,rapt,tarp");
        assert_eq!(lines[4], "Total valid words with at least 4 letters  = 4");
    }

    #[test]
    fn test_run_with_case_fold_and_pattern() {
        let dir = TempDir::new().unwrap();
        let mut config = config(&dir, "Stop\nPOTS\ntops\nspot\nspot's\n");
        config.case_fold = true;
        config.pattern = Some("^[a-z]+$".to_string());

        let stats = Processor::new(config).run().unwrap();
        assert_eq!(stats.words_loaded, 4);
        assert_eq!(stats.words_skipped, 1);
        assert_eq!(stats.groups, 4);
    }

    #[test]
    fn test_run_missing_dictionary() {
        let dir = TempDir::new().unwrap();
        let mut config = config(&dir, "");
        config.dict_file = dir.path().join("missing.txt");

        assert!(Processor::new(config).run().is_err());
    }

    #[test]
    fn test_run_directory_as_dictionary() {
        let dir = TempDir::new().unwrap();
        let mut config = config(&dir, "");
        config.dict_file = dir.path().to_path_buf();

        let err = Processor::new(config).run().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DictionaryError>(),
            Some(DictionaryError::NotAFile { .. })
        ));
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let dir = TempDir::new().unwrap();
        let mut config = config(&dir, "word\n");
        config.pattern = Some("[a-".to_string());

        assert!(Processor::new(config).run().is_err());
    }
}
