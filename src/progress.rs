//! Progress display module
//!
//! Styled status messages, spinner and run statistics. Everything here goes
//! to stderr so stdout only carries anagram groups.

use bytesize::ByteSize;
use colored::*;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::{Duration, Instant};

/// Print the application banner
pub fn print_banner() {
    let banner = r#"
╔══════════════════════════════════════════════════════════╗
║                                                          ║
║     ▄▀█ █▄░█ ▄▀█ █▀▀ █▀█ ▄▀█ █▀▄▀█   █▀ █▀▀ ▀█▀ █▀      ║
║     █▀█ █░▀█ █▀█ █▄█ █▀▄ █▀█ █░▀░█   ▄█ ██▄ ░█░ ▄█      ║
║                                                          ║
║            Letter-permutation sets from word lists       ║
║                                              v1.0.0      ║
╚══════════════════════════════════════════════════════════╝
"#;

    eprintln!("{}", banner.green());
}

/// Print a section header
pub fn print_header(text: &str) {
    eprintln!("\n{} {}", "▶".green(), text.green().bold());
}

/// Print an info message
pub fn print_info(text: &str) {
    eprintln!("  {} {}", "ℹ".cyan(), text);
}

/// Print a success message
pub fn print_success(text: &str) {
    eprintln!("  {} {}", "✔".green(), text.green());
}

/// Print a warning message
pub fn print_warning(text: &str) {
    eprintln!("  {} {}", "⚠".yellow(), text.yellow());
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".red(), text.red());
}

/// Create a styled spinner for indeterminate progress
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());

    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "),
    );

    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}

/// Statistics for one run
#[derive(Debug, Clone)]
pub struct RunStats {
    pub dictionary_bytes: u64,
    pub words_loaded: u64,
    pub words_skipped: u64,
    pub distinct_words: u64,
    pub duplicate_words: u64,
    pub buckets: u64,
    pub groups: u64,
    pub lines_written: u64,
    pub start_time: Instant,
}

impl RunStats {
    pub fn new() -> Self {
        Self {
            dictionary_bytes: 0,
            words_loaded: 0,
            words_skipped: 0,
            distinct_words: 0,
            duplicate_words: 0,
            buckets: 0,
            groups: 0,
            lines_written: 0,
            start_time: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn words_per_second(&self) -> f64 {
        let elapsed = self.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            self.words_loaded as f64 / elapsed
        } else {
            0.0
        }
    }

    /// Print final statistics
    pub fn print_summary(&self) {
        eprintln!();
        eprintln!("{}", "═".repeat(60).green());
        eprintln!("{}", "                    GROUPING COMPLETE".green().bold());
        eprintln!("{}", "═".repeat(60).green());
        eprintln!();

        eprintln!("  {} {}", "Dictionary size:".green(), ByteSize(self.dictionary_bytes));
        eprintln!("  {} {}", "Words loaded:   ".green(), format_number(self.words_loaded));
        if self.words_skipped > 0 {
            eprintln!("  {} {}", "Pattern skipped:".yellow(), format_number(self.words_skipped));
        }
        eprintln!("  {} {}", "Distinct words: ".green(), format_number(self.distinct_words));
        eprintln!("  {} {}", "Duplicates:     ".yellow(), format_number(self.duplicate_words));
        eprintln!("  {} {}", "Anagram keys:   ".green(), format_number(self.buckets));
        eprintln!(
            "  {} {}",
            "Groups emitted: ".green().bold(),
            format_number(self.groups).green().bold()
        );

        eprintln!();
        eprintln!("  {} {}", "Duration:       ".green(), format_duration(self.elapsed()));
        eprintln!("  {} {:.2} words/sec", "Throughput:     ".green(), self.words_per_second());
        eprintln!();
        eprintln!("{}", "═".repeat(60).green());
    }
}

impl Default for RunStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a number with thousand separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

/// Format duration as human-readable string
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();

    if secs < 60 {
        format!("{:.1}s", duration.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    }
}
