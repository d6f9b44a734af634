//! Anagram Sets - find letter-permutation groups in a dictionary
//!
//! Main entry point for the command-line application.

use clap::Parser;
use std::process;

use anagram_sets::cli::Args;
use anagram_sets::processor::{Processor, ProcessorConfig};
use anagram_sets::progress::{print_banner, print_error, print_header, print_info};

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging; RUST_LOG still wins when set
    let level = if args.verbose {
        "debug"
    } else if args.quiet {
        "warn"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(args) {
        print_error(&format!("{}", e));

        // Print chain of errors
        let mut source = e.source();
        while let Some(err) = source {
            print_error(&format!("  Caused by: {}", err));
            source = err.source();
        }

        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    if !args.quiet {
        print_banner();
    }

    validate_args(&args)?;

    let config = ProcessorConfig::from_args(&args)?;

    if !args.quiet && args.verbose {
        print_config(&config);
    }

    Processor::new(config).run()?;

    Ok(())
}

/// Validate command-line arguments
fn validate_args(args: &Args) -> anyhow::Result<()> {
    if let Some(ref pattern) = args.pattern {
        anagram_sets::filter::validate_pattern(pattern)?;
    }

    args.parse_buffer_size()?;

    Ok(())
}

/// Print configuration summary
fn print_config(config: &ProcessorConfig) {
    print_header("Configuration");

    print_info(&format!("Dictionary:   {:?}", config.dict_file));
    print_info(&format!("Case fold:    {}", config.case_fold));
    print_info(&format!("Min letters:  {}", config.min_letters));

    if let Some(ref pattern) = config.pattern {
        print_info(&format!("Pattern:      {}", pattern));
    }

    print_info(&format!("Output:       {:?}", config.output));
    print_info(&format!("Sorted:       {}", config.sort_output));
    print_info(&format!("Buffer size:  {} KB", config.buffer_size / 1024));
}
