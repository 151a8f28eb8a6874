//! Command-line interface definition for wordle-filter
//!
//! Provides argument parsing and conversion into a validated [`FilterConfig`].

use clap::Parser;
use std::path::PathBuf;

use crate::attempt::parse_attempts;
use crate::dictionary::DEFAULT_WORDS_FILE;
use crate::error::Result;
use crate::filter::{Constraints, ExclusionSet};
use crate::output::OutputMode;
use crate::processor::FilterConfig;

/// Wordle helper: list the dictionary words still consistent with your guesses
#[derive(Parser, Debug, Clone)]
#[command(
    name = "wordle-filter",
    author = "m0h1nd4",
    version,
    about = "Cheat at Wordle - list the words still consistent with your guesses",
    long_about = r#"
List every five-letter dictionary word that is still consistent with the
Wordle attempts made so far.

Each ATTEMPT is exactly five characters and encodes the feedback by case:
    S   uppercase - letter is in the word at this position (green)
    s   lowercase - letter is in the word, but not here (yellow)
    .   anything else - no information for this position

Letters that are not in the word at all (grey) go in --exclusions.

EXAMPLES:
    # Guessed "stone": S and T green, N and E green, O grey
    wordle-filter -e o ST.NE

    # Two guesses, "crane" then "plate"
    wordle-filter -e cnplt .Ra.E ..a.E

    # Use another word list
    wordle-filter -w ./words.txt ..a..
"#
)]
pub struct Args {
    /// Attempts made so far, e.g. "ST.nE"
    #[arg(required = true, value_name = "ATTEMPT")]
    pub attempts: Vec<String>,

    /// Letters that are not in the solution
    #[arg(short, long, value_name = "LETTERS")]
    pub exclusions: Option<String>,

    /// Location of the words file
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_WORDS_FILE)]
    pub words_file: PathBuf,

    /// Print only the number of remaining candidates
    #[arg(long, default_value_t = false)]
    pub count: bool,

    /// Print per-stage statistics to stderr
    #[arg(long, default_value_t = false)]
    pub stats: bool,

    /// Quiet mode - errors only
    #[arg(short, long, default_value_t = false, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    /// Log level implied by the verbosity flags
    pub fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else if self.quiet {
            log::LevelFilter::Error
        } else {
            log::LevelFilter::Warn
        }
    }

    pub fn output_mode(&self) -> OutputMode {
        if self.count {
            OutputMode::Count
        } else {
            OutputMode::Words
        }
    }

    /// Validate the attempts and build the run configuration
    pub fn to_config(&self) -> Result<FilterConfig> {
        let attempts = parse_attempts(&self.attempts)?;
        let exclusions = ExclusionSet::new(self.exclusions.as_deref());

        Ok(FilterConfig {
            words_file: self.words_file.clone(),
            constraints: Constraints::new(exclusions, attempts),
            output_mode: self.output_mode(),
            show_stats: self.stats,
        })
    }
}
