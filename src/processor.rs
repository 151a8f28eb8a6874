//! Core processing engine
//!
//! Loads the dictionary, runs the filter pipeline and prints the survivors.

use std::path::PathBuf;

use crate::dictionary::load_dictionary;
use crate::error::Result;
use crate::filter::{five_letter_words, Constraints};
use crate::output::{print_candidates, OutputMode};
use crate::report::FilterStats;

/// Processor configuration
#[derive(Debug, Clone)]
pub struct FilterConfig {
    pub words_file: PathBuf,
    pub constraints: Constraints,
    pub output_mode: OutputMode,
    pub show_stats: bool,
}

/// Main processor
pub struct Processor {
    config: FilterConfig,
}

impl Processor {
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    /// Load the dictionary and return the candidates, in dictionary order
    pub fn candidates(&self) -> Result<(Vec<String>, FilterStats)> {
        let mut stats = FilterStats::new();

        let lines = load_dictionary(&self.config.words_file)?;
        stats.dictionary_lines = lines.len();

        let words = five_letter_words(lines);
        stats.five_letter_words = words.len();
        log::debug!("{} five-letter words in dictionary", words.len());

        let words = self.config.constraints.apply_with_stats(words, &mut stats);
        log::info!("{} candidates remaining", words.len());

        Ok((words, stats))
    }

    /// Run the whole pipeline and print the result to stdout
    pub fn process(&self) -> anyhow::Result<()> {
        let (words, stats) = self.candidates()?;

        print_candidates(&words, self.config.output_mode)?;

        if self.config.show_stats {
            stats.print_summary();
        }

        Ok(())
    }
}
