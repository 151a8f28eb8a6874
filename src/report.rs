//! Status messages and filter statistics
//!
//! Everything here writes to stderr; stdout is reserved for candidate words.

use colored::*;
use std::time::{Duration, Instant};

/// Print a section header
pub fn print_header(text: &str) {
    eprintln!("\n{} {}", "▶".green(), text.green().bold());
}

/// Print an info message
pub fn print_info(text: &str) {
    eprintln!("  {} {}", "ℹ".cyan(), text);
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".red(), text.red());
}

/// Survivor counts after each pipeline stage
#[derive(Debug, Clone)]
pub struct FilterStats {
    pub dictionary_lines: usize,
    pub five_letter_words: usize,
    pub after_exclusions: usize,
    pub after_direct_hits: usize,
    pub after_misplaced: usize,
    pub start_time: Instant,
}

impl FilterStats {
    pub fn new() -> Self {
        Self {
            dictionary_lines: 0,
            five_letter_words: 0,
            after_exclusions: 0,
            after_direct_hits: 0,
            after_misplaced: 0,
            start_time: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Words removed by the whole pipeline
    pub fn eliminated(&self) -> usize {
        self.five_letter_words.saturating_sub(self.after_misplaced)
    }

    /// Print final statistics
    pub fn print_summary(&self) {
        eprintln!();
        eprintln!("{}", "═".repeat(48).green());
        eprintln!("{}", "              FILTER SUMMARY".green().bold());
        eprintln!("{}", "═".repeat(48).green());
        eprintln!();

        eprintln!("  {} {}", "Dictionary lines: ".green(), format_number(self.dictionary_lines));
        eprintln!("  {} {}", "Five-letter words:".green(), format_number(self.five_letter_words));
        eprintln!("  {} {}", "After exclusions: ".green(), format_number(self.after_exclusions));
        eprintln!("  {} {}", "After direct hits:".green(), format_number(self.after_direct_hits));
        eprintln!("  {} {}", "After misplaced:  ".green(), format_number(self.after_misplaced));
        eprintln!("  {} {}", "Eliminated:       ".yellow(), format_number(self.eliminated()));
        eprintln!(
            "  {} {}",
            "Candidates:       ".green().bold(),
            format_number(self.after_misplaced).green().bold()
        );

        eprintln!();
        eprintln!("  {} {}", "Duration:         ".green(), format_duration(self.elapsed()));
        eprintln!("{}", "═".repeat(48).green());
    }
}

impl Default for FilterStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a number with thousand separators
fn format_number(n: usize) -> String {
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
    if duration.as_secs() == 0 {
        format!("{:.1}ms", duration.as_secs_f64() * 1000.0)
    } else {
        format!("{:.2}s", duration.as_secs_f64())
    }
}
