//! # Wordle Filter
//!
//! Narrow a dictionary down to the five-letter words still consistent with
//! the Wordle guesses made so far.
//!
//! ## Features
//!
//! - **Exclusions**: drop every word containing a letter known to be absent
//! - **Direct hits**: uppercase letters in an attempt fix that position
//! - **Misplaced letters**: lowercase letters rule out their position
//! - **Encoding detection**: UTF-8, UTF-16 and Latin-1 word lists
//!
//! ## Usage
//!
//! ```bash
//! # S, T, N and E are green, O is grey
//! wordle-filter -e o ST.NE
//!
//! # A is yellow in the middle, E is green at the end
//! wordle-filter -e crnt ..a.E
//! ```
//!
//! ## Example
//!
//! ```rust
//! use wordle_filter::{Attempt, Constraints, ExclusionSet};
//!
//! let dictionary = vec!["spore", "stone", "scone", "stove"];
//! let words = wordle_filter::filter::five_letter_words(dictionary);
//!
//! let constraints = Constraints::new(
//!     ExclusionSet::new(None),
//!     vec![Attempt::parse("ST.NE")?],
//! );
//! assert_eq!(constraints.apply(words), vec!["stone"]);
//! # Ok::<(), wordle_filter::WordleError>(())
//! ```

pub mod attempt;
pub mod cli;
pub mod dictionary;
pub mod error;
pub mod filter;
pub mod output;
pub mod processor;
pub mod report;

/// Length of every Wordle word and attempt
pub const WORD_LENGTH: usize = 5;

pub use attempt::Attempt;
pub use cli::Args;
pub use error::WordleError;
pub use filter::{Constraints, ExclusionSet};
pub use processor::{FilterConfig, Processor};
