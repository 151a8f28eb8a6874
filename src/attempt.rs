//! Attempt parsing
//!
//! An attempt is a five character string whose case encodes the feedback
//! for one guess:
//!
//! - `S` (uppercase): letter confirmed at this position
//! - `s` (lowercase): letter in the solution, but not at this position
//! - anything else (`.`, `_`, `?`, ...): no information at this position

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, WordleError};
use crate::WORD_LENGTH;

/// Parsed feedback for a single guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    raw: String,
    hits: [Option<u8>; WORD_LENGTH],
    misplaced: Vec<(usize, u8)>,
}

impl Attempt {
    /// Parse an attempt, failing if it is not exactly five characters
    pub fn parse(raw: &str) -> Result<Self> {
        let chars: Vec<char> = raw.chars().collect();
        if chars.len() != WORD_LENGTH {
            return Err(WordleError::InvalidAttemptLength {
                attempt: raw.to_string(),
                length: chars.len(),
            });
        }

        let mut hits = [None; WORD_LENGTH];
        let mut misplaced = Vec::new();

        for (position, c) in chars.into_iter().enumerate() {
            if c.is_ascii_uppercase() {
                hits[position] = Some(c.to_ascii_lowercase() as u8);
            } else if c.is_ascii_lowercase() {
                misplaced.push((position, c as u8));
            }
        }

        Ok(Self {
            raw: raw.to_string(),
            hits,
            misplaced,
        })
    }

    /// Position pattern of direct hits; `None` is a wildcard
    pub fn direct_hits(&self) -> &[Option<u8>; WORD_LENGTH] {
        &self.hits
    }

    /// `(position, letter)` pairs for letters present elsewhere in the word
    pub fn misplaced(&self) -> &[(usize, u8)] {
        &self.misplaced
    }

    /// Every letter this attempt claims is in the solution
    pub fn known_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.hits
            .iter()
            .flatten()
            .copied()
            .chain(self.misplaced.iter().map(|&(_, letter)| letter))
            .map(char::from)
    }
}

impl FromStr for Attempt {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Attempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Parse a list of raw attempts, stopping at the first invalid one
pub fn parse_attempts<S: AsRef<str>>(raw: &[S]) -> Result<Vec<Attempt>> {
    raw.iter().map(|s| Attempt::parse(s.as_ref())).collect()
}
