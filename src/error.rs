//! Error types
//!
//! Loading the dictionary and parsing attempts are the only fallible steps;
//! the filters themselves cannot fail.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the library
#[derive(Debug, Error)]
pub enum WordleError {
    /// The dictionary file could not be opened or read
    #[error("Could not read dictionary {path:?}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An attempt did not have exactly five characters
    #[error("Invalid attempt '{attempt}': expected 5 characters, got {length}")]
    InvalidAttemptLength { attempt: String, length: usize },
}

pub type Result<T> = std::result::Result<T, WordleError>;
