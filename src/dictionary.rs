//! Dictionary loading
//!
//! Reads a newline-delimited word file, detecting its encoding so that
//! Latin-1 system word lists load as well as UTF-8 ones. The whole file is
//! read at once; system dictionaries are a few megabytes at most.

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::error::{Result, WordleError};

/// Standard system word list location
pub const DEFAULT_WORDS_FILE: &str = "/usr/share/dict/words";

/// Bytes sampled from the head of the file for encoding detection
const SAMPLE_SIZE: usize = 64 * 1024;

/// Result of encoding detection
#[derive(Debug, Clone)]
pub struct EncodingInfo {
    pub name: &'static str,
    /// Number of bytes to skip at the start of the file
    pub bom_len: usize,
    pub encoding: &'static Encoding,
}

impl Default for EncodingInfo {
    fn default() -> Self {
        Self {
            name: "UTF-8",
            bom_len: 0,
            encoding: encoding_rs::UTF_8,
        }
    }
}

/// Detect the encoding of a sample taken from the start of a file
pub fn detect_encoding(sample: &[u8]) -> EncodingInfo {
    if sample.is_empty() {
        return EncodingInfo::default();
    }

    // Check for BOM first
    if let Some((encoding, bom_len)) = Encoding::for_bom(sample) {
        return EncodingInfo {
            name: encoding.name(),
            bom_len,
            encoding,
        };
    }

    let mut detector = EncodingDetector::new();
    detector.feed(sample, true);
    let encoding = detector.guess(None, true);

    EncodingInfo {
        name: encoding.name(),
        bom_len: 0,
        encoding,
    }
}

/// Decode raw file contents and split them into whitespace-stripped lines
pub fn decode_lines(bytes: &[u8], info: &EncodingInfo) -> Vec<String> {
    let body = &bytes[info.bom_len.min(bytes.len())..];
    let (text, had_errors) = info.encoding.decode_without_bom_handling(body);
    if had_errors {
        log::warn!("Encoding errors in dictionary, using lossy conversion");
    }

    text.lines().map(|line| line.trim().to_string()).collect()
}

/// Load the raw, whitespace-stripped lines of a dictionary file
pub fn load_dictionary(path: &Path) -> Result<Vec<String>> {
    let access = |source: io::Error| WordleError::FileAccess {
        path: path.to_path_buf(),
        source,
    };

    let mut bytes = Vec::new();
    File::open(path)
        .and_then(|mut file| file.read_to_end(&mut bytes))
        .map_err(access)?;

    let info = detect_encoding(&bytes[..bytes.len().min(SAMPLE_SIZE)]);
    log::debug!("Dictionary {:?} detected as {}", path, info.name);

    let lines = decode_lines(&bytes, &info);
    log::info!("Loaded {} lines from {:?}", lines.len(), path);
    Ok(lines)
}
