//! The base word list every puzzle is built from.
//!
//! On disk the list is base64-encoded, newline-delimited text. Empty lines
//! are dropped. Scoring is byte-oriented, so lines that are not pure ASCII
//! are skipped with a warning rather than accepted.

use std::path::{Path, PathBuf};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{info, warn};

/// Errors that can occur when loading the word list.
#[derive(Debug, thiserror::Error)]
pub enum WordStoreError {
    /// The word list file could not be read.
    #[error("failed to read word list {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The file contents are not valid base64.
    #[error("word list is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),

    /// The decoded bytes are not valid UTF-8.
    #[error("decoded word list is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// No usable words remained after filtering.
    #[error("word list contains no usable words")]
    Empty,
}

/// An immutable, non-empty list of ASCII base words.
#[derive(Debug, Clone)]
pub struct WordStore {
    words: Vec<String>,
}

impl WordStore {
    /// Build a store from already-decoded words.
    ///
    /// # Errors
    ///
    /// Returns [`WordStoreError::Empty`] if no word survives filtering.
    pub fn from_words<I, S>(words: I) -> Result<Self, WordStoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut kept = Vec::new();
        for raw in words {
            let word = raw.as_ref().trim_end_matches('\r');
            if word.is_empty() {
                continue;
            }
            if !word.is_ascii() {
                warn!(word, "skipping non-ASCII word");
                continue;
            }
            kept.push(word.to_owned());
        }

        if kept.is_empty() {
            return Err(WordStoreError::Empty);
        }
        Ok(Self { words: kept })
    }

    /// Decode a base64 payload holding newline-delimited words.
    ///
    /// Whitespace inside the payload (line wrapping) is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`WordStoreError::Decode`] or [`WordStoreError::Utf8`] for a
    /// malformed payload, or [`WordStoreError::Empty`] if it holds no words.
    pub fn from_encoded(encoded: &str) -> Result<Self, WordStoreError> {
        let compact: String = encoded
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        let decoded = String::from_utf8(STANDARD.decode(compact)?)?;
        Self::from_words(decoded.split('\n'))
    }

    /// Read and decode the word list at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`WordStoreError::Io`] if the file cannot be read, plus any
    /// error from [`WordStore::from_encoded`].
    pub fn load(path: &Path) -> Result<Self, WordStoreError> {
        let encoded = std::fs::read_to_string(path).map_err(|source| WordStoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_encoded(&encoded)?;
        info!(path = %path.display(), words = store.len(), "word list loaded");
        Ok(store)
    }

    /// Number of words in the store.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; an empty store cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All base words in file order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Pick a base word uniformly at random.
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        // Non-empty by construction, so the fallback is never taken.
        self.words.choose(rng).map_or("", String::as_str)
    }
}
