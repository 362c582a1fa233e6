//! Character classes used by word generation, guess validation, and the
//! solver's probe alphabet.
//!
//! All classes are ASCII. Scoring works byte-by-byte, so anything outside
//! these sets is classified as [`CharClass::Other`] and always allowed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lowercase ASCII letters. Always permitted.
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Uppercase ASCII letters.
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// ASCII digits.
pub const DIGITS: &[u8] = b"0123456789";

/// The fixed punctuation set.
pub const SPECIAL: &[u8] = b"!@#$%^&*()-_=+[]{}|;:'\",.<>/?";

/// The class a single guess or secret byte belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharClass {
    /// `a`-`z`.
    Lowercase,
    /// `A`-`Z`.
    Capital,
    /// `0`-`9`.
    Digit,
    /// A member of [`SPECIAL`].
    Special,
    /// Anything else.
    Other,
}

impl CharClass {
    /// Classify a byte.
    pub fn of(byte: u8) -> Self {
        if byte.is_ascii_lowercase() {
            Self::Lowercase
        } else if byte.is_ascii_uppercase() {
            Self::Capital
        } else if byte.is_ascii_digit() {
            Self::Digit
        } else if SPECIAL.contains(&byte) {
            Self::Special
        } else {
            Self::Other
        }
    }

    /// Every byte belonging to this class. [`CharClass::Other`] is open-ended
    /// and yields an empty slice.
    pub const fn alphabet(self) -> &'static [u8] {
        match self {
            Self::Lowercase => LOWERCASE,
            Self::Capital => UPPERCASE,
            Self::Digit => DIGITS,
            Self::Special => SPECIAL,
            Self::Other => &[],
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Lowercase => "lowercase letters",
            Self::Capital => "capital letters",
            Self::Digit => "numbers",
            Self::Special => "special characters",
            Self::Other => "other characters",
        };
        f.write_str(label)
    }
}
