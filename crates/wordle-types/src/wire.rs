//! JSON payloads exchanged over the guess endpoints.
//!
//! Field names on the wire are fixed by the public API (`Length`,
//! `correctPositionCount`, ...) and are mapped onto Rust-style names with
//! `serde` renames.

use serde::{Deserialize, Serialize};

use crate::charset::{CharClass, DIGITS, LOWERCASE, SPECIAL, UPPERCASE};

/// Feedback digit: the guessed byte is not in the secret.
pub const FEEDBACK_ABSENT: u8 = b'0';

/// Feedback digit: the guessed byte occurs somewhere else in the secret.
pub const FEEDBACK_PRESENT: u8 = b'1';

/// Feedback digit: the guessed byte matches the secret at this position.
pub const FEEDBACK_CORRECT: u8 = b'2';

/// Length and character-class constraints for one puzzle.
///
/// `length == 0` means "use a base word unmodified"; any other value pads
/// the base word to exactly that many bytes. Missing fields deserialize to
/// their defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Target word length in bytes (`0` = base word as-is).
    #[serde(rename = "Length", alias = "length")]
    pub length: usize,
    /// Whether `A`-`Z` may appear.
    #[serde(rename = "ContainsCapitalLetters", alias = "allow_capitals")]
    pub allow_capitals: bool,
    /// Whether the fixed punctuation set may appear.
    #[serde(rename = "ContainsSpecialChars", alias = "allow_special")]
    pub allow_special: bool,
    /// Whether `0`-`9` may appear.
    #[serde(rename = "ContainsNumbers", alias = "allow_digits")]
    pub allow_digits: bool,
}

impl Preferences {
    /// Lowercase-only preferences of the given length.
    pub const fn plain(length: usize) -> Self {
        Self {
            length,
            allow_capitals: false,
            allow_special: false,
            allow_digits: false,
        }
    }

    /// Copy of these preferences with a different length.
    #[must_use]
    pub const fn with_length(self, length: usize) -> Self {
        Self { length, ..self }
    }

    /// Whether a character class is permitted by these preferences.
    pub const fn allows(&self, class: CharClass) -> bool {
        match class {
            CharClass::Lowercase | CharClass::Other => true,
            CharClass::Capital => self.allow_capitals,
            CharClass::Digit => self.allow_digits,
            CharClass::Special => self.allow_special,
        }
    }

    /// The alphabet random padding characters are drawn from: lowercase
    /// plus every enabled class.
    pub fn alphabet(&self) -> Vec<u8> {
        let mut charset = LOWERCASE.to_vec();
        if self.allow_capitals {
            charset.extend_from_slice(UPPERCASE);
        }
        if self.allow_special {
            charset.extend_from_slice(SPECIAL);
        }
        if self.allow_digits {
            charset.extend_from_slice(DIGITS);
        }
        charset
    }
}

/// Body of a `POST` to a guess endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRequest {
    /// The guessed word.
    pub guess: String,
}

impl GuessRequest {
    /// Build a request from raw guess bytes.
    pub fn from_bytes(guess: &[u8]) -> Self {
        Self {
            guess: String::from_utf8_lossy(guess).into_owned(),
        }
    }
}

/// Scored answer to a guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessResponse {
    /// Number of `'2'` positions.
    #[serde(rename = "correctPositionCount")]
    pub correct_count: usize,
    /// Number of `'1'` positions.
    #[serde(rename = "partialMatchCount")]
    pub partial_count: usize,
    /// One of `'0'`, `'1'`, `'2'` per secret position.
    pub feedback: String,
}

impl GuessResponse {
    /// True when every position is confirmed.
    pub fn is_solved(&self) -> bool {
        self.feedback.bytes().all(|b| b == FEEDBACK_CORRECT)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn preferences_use_public_field_names() {
        let prefs = Preferences {
            length: 12,
            allow_capitals: true,
            allow_special: false,
            allow_digits: true,
        };
        let json = serde_json::to_value(prefs).unwrap();
        assert_eq!(json["Length"], 12);
        assert_eq!(json["ContainsCapitalLetters"], true);
        assert_eq!(json["ContainsSpecialChars"], false);
        assert_eq!(json["ContainsNumbers"], true);
    }

    #[test]
    fn preferences_accept_snake_case_aliases() {
        let prefs: Preferences = serde_json::from_str(
            r#"{"length": 7, "allow_capitals": false, "allow_special": true, "allow_digits": false}"#,
        )
        .unwrap();
        assert_eq!(prefs.length, 7);
        assert!(prefs.allow_special);
    }

    #[test]
    fn alphabet_grows_with_enabled_classes() {
        assert_eq!(Preferences::plain(5).alphabet().len(), 26);
        let all = Preferences {
            length: 5,
            allow_capitals: true,
            allow_special: true,
            allow_digits: true,
        };
        assert_eq!(all.alphabet().len(), 26 + 26 + 10 + SPECIAL.len());
    }

    #[test]
    fn allows_lowercase_and_other_unconditionally() {
        let prefs = Preferences::plain(3);
        assert!(prefs.allows(CharClass::Lowercase));
        assert!(prefs.allows(CharClass::Other));
        assert!(!prefs.allows(CharClass::Capital));
        assert!(!prefs.allows(CharClass::Digit));
        assert!(!prefs.allows(CharClass::Special));
    }

    #[test]
    fn response_wire_names_and_solved() {
        let resp: GuessResponse = serde_json::from_str(
            r#"{"correctPositionCount": 3, "partialMatchCount": 0, "feedback": "222"}"#,
        )
        .unwrap();
        assert_eq!(resp.correct_count, 3);
        assert!(resp.is_solved());

        let partial = GuessResponse {
            correct_count: 1,
            partial_count: 1,
            feedback: "210".to_owned(),
        };
        assert!(!partial.is_solved());
    }
}
