//! Guess validation and positional scoring.
//!
//! Scoring is relaxed: a byte that misses its position scores
//! `'1'` whenever it occurs *anywhere* in the secret, no matter how many
//! times it was already matched elsewhere. `"aab"` against `"baa"` scores
//! `"121"`, not the duplicate-aware `"120"`.

use wordle_types::{
    CharClass, FEEDBACK_ABSENT, FEEDBACK_CORRECT, FEEDBACK_PRESENT, GuessResponse, Preferences,
};

/// Reasons a guess is rejected before scoring.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuessError {
    /// Guess and secret differ in byte length.
    #[error("invalid guess length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Secret length.
        expected: usize,
        /// Guess length.
        actual: usize,
    },

    /// The guess uses a character class the puzzle forbids.
    #[error("guess contains {0}")]
    ForbiddenClass(CharClass),
}

/// Check a guess against the secret's length and the class constraints.
///
/// # Errors
///
/// [`GuessError::InvalidLength`] on a length mismatch, otherwise
/// [`GuessError::ForbiddenClass`] for the first byte in a disabled class.
pub fn validate(secret: &str, guess: &str, prefs: &Preferences) -> Result<(), GuessError> {
    if secret.len() != guess.len() {
        return Err(GuessError::InvalidLength {
            expected: secret.len(),
            actual: guess.len(),
        });
    }

    match guess
        .bytes()
        .map(CharClass::of)
        .find(|class| !prefs.allows(*class))
    {
        Some(class) => Err(GuessError::ForbiddenClass(class)),
        None => Ok(()),
    }
}

/// Score a guess position by position.
///
/// Callers are expected to [`validate`] first; positions past the end of
/// a shorter guess are not scored.
pub fn compute(secret: &str, guess: &str) -> GuessResponse {
    let secret = secret.as_bytes();
    let feedback: Vec<u8> = secret
        .iter()
        .zip(guess.as_bytes())
        .map(|(&expected, &actual)| {
            if expected == actual {
                FEEDBACK_CORRECT
            } else if secret.contains(&actual) {
                FEEDBACK_PRESENT
            } else {
                FEEDBACK_ABSENT
            }
        })
        .collect();

    let correct_count = feedback.iter().filter(|&&d| d == FEEDBACK_CORRECT).count();
    let partial_count = feedback.iter().filter(|&&d| d == FEEDBACK_PRESENT).count();

    GuessResponse {
        correct_count,
        partial_count,
        feedback: feedback.into_iter().map(char::from).collect(),
    }
}

/// [`validate`] then [`compute`].
///
/// # Errors
///
/// Propagates any [`GuessError`] from validation.
pub fn score(secret: &str, guess: &str, prefs: &Preferences) -> Result<GuessResponse, GuessError> {
    validate(secret, guess, prefs)?;
    Ok(compute(secret, guess))
}
