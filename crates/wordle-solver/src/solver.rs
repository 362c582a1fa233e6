//! The two-phase solving algorithm.
//!
//! **Charset minimization.** For every probe character `c`, submit `c`
//! followed by filler. Under the relaxed scoring, the first feedback digit
//! is `'0'` exactly when `c` does not occur in the secret, so after one
//! request per character the kept set is the secret's distinct characters
//! (as far as the probe alphabet covers them).
//!
//! **Adaptive guessing.** Every position not yet scored `'2'` is re-drawn
//! uniformly from the kept set and the guess is submitted again, until the
//! whole feedback string is `'2'`s.
//!
//! Punctuation is never probed. A secret containing punctuation therefore
//! never converges, and neither does one whose kept set ends up empty: the
//! loop has no iteration bound. Callers bound it through [`CancelSignal`]
//! or an outer timeout.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use tokio::sync::watch;
use tracing::{debug, info, warn};
use wordle_types::{CharClass, FEEDBACK_ABSENT, FEEDBACK_CORRECT, GuessResponse, Preferences};

use crate::client::PuzzleOracle;
use crate::error::SolverError;

/// Receiver side of a cancellation flag; the solve stops once it reads `true`.
pub type CancelSignal = watch::Receiver<bool>;

/// Classes the minimization phase probes, in order.
const PROBE_CLASSES: [CharClass; 3] = [CharClass::Lowercase, CharClass::Capital, CharClass::Digit];

/// Outcome of a successful solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// The puzzle's address.
    pub address: String,
    /// The discovered secret.
    pub secret: String,
    /// Guesses made in the adaptive phase.
    pub guesses: u64,
    /// Requests spent on charset minimization.
    pub probes: usize,
    /// Characters kept after minimization.
    pub charset: String,
}

/// Solver settings shared by every solving task.
#[derive(Debug, Clone, Copy)]
pub struct Solver {
    filler: u8,
    seed: Option<u64>,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(b'a')
    }
}

impl Solver {
    /// A solver that pads probes and the initial guess with `filler`.
    pub const fn new(filler: u8) -> Self {
        Self { filler, seed: None }
    }

    /// Make every solve draw from the same seeded generator.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Characters probed for a puzzle with `prefs`: lowercase, plus
    /// uppercase and digits when the puzzle allows them.
    ///
    /// Probes in a forbidden class would be rejected by the server, so
    /// those classes are skipped.
    pub fn probe_alphabet(prefs: &Preferences) -> Vec<u8> {
        PROBE_CLASSES
            .iter()
            .filter(|class| prefs.allows(**class))
            .flat_map(|class| class.alphabet().iter().copied())
            .collect()
    }

    /// Solve the puzzle behind `oracle`.
    ///
    /// # Errors
    ///
    /// Returns any transport or protocol [`SolverError`], or
    /// [`SolverError::Cancelled`] once `cancel` reads `true`.
    pub async fn solve<O>(&self, oracle: &O, cancel: &CancelSignal) -> Result<Solution, SolverError>
    where
        O: PuzzleOracle + Sync,
    {
        let prefs = oracle.preferences().await?;
        let (charset, probes) = self.probe_charset(oracle, &prefs, cancel).await?;
        debug!(
            address = oracle.address(),
            length = prefs.length,
            kept = charset.len(),
            "charset minimized"
        );

        let (secret, guesses) = self
            .guess_until_solved(oracle, prefs.length, &charset, cancel)
            .await?;

        let solution = Solution {
            address: oracle.address().to_owned(),
            secret: String::from_utf8_lossy(&secret).into_owned(),
            guesses,
            probes,
            charset: String::from_utf8_lossy(&charset).into_owned(),
        };
        info!(
            address = %solution.address,
            secret = %solution.secret,
            guesses = solution.guesses,
            "found the word"
        );
        Ok(solution)
    }

    /// Probe each candidate character once and keep those present in the
    /// secret.
    ///
    /// # Errors
    ///
    /// Returns any [`SolverError`] from the oracle, or
    /// [`SolverError::Cancelled`].
    pub async fn minimize_charset<O>(
        &self,
        oracle: &O,
        prefs: &Preferences,
        cancel: &CancelSignal,
    ) -> Result<Vec<u8>, SolverError>
    where
        O: PuzzleOracle + Sync,
    {
        let (kept, _probes) = self.probe_charset(oracle, prefs, cancel).await?;
        Ok(kept)
    }

    /// [`Solver::minimize_charset`], also returning the number of probe
    /// requests sent.
    async fn probe_charset<O>(
        &self,
        oracle: &O,
        prefs: &Preferences,
        cancel: &CancelSignal,
    ) -> Result<(Vec<u8>, usize), SolverError>
    where
        O: PuzzleOracle + Sync,
    {
        if prefs.length == 0 {
            return Ok((Vec::new(), 0));
        }

        let mut probe = vec![self.filler; prefs.length];
        let mut kept = Vec::new();
        let mut sent: usize = 0;
        for candidate in Self::probe_alphabet(prefs) {
            if is_cancelled(cancel) {
                return Err(SolverError::Cancelled { guesses: 0 });
            }
            if let Some(first) = probe.first_mut() {
                *first = candidate;
            }
            let response = oracle.submit(&probe).await?;
            sent = sent.saturating_add(1);
            let feedback = checked_feedback(response, prefs.length)?;
            if feedback.first() != Some(&FEEDBACK_ABSENT) {
                kept.push(candidate);
            }
        }
        Ok((kept, sent))
    }

    /// Re-draw every unconfirmed position from `charset` until the feedback
    /// is all `'2'`. Returns the solved guess and the number of guesses.
    ///
    /// With an empty `charset` the guess never changes and the loop only
    /// ends through `cancel`.
    ///
    /// # Errors
    ///
    /// Returns any [`SolverError`] from the oracle, or
    /// [`SolverError::Cancelled`].
    pub async fn guess_until_solved<O>(
        &self,
        oracle: &O,
        length: usize,
        charset: &[u8],
        cancel: &CancelSignal,
    ) -> Result<(Vec<u8>, u64), SolverError>
    where
        O: PuzzleOracle + Sync,
    {
        let mut rng = self.rng();
        let mut guess = vec![self.filler; length];
        let mut feedback = vec![FEEDBACK_ABSENT; length];
        let mut guesses: u64 = 0;

        if charset.is_empty() && length > 0 {
            warn!(
                address = oracle.address(),
                "no usable characters left, guessing cannot converge"
            );
        }

        while !feedback.iter().all(|&d| d == FEEDBACK_CORRECT) {
            if is_cancelled(cancel) {
                return Err(SolverError::Cancelled { guesses });
            }

            for (slot, digit) in guess.iter_mut().zip(&feedback) {
                if *digit != FEEDBACK_CORRECT {
                    if let Some(&c) = charset.choose(&mut rng) {
                        *slot = c;
                    }
                }
            }

            let response = oracle.submit(&guess).await?;
            feedback = checked_feedback(response, length)?;
            guesses = guesses.saturating_add(1);
        }

        Ok((guess, guesses))
    }

    fn rng(&self) -> SmallRng {
        self.seed.map_or_else(
            || SmallRng::from_rng(&mut rand::rng()),
            SmallRng::seed_from_u64,
        )
    }
}

fn is_cancelled(cancel: &CancelSignal) -> bool {
    *cancel.borrow()
}

fn checked_feedback(response: GuessResponse, expected: usize) -> Result<Vec<u8>, SolverError> {
    let feedback = response.feedback.into_bytes();
    if feedback.len() == expected {
        Ok(feedback)
    } else {
        Err(SolverError::MalformedFeedback {
            expected,
            actual: feedback.len(),
        })
    }
}
