//! Puzzle records and the profiles they are generated from.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use wordle_types::{GuessResponse, Preferences};

use crate::config::PuzzleConfig;
use crate::feedback::{self, GuessError};
use crate::generator;
use crate::word_store::WordStore;

/// A secret together with the constraints guesses must satisfy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    /// The word a solver has to discover.
    pub secret: String,
    /// Published constraints. `length` always equals the secret's length.
    pub preferences: Preferences,
}

impl Puzzle {
    /// Generate a fresh puzzle for `requested`.
    ///
    /// The stored preferences carry the real secret length, so a request
    /// with `length == 0` publishes the length of the chosen base word.
    pub fn generate<R: Rng + ?Sized>(
        store: &WordStore,
        requested: &Preferences,
        rng: &mut R,
    ) -> Self {
        let secret = generator::generate(store, requested, rng);
        let preferences = requested.with_length(secret.len());
        Self {
            secret,
            preferences,
        }
    }

    /// Validate and score a guess against this puzzle.
    ///
    /// # Errors
    ///
    /// Returns a [`GuessError`] if the guess breaks the constraints.
    pub fn score(&self, guess: &str) -> Result<GuessResponse, GuessError> {
        feedback::score(&self.secret, guess, &self.preferences)
    }
}

/// Which of the two puzzle families a puzzle belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Fixed length, lowercase only.
    Easy,
    /// Random length, each extra class enabled by a coin flip.
    Hard,
}

impl Difficulty {
    /// Both families, in publication order.
    pub const ALL: [Self; 2] = [Self::Easy, Self::Hard];

    /// Lowercase family name, also used as the dispatch queue name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Hard => "hard",
        }
    }

    /// The path segment naming puzzle `index` of this family.
    pub fn slug(self, index: usize) -> String {
        match self {
            Self::Easy => format!("word{index}"),
            Self::Hard => format!("hardWord{index}"),
        }
    }

    /// Draw the generation preferences for one puzzle of this family.
    pub fn preferences<R: Rng + ?Sized>(self, config: &PuzzleConfig, rng: &mut R) -> Preferences {
        match self {
            Self::Easy => Preferences::plain(config.easy_length),
            Self::Hard => Preferences {
                length: rng.random_range(config.hard_min_length..=config.hard_max_length),
                allow_capitals: rng.random_bool(0.5),
                allow_special: rng.random_bool(0.5),
                allow_digits: rng.random_bool(0.5),
            },
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn slugs_follow_route_names() {
        assert_eq!(Difficulty::Easy.slug(0), "word0");
        assert_eq!(Difficulty::Hard.slug(49), "hardWord49");
    }

    #[test]
    fn easy_puzzle_publishes_base_word_length() {
        let store = WordStore::from_words(["abacus"]).unwrap();
        let mut rng = SmallRng::seed_from_u64(1);
        let prefs = Difficulty::Easy.preferences(&PuzzleConfig::default(), &mut rng);
        let puzzle = Puzzle::generate(&store, &prefs, &mut rng);
        assert_eq!(puzzle.secret, "abacus");
        assert_eq!(puzzle.preferences, Preferences::plain(6));
    }

    #[test]
    fn hard_lengths_stay_in_configured_range() {
        let config = PuzzleConfig::default();
        let mut rng = SmallRng::seed_from_u64(2);
        let mut saw_capitals = false;
        let mut saw_plain = false;
        for _ in 0..200 {
            let prefs = Difficulty::Hard.preferences(&config, &mut rng);
            assert!((config.hard_min_length..=config.hard_max_length).contains(&prefs.length));
            saw_capitals |= prefs.allow_capitals;
            saw_plain |= !prefs.allow_capitals;
        }
        assert!(saw_capitals && saw_plain);
    }

    #[test]
    fn puzzle_scores_with_its_own_constraints() {
        let puzzle = Puzzle {
            secret: "abc".to_owned(),
            preferences: Preferences::plain(3),
        };
        assert_eq!(puzzle.score("abc").unwrap().feedback, "222");
        assert!(puzzle.score("AbC").is_err());
    }
}
