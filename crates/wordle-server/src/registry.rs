//! The set of generated puzzles and their endpoint addresses.
//!
//! Puzzles are created once at startup, in order, and never change
//! afterwards. Each one is addressed by a slug (`word3`, `hardWord7`) that
//! becomes the last segment of its guess endpoint.

use std::collections::BTreeMap;

use rand::Rng;
use tracing::info;
use wordle_core::config::PuzzleConfig;
use wordle_core::{Difficulty, DispatchError, Puzzle, QueuePublisher, WordStore};

/// Path of the default puzzle; generated puzzles live beneath it.
pub const GUESS_PATH: &str = "/wordle/guess";

/// Path of the guess endpoint for `slug`.
pub fn puzzle_path(slug: &str) -> String {
    format!("{GUESS_PATH}/{slug}")
}

/// Immutable registry of generated puzzles, keyed by slug.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    puzzles: BTreeMap<String, Puzzle>,
    easy: Vec<String>,
    hard: Vec<String>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate `config.count` easy puzzles followed by `config.count` hard
    /// ones.
    pub fn build<R: Rng + ?Sized>(store: &WordStore, config: &PuzzleConfig, rng: &mut R) -> Self {
        let mut registry = Self::new();
        for difficulty in Difficulty::ALL {
            for _ in 0..config.count {
                let requested = difficulty.preferences(config, rng);
                registry.insert(difficulty, Puzzle::generate(store, &requested, rng));
            }
        }
        info!(
            easy = registry.easy.len(),
            hard = registry.hard.len(),
            "puzzle registry built"
        );
        registry
    }

    /// Append a puzzle to a family and return its slug.
    pub fn insert(&mut self, difficulty: Difficulty, puzzle: Puzzle) -> String {
        let family = match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Hard => &mut self.hard,
        };
        let slug = difficulty.slug(family.len());
        family.push(slug.clone());
        self.puzzles.insert(slug.clone(), puzzle);
        slug
    }

    /// Look up a puzzle by slug.
    pub fn get(&self, slug: &str) -> Option<&Puzzle> {
        self.puzzles.get(slug)
    }

    /// Total number of generated puzzles.
    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    /// True if no puzzles were generated.
    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    /// Slugs of one family, in creation order.
    pub fn slugs(&self, difficulty: Difficulty) -> &[String] {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Hard => &self.hard,
        }
    }

    /// Absolute endpoint addresses of one family, in creation order.
    pub fn addresses(&self, difficulty: Difficulty, base_url: &str) -> Vec<String> {
        self.slugs(difficulty)
            .iter()
            .map(|slug| format!("{base_url}{}", puzzle_path(slug)))
            .collect()
    }

    /// Publish a family's addresses in creation order, then close the queue.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] if the consuming side went away early.
    pub async fn publish(
        &self,
        difficulty: Difficulty,
        base_url: &str,
        publisher: QueuePublisher,
    ) -> Result<usize, DispatchError> {
        publisher
            .publish_all(self.addresses(difficulty, base_url))
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use wordle_core::dispatch_queue;
    use wordle_types::Preferences;

    use super::*;

    fn small_config() -> PuzzleConfig {
        PuzzleConfig {
            count: 4,
            ..PuzzleConfig::default()
        }
    }

    #[test]
    fn build_creates_both_families() {
        let store = WordStore::from_words(["crane", "slate"]).unwrap();
        let mut rng = SmallRng::seed_from_u64(1);
        let registry = Registry::build(&store, &small_config(), &mut rng);

        assert_eq!(registry.len(), 8);
        assert_eq!(
            registry.slugs(Difficulty::Easy),
            ["word0", "word1", "word2", "word3"]
        );
        assert_eq!(registry.slugs(Difficulty::Hard).first().unwrap(), "hardWord0");

        for slug in registry.slugs(Difficulty::Easy) {
            let puzzle = registry.get(slug).unwrap();
            assert_eq!(puzzle.preferences, Preferences::plain(5));
        }
        for slug in registry.slugs(Difficulty::Hard) {
            let puzzle = registry.get(slug).unwrap();
            assert!((10..=19).contains(&puzzle.preferences.length));
            assert_eq!(puzzle.secret.len(), puzzle.preferences.length);
        }
    }

    #[test]
    fn addresses_are_absolute_and_ordered() {
        let mut registry = Registry::new();
        for secret in ["one", "two"] {
            registry.insert(
                Difficulty::Easy,
                Puzzle {
                    secret: secret.to_owned(),
                    preferences: Preferences::plain(3),
                },
            );
        }
        assert_eq!(
            registry.addresses(Difficulty::Easy, "http://127.0.0.1:8080"),
            [
                "http://127.0.0.1:8080/wordle/guess/word0",
                "http://127.0.0.1:8080/wordle/guess/word1",
            ]
        );
        assert!(registry.addresses(Difficulty::Hard, "http://x").is_empty());
    }

    #[tokio::test]
    async fn publish_pushes_in_creation_order_and_closes() {
        let store = WordStore::from_words(["crane"]).unwrap();
        let mut rng = SmallRng::seed_from_u64(2);
        let registry = Registry::build(&store, &small_config(), &mut rng);

        let (publisher, mut consumer) = dispatch_queue("hard", 16);
        let published = registry
            .publish(Difficulty::Hard, "http://h", publisher)
            .await
            .unwrap();
        assert_eq!(published, 4);

        let mut seen = Vec::new();
        while let Some(address) = consumer.recv().await {
            seen.push(address);
        }
        assert_eq!(seen, registry.addresses(Difficulty::Hard, "http://h"));
    }
}
