//! Engine configuration.

use serde::{Deserialize, Serialize};

use super::deck::MAX_DECK_SIZE;
use super::error::ConfigError;
use super::rng::ShuffleRng;

/// Per-card chance of closing a block during a random shuffle.
pub const DEFAULT_BREAK_PROBABILITY: f64 = 0.1;

/// Deck engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Probability that a random shuffle closes the current block after
    /// each card (default: 0.1).
    /// Higher values produce more, smaller blocks.
    pub break_probability: f64,

    /// Random seed for random shuffles.
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Size of the ordered deck the engine starts with.
    pub initial_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            break_probability: DEFAULT_BREAK_PROBABILITY,
            seed: None,
            initial_size: 0,
        }
    }
}

impl EngineConfig {
    /// Create a new config with custom break probability.
    pub fn with_break_probability(mut self, probability: f64) -> Self {
        self.break_probability = probability;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a new config with custom starting deck size.
    pub fn with_initial_size(mut self, size: usize) -> Self {
        self.initial_size = size;
        self
    }

    /// Check that the parameters are usable.
    ///
    /// A break probability of 0 would make every random shuffle a single
    /// block, so `count_shuffles` could never make progress. The starting
    /// deck may not exceed `MAX_DECK_SIZE`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = self.break_probability;
        if !(p > 0.0 && p <= 1.0) {
            return Err(ConfigError::BreakProbability(p));
        }
        if self.initial_size > MAX_DECK_SIZE {
            return Err(ConfigError::DeckTooLarge {
                size: self.initial_size,
                max: MAX_DECK_SIZE,
            });
        }
        Ok(())
    }

    /// Build the RNG described by this config.
    #[must_use]
    pub fn rng(&self) -> ShuffleRng {
        match self.seed {
            Some(seed) => ShuffleRng::new(seed),
            None => ShuffleRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert!((config.break_probability - 0.1).abs() < 1e-12);
        assert_eq!(config.seed, None);
        assert_eq!(config.initial_size, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default()
            .with_break_probability(0.5)
            .with_seed(123)
            .with_initial_size(52);

        assert_eq!(config.break_probability, 0.5);
        assert_eq!(config.seed, Some(123));
        assert_eq!(config.initial_size, 52);
        assert_eq!(config.rng().seed(), 123);
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        for p in [0.0, -0.1, 1.5, f64::NAN] {
            let config = EngineConfig::default().with_break_probability(p);
            assert!(config.validate().is_err(), "{} should be rejected", p);
        }
        assert!(EngineConfig::default().with_break_probability(1.0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_oversized_deck() {
        let config = EngineConfig::default().with_initial_size(MAX_DECK_SIZE + 1);
        assert_eq!(
            config.validate(),
            Err(ConfigError::DeckTooLarge { size: MAX_DECK_SIZE + 1, max: MAX_DECK_SIZE })
        );
        assert!(EngineConfig::default().with_initial_size(MAX_DECK_SIZE).validate().is_ok());
    }

    #[test]
    fn test_serialization() {
        let config = EngineConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
