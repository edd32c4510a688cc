//! The deck engine: one owned deck plus the operations on it.

use std::fmt;

use crate::core::{
    BlockPartition, BlockSizeError, Card, ConfigError, Deck, EngineConfig, RandomSource, ShuffleRng,
    DEFAULT_BREAK_PROBABILITY,
};

use super::shuffle::{overhand, predict_repeat, random_partition, unbroken_pairs, validate_blocks};

/// Owns a deck and applies overhand shuffles to it.
///
/// The deck is only ever changed by `make_new`, `load`, `shuffle` and
/// `random_shuffle`. Analysis operations (`order`, `count_shuffles`) leave
/// it exactly as they found it.
///
/// ## Example
///
/// ```
/// use overhand::{DeckEngine, ShuffleRng};
///
/// let mut engine = DeckEngine::new(ShuffleRng::new(42));
/// engine.make_new(6);
/// engine.shuffle(&[2, 4]).unwrap();
/// assert_eq!(engine.current(), vec![4, 5, 0, 1, 2, 3]);
/// assert_eq!(engine.order(&[2, 4]).unwrap(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct DeckEngine<R: RandomSource = ShuffleRng> {
    deck: Deck,
    rng: R,
    break_probability: f64,
}

impl DeckEngine<ShuffleRng> {
    /// Build an engine from configuration, seeding the RNG as configured.
    pub fn from_config(config: &EngineConfig) -> Result<Self, ConfigError> {
        Self::with_config(config.rng(), config)
    }
}

impl<R: RandomSource> DeckEngine<R> {
    /// Create an engine with an empty deck and the default break probability.
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self {
            deck: Deck::default(),
            rng,
            break_probability: DEFAULT_BREAK_PROBABILITY,
        }
    }

    /// Create an engine with the given RNG and configuration.
    pub fn with_config(rng: R, config: &EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            deck: Deck::ordered(config.initial_size),
            rng,
            break_probability: config.break_probability,
        })
    }

    /// Replace the deck with the ordered deck `[0, 1, ..., size - 1]`.
    pub fn make_new(&mut self, size: usize) {
        self.deck = Deck::ordered(size);
    }

    /// Replace the deck with exactly `cards`. No validation is done.
    pub fn load(&mut self, cards: Vec<Card>) {
        self.deck = Deck::from_cards(cards);
    }

    /// A copy of the current deck, top first.
    #[must_use]
    pub fn current(&self) -> Vec<Card> {
        self.deck.to_vec()
    }

    /// Number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.deck.len()
    }

    /// Check if the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    /// The random source used by `random_shuffle`.
    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Per-card chance of closing a block in `random_shuffle`.
    #[must_use]
    pub fn break_probability(&self) -> f64 {
        self.break_probability
    }

    /// Shuffle the deck with the given block sizes.
    ///
    /// Fails without touching the deck if any block is negative or the
    /// blocks do not sum to the deck size.
    pub fn shuffle(&mut self, blocks: &[i64]) -> Result<(), BlockSizeError> {
        validate_blocks(blocks, self.deck.len())?;
        self.deck = Deck::from_cards(overhand(self.deck.cards(), blocks));
        log::debug!("shuffled {} cards in {} blocks", self.deck.len(), blocks.len());
        Ok(())
    }

    /// Minimum number of times `shuffle(blocks)` must be applied to the
    /// current deck to bring it back to its current state.
    ///
    /// The deck is not modified.
    pub fn order(&self, blocks: &[i64]) -> Result<u64, BlockSizeError> {
        validate_blocks(blocks, self.deck.len())?;

        let start = self.deck.cards();
        let mut cards = overhand(start, blocks);
        let mut count: u64 = 1;
        while cards != start {
            cards = overhand(&cards, blocks);
            count += 1;
        }

        log::debug!("order of {:?} on {} cards is {}", blocks, start.len(), count);
        Ok(count)
    }

    /// Number of originally adjacent pairs `(i, i + 1)` still adjacent, in
    /// that order, somewhere in the deck.
    #[must_use]
    pub fn unbroken_pairs(&self) -> usize {
        unbroken_pairs(self.deck.cards())
    }

    /// Predict the deck after repeating whatever single permutation turned
    /// the ordered deck into the current one.
    ///
    /// This is a heuristic. It assumes the current deck is one positional
    /// permutation applied to `[0, 1, ..., N - 1]`; for a deck that was
    /// shuffled several times with different blocks it predicts the effect
    /// of repeating the whole sequence as a single permutation.
    ///
    /// Returns `None` if some card is not a position in the deck, which can
    /// only happen after `load`.
    #[must_use]
    pub fn predict_next(&self) -> Option<Vec<Card>> {
        predict_repeat(self.deck.cards())
    }

    /// Shuffle the deck with a randomly drawn block partition.
    ///
    /// Returns the partition that was applied.
    pub fn random_shuffle(&mut self) -> BlockPartition {
        let blocks = random_partition(self.deck.len(), self.break_probability, &mut self.rng);
        self.deck = Deck::from_cards(overhand(self.deck.cards(), &blocks));
        log::trace!("random shuffle with blocks {:?}", blocks);
        blocks
    }

    /// Count random shuffles until at most `target` unbroken pairs remain.
    ///
    /// The deck is restored afterwards, so the count is a sample of how
    /// many shuffles the current deck needs. Returns `None` for a negative
    /// target, which no deck can reach.
    pub fn count_shuffles(&mut self, target: i64) -> Option<u64> {
        let target = u64::try_from(target).ok()?;

        let snapshot = self.deck.clone();
        let mut count: u64 = 0;
        while self.unbroken_pairs() as u64 > target {
            self.random_shuffle();
            count += 1;
        }
        self.deck = snapshot;

        log::debug!("reached {} unbroken pairs after {} random shuffles", target, count);
        Some(count)
    }
}

impl<R: RandomSource> fmt::Display for DeckEngine<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.deck, f)
    }
}
