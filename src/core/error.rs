//! Error types.
//!
//! `BlockSizeError` is the only error the deck engine itself produces.
//! Configuration problems are reported separately through `ConfigError`.

use thiserror::Error;

/// A block partition that does not fit the deck.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BlockSizeError {
    /// A block has a negative size.
    #[error("Block sizes must be positive, and the sum equal to the deck size (block {index} is {size}).")]
    Negative { index: usize, size: i64 },

    /// The blocks do not add up to the number of cards.
    #[error("Block sizes must be positive, and the sum equal to the deck size (sum is {sum}, deck has {deck_len} cards).")]
    SumMismatch { sum: i128, deck_len: usize },
}

/// Invalid engine configuration.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("break probability must be in (0, 1], got {0}")]
    BreakProbability(f64),

    #[error("initial deck size {size} exceeds the limit of {max} cards")]
    DeckTooLarge { size: usize, max: usize },
}
