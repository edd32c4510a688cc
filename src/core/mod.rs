//! Core types: cards, decks, block partitions, errors, RNG, configuration.
//!
//! Everything here is independent of how the engine is driven. The
//! `engine` module builds the shuffle operations on top of these types.

pub mod deck;
pub mod error;
pub mod rng;
pub mod config;

pub use deck::{BlockPartition, Card, Deck, MAX_DECK_SIZE};
pub use error::{BlockSizeError, ConfigError};
pub use rng::{RandomSource, ShuffleRng};
pub use config::{EngineConfig, DEFAULT_BREAK_PROBABILITY};
