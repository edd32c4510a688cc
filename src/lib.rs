//! # overhand
//!
//! An engine for studying overhand shuffles of a numbered deck.
//!
//! ## Overhand Shuffle
//!
//! The deck is cut into contiguous blocks and the blocks are laid down in
//! reverse order, each block keeping its internal order. With blocks
//! `[2, 4]`, the deck `[0, 1, 2, 3, 4, 5]` becomes `[4, 5, 0, 1, 2, 3]`.
//!
//! ## Operations
//!
//! - **shuffle**: apply a block partition (validated all-or-nothing)
//! - **order**: how many repetitions of a shuffle return the deck to its state
//! - **unbroken pairs**: how many `(i, i + 1)` neighbours survive
//! - **random shuffle**: shuffle with randomly drawn blocks
//! - **count shuffles**: random shuffles needed to break pairs down to a target
//! - **predict next**: guess the deck after repeating the last permutation
//!
//! ## Modules
//!
//! - `core`: Cards, decks, block partitions, errors, RNG, configuration
//! - `engine`: Pure shuffle functions and the `DeckEngine`
//! - `interpreter`: Text commands driving a `DeckEngine`

pub mod core;
pub mod engine;
pub mod interpreter;

// Re-export commonly used types
pub use crate::core::{
    BlockPartition, BlockSizeError, Card, ConfigError, Deck,
    EngineConfig, RandomSource, ShuffleRng,
};

pub use crate::engine::DeckEngine;

pub use crate::interpreter::{Command, CommandError, Interpreter};
