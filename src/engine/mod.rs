//! The overhand shuffle engine.
//!
//! - `shuffle`: pure functions over card slices (validation, the overhand
//!   transformation, pair counting, repeat prediction, random partitions)
//! - `deck_engine`: `DeckEngine`, which owns a deck and an RNG and exposes
//!   the operations on them

pub mod shuffle;
pub mod deck_engine;

pub use deck_engine::DeckEngine;
pub use shuffle::{overhand, predict_repeat, random_partition, unbroken_pairs, validate_blocks};
