//! Pure deck transformations and queries.
//!
//! These functions never own a deck; `DeckEngine` composes them and decides
//! what gets stored. Keeping them pure lets `order` and `count_shuffles`
//! work on copies without touching the engine's state.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::core::{BlockPartition, BlockSizeError, Card, RandomSource};

/// Check that `blocks` partitions a deck of `deck_len` cards.
///
/// Every block must be non-negative and the blocks must sum to `deck_len`.
/// Negative blocks are reported first, by position.
pub fn validate_blocks(blocks: &[i64], deck_len: usize) -> Result<(), BlockSizeError> {
    let mut sum: i128 = 0;
    for (index, &size) in blocks.iter().enumerate() {
        if size < 0 {
            return Err(BlockSizeError::Negative { index, size });
        }
        sum += i128::from(size);
    }

    if sum != deck_len as i128 {
        return Err(BlockSizeError::SumMismatch { sum, deck_len });
    }
    Ok(())
}

/// Apply an overhand shuffle to `cards`, returning the new order.
///
/// Each block is taken from the bottom of what remains of the old deck and
/// laid down from the top of the new one, keeping the cards inside a block
/// in their original order. With blocks `[2, 4]`, `[0, 1, 2, 3, 4, 5]`
/// becomes `[4, 5, 0, 1, 2, 3]`.
///
/// `blocks` must already have passed `validate_blocks` for `cards.len()`.
pub fn overhand(cards: &[Card], blocks: &[i64]) -> Vec<Card> {
    debug_assert!(validate_blocks(blocks, cards.len()).is_ok());

    let mut next = Vec::with_capacity(cards.len());
    let mut cursor = cards.len();
    for &block in blocks {
        let left = cursor - block as usize;
        next.extend_from_slice(&cards[left..cursor]);
        cursor = left;
    }
    next
}

/// Count labels `i` in `0..=len-2` that are directly followed by `i + 1`.
///
/// A label pair is counted once even if it appears several times, which can
/// only happen in a loaded deck with duplicate labels.
pub fn unbroken_pairs(cards: &[Card]) -> usize {
    let last_first = cards.len() as i128 - 2;
    let mut found: FxHashSet<Card> = FxHashSet::default();

    for pair in cards.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let in_range = a >= 0 && i128::from(a) <= last_first;
        if in_range && a.checked_add(1) == Some(b) {
            found.insert(a);
        }
    }
    found.len()
}

/// Guess the deck after repeating the unknown permutation that produced it.
///
/// Assumes `cards` is `σ(identity)`. The card at position `i` came from
/// position `cards[i]`, so repeating σ pulls `cards[cards[i]]` into place.
/// This is a heuristic: it is exact only under that assumption.
///
/// Returns `None` when some label is not an index into the deck.
pub fn predict_repeat(cards: &[Card]) -> Option<Vec<Card>> {
    cards
        .iter()
        .map(|&label| {
            usize::try_from(label)
                .ok()
                .and_then(|source| cards.get(source))
                .copied()
        })
        .collect()
}

/// Draw a random block partition for a deck of `deck_len` cards.
///
/// Walks the deck one card at a time, closing the current block with
/// `break_probability`. Any cards left over after the walk form a final
/// block, so the partition always sums to `deck_len`.
pub fn random_partition<R: RandomSource + ?Sized>(
    deck_len: usize,
    break_probability: f64,
    rng: &mut R,
) -> BlockPartition {
    let mut blocks: BlockPartition = SmallVec::new();
    let mut block = 0i64;
    let mut covered = 0usize;

    for _ in 0..deck_len {
        block += 1;
        if rng.gen_bool(break_probability) {
            blocks.push(block);
            covered += block as usize;
            block = 0;
        }
    }

    if covered < deck_len {
        blocks.push((deck_len - covered) as i64);
    }
    blocks
}
