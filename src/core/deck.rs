//! Deck representation: an ordered, owned sequence of card labels.
//!
//! Index 0 is the top of the deck. A fresh deck of size N holds the labels
//! `0..N` in order; shuffles permute it, `load` replaces it wholesale.
//!
//! ## Usage
//!
//! ```
//! use overhand::core::Deck;
//!
//! let deck = Deck::ordered(4);
//! assert_eq!(deck.cards(), &[0, 1, 2, 3]);
//! assert_eq!(deck.to_string(), "[0, 1, 2, 3]");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A card label. Decks built by the engine use `0..N`; loaded decks may hold
/// any integers.
pub type Card = i64;

/// Block sizes for one overhand shuffle, top group first.
///
/// Signed so that invalid (negative) input can be represented and rejected.
/// SmallVec keeps typical partitions (a handful of blocks) off the heap.
pub type BlockPartition = SmallVec<[i64; 8]>;

/// Largest deck `make_new` is allowed to build (128 MiB of cards).
pub const MAX_DECK_SIZE: usize = 1 << 24;

/// An ordered deck of cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Create the identity deck `[0, 1, ..., size - 1]`.
    ///
    /// Callers taking sizes from input should check them against
    /// `MAX_DECK_SIZE` first.
    #[must_use]
    pub fn ordered(size: usize) -> Self {
        Self {
            cards: (0..size as Card).collect(),
        }
    }

    /// Create a deck holding exactly the given cards. No validation.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Borrow the cards, top first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Copy the cards out. The copy shares nothing with the deck.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Card> {
        self.cards.clone()
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self::from_cards(cards)
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", card)?;
        }
        write!(f, "]")
    }
}
