// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A set of cards stored as a bitmask.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Card;

/// An unordered set of cards with constant time insert and lookup.
///
/// Each card sets the bit at its [Card::index].
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct CardMask(u64);

impl CardMask {
    /// The empty set.
    pub const EMPTY: CardMask = CardMask(0);

    /// The set with all 52 cards.
    pub const FULL: CardMask = CardMask((1 << 52) - 1);

    /// Creates a mask from cards, returns the first duplicate card if any.
    pub fn from_unique(cards: &[Card]) -> Result<CardMask, Card> {
        let mut mask = CardMask::EMPTY;
        for &card in cards {
            if !mask.insert(card) {
                return Err(card);
            }
        }

        Ok(mask)
    }

    /// Adds a card to the set, returns false if the card was already present.
    #[inline]
    pub fn insert(&mut self, card: Card) -> bool {
        let bit = 1u64 << card.index();
        let added = self.0 & bit == 0;
        self.0 |= bit;
        added
    }

    /// Removes a card from the set, returns true if the card was present.
    #[inline]
    pub fn remove(&mut self, card: Card) -> bool {
        let bit = 1u64 << card.index();
        let removed = self.0 & bit != 0;
        self.0 &= !bit;
        removed
    }

    /// Checks if the set contains a card.
    #[inline]
    pub fn contains(&self, card: Card) -> bool {
        self.0 & (1u64 << card.index()) != 0
    }

    /// The number of cards in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Checks if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterates the cards in the set in index order.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        (0..64)
            .filter(|&i| self.0 & (1u64 << i) != 0)
            .filter_map(Card::from_index)
    }
}

impl FromIterator<Card> for CardMask {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        let mut mask = CardMask::EMPTY;
        iter.into_iter().for_each(|c| {
            mask.insert(c);
        });
        mask
    }
}

impl TryFrom<u64> for CardMask {
    type Error = String;

    fn try_from(bits: u64) -> Result<Self, Self::Error> {
        if bits & !Self::FULL.0 != 0 {
            return Err(format!("invalid card mask {bits:#x}"));
        }

        Ok(CardMask(bits))
    }
}

impl From<CardMask> for u64 {
    fn from(mask: CardMask) -> u64 {
        mask.0
    }
}

impl fmt::Debug for CardMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.cards()).finish()
    }
}
