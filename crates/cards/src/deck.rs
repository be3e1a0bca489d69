// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards deck.
use rand::prelude::*;

use crate::{Card, CardMask, Rank, Suit};

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Creates a deck with all the cards that are not in `used`.
    pub fn excluding(used: &CardMask) -> Self {
        let cards = Self::default()
            .cards
            .into_iter()
            .filter(|c| !used.contains(*c))
            .collect();
        Self { cards }
    }

    /// Deals the top card from the deck, `None` if the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draws a random card from the remaining cards.
    ///
    /// This is a single step of a Fisher-Yates shuffle: the drawn card is
    /// swapped out of the deck so it can never be drawn again.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Option<Card> {
        if self.cards.is_empty() {
            return None;
        }

        let idx = rng.random_range(0..self.cards.len());
        Some(self.cards.swap_remove(idx))
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        if k > self.cards.len() {
            return;
        }

        let mut hand = Vec::with_capacity(k);
        for_each_rec(&self.cards, k, 0, &mut hand, &mut f);
    }
}

fn for_each_rec<F>(cards: &[Card], k: usize, start: usize, hand: &mut Vec<Card>, f: &mut F)
where
    F: FnMut(&[Card]),
{
    if hand.len() == k {
        f(hand.as_slice());
        return;
    }

    // Leave enough cards to fill the remaining positions.
    let last = cards.len() - (k - hand.len());
    for idx in start..=last {
        hand.push(cards[idx]);
        for_each_rec(cards, k, idx + 1, hand, f);
        hand.pop();
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
