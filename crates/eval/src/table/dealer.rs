// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards dealing for one game.
use log::trace;
use rand::{SeedableRng, rngs::StdRng};

use crate::{Card, CardMask, Deck, EvalError, Result};

/// A Hold'em dealing phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Street {
    /// Hole cards have been dealt, no community cards.
    Preflop,
    /// Three community cards.
    Flop,
    /// Fourth community card.
    Turn,
    /// Fifth community card.
    River,
    /// All cards are dealt.
    Showdown,
}

impl Street {
    /// Returns the street after this one.
    pub fn next(self) -> Street {
        match self {
            Street::Preflop => Street::Flop,
            Street::Flop => Street::Turn,
            Street::Turn => Street::River,
            Street::River | Street::Showdown => Street::Showdown,
        }
    }

    /// The number of community cards dealt when entering this street.
    pub fn community_cards(self) -> usize {
        match self {
            Street::Flop => 3,
            Street::Turn | Street::River => 1,
            Street::Preflop | Street::Showdown => 0,
        }
    }
}

/// Deals cards for a single game.
///
/// The dealer owns the deck and the set of cards in play so that no card is
/// dealt twice in a game, cards are drawn at random from the cards left in
/// the deck.
#[derive(Debug)]
pub struct Dealer {
    deck: Deck,
    used: CardMask,
    rng: StdRng,
}

impl Dealer {
    /// Creates a dealer with a full deck and os randomness.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates a dealer with seeded randomness for repeatable games.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            deck: Deck::default(),
            used: CardMask::EMPTY,
            rng,
        }
    }

    /// Takes cards out of the deck, used for preset hands.
    ///
    /// Fails without taking any card if a card is repeated or already in play.
    pub fn reserve(&mut self, cards: &[Card]) -> Result<()> {
        let mut used = self.used;
        for &card in cards {
            if !used.insert(card) {
                return Err(EvalError::DuplicateCard(card));
            }
        }

        for &card in cards {
            self.deck.remove(card);
        }

        self.used = used;
        Ok(())
    }

    /// Draws a random card that is not in play.
    pub fn draw(&mut self) -> Result<Card> {
        let card = self
            .deck
            .draw(&mut self.rng)
            .ok_or(EvalError::DeckExhausted)?;

        let added = self.used.insert(card);
        debug_assert!(added, "card {card} dealt twice");

        trace!("Drawn {card}");
        Ok(card)
    }

    /// Discards a card face down.
    pub fn burn(&mut self) -> Result<()> {
        self.draw().map(|_| ())
    }

    /// The cards in play.
    pub fn used(&self) -> &CardMask {
        &self.used
    }

    /// The number of cards left in the deck.
    pub fn remaining(&self) -> usize {
        self.deck.count()
    }
}

impl Default for Dealer {
    fn default() -> Self {
        Self::new()
    }
}
