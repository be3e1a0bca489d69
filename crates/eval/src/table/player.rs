// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Table player.
use crate::Card;

/// A player seated at a table.
#[derive(Debug, Clone)]
pub struct Player {
    /// The player name, unique at the table.
    pub name: String,
    cards: Vec<Card>,
}

impl Player {
    /// Creates a player with no cards.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            cards: Vec::with_capacity(5),
        }
    }

    /// The player private cards.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Gives a card to the player.
    pub(crate) fn take(&mut self, card: Card) {
        self.cards.push(card);
    }
}
