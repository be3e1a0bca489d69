// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker table that deals a game and resolves the showdown.
//!
//! The table is a thin layer on top of the evaluator: it seats players,
//! deals them private cards and, for Hold'em, the community cards, and then
//! ranks every player best hand to find the winners.
//!
//! ```
//! # use showdown_eval::table::{Dealer, GameType, Table};
//! let mut table = Table::new(GameType::Holdem, Dealer::with_seed(7));
//! table.join("Cain").unwrap();
//! table.join("Abel").unwrap();
//! table.deal().unwrap();
//!
//! let showdown = table.showdown().unwrap();
//! assert_eq!(showdown.hands.len(), 2);
//! assert!(!showdown.winners.is_empty());
//! ```
use ahash::AHashSet;
use log::{debug, info};
use serde::Serialize;
use std::fmt;

use crate::{BestHand, Card, EvalError, Result, determine_winners, showdown::evaluate_all};

mod dealer;
pub use dealer::{Dealer, Street};

mod player;
pub use player::Player;

/// The game played at a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameType {
    /// Five cards draw, each player gets five private cards.
    Draw,
    /// Texas Hold'em, two hole cards per player and five community cards.
    Holdem,
}

impl GameType {
    /// The number of private cards dealt to each player.
    pub fn private_cards(&self) -> usize {
        match self {
            GameType::Draw => 5,
            GameType::Holdem => 2,
        }
    }

    /// The number of community cards.
    pub fn community_cards(&self) -> usize {
        match self {
            GameType::Draw => 0,
            GameType::Holdem => 5,
        }
    }

    fn size_name(n: usize) -> &'static str {
        match n {
            2 => "2",
            _ => "5",
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameType::Draw => write!(f, "Five Card Draw"),
            GameType::Holdem => write!(f, "Texas Hold'em"),
        }
    }
}

/// A player hand at showdown.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerHand {
    /// The player name.
    pub name: String,
    /// The player private cards.
    pub cards: Vec<Card>,
    /// The player best five cards and their ranking.
    pub best: BestHand,
}

/// The showdown result.
#[derive(Debug, Clone, Serialize)]
pub struct Showdown {
    /// The community cards, empty for draw games.
    pub board: Vec<Card>,
    /// All the players hands in seat order.
    pub hands: Vec<PlayerHand>,
    /// The winners names in seat order.
    pub winners: Vec<String>,
}

impl Showdown {
    /// Checks if more than one player won.
    pub fn is_split(&self) -> bool {
        self.winners.len() > 1
    }

    /// The winners hands.
    pub fn winning_hands(&self) -> impl Iterator<Item = &PlayerHand> {
        self.hands
            .iter()
            .filter(|h| self.winners.iter().any(|w| w == &h.name))
    }
}

/// A poker table.
#[derive(Debug)]
pub struct Table {
    game: GameType,
    dealer: Dealer,
    players: Vec<Player>,
    names: AHashSet<String>,
    board: Vec<Card>,
    street: Street,
    dealt: bool,
}

impl Table {
    /// The minimum number of players to deal a hand.
    pub const MIN_PLAYERS: usize = 2;

    /// The maximum number of players at a table.
    pub const MAX_PLAYERS: usize = 8;

    /// Creates a table for the given game.
    pub fn new(game: GameType, dealer: Dealer) -> Self {
        Self {
            game,
            dealer,
            players: Vec::with_capacity(Self::MAX_PLAYERS),
            names: AHashSet::default(),
            board: Vec::with_capacity(5),
            street: Street::Preflop,
            dealt: false,
        }
    }

    /// A player joins the table, cards are dealt with [Table::deal].
    pub fn join(&mut self, name: &str) -> Result<()> {
        self.check_join(name)?;
        self.seat(Player::new(name));
        Ok(())
    }

    /// A player joins the table with preset private cards.
    pub fn join_with_cards(&mut self, name: &str, cards: &[Card]) -> Result<()> {
        self.check_join(name)?;

        let expected = self.game.private_cards();
        if cards.len() != expected {
            return Err(EvalError::InvalidHandSize {
                expected: GameType::size_name(expected),
                actual: cards.len(),
            });
        }

        self.dealer.reserve(cards)?;

        let mut player = Player::new(name);
        cards.iter().for_each(|&c| player.take(c));
        self.seat(player);
        Ok(())
    }

    /// Sets preset community cards for a Hold'em table.
    pub fn set_board(&mut self, cards: &[Card]) -> Result<()> {
        if self.game != GameType::Holdem {
            return Err(EvalError::InvalidGameState("only Hold'em has a board"));
        }

        if self.dealt || !self.board.is_empty() {
            return Err(EvalError::InvalidGameState("the board is already dealt"));
        }

        if cards.len() != self.game.community_cards() {
            return Err(EvalError::InvalidHandSize {
                expected: "5",
                actual: cards.len(),
            });
        }

        self.dealer.reserve(cards)?;
        self.board.extend_from_slice(cards);
        Ok(())
    }

    /// Deals the missing private cards and community cards.
    pub fn deal(&mut self) -> Result<()> {
        if self.dealt {
            return Err(EvalError::InvalidGameState("the hand is already dealt"));
        }

        if self.players.len() < Self::MIN_PLAYERS {
            return Err(EvalError::NotEnoughPlayers {
                min: Self::MIN_PLAYERS,
            });
        }

        // One card at a time to each player that needs it.
        for round in 0..self.game.private_cards() {
            for player in self.players.iter_mut() {
                if player.cards().len() <= round {
                    player.take(self.dealer.draw()?);
                }
            }
        }

        for player in &self.players {
            debug!("{} has {:?}", player.name, player.cards());
        }

        if self.game == GameType::Holdem && self.board.is_empty() {
            while self.street != Street::Showdown {
                let street = self.street.next();
                let count = street.community_cards();
                if count > 0 {
                    self.dealer.burn()?;
                    for _ in 0..count {
                        self.board.push(self.dealer.draw()?);
                    }

                    debug!("{street:?} board {:?}", self.board);
                }

                self.street = street;
            }
        }

        self.street = Street::Showdown;
        self.dealt = true;
        Ok(())
    }

    /// Ranks all the players hands and finds the winners.
    pub fn showdown(&self) -> Result<Showdown> {
        if !self.dealt {
            return Err(EvalError::InvalidGameState("the hand has not been dealt"));
        }

        let hands = self
            .players
            .iter()
            .map(|p| {
                let mut cards = p.cards().to_vec();
                cards.extend_from_slice(&self.board);
                cards
            })
            .collect::<Vec<_>>();

        let best = evaluate_all(&hands)?;

        let winners = determine_winners(
            self.players
                .iter()
                .zip(best.iter())
                .map(|(p, b)| (p.name.clone(), b.ranking)),
        )?;

        let hands = self
            .players
            .iter()
            .zip(best)
            .map(|(p, best)| PlayerHand {
                name: p.name.clone(),
                cards: p.cards().to_vec(),
                best,
            })
            .collect::<Vec<_>>();

        if let Some(hand) = hands.iter().find(|h| winners.first() == Some(&h.name)) {
            info!(
                "{} winners {:?} with {}",
                self.game,
                winners,
                hand.best.ranking
            );
        }

        Ok(Showdown {
            board: self.board.clone(),
            hands,
            winners,
        })
    }

    /// The table game.
    pub fn game(&self) -> GameType {
        self.game
    }

    /// The seated players.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The community cards.
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// The current street.
    pub fn street(&self) -> Street {
        self.street
    }

    fn check_join(&self, name: &str) -> Result<()> {
        if self.dealt {
            return Err(EvalError::InvalidGameState("the hand is already dealt"));
        }

        if self.players.len() >= Self::MAX_PLAYERS {
            return Err(EvalError::TooManyPlayers {
                max: Self::MAX_PLAYERS,
            });
        }

        if self.names.contains(name) {
            return Err(EvalError::DuplicatePlayer(name.to_string()));
        }

        Ok(())
    }

    fn seat(&mut self, player: Player) {
        self.names.insert(player.name.clone());
        self.players.push(player);
    }
}
