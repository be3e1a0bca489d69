// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation errors.
use thiserror::Error;

use crate::Card;

/// Errors returned by the evaluator and the table types.
///
/// All errors are caller bugs or invalid table setups, none of them is
/// transient and retrying the same call returns the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The number of cards doesn't match what the operation requires.
    #[error("hand has {actual} cards, expected {expected}")]
    InvalidHandSize {
        /// The required number of cards.
        expected: &'static str,
        /// The number of cards passed in.
        actual: usize,
    },
    /// The same card appears twice in the input.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// Winners were requested for an empty set of players.
    #[error("no players to compare")]
    EmptyPlayerSet,
    /// The table is full.
    #[error("too many players, a table seats at most {max}")]
    TooManyPlayers {
        /// The maximum number of players.
        max: usize,
    },
    /// Not enough players to deal a hand.
    #[error("not enough players, at least {min} required")]
    NotEnoughPlayers {
        /// The minimum number of players.
        min: usize,
    },
    /// A player is already seated or appears twice in a showdown.
    #[error("duplicate player {0}")]
    DuplicatePlayer(String),
    /// There are no cards left in the deck.
    #[error("the deck ran out of cards")]
    DeckExhausted,
    /// The table is not in a state that allows the operation.
    #[error("invalid game state: {0}")]
    InvalidGameState(&'static str),
}

/// Evaluation result type.
pub type Result<T> = std::result::Result<T, EvalError>;
