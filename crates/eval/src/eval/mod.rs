// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator ranks a five cards hand into a [HandCategory] plus the
//! ranks that break ties within the category, see [HandRanking] for the
//! tie break ranks of each category.
//!
//! It provides a [classify] function that ranks exactly five cards, a
//! [best_hand] function that ranks all the 21 five cards combinations of a
//! seven cards Hold'em hand and returns the best one with its cards, and
//! [best_of] that does the same for 5, 6, or 7 cards.
mod best;
mod classify;
mod ranking;

pub use best::{BestHand, best_hand, best_of};
pub use classify::classify;
pub use ranking::{HandCategory, HandRanking};
