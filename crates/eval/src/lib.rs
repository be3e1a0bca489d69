// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Poker hand evaluator for five cards draw and Texas Hold'em hands. A five
//! cards hand is ranked with [classify] into a [HandRanking], a category plus
//! the ranks that break ties within the category, and rankings compare with
//! the usual poker rules:
//!
//! ```
//! # use showdown_eval::*;
//! let pair = classify(&parse_cards("AS KD 4H AC 6S").unwrap()).unwrap();
//! let trips = classify(&parse_cards("2S 2D 2C KS 6H").unwrap()).unwrap();
//! assert_eq!(pair.category(), HandCategory::OnePair);
//! assert!(trips > pair);
//! ```
//!
//! For Hold'em [best_hand] ranks the best five cards out of the two hole
//! cards and the five community cards, and [determine_winners] returns all
//! the players with the best ranking:
//!
//! ```
//! # use showdown_eval::*;
//! let board = "AS KS QD 7H 2C";
//! let p1 = best_hand(&parse_cards(&format!("AD AH {board}")).unwrap()).unwrap();
//! let p2 = best_hand(&parse_cards(&format!("JC TC {board}")).unwrap()).unwrap();
//! let winners = determine_winners([("p1", p1.ranking), ("p2", p2.ranking)]).unwrap();
//! assert_eq!(winners, vec!["p2"]);
//! ```
//!
//! The [table] module deals complete games on top of the evaluator.
//!
//! The **`parallel`** feature ranks the players hands in parallel.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod error;
pub use error::{EvalError, Result};

pub mod eval;
pub use eval::{BestHand, HandCategory, HandRanking, best_hand, best_of, classify};

pub mod showdown;
pub use showdown::{compare, determine_winners};

pub mod table;

// Reexport cards types.
pub use showdown_cards::{Card, CardMask, Deck, ParseCardError, Rank, Suit, parse_cards};
