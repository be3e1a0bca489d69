// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td = "TD".parse::<Card>().unwrap();
//! assert_eq!(td, Card::new(Rank::Ten, Suit::Diamonds));
//! ```
//!
//! a [CardMask] set for constant time duplicate checks, and a [Deck] type
//! for shuffling, drawing without replacement, and iterating hands:
//!
//! ```
//! # use showdown_cards::{Card, CardMask, Deck};
//! let mut rng = rand::rng();
//! let mut deck = Deck::default();
//! let mut dealt = CardMask::EMPTY;
//! while let Some(card) = deck.draw(&mut rng) {
//!     assert!(dealt.insert(card));
//! }
//! assert_eq!(dealt.len(), Deck::SIZE);
//! ```
//!
//! to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use showdown_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
pub use card::{Card, ParseCardError, Rank, Suit, parse_cards};

mod deck;
pub use deck::Deck;

mod mask;
pub use mask::CardMask;
