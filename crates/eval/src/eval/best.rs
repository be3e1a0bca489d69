// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best five cards hand selection.
use serde::{Deserialize, Serialize};

use super::{HandRanking, classify::rank_five};
use crate::{Card, CardMask, EvalError, Result};

/// The best five cards hand out of a larger set of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestHand {
    /// The hand ranking.
    pub ranking: HandRanking,
    /// The five cards with the best ranking.
    pub cards: [Card; 5],
}

/// Returns the best five cards hand in a seven cards Hold'em hand.
///
/// All the 21 five cards combinations are ranked so the best hand may use
/// both, one, or none of the hole cards.
///
/// ```
/// # use showdown_eval::{best_hand, parse_cards, HandCategory};
/// // Hole cards then the board.
/// let cards = parse_cards("2C 7D AH KH QH JH TH").unwrap();
/// let best = best_hand(&cards).unwrap();
/// assert_eq!(best.ranking.category(), HandCategory::RoyalFlush);
/// ```
pub fn best_hand(cards: &[Card]) -> Result<BestHand> {
    if cards.len() != 7 {
        return Err(EvalError::InvalidHandSize {
            expected: "7",
            actual: cards.len(),
        });
    }

    best_of(cards)
}

/// Returns the best five cards hand for hands with 5 to 7 cards.
pub fn best_of(cards: &[Card]) -> Result<BestHand> {
    if !(5..=7).contains(&cards.len()) {
        return Err(EvalError::InvalidHandSize {
            expected: "5 to 7",
            actual: cards.len(),
        });
    }

    CardMask::from_unique(cards).map_err(EvalError::DuplicateCard)?;

    let mut best: Option<BestHand> = None;
    for_each_five(cards, |hand| {
        let ranking = rank_five(hand);
        // Keep the first hand found for equal rankings.
        if best.is_none_or(|b| ranking > b.ranking) {
            best = Some(BestHand {
                ranking,
                cards: *hand,
            });
        }
    });

    // There is at least one combination for 5 <= n.
    best.ok_or(EvalError::InvalidHandSize {
        expected: "5 to 7",
        actual: cards.len(),
    })
}

/// Calls `f` for each five cards combination in `cards`.
fn for_each_five<F>(cards: &[Card], mut f: F)
where
    F: FnMut(&[Card; 5]),
{
    let n = cards.len();
    for c1 in 0..n {
        for c2 in (c1 + 1)..n {
            for c3 in (c2 + 1)..n {
                for c4 in (c3 + 1)..n {
                    for c5 in (c4 + 1)..n {
                        f(&[cards[c1], cards[c2], cards[c3], cards[c4], cards[c5]]);
                    }
                }
            }
        }
    }
}
