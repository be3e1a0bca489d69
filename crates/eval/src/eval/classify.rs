// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand classifier.
use log::trace;

use super::{HandCategory, HandRanking};
use crate::{Card, CardMask, EvalError, Rank, Result};

/// The ranks bits of the A-2-3-4-5 straight.
const WHEEL: u16 = (1 << Rank::Ace as u16) | 0b1111;

/// Classifies a five cards hand.
///
/// Returns an error if the hand doesn't have exactly 5 cards or if a card
/// appears more than once. The result doesn't depend on the cards order.
///
/// ```
/// # use showdown_eval::{classify, parse_cards, HandCategory, Rank};
/// let cards = parse_cards("AS KD 4H AC 6S").unwrap();
/// let ranking = classify(&cards).unwrap();
/// assert_eq!(ranking.category(), HandCategory::OnePair);
/// assert_eq!(ranking.tie_break(), &[Rank::Ace, Rank::King, Rank::Six, Rank::Four]);
/// ```
pub fn classify(cards: &[Card]) -> Result<HandRanking> {
    let hand: &[Card; 5] = cards
        .try_into()
        .map_err(|_| EvalError::InvalidHandSize {
            expected: "5",
            actual: cards.len(),
        })?;

    CardMask::from_unique(hand).map_err(EvalError::DuplicateCard)?;

    let ranking = rank_five(hand);
    trace!("{hand:?} => {ranking}");
    Ok(ranking)
}

/// Ranks five distinct cards.
pub(crate) fn rank_five(cards: &[Card; 5]) -> HandRanking {
    let mut counts = [0u8; Rank::COUNT];
    let mut rank_bits = 0u16;
    for card in cards {
        counts[card.rank() as usize] += 1;
        rank_bits |= 1 << card.rank() as u16;
    }

    let suit = cards[0].suit();
    let is_flush = cards.iter().all(|c| c.suit() == suit);

    // A straight has five distinct ranks so it can't be quads or a full house.
    if let Some(high) = straight_high(rank_bits) {
        let category = match (is_flush, high) {
            (true, Rank::Ace) => HandCategory::RoyalFlush,
            (true, _) => HandCategory::StraightFlush,
            (false, _) => HandCategory::Straight,
        };

        return HandRanking::new(category, &[high]);
    }

    // Group ranks by count, larger groups first and higher ranks first
    // within groups of the same size, this is the tie break key for all
    // the remaining categories.
    let mut groups = [(0u8, Rank::Deuce); 5];
    let mut len = 0;
    for rank in Rank::ranks().rev() {
        let count = counts[rank as usize];
        if count > 0 {
            groups[len] = (count, rank);
            len += 1;
        }
    }

    let groups = &mut groups[..len];
    groups.sort_by(|a, b| b.0.cmp(&a.0));

    let mut key = [Rank::Deuce; 5];
    for (k, (_, rank)) in key.iter_mut().zip(groups.iter()) {
        *k = *rank;
    }

    // With distinct cards there are at least two ranks.
    let category = match (groups[0].0, groups[1].0) {
        (4, _) => HandCategory::FourOfAKind,
        (3, 2) => HandCategory::FullHouse,
        _ if is_flush => HandCategory::Flush,
        (3, _) => HandCategory::ThreeOfAKind,
        (2, 2) => HandCategory::TwoPair,
        (2, _) => HandCategory::OnePair,
        _ => HandCategory::HighCard,
    };

    HandRanking::new(category, &key[..len])
}

/// Returns the highest rank of a five ranks run, the wheel is five high.
fn straight_high(rank_bits: u16) -> Option<Rank> {
    if rank_bits == WHEEL {
        return Some(Rank::Five);
    }

    if rank_bits.count_ones() != 5 {
        return None;
    }

    let low = rank_bits.trailing_zeros() as usize;
    (rank_bits >> low == 0b11111).then(|| Rank::ALL[low + 4])
}
