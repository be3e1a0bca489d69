// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories and rankings.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use crate::Rank;

/// The category of a five cards hand, from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// No pairs, no straight, no flush.
    HighCard = 0,
    /// Two cards of the same rank.
    OnePair,
    /// Two pairs of different ranks.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five cards in sequence.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// Five cards in sequence of the same suit.
    StraightFlush,
    /// Ace high straight flush.
    RoyalFlush,
}

impl HandCategory {
    /// The number of categories.
    pub const COUNT: usize = 10;

    /// All categories from worst to best.
    pub const ALL: [HandCategory; HandCategory::COUNT] = [
        HandCategory::HighCard,
        HandCategory::OnePair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
        HandCategory::RoyalFlush,
    ];

    /// The number of ranks that break ties between hands of this category.
    pub const fn tie_break_len(&self) -> usize {
        match self {
            HandCategory::HighCard | HandCategory::Flush => 5,
            HandCategory::OnePair => 4,
            HandCategory::TwoPair | HandCategory::ThreeOfAKind => 3,
            HandCategory::FullHouse | HandCategory::FourOfAKind => 2,
            HandCategory::Straight | HandCategory::StraightFlush | HandCategory::RoyalFlush => 1,
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        };

        write!(f, "{name}")
    }
}

/// The value of a five cards hand.
///
/// A ranking is a category plus the ranks that break ties between hands of
/// the same category, most significant first:
///
/// ```text
///   RoyalFlush, StraightFlush, Straight  [high]        (wheel is five high)
///   FourOfAKind                          [quads, kicker]
///   FullHouse                            [trips, pair]
///   Flush, HighCard                      [r1, r2, r3, r4, r5]
///   ThreeOfAKind                         [trips, k1, k2]
///   TwoPair                              [high pair, low pair, kicker]
///   OnePair                              [pair, k1, k2, k3]
/// ```
///
/// Rankings are totally ordered: first by category, then by the tie break
/// ranks element by element. Two rankings are equal only if they have the
/// same category and the same tie break ranks.
///
/// The number of tie break ranks is fixed by the category, see
/// [HandCategory::tie_break_len].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HandRanking {
    category: HandCategory,
    key: [Rank; 5],
}

impl HandRanking {
    /// Creates a ranking from a category and its tie break ranks.
    ///
    /// Panics if the number of tie break ranks doesn't match the category.
    pub fn new(category: HandCategory, tie_break: &[Rank]) -> Self {
        assert_eq!(
            tie_break.len(),
            category.tie_break_len(),
            "{category} tie break ranks"
        );

        let mut key = [Rank::Deuce; 5];
        key[..tie_break.len()].copy_from_slice(tie_break);

        Self { category, key }
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The ranks used to break ties within the same category.
    pub fn tie_break(&self) -> &[Rank] {
        &self.key[..self.category.tie_break_len()]
    }
}

impl PartialEq for HandRanking {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HandRanking {}

impl PartialOrd for HandRanking {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandRanking {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| self.tie_break().cmp(other.tie_break()))
    }
}

impl fmt::Display for HandRanking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let high = self.key[0];
        match self.category {
            HandCategory::RoyalFlush => write!(f, "{}", self.category),
            HandCategory::StraightFlush | HandCategory::Straight | HandCategory::Flush => {
                write!(f, "{}, {} high", self.category, high.name())
            }
            HandCategory::FourOfAKind | HandCategory::ThreeOfAKind | HandCategory::OnePair => {
                write!(f, "{}, {}", self.category, plural(high))
            }
            HandCategory::FullHouse => {
                let pair = plural(self.key[1]);
                write!(f, "{}, {} over {pair}", self.category, plural(high))
            }
            HandCategory::TwoPair => {
                let low = plural(self.key[1]);
                write!(f, "{}, {} and {low}", self.category, plural(high))
            }
            HandCategory::HighCard => write!(f, "{}, {}", self.category, high.name()),
        }
    }
}

fn plural(rank: Rank) -> String {
    match rank {
        Rank::Six => "Sixes".to_string(),
        _ => format!("{}s", rank.name()),
    }
}
