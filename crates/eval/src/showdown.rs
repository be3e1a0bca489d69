// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown comparator.
//!
//! Players are compared only through their [HandRanking], once every player
//! best hand has been ranked the winners are all the players whose ranking
//! is equal to the best ranking, so ties are reported as a split and never
//! broken by the players order.
use ahash::AHashSet;
use std::{cmp::Ordering, fmt, hash::Hash};

use crate::{BestHand, Card, EvalError, HandRanking, Result, best_of};

/// Compares two rankings, first by category then by tie break ranks.
pub fn compare(a: &HandRanking, b: &HandRanking) -> Ordering {
    a.cmp(b)
}

/// Returns the players with the best ranking.
///
/// The winners are returned in the same order as the input, more than one
/// winner means a split pot. Returns an error if there are no players or if
/// a player appears more than once.
///
/// ```
/// # use showdown_eval::{classify, determine_winners, parse_cards};
/// let p1 = classify(&parse_cards("KS KD 4H 7C 6S").unwrap()).unwrap();
/// let p2 = classify(&parse_cards("2S 2D 2H 7D 6D").unwrap()).unwrap();
/// let winners = determine_winners([("p1", p1), ("p2", p2)]).unwrap();
/// assert_eq!(winners, vec!["p2"]);
/// ```
pub fn determine_winners<P, I>(rankings: I) -> Result<Vec<P>>
where
    P: Eq + Hash + fmt::Display,
    I: IntoIterator<Item = (P, HandRanking)>,
{
    let rankings = rankings.into_iter().collect::<Vec<_>>();

    {
        let mut players = AHashSet::with_capacity(rankings.len());
        for (player, _) in &rankings {
            if !players.insert(player) {
                return Err(EvalError::DuplicatePlayer(player.to_string()));
            }
        }
    }

    let best = rankings
        .iter()
        .map(|(_, r)| *r)
        .max()
        .ok_or(EvalError::EmptyPlayerSet)?;

    Ok(rankings
        .into_iter()
        .filter(|(_, r)| *r == best)
        .map(|(p, _)| p)
        .collect())
}

/// Ranks the best hand of each player, hands may have 5 to 7 cards.
///
/// With the **`parallel`** feature each hand is ranked on its own thread,
/// there is no shared state between hands.
pub fn evaluate_all<H>(hands: &[H]) -> Result<Vec<BestHand>>
where
    H: AsRef<[Card]> + Sync,
{
    #[cfg(feature = "parallel")]
    {
        std::thread::scope(|s| {
            let handles = hands
                .iter()
                .map(|hand| s.spawn(move || best_of(hand.as_ref())))
                .collect::<Vec<_>>();

            handles
                .into_iter()
                .map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
                .collect()
        })
    }

    #[cfg(not(feature = "parallel"))]
    {
        hands.iter().map(|hand| best_of(hand.as_ref())).collect()
    }
}
