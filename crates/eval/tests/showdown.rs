// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! End to end hand evaluation through the public API.
use rand::{SeedableRng, rngs::StdRng};
use std::cmp::Ordering;

use showdown_eval::{
    Card, Deck, EvalError, HandCategory, HandRanking, Rank, best_hand, classify, compare,
    determine_winners, parse_cards,
    table::{Dealer, GameType, Table},
};

fn cards(s: &str) -> Vec<Card> {
    parse_cards(s).unwrap()
}

fn ranking(s: &str) -> HandRanking {
    classify(&cards(s)).unwrap()
}

/// Calls `f` with every permutation of `cards` (Heap's algorithm).
fn permutations(cards: &mut [Card], k: usize, f: &mut impl FnMut(&[Card])) {
    if k <= 1 {
        f(cards);
        return;
    }

    for i in 0..k {
        permutations(cards, k - 1, f);
        let swap = if k % 2 == 0 { i } else { 0 };
        cards.swap(swap, k - 1);
    }
}

#[test]
fn pair_of_aces() {
    let r = ranking("A♠ K♦ 4♥ A♣ 6♠");
    assert_eq!(r.category(), HandCategory::OnePair);
    assert_eq!(r.tie_break(), &[Rank::Ace, Rank::King, Rank::Six, Rank::Four]);
}

#[test]
fn three_kings() {
    let r = ranking("K♠ K♥ K♣ 2♣ 3♣");
    assert_eq!(r.category(), HandCategory::ThreeOfAKind);
    assert_eq!(r.tie_break(), &[Rank::King, Rank::Trey, Rank::Deuce]);
}

#[test]
fn royal_hearts() {
    assert_eq!(ranking("A♥ K♥ Q♥ J♥ 10♥").category(), HandCategory::RoyalFlush);
}

#[test]
fn trips_beat_higher_pair() {
    let kings = ranking("K♠ K♥ 9♣ 7♦ 3♣");
    let deuces = ranking("2♠ 2♥ 2♣ 7♠ 3♦");
    assert_eq!(compare(&deuces, &kings), Ordering::Greater);

    let winners = determine_winners([("kings", kings), ("deuces", deuces)]).unwrap();
    assert_eq!(winners, vec!["deuces"]);
}

#[test]
fn identical_full_houses_split() {
    // Each player from its own deck.
    let p1 = ranking("A♠ A♥ A♣ J♠ J♣");
    let p2 = ranking("A♠ A♥ A♣ J♠ J♣");

    let winners = determine_winners([(1, p1), (2, p2)]).unwrap();
    assert_eq!(winners, vec![1, 2]);
}

#[test]
fn classify_is_order_invariant() {
    for hand in ["A♠ K♦ 4♥ A♣ 6♠", "A♦ 2♣ 3♥ 4♠ 5♦", "9♣ 9♠ 9♦ 6♣ 6♥"] {
        let mut hand = cards(hand);
        let expected = classify(&hand).unwrap();

        let mut count = 0;
        permutations(&mut hand, 5, &mut |p: &[Card]| {
            let r = classify(p).unwrap();
            assert_eq!(r.category(), expected.category());
            assert_eq!(r.tie_break(), expected.tie_break());
            count += 1;
        });
        assert_eq!(count, 120);
    }
}

#[test]
fn best_hand_dominates_every_subset() {
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..1_000 {
        let mut deck = Deck::default();
        let hand = (0..7)
            .map(|_| deck.draw(&mut rng).unwrap())
            .collect::<Vec<_>>();

        let best = best_hand(&hand).unwrap();
        for i in 0..7 {
            for j in (i + 1)..7 {
                let five = hand
                    .iter()
                    .enumerate()
                    .filter(|(idx, _)| *idx != i && *idx != j)
                    .map(|(_, c)| *c)
                    .collect::<Vec<_>>();
                assert!(classify(&five).unwrap() <= best.ranking);
            }
        }
    }
}

#[test]
fn winners_are_all_max_rankings() {
    let mut rng = StdRng::seed_from_u64(77);

    for _ in 0..200 {
        let mut deck = Deck::default();
        let board = (0..5)
            .map(|_| deck.draw(&mut rng).unwrap())
            .collect::<Vec<_>>();

        let rankings = (0..6)
            .map(|player| {
                let mut hand = board.clone();
                hand.push(deck.draw(&mut rng).unwrap());
                hand.push(deck.draw(&mut rng).unwrap());
                (player, best_hand(&hand).unwrap().ranking)
            })
            .collect::<Vec<_>>();

        let max = rankings.iter().map(|(_, r)| *r).max().unwrap();
        let winners = determine_winners(rankings.clone()).unwrap();
        assert!(!winners.is_empty());

        for (player, r) in rankings {
            assert_eq!(winners.contains(&player), r == max);
        }
    }
}

#[test]
fn input_errors() {
    assert!(matches!(
        classify(&cards("A♠ K♦ 4♥ A♣")),
        Err(EvalError::InvalidHandSize { actual: 4, .. })
    ));
    assert!(matches!(
        best_hand(&cards("A♠ K♦ 4♥ A♣ 6♠")),
        Err(EvalError::InvalidHandSize { actual: 5, .. })
    ));
    assert!(matches!(
        classify(&cards("A♠ K♦ 4♥ A♠ 6♠")),
        Err(EvalError::DuplicateCard(_))
    ));
    assert_eq!(
        determine_winners(Vec::<(u8, HandRanking)>::new()),
        Err(EvalError::EmptyPlayerSet)
    );
    assert_eq!(
        determine_winners([(7, ranking("A♠ K♦ 4♥ A♣ 6♠")), (7, ranking("K♠ K♥ K♣ 2♣ 3♣"))]),
        Err(EvalError::DuplicatePlayer("7".to_string()))
    );
}

#[test]
fn seeded_tables_repeat() {
    let play = |seed| {
        let mut table = Table::new(GameType::Holdem, Dealer::with_seed(seed));
        for name in ["Cain", "Abel", "Moses"] {
            table.join(name).unwrap();
        }

        table.deal().unwrap();
        let showdown = table.showdown().unwrap();
        (table.board().to_vec(), showdown.winners)
    };

    assert_eq!(play(5), play(5));
}
