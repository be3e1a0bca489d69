// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example classify_all5
// ...
// Total hands      2598960
//
// High Card:       1302540
// One Pair:        1098240
// Two Pair:        123552
// Three of a Kind: 54912
// Straight:        10200
// Flush:           5108
// Full House:      3744
// Four of a Kind:  624
// Straight Flush:  36
// Royal Flush:     4
// ```

use std::time::Instant;

use showdown_eval::{Deck, HandCategory, classify};

fn main() {
    // Classify all 2.6M hands.
    let now = Instant::now();
    let mut counts = [0usize; HandCategory::COUNT];

    Deck::default().for_each(5, |hand| {
        let ranking = classify(hand).expect("five distinct cards");
        counts[ranking.category() as usize] += 1;
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for category in HandCategory::ALL {
        let label = format!("{category}:");
        println!("{label:<17}{}", counts[category as usize]);
    }
}
