// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Deals games and prints the showdowns.
use anyhow::{Result, bail};
use log::info;
use std::io::{self, Write};

use showdown_eval::{
    Card,
    table::{Dealer, GameType, Showdown, Table},
};

/// The dealer configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// The game to deal.
    pub game: GameType,
    /// Number of players at the table.
    pub players: usize,
    /// Number of hands to deal.
    pub deals: u32,
    /// Seed for repeatable deals, each deal uses `seed + deal`.
    pub seed: Option<u64>,
    /// Preset cards for the first players.
    pub hands: Vec<Vec<Card>>,
    /// Preset Hold'em community cards.
    pub board: Option<Vec<Card>>,
}

/// Deals all the hands and prints the results to stdout.
pub fn run(config: Config) -> Result<()> {
    let showdowns = play(&config)?;

    let mut stdout = io::stdout().lock();
    for (deal, showdown) in showdowns.iter().enumerate() {
        print_showdown(&mut stdout, config.game, deal + 1, showdown)?;
    }

    Ok(())
}

/// Deals all the hands.
pub fn play(config: &Config) -> Result<Vec<Showdown>> {
    if config.hands.len() > config.players {
        bail!(
            "{} preset hands for {} players",
            config.hands.len(),
            config.players
        );
    }

    if config.board.is_some() && config.game != GameType::Holdem {
        bail!("A board can only be set for {}", GameType::Holdem);
    }

    let mut showdowns = Vec::with_capacity(config.deals as usize);
    for deal in 0..config.deals {
        let dealer = match config.seed {
            Some(seed) => Dealer::with_seed(seed.wrapping_add(deal as u64)),
            None => Dealer::new(),
        };

        let mut table = Table::new(config.game, dealer);
        for seat in 0..config.players {
            let name = format!("Player {}", seat + 1);
            match config.hands.get(seat) {
                Some(cards) => table.join_with_cards(&name, cards)?,
                None => table.join(&name)?,
            }
        }

        if let Some(board) = &config.board {
            table.set_board(board)?;
        }

        table.deal()?;
        showdowns.push(table.showdown()?);
    }

    info!("Dealt {} {} hands", config.deals, config.game);
    Ok(showdowns)
}

fn print_showdown<W: Write>(
    w: &mut W,
    game: GameType,
    deal: usize,
    showdown: &Showdown,
) -> io::Result<()> {
    writeln!(w, "Hand #{deal} {game}")?;

    if !showdown.board.is_empty() {
        writeln!(w, "Board: {}", join_cards(&showdown.board))?;
    }

    for hand in &showdown.hands {
        writeln!(
            w,
            "{}: {:<14} {:<32} [{}]",
            hand.name,
            join_cards(&hand.cards),
            hand.best.ranking.to_string(),
            join_cards(&hand.best.cards)
        )?;
    }

    let label = if showdown.is_split() {
        "Split pot"
    } else {
        "Winner"
    };

    if let Some(hand) = showdown.winning_hands().next() {
        writeln!(
            w,
            "{label}: {} with {}\n",
            showdown.winners.join(", "),
            hand.best.ranking
        )?;
    }

    Ok(())
}

fn join_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdown_eval::{HandCategory, parse_cards};

    fn config(game: GameType) -> Config {
        Config {
            game,
            players: 3,
            deals: 5,
            seed: Some(17),
            hands: vec![],
            board: None,
        }
    }

    #[test]
    fn seeded_deals_repeat() {
        let config = config(GameType::Holdem);
        let first = play(&config).unwrap();
        let second = play(&config).unwrap();

        assert_eq!(first.len(), 5);
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.board, b.board);
            assert_eq!(a.winners, b.winners);
        }
    }

    #[test]
    fn preset_hands() {
        let mut config = config(GameType::Holdem);
        config.hands = vec![parse_cards("AS AD").unwrap(), parse_cards("2C 7D").unwrap()];
        config.board = Some(parse_cards("AH AC KS 8D 3H").unwrap());

        for showdown in play(&config).unwrap() {
            assert_eq!(showdown.winners, vec!["Player 1"]);
            assert_eq!(
                showdown.hands[0].best.ranking.category(),
                HandCategory::FourOfAKind
            );
        }
    }

    #[test]
    fn invalid_config() {
        let mut config = config(GameType::Draw);
        config.players = 2;
        config.hands = vec![
            parse_cards("AS KD 4H AC 6S").unwrap(),
            parse_cards("KS KH KC 2C 3C").unwrap(),
            parse_cards("AH QH JH TH 9H").unwrap(),
        ];
        assert!(play(&config).is_err());

        let mut config = self::config(GameType::Draw);
        config.board = Some(parse_cards("AH AC KS 8D 3H").unwrap());
        assert!(play(&config).is_err());

        let mut config = self::config(GameType::Draw);
        config.hands = vec![parse_cards("AS KD").unwrap()];
        assert!(play(&config).is_err());
    }

    #[test]
    fn print_draw_showdown() {
        let mut config = config(GameType::Draw);
        config.deals = 1;
        config.hands = vec![
            parse_cards("AS KD 4H AC 6S").unwrap(),
            parse_cards("KS KH KC 2C 3C").unwrap(),
            parse_cards("AH QH JH TH 9H").unwrap(),
        ];

        let showdowns = play(&config).unwrap();
        let mut out = Vec::new();
        print_showdown(&mut out, config.game, 1, &showdowns[0]).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Hand #1 Five Card Draw\n"));
        assert!(!out.contains("Board"));
        assert!(out.contains("Player 2: KS KH KC 2C 3C"));
        assert!(out.contains("Winner: Player 3 with Flush, Ace high"));
    }
}
