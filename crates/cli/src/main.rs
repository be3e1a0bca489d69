// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown CLI dealer.
//!
//! Deals Five Card Draw or Texas Hold'em hands and prints the showdown.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use showdown_eval::{parse_cards, table::GameType};

pub mod game;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Game {
    /// Five Card Draw.
    Draw,
    /// Texas Hold'em.
    Holdem,
}

#[derive(Debug, Parser)]
struct Cli {
    /// The game to deal.
    #[clap(long, short, value_enum, default_value_t = Game::Holdem)]
    game: Game,
    /// Number of players.
    #[clap(long, short, default_value_t = 3, value_parser = clap::value_parser!(u8).range(2..=8))]
    players: u8,
    /// Number of hands to deal.
    #[clap(long, short, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    deals: u32,
    /// Seed for repeatable deals.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Preset cards for the next player, i.e. --hand "AS KD".
    #[clap(long = "hand")]
    hands: Vec<String>,
    /// Preset Hold'em community cards, i.e. --board "2C 3C 4C 5D TH".
    #[clap(long)]
    board: Option<String>,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    let hands = cli
        .hands
        .iter()
        .map(|h| parse_cards(h).with_context(|| format!("Invalid hand {h:?}")))
        .collect::<Result<Vec<_>>>()?;

    let board = cli
        .board
        .as_deref()
        .map(|b| parse_cards(b).with_context(|| format!("Invalid board {b:?}")))
        .transpose()?;

    let config = game::Config {
        game: match cli.game {
            Game::Draw => GameType::Draw,
            Game::Holdem => GameType::Holdem,
        },
        players: cli.players as usize,
        deals: cli.deals,
        seed: cli.seed,
        hands,
        board,
    };

    game::run(config)
}
