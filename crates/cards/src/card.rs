// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// A Poker card.
///
/// A card is stored as a single byte index in the range `0..52`:
///
/// ```text
///   index = suit * 13 + rank
///   rank  = deuce=0,trey=1,four=2,...,ace=12
///   suit  = clubs=0,diamonds=1,hearts=2,spades=3
/// ```
///
/// The index doubles as the bit position of the card in a
/// [CardMask](crate::CardMask).
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card(u8);

impl Card {
    /// Create a card given a rank and suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self(suit as u8 * Rank::COUNT as u8 + rank as u8)
    }

    /// Creates a card from its index, returns `None` if `index >= 52`.
    pub fn from_index(index: usize) -> Option<Card> {
        (index < Rank::COUNT * Suit::COUNT).then_some(Self(index as u8))
    }

    /// This card unique index in `0..52`.
    #[inline]
    pub fn index(&self) -> usize {
        self.0 as usize
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        Suit::ALL[self.index() / Rank::COUNT]
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        Rank::ALL[self.index() % Rank::COUNT]
    }
}

impl TryFrom<u8> for Card {
    type Error = ParseCardError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Card::from_index(index as usize).ok_or_else(|| ParseCardError(index.to_string()))
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> u8 {
        card.0
    }
}

/// Formats a card as `KD`, the alternate form `{:#}` uses the suit symbol
/// as in `K♦`.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}{}", self.rank(), self.suit().symbol())
        } else {
            write!(f, "{}{}", self.rank(), self.suit())
        }
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

/// Error returned when parsing a card, rank or suit from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid card notation {0:?}")]
pub struct ParseCardError(String);

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses cards like `AS`, `td`, `10H` or `K♦`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let err = || ParseCardError(s.to_string());

        // The suit is always the last char, the rank is everything before it.
        let (split, _) = s.char_indices().last().ok_or_else(err)?;
        let rank = s[..split].parse::<Rank>().map_err(|_| err())?;
        let suit = s[split..].parse::<Suit>().map_err(|_| err())?;

        Ok(Card::new(rank, suit))
    }
}

/// Parses a whitespace or comma separated list of cards, i.e. `"AS KD 10H"`.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, ParseCardError> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::parse)
        .collect()
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// The number of ranks.
    pub const COUNT: usize = 13;

    /// All ranks from deuce to ace.
    pub const ALL: [Rank; Rank::COUNT] = {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
    };

    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        Self::ALL.into_iter()
    }

    /// The rank name used in hand descriptions, i.e. "Queen".
    pub fn name(&self) -> &'static str {
        match self {
            Rank::Deuce => "Deuce",
            Rank::Trey => "Trey",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank = match s.to_ascii_uppercase().as_str() {
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "T" | "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(ParseCardError(s.to_string())),
        };

        Ok(rank)
    }
}

/// Card suit.
///
/// Suits have no ordering, two suits are either equal or different.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// The number of suits.
    pub const COUNT: usize = 4;

    /// All suits.
    pub const ALL: [Suit; Suit::COUNT] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        Self::ALL.into_iter()
    }

    /// The suit symbol, i.e. '♠'.
    pub fn symbol(&self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let suit = match s {
            "C" | "c" | "♣" => Suit::Clubs,
            "D" | "d" | "♦" => Suit::Diamonds,
            "H" | "h" | "♥" => Suit::Hearts,
            "S" | "s" | "♠" => Suit::Spades,
            _ => return Err(ParseCardError(s.to_string())),
        };

        Ok(suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::AHashSet;

    #[test]
    fn card_encoding() {
        let mut ids = AHashSet::default();

        for suit in Suit::suits() {
            for rank in Rank::ranks() {
                let card = Card::new(rank, suit);
                assert_eq!(card.rank(), rank);
                assert_eq!(card.suit(), suit);
                assert_eq!(Card::from_index(card.index()), Some(card));
                ids.insert(card.index());
            }
        }

        // Check uniqueness.
        assert_eq!(ids.len(), 52);
        assert!(ids.iter().all(|&id| id < 52));
        assert_eq!(Card::from_index(52), None);
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(format!("{c:?}"), "Card(AH)");
        assert_eq!(format!("{c:#}"), "A♥");

        // Symbols parse back.
        for card in (0..52).filter_map(Card::from_index) {
            assert_eq!(format!("{card:#}").parse(), Ok(card));
        }
    }

    #[test]
    fn card_serde() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "24");
        assert_eq!(serde_json::from_str::<Card>(&json).unwrap(), c);

        assert!(serde_json::from_str::<Card>("52").is_err());
        assert!(serde_json::from_str::<Card>("200").is_err());
    }

    #[test]
    fn card_from_str() {
        assert_eq!("KD".parse(), Ok(Card::new(Rank::King, Suit::Diamonds)));
        assert_eq!("2c".parse(), Ok(Card::new(Rank::Deuce, Suit::Clubs)));
        assert_eq!("10H".parse(), Ok(Card::new(Rank::Ten, Suit::Hearts)));
        assert_eq!("th".parse(), Ok(Card::new(Rank::Ten, Suit::Hearts)));
        assert_eq!("A♠".parse(), Ok(Card::new(Rank::Ace, Suit::Spades)));
        assert_eq!(" Q♦ ".parse(), Ok(Card::new(Rank::Queen, Suit::Diamonds)));

        for bad in ["", "A", "S", "1S", "AX", "11H", "AAS"] {
            assert!(bad.parse::<Card>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn cards_list() {
        let cards = parse_cards("AS, kd 10H\t2c").unwrap();
        assert_eq!(
            cards,
            vec![
                Card::new(Rank::Ace, Suit::Spades),
                Card::new(Rank::King, Suit::Diamonds),
                Card::new(Rank::Ten, Suit::Hearts),
                Card::new(Rank::Deuce, Suit::Clubs),
            ]
        );

        assert!(parse_cards("").unwrap().is_empty());
        assert!(parse_cards("AS ZZ").is_err());
    }

    #[test]
    fn rank_ordering() {
        assert!(Rank::Ace > Rank::King);
        assert!(Rank::Deuce < Rank::Trey);
        assert_eq!(Rank::ranks().max(), Some(Rank::Ace));
        assert_eq!(Rank::ranks().min(), Some(Rank::Deuce));
        assert_eq!(Rank::Queen.name(), "Queen");
    }
}
