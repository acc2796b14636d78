use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Spades,
    Hearts,
    Clubs,
    Diamonds,
    Joker,
}

impl Suit {
    pub const STANDARD: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Diamonds];

    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Spades => "S",
            Suit::Hearts => "H",
            Suit::Clubs => "C",
            Suit::Diamonds => "D",
            Suit::Joker => "J",
        }
    }
}

/// Ranks in game order: Three is the lowest, the big joker the highest.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Two,
    SmallJoker,
    BigJoker,
}

impl Rank {
    pub const ALL: [Rank; 15] = [
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
        Rank::Two,
        Rank::SmallJoker,
        Rank::BigJoker,
    ];

    /// Ranks dealt once per standard suit.
    pub const SUITED: [Rank; 13] = [
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
        Rank::Two,
    ];

    pub fn value(self) -> u8 {
        match self {
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack => 11,
            Rank::Queen => 12,
            Rank::King => 13,
            Rank::Ace => 14,
            Rank::Two => 15,
            Rank::SmallJoker => 16,
            Rank::BigJoker => 17,
        }
    }

    pub fn is_joker(self) -> bool {
        matches!(self, Rank::SmallJoker | Rank::BigJoker)
    }

    /// Two and the jokers never take part in a run.
    pub fn in_runs(self) -> bool {
        self <= Rank::Ace
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::SmallJoker => "SJ",
            Rank::BigJoker => "BJ",
        }
    }
}

/// Whether `ranks` (sorted ascending, distinct) form one unbroken run of
/// run-eligible ranks.
pub fn is_contiguous_run(ranks: &[Rank]) -> bool {
    if ranks.iter().any(|rank| !rank.in_runs()) {
        return false;
    }
    ranks.windows(2).all(|w| w[1].value() == w[0].value() + 1)
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub fn small_joker() -> Self {
        Self::new(Rank::SmallJoker, Suit::Joker)
    }

    pub fn big_joker() -> Self {
        Self::new(Rank::BigJoker, Suit::Joker)
    }

    pub fn is_joker(&self) -> bool {
        self.rank.is_joker()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_joker() {
            return f.write_str(self.rank.symbol());
        }
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    #[error("empty card token")]
    Empty,
    #[error("unknown rank in card token {0:?}")]
    Rank(String),
    #[error("unknown suit in card token {0:?}")]
    Suit(String),
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_uppercase();
        if token.is_empty() {
            return Err(ParseCardError::Empty);
        }
        match token.as_str() {
            "SJ" => return Ok(Card::small_joker()),
            "BJ" => return Ok(Card::big_joker()),
            _ => {}
        }

        let mut chars = token.chars();
        let suit_ch = chars.next_back().ok_or(ParseCardError::Empty)?;
        let suit = match suit_ch {
            'S' | '♠' => Suit::Spades,
            'H' | '♥' => Suit::Hearts,
            'C' | '♣' => Suit::Clubs,
            'D' | '♦' => Suit::Diamonds,
            _ => return Err(ParseCardError::Suit(s.to_string())),
        };
        let rank = match chars.as_str() {
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" | "1" => Rank::Ace,
            "2" => Rank::Two,
            _ => return Err(ParseCardError::Rank(s.to_string())),
        };
        Ok(Card::new(rank, suit))
    }
}

/// Parses whitespace- or comma-separated card tokens, e.g. `"3S 4H 10D"`.
pub fn parse_cards(input: &str) -> Result<Vec<Card>, ParseCardError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}

pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_order_puts_two_and_jokers_on_top() {
        assert!(Rank::Ace < Rank::Two);
        assert!(Rank::Two < Rank::SmallJoker);
        assert!(Rank::SmallJoker < Rank::BigJoker);
        assert!(Rank::ALL.windows(2).all(|w| w[0].value() < w[1].value()));
    }

    #[test]
    fn parses_tokens_in_several_spellings() {
        assert_eq!("10h".parse::<Card>(), Ok(Card::new(Rank::Ten, Suit::Hearts)));
        assert_eq!("TD".parse::<Card>(), Ok(Card::new(Rank::Ten, Suit::Diamonds)));
        assert_eq!("A♠".parse::<Card>(), Ok(Card::new(Rank::Ace, Suit::Spades)));
        assert_eq!("bj".parse::<Card>(), Ok(Card::big_joker()));
        assert_eq!("SJ".parse::<Card>(), Ok(Card::small_joker()));
        assert!(matches!("1X".parse::<Card>(), Err(ParseCardError::Suit(_))));
        assert!(matches!("ZS".parse::<Card>(), Err(ParseCardError::Rank(_))));
    }

    #[test]
    fn display_round_trips_through_parse() {
        let cards = parse_cards("3S, 10H QC 2D SJ BJ").expect("parse");
        assert_eq!(format_cards(&cards), "3S 10H QC 2D SJ BJ");
    }

    #[test]
    fn runs_exclude_two_and_jokers() {
        assert!(is_contiguous_run(&[Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace]));
        assert!(!is_contiguous_run(&[Rank::Queen, Rank::King, Rank::Ace, Rank::Two]));
        assert!(!is_contiguous_run(&[Rank::Three, Rank::Five]));
    }
}
