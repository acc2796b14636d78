use crate::{Card, Rank, Registry, RuleSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HandKind {
    Single,
    Pair,
    Triple,
    TripleWith,
    Straight,
    StraightOfPairs,
    StraightOfTriples,
    Bomb,
    StraightBomb,
    Rocket,
}

impl HandKind {
    pub const ALL: [HandKind; 10] = [
        HandKind::Single,
        HandKind::Pair,
        HandKind::Triple,
        HandKind::TripleWith,
        HandKind::Straight,
        HandKind::StraightOfPairs,
        HandKind::StraightOfTriples,
        HandKind::Bomb,
        HandKind::StraightBomb,
        HandKind::Rocket,
    ];

    pub fn id(self) -> &'static str {
        match self {
            HandKind::Single => "single",
            HandKind::Pair => "pair",
            HandKind::Triple => "triple",
            HandKind::TripleWith => "triple_with",
            HandKind::Straight => "straight",
            HandKind::StraightOfPairs => "straight_of_pairs",
            HandKind::StraightOfTriples => "straight_of_triples",
            HandKind::Bomb => "bomb",
            HandKind::StraightBomb => "straight_bomb",
            HandKind::Rocket => "rocket",
        }
    }

    pub fn is_bomb_class(self) -> bool {
        matches!(self, HandKind::Bomb | HandKind::StraightBomb | HandKind::Rocket)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Attachment {
    Single,
    Pair,
}

impl Attachment {
    pub fn size(self) -> usize {
        match self {
            Attachment::Single => 1,
            Attachment::Pair => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HandType {
    Single,
    Pair,
    Triple,
    TripleWith(Attachment),
    Straight { len: usize },
    StraightOfPairs { pairs: usize },
    StraightOfTriples { triples: usize },
    Bomb { count: usize },
    StraightBomb { len: usize },
    Rocket,
}

impl HandType {
    pub fn kind(self) -> HandKind {
        match self {
            HandType::Single => HandKind::Single,
            HandType::Pair => HandKind::Pair,
            HandType::Triple => HandKind::Triple,
            HandType::TripleWith(_) => HandKind::TripleWith,
            HandType::Straight { .. } => HandKind::Straight,
            HandType::StraightOfPairs { .. } => HandKind::StraightOfPairs,
            HandType::StraightOfTriples { .. } => HandKind::StraightOfTriples,
            HandType::Bomb { .. } => HandKind::Bomb,
            HandType::StraightBomb { .. } => HandKind::StraightBomb,
            HandType::Rocket => HandKind::Rocket,
        }
    }

    pub fn is_bomb_class(self) -> bool {
        self.kind().is_bomb_class()
    }

    pub fn card_count(self) -> usize {
        match self {
            HandType::Single => 1,
            HandType::Pair | HandType::Rocket => 2,
            HandType::Triple => 3,
            HandType::TripleWith(attachment) => 3 + attachment.size(),
            HandType::Straight { len } | HandType::StraightBomb { len } => len,
            HandType::StraightOfPairs { pairs } => pairs * 2,
            HandType::StraightOfTriples { triples } => triples * 3,
            HandType::Bomb { count } => count,
        }
    }
}

impl fmt::Display for HandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandType::Single => f.write_str("single"),
            HandType::Pair => f.write_str("pair"),
            HandType::Triple => f.write_str("triple"),
            HandType::TripleWith(Attachment::Single) => f.write_str("triple with single"),
            HandType::TripleWith(Attachment::Pair) => f.write_str("triple with pair"),
            HandType::Straight { len } => write!(f, "straight of {len}"),
            HandType::StraightOfPairs { pairs } => write!(f, "straight of {pairs} pairs"),
            HandType::StraightOfTriples { triples } => write!(f, "straight of {triples} triples"),
            HandType::Bomb { count } => write!(f, "bomb of {count}"),
            HandType::StraightBomb { len } => write!(f, "straight bomb of {len}"),
            HandType::Rocket => f.write_str("rocket"),
        }
    }
}

/// Card count per rank, ascending by rank.
pub fn rank_counts(cards: &[Card]) -> BTreeMap<Rank, usize> {
    let mut counts = BTreeMap::new();
    for card in cards {
        *counts.entry(card.rank).or_insert(0) += 1;
    }
    counts
}

/// The rank that decides comparisons between plays of one shape.
pub fn governing_rank(cards: &[Card], hand_type: HandType) -> Option<Rank> {
    match hand_type {
        HandType::Rocket => Some(Rank::BigJoker),
        HandType::TripleWith(_) => rank_counts(cards)
            .into_iter()
            .find(|(_, count)| *count == 3)
            .map(|(rank, _)| rank),
        _ => cards.iter().map(|card| card.rank).min(),
    }
}

/// Classifies `cards` under `rules`, or `None` for an unrecognized shape.
/// See `Registry::classify`.
pub fn classify(cards: &[Card], rules: &RuleSet) -> Option<HandType> {
    Registry::new(rules.clone()).classify(cards)
}
