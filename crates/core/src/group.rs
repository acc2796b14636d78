use crate::{governing_rank, Card, HandType, Rank};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One classified combination: a play on the table, a search hit, or a
/// prompt suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardGroup {
    pub cards: Vec<Card>,
    pub hand_type: HandType,
    pub governing: Rank,
}

impl CardGroup {
    /// `cards` must already classify as `hand_type`; the cards are stored
    /// sorted.
    pub fn new(mut cards: Vec<Card>, hand_type: HandType) -> Self {
        cards.sort_unstable();
        let governing = governing_rank(&cards, hand_type).unwrap_or(Rank::Three);
        Self {
            cards,
            hand_type,
            governing,
        }
    }

    pub fn is_bomb_class(&self) -> bool {
        self.hand_type.is_bomb_class()
    }

    /// Ordering key among bomb-class plays: tier, then size, then rank.
    pub fn bomb_power(&self) -> Option<(u8, usize, Rank)> {
        let tier = match self.hand_type {
            HandType::Bomb { .. } => 0,
            HandType::StraightBomb { .. } => 1,
            HandType::Rocket => 2,
            _ => return None,
        };
        Some((tier, self.cards.len(), self.governing))
    }

    /// Whether two plays may be compared at all.
    pub fn comparable(&self, other: &CardGroup) -> bool {
        if self.is_bomb_class() {
            return true;
        }
        !other.is_bomb_class() && self.hand_type == other.hand_type
    }

    pub fn beats(&self, other: &CardGroup) -> bool {
        match (self.bomb_power(), other.bomb_power()) {
            (Some(mine), Some(theirs)) => mine > theirs,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => self.hand_type == other.hand_type && self.governing > other.governing,
        }
    }

    /// Suggestion order: weakest first, bombs after every plain play.
    pub fn strength_cmp(&self, other: &CardGroup) -> Ordering {
        let key = |group: &CardGroup| {
            (
                group.bomb_power().is_some(),
                group.bomb_power(),
                group.governing,
            )
        };
        key(self)
            .cmp(&key(other))
            .then_with(|| self.cards.len().cmp(&other.cards.len()))
            .then_with(|| self.cards.cmp(&other.cards))
    }
}
