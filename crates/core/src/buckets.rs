use crate::{Card, Rank, Suit};

/// All cards of one rank held in a hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankBucket {
    pub rank: Rank,
    pub cards: Vec<Card>,
}

impl RankBucket {
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn take(&self, count: usize) -> Option<&[Card]> {
        self.cards.get(..count)
    }

    pub fn of_suit(&self, suit: Suit) -> Option<Card> {
        self.cards.iter().copied().find(|card| card.suit == suit)
    }
}

/// A hand grouped by rank, ascending. Built once per query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandBuckets {
    buckets: Vec<RankBucket>,
}

impl HandBuckets {
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut sorted = cards.to_vec();
        sorted.sort_unstable();
        let mut buckets: Vec<RankBucket> = Vec::new();
        for card in sorted {
            match buckets.last_mut() {
                Some(bucket) if bucket.rank == card.rank => bucket.cards.push(card),
                _ => buckets.push(RankBucket {
                    rank: card.rank,
                    cards: vec![card],
                }),
            }
        }
        Self { buckets }
    }

    pub fn iter(&self) -> impl Iterator<Item = &RankBucket> {
        self.buckets.iter()
    }

    pub fn get(&self, rank: Rank) -> Option<&RankBucket> {
        self.buckets.iter().find(|bucket| bucket.rank == rank)
    }

    /// Buckets that may take part in runs and hold at least `min` cards.
    pub fn run_candidates(&self, min: usize) -> Vec<&RankBucket> {
        self.buckets
            .iter()
            .filter(|bucket| bucket.rank.in_runs() && bucket.len() >= min)
            .collect()
    }

    pub fn card_count(&self) -> usize {
        self.buckets.iter().map(RankBucket::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_cards;

    #[test]
    fn buckets_group_by_rank_in_order() {
        let hand = parse_cards("9S 3H 9D 2C 3S BJ").expect("parse");
        let buckets = HandBuckets::from_cards(&hand);
        let ranks: Vec<(Rank, usize)> = buckets.iter().map(|b| (b.rank, b.len())).collect();
        assert_eq!(
            ranks,
            vec![
                (Rank::Three, 2),
                (Rank::Nine, 2),
                (Rank::Two, 1),
                (Rank::BigJoker, 1)
            ]
        );
        assert_eq!(buckets.card_count(), 6);
    }

    #[test]
    fn run_candidates_skip_two_and_jokers() {
        let hand = parse_cards("AS AH 2S 2H SJ 5D").expect("parse");
        let buckets = HandBuckets::from_cards(&hand);
        let ranks: Vec<Rank> = buckets.run_candidates(2).iter().map(|b| b.rank).collect();
        assert_eq!(ranks, vec![Rank::Ace]);
    }
}
