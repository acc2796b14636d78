use super::run_lengths;
use crate::{
    is_contiguous_run, rank_counts, AnalysisContext, Card, CardGroup, HandType, PlayError, Rank,
    RuleSet,
};

pub(super) fn classify(cards: &[Card], rules: &RuleSet) -> Option<HandType> {
    let len = cards.len();
    if len < rules.min_straight() || len > RuleSet::MAX_RUN {
        return None;
    }
    let counts = rank_counts(cards);
    if counts.len() != len {
        return None;
    }
    let ranks: Vec<Rank> = counts.into_keys().collect();
    if !is_contiguous_run(&ranks) {
        return None;
    }
    // A single-suit run is a straight bomb when those are in play.
    if rules.straight_bombs && cards.iter().all(|card| card.suit == cards[0].suit) {
        return None;
    }
    Some(HandType::Straight { len })
}

/// Slides a window of each requested length over the run-eligible ranks and
/// offers one representative card per rank for every contiguous window.
pub(super) fn search(ctx: &AnalysisContext<'_>) -> Result<Vec<CardGroup>, PlayError> {
    let candidates = ctx.hand.run_candidates(1);
    let exact = match ctx.target.exact() {
        Some(HandType::Straight { len }) => Some(len),
        _ => None,
    };
    let lengths = run_lengths(exact, ctx.rules().min_straight(), candidates.len());

    let mut collector = ctx.collector();
    for len in lengths {
        if len == 0 || len > candidates.len() {
            continue;
        }
        for window in candidates.windows(len) {
            let ranks: Vec<Rank> = window.iter().map(|bucket| bucket.rank).collect();
            if !is_contiguous_run(&ranks) {
                continue;
            }
            let mut picks: Vec<Card> = window.iter().map(|bucket| bucket.cards[0]).collect();
            if ctx.rules().straight_bombs && !mix_suits(&mut picks, window) {
                continue;
            }
            collector.offer(&picks)?;
        }
    }
    Ok(collector.finish())
}

/// Makes sure `picks` is not all one suit by swapping in another card of the
/// same rank. Returns false when every rank holds only that suit.
fn mix_suits(picks: &mut [Card], window: &[&crate::RankBucket]) -> bool {
    let suit = picks[0].suit;
    if picks.iter().any(|card| card.suit != suit) {
        return true;
    }
    for (slot, bucket) in picks.iter_mut().zip(window) {
        if let Some(other) = bucket.cards.iter().find(|card| card.suit != suit) {
            *slot = *other;
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use crate::{
        parse_cards, AnalysisContext, CardGroup, HandBuckets, HandKind, HandType, Rank, Registry,
        RuleSet, Target,
    };

    const FIVE: Target = Target::Exact(HandType::Straight { len: 5 });

    fn straights(hand: &str, target: Target) -> Vec<CardGroup> {
        let registry = Registry::new(RuleSet::default());
        let hand = HandBuckets::from_cards(&parse_cards(hand).expect("parse"));
        let ctx = AnalysisContext::new(&registry, &hand, target);
        registry.dispatch(&ctx).expect("search")
    }

    #[test]
    fn overlapping_windows_are_each_reported_once() {
        let found = straights("3S 4H 5D 6C 7S 8H", FIVE);
        let lows: Vec<Rank> = found.iter().map(|g| g.governing).collect();
        assert_eq!(lows, vec![Rank::Three, Rank::Four]);
    }

    #[test]
    fn gaps_break_windows() {
        let found = straights("3S 4H 5D 6C 8S 9H 10D JC QS", FIVE);
        let lows: Vec<Rank> = found.iter().map(|g| g.governing).collect();
        assert_eq!(lows, vec![Rank::Eight]);
    }

    #[test]
    fn two_and_jokers_never_extend_a_straight() {
        let found = straights("10S JH QD KC AS 2H SJ", Target::AnyOf(HandKind::Straight));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].governing, Rank::Ten);
        assert!(found[0].cards.iter().all(|card| card.rank.in_runs()));
    }

    #[test]
    fn single_suit_pick_is_swapped_for_a_mixed_one() {
        let found = straights("3S 4S 5S 6S 7S 7H", FIVE);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].hand_type, HandType::Straight { len: 5 });
    }

    #[test]
    fn pure_single_suit_run_is_not_a_straight() {
        let found = straights("3S 4S 5S 6S 7S", FIVE);
        assert!(found.is_empty());
    }

    #[test]
    fn any_length_search_lists_every_length() {
        let found = straights("3S 4H 5D 6C 7S 8H", Target::AnyOf(HandKind::Straight));
        let shapes: Vec<HandType> = found.iter().map(|g| g.hand_type).collect();
        assert_eq!(
            shapes,
            vec![
                HandType::Straight { len: 5 },
                HandType::Straight { len: 5 },
                HandType::Straight { len: 6 },
            ]
        );
    }
}
