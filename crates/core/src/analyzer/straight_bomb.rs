use super::run_lengths;
use crate::{
    is_contiguous_run, rank_counts, AnalysisContext, Card, CardGroup, HandType, PlayError, Rank,
    RuleSet, Suit,
};

pub(super) fn classify(cards: &[Card], rules: &RuleSet) -> Option<HandType> {
    let len = cards.len();
    if !rules.straight_bombs || len < rules.min_straight() || len > RuleSet::MAX_RUN {
        return None;
    }
    if !cards.iter().all(|card| card.suit == cards[0].suit) {
        return None;
    }
    let counts = rank_counts(cards);
    if counts.len() != len {
        return None;
    }
    let ranks: Vec<Rank> = counts.into_keys().collect();
    is_contiguous_run(&ranks).then_some(HandType::StraightBomb { len })
}

/// Same-suit runs, searched one suit at a time.
pub(super) fn search(ctx: &AnalysisContext<'_>) -> Result<Vec<CardGroup>, PlayError> {
    let exact = match ctx.target.exact() {
        Some(HandType::StraightBomb { len }) => Some(len),
        _ => None,
    };
    let mut collector = ctx.collector();
    for suit in Suit::STANDARD {
        let suited: Vec<Card> = ctx
            .hand
            .run_candidates(1)
            .into_iter()
            .filter_map(|bucket| bucket.of_suit(suit))
            .collect();
        let lengths = run_lengths(exact, ctx.rules().min_straight(), suited.len());
        for len in lengths {
            if len == 0 || len > suited.len() {
                continue;
            }
            for window in suited.windows(len) {
                let ranks: Vec<Rank> = window.iter().map(|card| card.rank).collect();
                if is_contiguous_run(&ranks) {
                    collector.offer(window)?;
                }
            }
        }
    }
    Ok(collector.finish())
}

#[cfg(test)]
mod tests {
    use crate::{
        parse_cards, AnalysisContext, HandBuckets, HandKind, HandType, Rank, Registry, RuleSet,
        Target,
    };

    #[test]
    fn finds_single_suit_runs_only() {
        let registry = Registry::new(RuleSet::default());
        let hand = HandBuckets::from_cards(
            &parse_cards("5H 6H 7H 8H 9H 10S 4D 5D 6D 7D 8C").expect("parse"),
        );
        let ctx = AnalysisContext::new(&registry, &hand, Target::AnyOf(HandKind::StraightBomb));
        let found = registry.dispatch(&ctx).expect("search");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].hand_type, HandType::StraightBomb { len: 5 });
        assert_eq!(found[0].governing, Rank::Five);
    }

    #[test]
    fn disabled_straight_bombs_turn_back_into_straights() {
        let rules = RuleSet {
            straight_bombs: false,
            ..RuleSet::default()
        };
        let registry = Registry::new(rules);
        let cards = parse_cards("5H 6H 7H 8H 9H").expect("parse");
        assert_eq!(registry.resolve(&cards), Ok(Some(HandType::Straight { len: 5 })));
    }
}
