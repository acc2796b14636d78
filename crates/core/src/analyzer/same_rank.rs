use crate::{AnalysisContext, Card, CardGroup, PlayError};

pub(super) fn matches(cards: &[Card], size: usize) -> bool {
    cards.len() == size && cards.iter().all(|card| card.rank == cards[0].rank)
}

/// One group per rank holding at least `size` cards.
pub(super) fn search(ctx: &AnalysisContext<'_>, size: usize) -> Result<Vec<CardGroup>, PlayError> {
    let mut collector = ctx.collector();
    for bucket in ctx.hand.iter() {
        if let Some(cards) = bucket.take(size) {
            collector.offer(cards)?;
        }
    }
    Ok(collector.finish())
}

#[cfg(test)]
mod tests {
    use crate::{
        parse_cards, AnalysisContext, CardGroup, HandBuckets, HandKind, HandType, Rank, Registry,
        RuleSet, Target,
    };

    #[test]
    fn pairs_come_from_every_rank_with_two_cards() {
        let registry = Registry::new(RuleSet::default());
        let hand = HandBuckets::from_cards(&parse_cards("3S 3H 3D 8C 8D KS 2H 2S").expect("parse"));
        let ctx = AnalysisContext::new(&registry, &hand, Target::AnyOf(HandKind::Pair));
        let found = registry.dispatch(&ctx).expect("search");
        let ranks: Vec<Rank> = found.iter().map(|g| g.governing).collect();
        assert_eq!(ranks, vec![Rank::Three, Rank::Eight, Rank::Two]);
        assert!(found.iter().all(|g| g.hand_type == HandType::Pair));
    }

    #[test]
    fn singles_respect_the_reference() {
        let registry = Registry::new(RuleSet::default());
        let hand = HandBuckets::from_cards(&parse_cards("4S 9H AD BJ").expect("parse"));
        let reference = CardGroup::new(parse_cards("10C").expect("parse"), HandType::Single);
        let ctx = AnalysisContext::beating(
            &registry,
            &hand,
            Target::Exact(HandType::Single),
            &reference,
        );
        let found = registry.dispatch(&ctx).expect("search");
        let ranks: Vec<Rank> = found.iter().map(|g| g.governing).collect();
        assert_eq!(ranks, vec![Rank::Ace, Rank::BigJoker]);
    }
}
