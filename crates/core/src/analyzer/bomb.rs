use crate::{AnalysisContext, Card, CardGroup, HandType, PlayError, RuleSet};

pub(super) fn classify(cards: &[Card], rules: &RuleSet) -> Option<HandType> {
    if cards.len() < rules.min_bomb.max(4) {
        return None;
    }
    if !cards.iter().all(|card| card.rank == cards[0].rank) {
        return None;
    }
    Some(HandType::Bomb { count: cards.len() })
}

pub(super) fn search(ctx: &AnalysisContext<'_>) -> Result<Vec<CardGroup>, PlayError> {
    let exact = match ctx.target.exact() {
        Some(HandType::Bomb { count }) => Some(count),
        _ => None,
    };
    let min = ctx.rules().min_bomb.max(4);
    let mut collector = ctx.collector();
    for bucket in ctx.hand.iter() {
        let counts = match exact {
            Some(count) => count..=count,
            None => min..=bucket.len(),
        };
        for count in counts {
            if let Some(cards) = bucket.take(count) {
                collector.offer(cards)?;
            }
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
    fn bombs_need_four_of_a_rank() {
        let registry = Registry::new(RuleSet::default());
        let hand =
            HandBuckets::from_cards(&parse_cards("6S 6H 6D 6C QS QH QD 2S").expect("parse"));
        let ctx = AnalysisContext::new(&registry, &hand, Target::AnyOf(HandKind::Bomb));
        let found = registry.dispatch(&ctx).expect("search");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].hand_type, HandType::Bomb { count: 4 });
        assert_eq!(found[0].governing, Rank::Six);
    }

    #[test]
    fn any_bomb_beats_a_plain_reference() {
        let registry = Registry::new(RuleSet::default());
        let hand = HandBuckets::from_cards(&parse_cards("3S 3H 3D 3C").expect("parse"));
        let reference = CardGroup::new(parse_cards("AS AH AD").expect("parse"), HandType::Triple);
        let ctx = AnalysisContext::beating(
            &registry,
            &hand,
            Target::AnyOf(HandKind::Bomb),
            &reference,
        );
        assert_eq!(registry.dispatch(&ctx).expect("search").len(), 1);
    }
}
