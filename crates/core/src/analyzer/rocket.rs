use crate::{AnalysisContext, Card, CardGroup, HandType, PlayError, Rank, RuleSet};

pub(super) fn classify(cards: &[Card], rules: &RuleSet) -> Option<HandType> {
    if !rules.rocket || cards.len() != 2 {
        return None;
    }
    let small = cards.iter().any(|card| card.rank == Rank::SmallJoker);
    let big = cards.iter().any(|card| card.rank == Rank::BigJoker);
    (small && big).then_some(HandType::Rocket)
}

pub(super) fn search(ctx: &AnalysisContext<'_>) -> Result<Vec<CardGroup>, PlayError> {
    let mut collector = ctx.collector();
    let small = ctx.hand.get(Rank::SmallJoker).and_then(|b| b.cards.first().copied());
    let big = ctx.hand.get(Rank::BigJoker).and_then(|b| b.cards.first().copied());
    if let (Some(small), Some(big)) = (small, big) {
        collector.offer(&[small, big])?;
    }
    Ok(collector.finish())
}
