use crate::{
    rank_counts, AnalysisContext, Attachment, Card, CardGroup, HandType, PlayError, RuleSet,
};

pub(super) fn classify(cards: &[Card], rules: &RuleSet) -> Option<HandType> {
    let counts = rank_counts(cards);
    if counts.len() != 2 {
        return None;
    }
    let mut sizes: Vec<usize> = counts.values().copied().collect();
    sizes.sort_unstable();
    match sizes.as_slice() {
        [1, 3] if rules.triple_with_single => Some(HandType::TripleWith(Attachment::Single)),
        [2, 3] if rules.triple_with_pair => Some(HandType::TripleWith(Attachment::Pair)),
        _ => None,
    }
}

fn attachments(ctx: &AnalysisContext<'_>) -> Vec<Attachment> {
    if let Some(HandType::TripleWith(attachment)) = ctx.target.exact() {
        return vec![attachment];
    }
    let rules = ctx.rules();
    let mut allowed = Vec::new();
    if rules.triple_with_single {
        allowed.push(Attachment::Single);
    }
    if rules.triple_with_pair {
        allowed.push(Attachment::Pair);
    }
    allowed
}

/// Every triple combined with every attachment of another rank, ordered by
/// triple rank, then attachment size, then attachment rank.
pub(super) fn search(ctx: &AnalysisContext<'_>) -> Result<Vec<CardGroup>, PlayError> {
    let attachments = attachments(ctx);
    let mut collector = ctx.collector();
    for triple in ctx.hand.iter() {
        let Some(triple_cards) = triple.take(3) else {
            continue;
        };
        for attachment in &attachments {
            for extra in ctx.hand.iter().filter(|bucket| bucket.rank != triple.rank) {
                let Some(extra_cards) = extra.take(attachment.size()) else {
                    continue;
                };
                let mut candidate = triple_cards.to_vec();
                candidate.extend_from_slice(extra_cards);
                collector.offer(&candidate)?;
            }
        }
    }
    Ok(collector.finish())
}
