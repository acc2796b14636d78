use super::run_lengths;
use crate::{
    is_contiguous_run, rank_counts, AnalysisContext, Card, CardGroup, HandType, PlayError, Rank,
    RuleSet,
};

/// Number of ranks when `cards` is a run of `width` cards per rank.
pub(super) fn classify(cards: &[Card], width: usize, min: usize) -> Option<usize> {
    let counts = rank_counts(cards);
    let ranks = counts.len();
    if ranks < min.max(2) || ranks > RuleSet::MAX_RUN {
        return None;
    }
    if counts.values().any(|count| *count != width) {
        return None;
    }
    let ranks_in_order: Vec<Rank> = counts.into_keys().collect();
    is_contiguous_run(&ranks_in_order).then_some(ranks)
}

pub(super) fn lengths(ctx: &AnalysisContext<'_>, width: usize, min: usize) -> Vec<usize> {
    let exact = match ctx.target.exact() {
        Some(HandType::StraightOfPairs { pairs }) if width == 2 => Some(pairs),
        Some(HandType::StraightOfTriples { triples }) if width == 3 => Some(triples),
        _ => None,
    };
    run_lengths(exact, min.max(2), ctx.hand.run_candidates(width).len())
}

pub(super) fn search(
    ctx: &AnalysisContext<'_>,
    width: usize,
    lengths: &[usize],
) -> Result<Vec<CardGroup>, PlayError> {
    let candidates = ctx.hand.run_candidates(width);
    let mut collector = ctx.collector();
    for &len in lengths {
        if len == 0 || len > candidates.len() {
            continue;
        }
        for window in candidates.windows(len) {
            let ranks: Vec<Rank> = window.iter().map(|bucket| bucket.rank).collect();
            if !is_contiguous_run(&ranks) {
                continue;
            }
            let picks: Vec<Card> = window
                .iter()
                .flat_map(|bucket| bucket.cards[..width].iter().copied())
                .collect();
            collector.offer(&picks)?;
        }
    }
    Ok(collector.finish())
}
