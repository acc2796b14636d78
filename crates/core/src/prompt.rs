use crate::validate::{check_distinct, group_reference};
use crate::{AnalysisContext, Card, CardGroup, HandBuckets, HandKind, PlayError, Registry, Target};

/// Every combination of `target` inside `hand`, optionally restricted to
/// those beating `reference`.
pub fn search(
    registry: &Registry,
    hand: &[Card],
    target: Target,
    reference: Option<&CardGroup>,
) -> Result<Vec<CardGroup>, PlayError> {
    check_distinct(hand)?;
    let buckets = HandBuckets::from_cards(hand);
    let ctx = match reference {
        Some(reference) => AnalysisContext::beating(registry, &buckets, target, reference),
        None => AnalysisContext::new(registry, &buckets, target),
    };
    registry.dispatch(&ctx)
}

/// Every legal response to `reference`, weakest first: plays of the same
/// shape, then bombs. With no reference, every single card from lowest up.
pub fn prompt_all(
    registry: &Registry,
    hand: &[Card],
    reference: Option<&[Card]>,
) -> Result<Vec<CardGroup>, PlayError> {
    check_distinct(hand)?;
    let buckets = HandBuckets::from_cards(hand);

    let Some(reference) = reference.filter(|cards| !cards.is_empty()) else {
        let ctx = AnalysisContext::new(registry, &buckets, Target::AnyOf(HandKind::Single));
        let mut singles = registry.dispatch(&ctx)?;
        singles.sort_by(CardGroup::strength_cmp);
        return Ok(singles);
    };
    let reference = group_reference(registry, reference)?;

    let same_shape = Target::Exact(reference.hand_type);
    let ctx = AnalysisContext::beating(registry, &buckets, same_shape, &reference);
    let mut responses = registry.dispatch(&ctx)?;
    responses.sort_by(CardGroup::strength_cmp);

    let mut bombs = Vec::new();
    for kind in registry.bomb_kinds() {
        let ctx = AnalysisContext::beating(registry, &buckets, Target::AnyOf(kind), &reference);
        bombs.extend(registry.dispatch(&ctx)?);
    }
    bombs.sort_by(CardGroup::strength_cmp);
    for bomb in bombs {
        if !responses.contains(&bomb) {
            responses.push(bomb);
        }
    }
    Ok(responses)
}

/// The minimal legal response, or `None` when the only option is to pass.
pub fn prompt(
    registry: &Registry,
    hand: &[Card],
    reference: Option<&[Card]>,
) -> Result<Option<CardGroup>, PlayError> {
    Ok(prompt_all(registry, hand, reference)?.into_iter().next())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse_cards, HandType, Rank};

    fn cards(text: &str) -> Vec<Card> {
        parse_cards(text).expect("parse")
    }

    #[test]
    fn lead_prompt_is_the_lowest_single() {
        let registry = Registry::default();
        let hint = prompt(&registry, &cards("KS 4H 9D 4C"), None).expect("prompt");
        let hint = hint.expect("suggestion");
        assert_eq!(hint.hand_type, HandType::Single);
        assert_eq!(hint.governing, Rank::Four);
    }

    #[test]
    fn same_shape_answer_comes_before_bombs() {
        let registry = Registry::default();
        let table = cards("8S 8H");
        let hand = cards("3S 3H 3D 3C 9S 9H QD QC");
        let responses = prompt_all(&registry, &hand, Some(table.as_slice())).expect("prompt");
        let shapes: Vec<(HandType, Rank)> =
            responses.iter().map(|g| (g.hand_type, g.governing)).collect();
        assert_eq!(
            shapes,
            vec![
                (HandType::Pair, Rank::Nine),
                (HandType::Pair, Rank::Queen),
                (HandType::Bomb { count: 4 }, Rank::Three),
            ]
        );
    }

    #[test]
    fn bomb_is_offered_when_no_same_shape_answer_exists() {
        let registry = Registry::default();
        let table = cards("KS KH KD");
        let hand = cards("5S 5H 5D 5C 6S");
        let hint = prompt(&registry, &hand, Some(table.as_slice())).expect("prompt");
        assert_eq!(hint.map(|g| g.hand_type), Some(HandType::Bomb { count: 4 }));
    }

    #[test]
    fn bomb_reference_needs_a_stronger_bomb() {
        let registry = Registry::default();
        let table = cards("9S 9H 9D 9C");
        let hand = cards("5S 5H 5D 5C JS JH JD JC SJ BJ");
        let responses = prompt_all(&registry, &hand, Some(table.as_slice())).expect("prompt");
        let shapes: Vec<HandType> = responses.iter().map(|g| g.hand_type).collect();
        assert_eq!(shapes, vec![HandType::Bomb { count: 4 }, HandType::Rocket]);
        assert_eq!(responses[0].governing, Rank::Jack);
    }

    #[test]
    fn invalid_table_play_is_reported() {
        let registry = Registry::default();
        for table in ["3S 9H", "8S 8S"] {
            let table = cards(table);
            assert_eq!(
                prompt(&registry, &cards("4S 9D 9C"), Some(table.as_slice())),
                Err(PlayError::InvalidReference)
            );
        }
    }
}
