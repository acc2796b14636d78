use crate::{Card, CardGroup, HandType, PlayError, Registry};
use std::collections::HashSet;

/// Rejects an empty selection or one naming the same card twice.
pub fn check_cards(cards: &[Card]) -> Result<(), PlayError> {
    if cards.is_empty() {
        return Err(PlayError::EmptySelection);
    }
    check_distinct(cards)
}

pub(crate) fn check_distinct(cards: &[Card]) -> Result<(), PlayError> {
    let mut seen = HashSet::with_capacity(cards.len());
    for card in cards {
        if !seen.insert(*card) {
            return Err(PlayError::DuplicateCard(*card));
        }
    }
    Ok(())
}

/// `check_cards`, plus every selected card must be held.
pub fn check_selection(hand: &[Card], selected: &[Card]) -> Result<(), PlayError> {
    check_cards(selected)?;
    match selected.iter().find(|card| !hand.contains(card)) {
        Some(missing) => Err(PlayError::NotInHand(*missing)),
        None => Ok(()),
    }
}

/// Decides whether `candidate` may be played on `reference`. An absent or
/// empty reference is a leading play and accepts any recognized shape.
pub fn validate_play(
    registry: &Registry,
    candidate: &[Card],
    reference: Option<&[Card]>,
) -> Result<CardGroup, PlayError> {
    check_cards(candidate)?;
    let played = registry.group(candidate)?;
    let Some(reference) = reference.filter(|cards| !cards.is_empty()) else {
        return Ok(played);
    };
    let reference = group_reference(registry, reference)?;
    judge(played, &reference)
}

/// Classifies the table play. Cards that cannot be a real play, whether
/// repeated or shapeless, are an `InvalidReference`.
pub(crate) fn group_reference(
    registry: &Registry,
    reference: &[Card],
) -> Result<CardGroup, PlayError> {
    if check_distinct(reference).is_err() {
        return Err(PlayError::InvalidReference);
    }
    match registry.group(reference) {
        Err(PlayError::InvalidShape) => Err(PlayError::InvalidReference),
        other => other,
    }
}

/// `validate_play` for cards selected out of `hand`.
pub fn validate_from_hand(
    registry: &Registry,
    hand: &[Card],
    candidate: &[Card],
    reference: Option<&[Card]>,
) -> Result<CardGroup, PlayError> {
    check_selection(hand, candidate)?;
    validate_play(registry, candidate, reference)
}

/// Verifies that `cards` form exactly `expected`.
pub fn verify_as(
    registry: &Registry,
    cards: &[Card],
    expected: HandType,
) -> Result<CardGroup, PlayError> {
    check_cards(cards)?;
    let group = registry.group(cards)?;
    if group.hand_type != expected {
        return Err(PlayError::ShapeMismatch {
            played: group.hand_type,
            reference: expected,
        });
    }
    Ok(group)
}

/// Compares two classified plays.
pub fn judge(played: CardGroup, reference: &CardGroup) -> Result<CardGroup, PlayError> {
    if !played.comparable(reference) {
        return Err(PlayError::ShapeMismatch {
            played: played.hand_type,
            reference: reference.hand_type,
        });
    }
    if !played.beats(reference) {
        return Err(PlayError::DoesNotBeat {
            played: played.hand_type,
            reference: reference.hand_type,
        });
    }
    Ok(played)
}
