use crate::{Card, CardGroup, HandBuckets, HandKind, HandType, PlayError, Registry, RuleSet};
use std::collections::HashSet;

/// What a search is looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// Exactly this shape, parameters included.
    Exact(HandType),
    /// Every size of this kind the hand admits.
    AnyOf(HandKind),
}

impl Target {
    pub fn kind(self) -> HandKind {
        match self {
            Target::Exact(hand_type) => hand_type.kind(),
            Target::AnyOf(kind) => kind,
        }
    }

    pub fn exact(self) -> Option<HandType> {
        match self {
            Target::Exact(hand_type) => Some(hand_type),
            Target::AnyOf(_) => None,
        }
    }

    pub fn matches(self, hand_type: HandType) -> bool {
        match self {
            Target::Exact(wanted) => wanted == hand_type,
            Target::AnyOf(kind) => hand_type.kind() == kind,
        }
    }
}

/// Read-only input shared by one analyzer invocation.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisContext<'a> {
    pub registry: &'a Registry,
    pub hand: &'a HandBuckets,
    pub target: Target,
    pub reference: Option<&'a CardGroup>,
}

impl<'a> AnalysisContext<'a> {
    pub fn new(registry: &'a Registry, hand: &'a HandBuckets, target: Target) -> Self {
        Self {
            registry,
            hand,
            target,
            reference: None,
        }
    }

    pub fn beating(
        registry: &'a Registry,
        hand: &'a HandBuckets,
        target: Target,
        reference: &'a CardGroup,
    ) -> Self {
        Self {
            registry,
            hand,
            target,
            reference: Some(reference),
        }
    }

    pub fn rules(&self) -> &'a RuleSet {
        self.registry.rules()
    }

    /// The accept gate: the candidate must classify as the target and beat
    /// the reference when there is one.
    pub fn check_pop(&self, candidate: &[Card]) -> Result<Option<CardGroup>, PlayError> {
        let Some(hand_type) = self.registry.resolve(candidate)? else {
            return Ok(None);
        };
        if !self.target.matches(hand_type) {
            return Ok(None);
        }
        let group = CardGroup::new(candidate.to_vec(), hand_type);
        if let Some(reference) = self.reference {
            if !group.beats(reference) {
                return Ok(None);
            }
        }
        Ok(Some(group))
    }

    pub fn collector(&self) -> Collector<'_, 'a> {
        Collector {
            ctx: self,
            found: Vec::new(),
            seen: HashSet::new(),
        }
    }
}

/// Owned accumulator for one invocation.
#[derive(Debug)]
pub struct Collector<'c, 'a> {
    ctx: &'c AnalysisContext<'a>,
    found: Vec<CardGroup>,
    seen: HashSet<Vec<Card>>,
}

impl Collector<'_, '_> {
    /// Runs the gate and keeps the candidate if accepted. Returns whether it
    /// was kept.
    pub fn offer(&mut self, candidate: &[Card]) -> Result<bool, PlayError> {
        match self.ctx.check_pop(candidate)? {
            Some(group) => Ok(self.add(group)),
            None => Ok(false),
        }
    }

    /// Adds an accepted group unless the same card set is already held.
    pub fn add(&mut self, group: CardGroup) -> bool {
        if !self.seen.insert(group.cards.clone()) {
            return false;
        }
        self.found.push(group);
        true
    }

    pub fn finish(self) -> Vec<CardGroup> {
        self.found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_cards;

    #[test]
    fn gate_rejects_wrong_shape_and_weaker_cards() {
        let registry = Registry::new(RuleSet::default());
        let hand = HandBuckets::from_cards(&parse_cards("5S 5H 9S 9D").expect("parse"));
        let reference = CardGroup::new(parse_cards("7C 7D").expect("parse"), HandType::Pair);
        let ctx = AnalysisContext::beating(
            &registry,
            &hand,
            Target::Exact(HandType::Pair),
            &reference,
        );

        let fives = parse_cards("5S 5H").expect("parse");
        let nines = parse_cards("9S 9D").expect("parse");
        let mixed = parse_cards("5S 9D").expect("parse");
        assert_eq!(ctx.check_pop(&fives), Ok(None));
        assert_eq!(ctx.check_pop(&mixed), Ok(None));
        assert_eq!(
            ctx.check_pop(&nines).expect("gate").map(|g| g.hand_type),
            Some(HandType::Pair)
        );
    }

    #[test]
    fn collector_drops_duplicate_card_sets() {
        let registry = Registry::new(RuleSet::default());
        let hand = HandBuckets::from_cards(&parse_cards("9S 9D").expect("parse"));
        let ctx = AnalysisContext::new(&registry, &hand, Target::AnyOf(HandKind::Pair));
        let mut collector = ctx.collector();
        assert_eq!(collector.offer(&parse_cards("9S 9D").expect("parse")), Ok(true));
        assert_eq!(collector.offer(&parse_cards("9D 9S").expect("parse")), Ok(false));
        assert_eq!(collector.finish().len(), 1);
    }
}
