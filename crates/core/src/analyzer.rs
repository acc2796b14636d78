use crate::{AnalysisContext, Card, CardGroup, HandKind, HandType, PlayError, RuleSet};

mod bomb;
mod rocket;
mod runs;
mod same_rank;
mod straight;
mod straight_bomb;
mod triple_with;

/// One strategy per hand kind. Each classifies candidates of its own kind
/// and enumerates its combinations inside a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Analyzer {
    Single,
    Pair,
    Triple,
    TripleWith,
    Straight,
    StraightOfPairs,
    StraightOfTriples,
    Bomb,
    StraightBomb,
    Rocket,
}

impl Analyzer {
    pub const ALL: [Analyzer; 10] = [
        Analyzer::Single,
        Analyzer::Pair,
        Analyzer::Triple,
        Analyzer::TripleWith,
        Analyzer::Straight,
        Analyzer::StraightOfPairs,
        Analyzer::StraightOfTriples,
        Analyzer::Bomb,
        Analyzer::StraightBomb,
        Analyzer::Rocket,
    ];

    pub fn kind(self) -> HandKind {
        match self {
            Analyzer::Single => HandKind::Single,
            Analyzer::Pair => HandKind::Pair,
            Analyzer::Triple => HandKind::Triple,
            Analyzer::TripleWith => HandKind::TripleWith,
            Analyzer::Straight => HandKind::Straight,
            Analyzer::StraightOfPairs => HandKind::StraightOfPairs,
            Analyzer::StraightOfTriples => HandKind::StraightOfTriples,
            Analyzer::Bomb => HandKind::Bomb,
            Analyzer::StraightBomb => HandKind::StraightBomb,
            Analyzer::Rocket => HandKind::Rocket,
        }
    }

    /// Routing test: whether this analyzer owns `kind`.
    pub fn check(self, kind: HandKind) -> bool {
        self.kind() == kind
    }

    pub fn enabled(self, rules: &RuleSet) -> bool {
        match self {
            Analyzer::TripleWith => rules.triple_with_enabled(),
            Analyzer::StraightOfPairs => rules.pair_runs,
            Analyzer::StraightOfTriples => rules.triple_runs,
            Analyzer::StraightBomb => rules.straight_bombs,
            Analyzer::Rocket => rules.rocket,
            Analyzer::Single
            | Analyzer::Pair
            | Analyzer::Triple
            | Analyzer::Straight
            | Analyzer::Bomb => true,
        }
    }

    pub fn classify(self, cards: &[Card], rules: &RuleSet) -> Option<HandType> {
        match self {
            Analyzer::Single => same_rank::matches(cards, 1).then_some(HandType::Single),
            Analyzer::Pair => same_rank::matches(cards, 2).then_some(HandType::Pair),
            Analyzer::Triple => same_rank::matches(cards, 3).then_some(HandType::Triple),
            Analyzer::TripleWith => triple_with::classify(cards, rules),
            Analyzer::Straight => straight::classify(cards, rules),
            Analyzer::StraightOfPairs => runs::classify(cards, 2, rules.min_pair_run)
                .map(|pairs| HandType::StraightOfPairs { pairs }),
            Analyzer::StraightOfTriples => runs::classify(cards, 3, rules.min_triple_run)
                .map(|triples| HandType::StraightOfTriples { triples }),
            Analyzer::Bomb => bomb::classify(cards, rules),
            Analyzer::StraightBomb => straight_bomb::classify(cards, rules),
            Analyzer::Rocket => rocket::classify(cards, rules),
        }
    }

    /// Enumerates combinations of the context's target found in its hand.
    pub fn invoke(self, ctx: &AnalysisContext<'_>) -> Result<Vec<CardGroup>, PlayError> {
        if !self.check(ctx.target.kind()) {
            return Ok(Vec::new());
        }
        match self {
            Analyzer::Single => same_rank::search(ctx, 1),
            Analyzer::Pair => same_rank::search(ctx, 2),
            Analyzer::Triple => same_rank::search(ctx, 3),
            Analyzer::TripleWith => triple_with::search(ctx),
            Analyzer::Straight => straight::search(ctx),
            Analyzer::StraightOfPairs => {
                let lengths = runs::lengths(ctx, 2, ctx.rules().min_pair_run);
                runs::search(ctx, 2, &lengths)
            }
            Analyzer::StraightOfTriples => {
                let lengths = runs::lengths(ctx, 3, ctx.rules().min_triple_run);
                runs::search(ctx, 3, &lengths)
            }
            Analyzer::Bomb => bomb::search(ctx),
            Analyzer::StraightBomb => straight_bomb::search(ctx),
            Analyzer::Rocket => rocket::search(ctx),
        }
    }
}

/// Run lengths a search should try: the exact length, or every length from
/// `min` (at least two) up to `available`.
fn run_lengths(exact: Option<usize>, min: usize, available: usize) -> Vec<usize> {
    match exact {
        Some(len) => vec![len],
        None => (min.max(2)..=available.min(RuleSet::MAX_RUN)).collect(),
    }
}
