use crate::{AnalysisContext, Analyzer, Card, CardGroup, HandKind, HandType, PlayError, RuleSet};

/// Ordered analyzer set for one rule set.
#[derive(Debug, Clone)]
pub struct Registry {
    rules: RuleSet,
    analyzers: Vec<Analyzer>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(RuleSet::default())
    }
}

impl Registry {
    /// Registers every analyzer the rule set enables, in `Analyzer::ALL`
    /// order.
    pub fn new(rules: RuleSet) -> Self {
        let analyzers = Analyzer::ALL
            .into_iter()
            .filter(|analyzer| analyzer.enabled(&rules))
            .collect();
        Self { rules, analyzers }
    }

    /// Registers exactly `analyzers`, in the given order.
    pub fn with_analyzers(rules: RuleSet, analyzers: Vec<Analyzer>) -> Self {
        Self { rules, analyzers }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn analyzers(&self) -> &[Analyzer] {
        &self.analyzers
    }

    pub fn supports(&self, kind: HandKind) -> bool {
        self.analyzers.iter().any(|analyzer| analyzer.check(kind))
    }

    /// Registered bomb-class kinds, in registration order.
    pub fn bomb_kinds(&self) -> Vec<HandKind> {
        self.analyzers
            .iter()
            .map(|analyzer| analyzer.kind())
            .filter(|kind| kind.is_bomb_class())
            .collect()
    }

    /// Every registered analyzer accepting `cards`, in registration order.
    pub fn accepting(&self, cards: &[Card]) -> Vec<(Analyzer, HandType)> {
        if cards.is_empty() {
            return Vec::new();
        }
        self.analyzers
            .iter()
            .filter_map(|analyzer| {
                analyzer
                    .classify(cards, &self.rules)
                    .map(|hand_type| (*analyzer, hand_type))
            })
            .collect()
    }

    /// The single hand type `cards` forms, `None` when no analyzer accepts
    /// them, or `AmbiguousClassification` when several do.
    pub fn resolve(&self, cards: &[Card]) -> Result<Option<HandType>, PlayError> {
        let accepted = self.accepting(cards);
        match accepted.as_slice() {
            [] => Ok(None),
            [(_, hand_type)] => Ok(Some(*hand_type)),
            _ => Err(PlayError::AmbiguousClassification {
                kinds: accepted.iter().map(|(analyzer, _)| analyzer.kind()).collect(),
            }),
        }
    }

    /// `resolve` for callers that cannot recover from an overlapping analyzer
    /// set.
    ///
    /// Panics if two analyzers accept the same cards.
    pub fn classify(&self, cards: &[Card]) -> Option<HandType> {
        match self.resolve(cards) {
            Ok(found) => found,
            Err(err) => panic!("{err}"),
        }
    }

    /// Classifies `cards` into a group, `InvalidShape` when unrecognized.
    pub fn group(&self, cards: &[Card]) -> Result<CardGroup, PlayError> {
        let hand_type = self.resolve(cards)?.ok_or(PlayError::InvalidShape)?;
        Ok(CardGroup::new(cards.to_vec(), hand_type))
    }

    /// Routes the context's target to the analyzer owning it. An unsupported
    /// kind yields no groups.
    pub fn dispatch(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<CardGroup>, PlayError> {
        let kind = ctx.target.kind();
        match self.analyzers.iter().find(|analyzer| analyzer.check(kind)) {
            Some(analyzer) => analyzer.invoke(ctx),
            None => Ok(Vec::new()),
        }
    }
}
