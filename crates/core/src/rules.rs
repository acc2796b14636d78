use serde::{Deserialize, Serialize};

/// House-rule parameters shared by every analyzer in one registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    pub min_straight_len: usize,
    pub min_pair_run: usize,
    pub min_triple_run: usize,
    pub min_bomb: usize,
    pub triple_with_single: bool,
    pub triple_with_pair: bool,
    pub pair_runs: bool,
    pub triple_runs: bool,
    pub straight_bombs: bool,
    pub rocket: bool,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            min_straight_len: 5,
            min_pair_run: 3,
            min_triple_run: 2,
            min_bomb: 4,
            triple_with_single: true,
            triple_with_pair: true,
            pair_runs: true,
            triple_runs: true,
            straight_bombs: true,
            rocket: true,
        }
    }
}

impl RuleSet {
    /// Longest run the rank order allows (Three through Ace).
    pub const MAX_RUN: usize = 12;

    /// Shortest straight the analyzers accept. A one-card run would collide
    /// with a single.
    pub fn min_straight(&self) -> usize {
        self.min_straight_len.max(2)
    }

    pub fn triple_with_enabled(&self) -> bool {
        self.triple_with_single || self.triple_with_pair
    }
}
