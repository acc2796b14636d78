use crate::Card;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

/// Seeded source of deck order. The same seed always produces the same
/// shuffle and cut.
#[derive(Debug, Clone)]
pub struct Shuffler {
    seed: u64,
    rng: StdRng,
}

impl Shuffler {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn shuffle(&mut self, cards: &mut [Card]) {
        cards.shuffle(&mut self.rng);
    }

    /// Position to cut a pile of `len` cards at, never the very top or
    /// bottom. Piles of fewer than two cards are not cut.
    pub fn cut_point(&mut self, len: usize) -> usize {
        if len < 2 {
            return 0;
        }
        self.rng.gen_range(1..len)
    }
}
