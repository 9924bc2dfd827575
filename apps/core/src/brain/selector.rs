//! Randomized reply selection with an injectable source.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks one candidate out of a reply set.
///
/// Production code uses [`RandomSelector`]; tests use [`FixedSelector`] or a
/// seeded [`RandomSelector`] to get reproducible replies.
pub trait ReplySelector {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Chooses one element of a non-empty slice.
    fn choose<'a, T>(&mut self, candidates: &'a [T]) -> &'a T
    where
        Self: Sized,
    {
        let index = self.pick_index(candidates.len()).min(candidates.len() - 1);
        &candidates[index]
    }
}

/// Chooses one element of a non-empty slice through a trait object.
pub fn choose<'a, T>(selector: &mut dyn ReplySelector, candidates: &'a [T]) -> &'a T {
    let index = selector.pick_index(candidates.len()).min(candidates.len() - 1);
    &candidates[index]
}

/// Uniform selection backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomSelector<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomSelector<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSelector<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ReplySelector for RandomSelector<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Always picks the same position, wrapped to the candidate count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedSelector(pub usize);

impl ReplySelector for FixedSelector {
    fn pick_index(&mut self, len: usize) -> usize {
        self.0 % len
    }
}
