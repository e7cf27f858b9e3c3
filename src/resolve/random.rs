use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of uniform random indices for synthetic values and option choice.
pub trait RandomSource {
    /// Uniform integer in `[0, upper)`. Returns 0 when `upper` is 0.
    fn below(&mut self, upper: usize) -> usize;

    /// Uniform integer in `[low, high)`; `low` when the range is empty.
    fn between(&mut self, low: usize, high: usize) -> usize {
        if high <= low {
            return low;
        }
        low + self.below(high - low)
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        if items.is_empty() {
            return "";
        }
        items[self.below(items.len())]
    }
}

/// Thread-local OS-seeded generator.
pub struct ThreadRandom(ThreadRng);

impl ThreadRandom {
    pub fn new() -> Self {
        Self(rand::thread_rng())
    }
}

impl Default for ThreadRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ThreadRandom {
    fn below(&mut self, upper: usize) -> usize {
        if upper == 0 {
            return 0;
        }
        self.0.gen_range(0..upper)
    }
}

/// Reproducible generator for a given seed.
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn below(&mut self, upper: usize) -> usize {
        if upper == 0 {
            return 0;
        }
        self.0.gen_range(0..upper)
    }
}

/// Replays a fixed sequence, each value reduced modulo the requested bound.
pub struct SequenceRandom {
    values: Vec<usize>,
    pos: usize,
}

impl SequenceRandom {
    pub fn new(values: Vec<usize>) -> Self {
        Self { values, pos: 0 }
    }

    /// Always yields zero.
    pub fn zeros() -> Self {
        Self::new(vec![0])
    }
}

impl RandomSource for SequenceRandom {
    fn below(&mut self, upper: usize) -> usize {
        if upper == 0 || self.values.is_empty() {
            return 0;
        }
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v % upper
    }
}
