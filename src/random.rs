use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the draws made while building a quiz.
pub trait RandomSource {
    /// Uniform index in `0..bound`. Callers never pass zero.
    fn index(&mut self, bound: usize) -> usize;

    fn chance(&mut self) -> bool {
        self.index(2) == 0
    }
}

#[derive(Debug, Clone)]
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for StdRandom {
    fn index(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}

/// Replays a fixed list of values, wrapping around, each reduced modulo the requested bound.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<usize>,
    position: usize,
}

impl SequenceRandom {
    pub fn new(values: Vec<usize>) -> Self {
        Self {
            values,
            position: 0,
        }
    }
}

impl RandomSource for SequenceRandom {
    fn index(&mut self, bound: usize) -> usize {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value % bound
    }
}

pub fn shuffle<T>(rng: &mut dyn RandomSource, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.index(i + 1);
        items.swap(i, j);
    }
}

/// Draws up to `count` items without replacement, in draw order.
pub fn sample<T>(rng: &mut dyn RandomSource, mut items: Vec<T>, count: usize) -> Vec<T> {
    let count = count.min(items.len());
    for i in 0..count {
        let j = i + rng.index(items.len() - i);
        items.swap(i, j);
    }
    items.truncate(count);
    items
}
