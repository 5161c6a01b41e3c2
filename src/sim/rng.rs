//! Injectable randomness
//!
//! All random decisions in the sim (spawn speed, size, penalty flag, particle
//! spread) flow through the [`UniformDraws`] trait so tests can script exact
//! sequences and hosts can seed reproducible runs.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// A source of independent uniform draws
pub trait UniformDraws {
    /// Next draw in [0, 1)
    fn unit(&mut self) -> f32;

    /// Next draw in [lo, hi)
    fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + self.unit() * (hi - lo)
    }

    /// Bernoulli draw with probability `p`
    fn chance(&mut self, p: f32) -> bool {
        self.unit() < p
    }
}

/// Production source: seeded PCG, reproducible per run
#[derive(Debug, Clone)]
pub struct PcgDraws {
    rng: Pcg32,
}

impl PcgDraws {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed from the OS entropy source
    pub fn from_entropy() -> Self {
        Self::seeded(rand::rng().random())
    }
}

impl UniformDraws for PcgDraws {
    fn unit(&mut self) -> f32 {
        self.rng.random()
    }
}

/// Test source replaying a fixed sequence, cycling when exhausted
#[derive(Debug, Clone)]
pub struct SequenceDraws {
    values: Vec<f32>,
    index: usize,
}

impl SequenceDraws {
    pub fn new(values: Vec<f32>) -> Self {
        assert!(!values.is_empty(), "sequence must not be empty");
        Self { values, index: 0 }
    }
}

impl UniformDraws for SequenceDraws {
    fn unit(&mut self) -> f32 {
        let v = self.values[self.index % self.values.len()];
        self.index += 1;
        v
    }
}
