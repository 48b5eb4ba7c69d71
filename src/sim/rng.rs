//! Randomness for serve and return angles
//!
//! The tick only ever asks for two things: a uniform sample in [0, 1) and a
//! coin-flip direction. Keeping that behind a trait lets tests script exact
//! velocities.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of gameplay randomness
pub trait RandomSource {
    /// Uniform sample in [0, 1)
    fn unit(&mut self) -> f32;

    /// -1.0 (left/up) or 1.0 (right/down), each with probability 1/2
    fn direction(&mut self) -> f32 {
        if self.unit() < 0.5 { -1.0 } else { 1.0 }
    }
}

/// Seeded PCG generator used by the real game
#[derive(Debug, Clone)]
pub struct GameRng {
    seed: u64,
    rng: Pcg32,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed from the thread RNG. The chosen seed is kept so it can be logged.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn unit(&mut self) -> f32 {
        self.rng.random::<f32>()
    }
}

/// Replays a fixed list of unit samples, wrapping around at the end
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f32>,
    next: usize,
}

#[cfg(test)]
impl ScriptedRandom {
    pub fn new(values: &[f32]) -> Self {
        assert!(!values.is_empty());
        Self {
            values: values.to_vec(),
            next: 0,
        }
    }

    /// How many samples have been drawn so far
    pub fn draws(&self) -> usize {
        self.next
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn unit(&mut self) -> f32 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}
