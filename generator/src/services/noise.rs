//! Seeded noise source shared by the generators of one stage
//!
//! The generator is passed explicitly to every service, so the draw order is
//! exactly the call order. ChaCha8 keeps the sequence identical across
//! platforms for a given seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Exp, Normal};
use shared::ValueRange;

use crate::error::{GeneratorError, GeneratorResult};

pub struct NoiseSource {
    rng: ChaCha8Rng,
}

impl NoiseSource {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// One Gaussian draw
    pub fn normal(&mut self, mean: f64, std_dev: f64) -> GeneratorResult<f64> {
        Ok(Self::gaussian(mean, std_dev)?.sample(&mut self.rng))
    }

    /// `count` consecutive Gaussian draws
    pub fn normal_series(
        &mut self,
        count: usize,
        mean: f64,
        std_dev: f64,
    ) -> GeneratorResult<Vec<f64>> {
        let dist = Self::gaussian(mean, std_dev)?;
        Ok((0..count).map(|_| dist.sample(&mut self.rng)).collect())
    }

    /// One exponential draw with the given mean
    pub fn exponential(&mut self, mean: f64) -> GeneratorResult<f64> {
        if !(mean.is_finite() && mean > 0.0) {
            return Err(GeneratorError::InvalidDistribution(format!(
                "exponential mean must be positive, got {}",
                mean
            )));
        }
        let dist = Exp::new(1.0 / mean)
            .map_err(|e| GeneratorError::InvalidDistribution(e.to_string()))?;
        Ok(dist.sample(&mut self.rng))
    }

    /// Bernoulli trial succeeding with probability `p`
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.random::<f64>() < p
    }

    /// Uniform draw in `[range.min, range.max)`
    pub fn uniform(&mut self, range: ValueRange) -> f64 {
        range.min + (range.max - range.min) * self.rng.random::<f64>()
    }

    fn gaussian(mean: f64, std_dev: f64) -> GeneratorResult<Normal<f64>> {
        // Normal::new only rejects a non-finite std_dev
        if !(std_dev.is_finite() && std_dev >= 0.0) {
            return Err(GeneratorError::InvalidDistribution(format!(
                "normal std_dev must be finite and non-negative, got {}",
                std_dev
            )));
        }
        Normal::new(mean, std_dev).map_err(|e| {
            GeneratorError::InvalidDistribution(format!(
                "normal({}, {}): {}",
                mean, std_dev, e
            ))
        })
    }
}
