//! Capacity-fill generators.
//!
//! The optimize action asks a [`FillGenerator`] how many tonnes to load
//! into each wagon. The default, [`UniformFill`], draws uniformly from
//! `[60, 65)` and can be seeded for reproducible runs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt::Debug;

use crate::config::PlannerConfig;
use crate::models::Wagon;

/// Produces the load assigned to a wagon during optimization.
///
/// Callers clamp the returned value into `[0, wagon.capacity]`.
pub trait FillGenerator: Send + Debug {
    /// Load (tonnes) for the wagon at `index`.
    fn fill(&mut self, index: usize, wagon: &Wagon) -> f64;
}

/// Uniform fill in `[low, high)`.
#[derive(Debug, Clone)]
pub struct UniformFill {
    low: f64,
    high: f64,
    rng: StdRng,
}

/// Fixed fill for every wagon.
#[derive(Debug, Clone, Copy)]
pub struct ConstantFill(pub f64);

impl UniformFill {
    /// Default lower bound (tonnes).
    pub const DEFAULT_LOW: f64 = 60.0;
    /// Default exclusive upper bound (tonnes).
    pub const DEFAULT_HIGH: f64 = 65.0;

    /// OS-seeded generator over `[low, high)`.
    ///
    /// # Panics
    /// Panics if the range is empty or not finite.
    pub fn new(low: f64, high: f64) -> Self {
        Self::with_rng(low, high, StdRng::from_os_rng())
    }

    /// Deterministic generator over `[low, high)`.
    ///
    /// # Panics
    /// Panics if the range is empty or not finite.
    pub fn seeded(low: f64, high: f64, seed: u64) -> Self {
        Self::with_rng(low, high, StdRng::seed_from_u64(seed))
    }

    /// Generator over a validated config's fill range, seeded from
    /// `config.seed` when set.
    pub fn from_config(config: &PlannerConfig) -> Self {
        match config.seed {
            Some(seed) => Self::seeded(config.fill_low, config.fill_high, seed),
            None => Self::new(config.fill_low, config.fill_high),
        }
    }

    fn with_rng(low: f64, high: f64, rng: StdRng) -> Self {
        assert!(
            low.is_finite() && high.is_finite() && low < high,
            "fill range [{low}, {high}) is empty or not finite"
        );
        Self { low, high, rng }
    }

    /// The `(low, high)` bounds of the draw.
    pub fn range(&self) -> (f64, f64) {
        (self.low, self.high)
    }
}

impl Default for UniformFill {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LOW, Self::DEFAULT_HIGH)
    }
}

impl FillGenerator for UniformFill {
    fn fill(&mut self, _index: usize, _wagon: &Wagon) -> f64 {
        self.rng.random_range(self.low..self.high)
    }
}

impl FillGenerator for ConstantFill {
    fn fill(&mut self, _index: usize, _wagon: &Wagon) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WagonType;

    #[test]
    fn test_uniform_in_range() {
        let wagon = Wagon::new("W1", WagonType::Bcn, 65.0);
        let mut g = UniformFill::seeded(60.0, 65.0, 42);
        for i in 0..1000 {
            let v = g.fill(i, &wagon);
            assert!((60.0..65.0).contains(&v), "fill {v} out of range");
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let wagon = Wagon::new("W1", WagonType::Bcn, 65.0);
        let mut a = UniformFill::seeded(60.0, 65.0, 7);
        let mut b = UniformFill::seeded(60.0, 65.0, 7);
        let xs: Vec<f64> = (0..12).map(|i| a.fill(i, &wagon)).collect();
        let ys: Vec<f64> = (0..12).map(|i| b.fill(i, &wagon)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_from_config() {
        let config = PlannerConfig::default().with_fill_range(10.0, 20.0).with_seed(9);
        let wagon = Wagon::new("W1", WagonType::Bcn, 65.0);
        let mut a = UniformFill::from_config(&config);
        let mut b = UniformFill::seeded(10.0, 20.0, 9);
        assert_eq!(a.range(), (10.0, 20.0));
        assert_eq!(a.fill(0, &wagon), b.fill(0, &wagon));
    }

    #[test]
    fn test_default_range() {
        let g = UniformFill::default();
        assert_eq!(g.range(), (60.0, 65.0));
    }

    #[test]
    #[should_panic]
    fn test_empty_range_panics() {
        let _ = UniformFill::seeded(65.0, 60.0, 1);
    }

    #[test]
    #[should_panic]
    fn test_infinite_range_panics() {
        let _ = UniformFill::seeded(0.0, f64::INFINITY, 1);
    }

    #[test]
    fn test_constant() {
        let wagon = Wagon::new("W1", WagonType::Brn, 65.0);
        let mut g = ConstantFill(62.5);
        assert!((g.fill(3, &wagon) - 62.5).abs() < 1e-10);
    }
}
