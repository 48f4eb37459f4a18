//! Statistical distributions for synthetic client fields.
//!
//! Trait-based so a column's distribution can be swapped without touching
//! the generator loop.
//!
//! # Distributions Used
//!
//! - **Income**: Log-normal (many modest incomes, a long high tail)
//! - **Net worth**: Normal (negative values are kept)
//! - **Liabilities**: Normal, floored at zero
//! - **Integer fields**: Uniform over an inclusive range
//!
//! Monetary draws are rounded to cents.

use rand::Rng;
use rand_distr::{Distribution, LogNormal, Normal};

use crate::config::{IntRange, LogNormalParams, NormalParams, check_spread};
use crate::error::{Result, SynthError};

/// Round a dollar amount to whole cents.
#[inline]
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// =============================================================================
// AmountDistribution Trait
// =============================================================================

/// Trait for sampling a dollar amount.
pub trait AmountDistribution: Send + Sync {
    /// Draw one amount, already rounded to cents.
    fn sample(&self, rng: &mut impl Rng) -> f64;
}

// =============================================================================
// LogNormalAmount
// =============================================================================

/// Log-normal amount (income).
#[derive(Debug, Clone)]
pub struct LogNormalAmount {
    dist: LogNormal<f64>,
}

impl LogNormalAmount {
    pub fn new(params: LogNormalParams) -> Result<Self> {
        check_spread("log-normal scale", params.location, params.scale)?;
        let dist = LogNormal::new(params.location, params.scale)
            .map_err(|e| SynthError::InvalidConfig(format!("log-normal: {e}")))?;
        Ok(Self { dist })
    }
}

impl AmountDistribution for LogNormalAmount {
    fn sample(&self, rng: &mut impl Rng) -> f64 {
        round_to_cents(self.dist.sample(rng))
    }
}

// =============================================================================
// NormalAmount
// =============================================================================

/// Normal amount with an optional floor (net worth, liabilities).
#[derive(Debug, Clone)]
pub struct NormalAmount {
    dist: Normal<f64>,
    /// Applied after rounding.
    floor: Option<f64>,
}

impl NormalAmount {
    pub fn new(params: NormalParams) -> Result<Self> {
        // rand_distr accepts a negative std dev (it mirrors the draws).
        check_spread("normal std_dev", params.mean, params.std_dev)?;
        let dist = Normal::new(params.mean, params.std_dev)
            .map_err(|e| SynthError::InvalidConfig(format!("normal: {e}")))?;
        Ok(Self { dist, floor: None })
    }

    /// Clamp every draw to at least `floor`.
    pub fn with_floor(mut self, floor: f64) -> Self {
        self.floor = Some(floor);
        self
    }
}

impl AmountDistribution for NormalAmount {
    fn sample(&self, rng: &mut impl Rng) -> f64 {
        let value = round_to_cents(self.dist.sample(rng));
        match self.floor {
            // `<=` also folds a rounded -0.0 onto the floor.
            Some(floor) if value <= floor => floor,
            _ => value,
        }
    }
}

// =============================================================================
// UniformInt
// =============================================================================

/// Uniform integer over an inclusive range.
#[derive(Debug, Clone, Copy)]
pub struct UniformInt {
    range: IntRange,
}

impl UniformInt {
    pub fn new(range: IntRange) -> Self {
        Self { range }
    }

    pub fn sample(&self, rng: &mut impl Rng) -> u8 {
        rng.random_range(self.range.min..=self.range.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(1234.5678), 1234.57);
        assert_eq!(round_to_cents(-0.004), 0.0);
        assert_eq!(round_to_cents(10.0), 10.0);
    }

    #[test]
    fn test_log_normal_amount_positive_and_skewed() {
        let dist = LogNormalAmount::new(LogNormalParams {
            location: 10.5,
            scale: 0.7,
        })
        .unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let draws: Vec<f64> = (0..2000).map(|_| dist.sample(&mut rng)).collect();
        assert!(draws.iter().all(|d| *d > 0.0));

        // Right skew: mean above median.
        let mut sorted = draws.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let median = sorted[sorted.len() / 2];
        let mean = draws.iter().sum::<f64>() / draws.len() as f64;
        assert!(mean > median, "mean {mean} should exceed median {median}");

        // exp(10.5) is roughly 36k.
        assert!(
            median > 25_000.0 && median < 50_000.0,
            "median {median} should sit near exp(10.5)"
        );
    }

    #[test]
    fn test_normal_amount_floor() {
        let dist = NormalAmount::new(NormalParams {
            mean: 0.0,
            std_dev: 1000.0,
        })
        .unwrap()
        .with_floor(0.0);
        let mut rng = StdRng::seed_from_u64(7);

        let draws: Vec<f64> = (0..1000).map(|_| dist.sample(&mut rng)).collect();
        assert!(draws.iter().all(|d| *d >= 0.0));
        let zeros = draws.iter().filter(|d| **d == 0.0).count();
        assert!(zeros > 300, "about half the draws should hit the floor, got {zeros}");
    }

    #[test]
    fn test_draws_are_cent_rounded() {
        let dist = NormalAmount::new(NormalParams {
            mean: 150_000.0,
            std_dev: 100_000.0,
        })
        .unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..200 {
            let v = dist.sample(&mut rng);
            assert!(((v * 100.0).round() - v * 100.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_uniform_int_inclusive() {
        let dist = UniformInt::new(IntRange { min: 1, max: 5 });
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = [false; 6];
        for _ in 0..500 {
            let v = dist.sample(&mut rng);
            assert!((1..=5).contains(&v));
            seen[v as usize] = true;
        }
        assert!(seen[1] && seen[5], "both endpoints should appear");
    }

    #[test]
    fn test_invalid_params_rejected() {
        let bad = NormalAmount::new(NormalParams {
            mean: 0.0,
            std_dev: -5.0,
        });
        assert!(matches!(bad, Err(SynthError::InvalidConfig(_))));

        let bad = LogNormalAmount::new(LogNormalParams {
            location: 10.5,
            scale: -0.7,
        });
        assert!(matches!(bad, Err(SynthError::InvalidConfig(_))));

        let bad = NormalAmount::new(NormalParams {
            mean: f64::NAN,
            std_dev: 1.0,
        });
        assert!(matches!(bad, Err(SynthError::InvalidConfig(_))));
    }

    #[test]
    fn test_zero_spread_is_constant() {
        let dist = NormalAmount::new(NormalParams {
            mean: 1234.567,
            std_dev: 0.0,
        })
        .unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        assert_eq!(dist.sample(&mut rng), 1234.57);
    }
}
