//! Synthetic client generator.
//!
//! [`ClientGenerator`] owns its random source and the per-column samplers.
//! Nothing is shared between calls, so two generators built from the same
//! `(config, seed)` produce bit-identical tables on any thread.
//!
//! # Usage
//!
//! ```
//! use synth::generate_synthetic;
//!
//! let table = generate_synthetic(5, Some(42)).unwrap();
//! assert_eq!(table.len(), 5);
//! assert_eq!(table, generate_synthetic(5, Some(42)).unwrap());
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::Value;
use tracing::debug;
use types::{IncomeStability, LikertResponse};

use crate::config::GeneratorConfig;
use crate::distributions::{AmountDistribution, LogNormalAmount, NormalAmount, UniformInt};
use crate::error::Result;
use crate::record::SyntheticClientRecord;
use crate::table::ClientTable;
use crate::validate::{check_count, parse_count, parse_seed};

/// Upper bound on up-front row allocation; larger tables grow as they fill.
const PREALLOCATE_ROWS: usize = 1 << 16;

// =============================================================================
// ClientGenerator
// =============================================================================

/// Draws synthetic clients row by row, columns in schema order.
pub struct ClientGenerator {
    rng: StdRng,
    income: LogNormalAmount,
    net_worth: NormalAmount,
    liabilities: NormalAmount,
    time_horizon_years: UniformInt,
    dependents: UniformInt,
}

impl ClientGenerator {
    /// Build a generator. `None` seeds from OS entropy.
    ///
    /// The config is checked before the random source is created.
    pub fn new(config: GeneratorConfig, seed: Option<u64>) -> Result<Self> {
        config.validate()?;

        let income = LogNormalAmount::new(config.income)?;
        let net_worth = NormalAmount::new(config.net_worth)?;
        let liabilities = NormalAmount::new(config.liabilities)?.with_floor(0.0);

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            rng,
            income,
            net_worth,
            liabilities,
            time_horizon_years: UniformInt::new(config.time_horizon_years),
            dependents: UniformInt::new(config.dependents),
        })
    }

    /// Draw the next client.
    pub fn next_record(&mut self) -> SyntheticClientRecord {
        let rng = &mut self.rng;

        let income = self.income.sample(rng);
        let net_worth = self.net_worth.sample(rng);
        let liabilities = self.liabilities.sample(rng);
        let time_horizon_years = self.time_horizon_years.sample(rng);
        let dependents = self.dependents.sample(rng);
        let income_stability =
            IncomeStability::ALL[rng.random_range(0..IncomeStability::ALL.len())];

        // Answers are drawn from the scale itself, so every draw is in domain.
        let scale = LikertResponse::SCALE;
        let mut answer = || scale[rng.random_range(0..scale.len())];
        let (q1, q2, q3, q4, q5) = (answer(), answer(), answer(), answer(), answer());

        SyntheticClientRecord {
            income,
            net_worth,
            liabilities,
            time_horizon_years,
            dependents,
            income_stability,
            q1,
            q2,
            q3,
            q4,
            q5,
        }
    }

    /// Draw `count` clients into a table.
    pub fn generate(&mut self, count: usize) -> ClientTable {
        let mut rows = Vec::with_capacity(count.min(PREALLOCATE_ROWS));
        rows.extend((0..count).map(|_| self.next_record()));
        ClientTable::new(rows)
    }
}

// =============================================================================
// Entry Points
// =============================================================================

/// Generate `count` clients with the default distributions.
///
/// Fails with a value error for a negative count. Validation happens before
/// any randomness is drawn.
pub fn generate_synthetic(count: i64, seed: Option<u64>) -> Result<ClientTable> {
    generate_with_config(count, seed, GeneratorConfig::default())
}

/// Like [`generate_synthetic`], with custom distribution parameters.
pub fn generate_with_config(
    count: i64,
    seed: Option<u64>,
    config: GeneratorConfig,
) -> Result<ClientTable> {
    let count = check_count(count).inspect_err(|e| debug!(error = %e, "rejected count"))?;
    generate_rows(count, seed, config)
}

/// Generate from loosely typed arguments.
///
/// `count` must be a JSON integer; `seed` must be a non-negative JSON integer,
/// `null`, or absent. Anything else fails with a type error.
pub fn generate_synthetic_json(count: &Value, seed: Option<&Value>) -> Result<ClientTable> {
    let count = parse_count(count).inspect_err(|e| debug!(error = %e, "rejected count"))?;
    let seed = parse_seed(seed).inspect_err(|e| debug!(error = %e, "rejected seed"))?;
    generate_rows(count, seed, GeneratorConfig::default())
}

fn generate_rows(count: usize, seed: Option<u64>, config: GeneratorConfig) -> Result<ClientTable> {
    let mut generator = ClientGenerator::new(config, seed)?;
    debug!(count, ?seed, "generating synthetic clients");
    Ok(generator.generate(count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IntRange;
    use crate::error::SynthError;
    use serde_json::json;

    #[test]
    fn test_zero_count_is_empty() {
        let table = generate_synthetic(0, Some(1)).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.columns().len(), 11);
    }

    #[test]
    fn test_same_seed_same_rows() {
        let a = generate_synthetic(20, Some(99)).unwrap();
        let b = generate_synthetic(20, Some(99)).unwrap();
        assert!(a.bit_identical(&b));
    }

    #[test]
    fn test_generator_is_a_stream() {
        // One generator drawing 3 + 2 rows matches a fresh 5-row table.
        let mut generator = ClientGenerator::new(GeneratorConfig::default(), Some(5)).unwrap();
        let mut rows = generator.generate(3).into_rows();
        rows.extend(generator.generate(2).into_rows());
        assert_eq!(rows, generate_synthetic(5, Some(5)).unwrap().into_rows());
    }

    #[test]
    fn test_unseeded_generation_succeeds() {
        let table = generate_synthetic(10, None).unwrap();
        assert_eq!(table.len(), 10);
    }

    #[test]
    fn test_invalid_config_fails_before_generation() {
        let config = GeneratorConfig {
            dependents: IntRange { min: 4, max: 1 },
            ..Default::default()
        };
        assert!(matches!(
            generate_with_config(3, Some(1), config),
            Err(SynthError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_answers_cover_the_whole_scale() {
        let table = generate_synthetic(300, Some(21)).unwrap();
        for expected in LikertResponse::SCALE {
            assert!(
                table.iter().any(|r| r.answers().contains(&expected)),
                "answer {expected} never drawn"
            );
        }
        for row in &table {
            for answer in row.answers() {
                assert!(LikertResponse::new(answer.get()).is_ok());
            }
        }
    }

    #[test]
    fn test_custom_ranges_respected() {
        let config = GeneratorConfig {
            time_horizon_years: IntRange { min: 10, max: 12 },
            dependents: IntRange { min: 2, max: 2 },
            ..Default::default()
        };
        let table = generate_with_config(200, Some(8), config).unwrap();
        for row in &table {
            assert!((10..=12).contains(&row.time_horizon_years));
            assert_eq!(row.dependents, 2);
        }
    }

    #[test]
    fn test_json_entry_point() {
        let table = generate_synthetic_json(&json!(4), Some(&json!(7))).unwrap();
        assert_eq!(table, generate_synthetic(4, Some(7)).unwrap());
        assert_eq!(
            generate_synthetic_json(&json!(3.5), None),
            Err(SynthError::CountNotInteger)
        );
    }
}
