//! Configuration for the synthetic client generator.
//!
//! Every distribution parameter lives here. The defaults describe a plausible
//! retail client base; callers that need a different population (a stress
//! scenario, a narrower horizon range) override individual fields.
//!
//! # Design Principles
//!
//! - **Declarative**: All behavior controlled by config, not code
//! - **SoC**: Config is pure data; distributions.rs and generator.rs sample

use serde::{Deserialize, Serialize};
use types::{MAX_TIME_HORIZON_YEARS, MIN_TIME_HORIZON_YEARS};

use crate::error::{Result, SynthError};

// =============================================================================
// Parameter Blocks
// =============================================================================

/// Log-normal parameters, on the log scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogNormalParams {
    /// Mean of the underlying normal (mu).
    pub location: f64,
    /// Std dev of the underlying normal (sigma).
    pub scale: f64,
}

/// Normal distribution parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalParams {
    pub mean: f64,
    pub std_dev: f64,
}

/// Inclusive integer range for uniform draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange {
    pub min: u8,
    pub max: u8,
}

impl IntRange {
    pub fn contains(&self, value: u8) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

// =============================================================================
// GeneratorConfig
// =============================================================================

/// Distribution parameters for every generated column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Annual income (log-normal: right-skewed, strictly positive).
    pub income: LogNormalParams,
    /// Net worth (normal; negative values are kept).
    pub net_worth: NormalParams,
    /// Liabilities (normal, floored at zero).
    pub liabilities: NormalParams,
    /// Investment horizon in years.
    pub time_horizon_years: IntRange,
    /// Number of dependents.
    pub dependents: IntRange,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            income: LogNormalParams {
                location: 10.5,
                scale: 0.7,
            },
            net_worth: NormalParams {
                mean: 150_000.0,
                std_dev: 100_000.0,
            },
            liabilities: NormalParams {
                mean: 70_000.0,
                std_dev: 40_000.0,
            },
            time_horizon_years: IntRange {
                min: MIN_TIME_HORIZON_YEARS,
                max: MAX_TIME_HORIZON_YEARS,
            },
            dependents: IntRange { min: 0, max: 5 },
        }
    }
}

impl GeneratorConfig {
    /// Check every parameter block.
    ///
    /// Horizon draws must stay inside the questionnaire's 1..=30 range so
    /// generated rows remain valid scoring inputs.
    pub fn validate(&self) -> Result<()> {
        check_spread("income.scale", self.income.location, self.income.scale)?;
        check_spread("net_worth.std_dev", self.net_worth.mean, self.net_worth.std_dev)?;
        check_spread(
            "liabilities.std_dev",
            self.liabilities.mean,
            self.liabilities.std_dev,
        )?;
        check_range("time_horizon_years", self.time_horizon_years)?;
        check_range("dependents", self.dependents)?;

        if self.time_horizon_years.min < MIN_TIME_HORIZON_YEARS
            || self.time_horizon_years.max > MAX_TIME_HORIZON_YEARS
        {
            return Err(SynthError::InvalidConfig(format!(
                "time_horizon_years must stay within {MIN_TIME_HORIZON_YEARS}..={MAX_TIME_HORIZON_YEARS}"
            )));
        }
        Ok(())
    }
}

/// Location must be finite; spread finite and non-negative.
pub(crate) fn check_spread(name: &str, center: f64, spread: f64) -> Result<()> {
    if !center.is_finite() || !spread.is_finite() || spread < 0.0 {
        return Err(SynthError::InvalidConfig(format!(
            "{name} must be finite and non-negative (center={center}, spread={spread})"
        )));
    }
    Ok(())
}

fn check_range(name: &str, range: IntRange) -> Result<()> {
    if range.min > range.max {
        return Err(SynthError::InvalidConfig(format!(
            "{name} range is empty ({}..={})",
            range.min, range.max
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(GeneratorConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_negative_spread() {
        let config = GeneratorConfig {
            net_worth: NormalParams {
                mean: 0.0,
                std_dev: -1.0,
            },
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(SynthError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_bad_ranges() {
        let empty = GeneratorConfig {
            dependents: IntRange { min: 3, max: 2 },
            ..Default::default()
        };
        assert!(empty.validate().is_err());

        let too_long = GeneratorConfig {
            time_horizon_years: IntRange { min: 1, max: 40 },
            ..Default::default()
        };
        assert!(too_long.validate().is_err());
    }

    #[test]
    fn test_partial_json_override() {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{"dependents":{"min":0,"max":2}}"#).unwrap();
        assert_eq!(config.dependents, IntRange { min: 0, max: 2 });
        assert_eq!(config.income, GeneratorConfig::default().income);
    }
}
