//! Scoring configuration assembled from a JSON file and command-line flags.
//!
//! Precedence, lowest to highest: built-in defaults, `--config` file,
//! `--questionnaire` preset, explicit flags.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use scoring::{AbilityBounds, Polarity, QuestionPolarity, Questionnaire, ScoringConfig, Thresholds};

/// Flags shared by every subcommand that scores clients.
#[derive(Args, Debug, Clone, Default)]
pub struct ScoringArgs {
    /// JSON file holding a (possibly partial) scoring config
    #[arg(long, env = "RISK_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Questionnaire preset whose polarity to use (standard, reverse_worded)
    #[arg(long)]
    pub questionnaire: Option<Questionnaire>,

    /// Per-question polarity, e.g. inverted,inverted,inverted,direct,direct
    #[arg(long, value_delimiter = ',', conflicts_with = "questionnaire")]
    pub polarity: Option<Vec<QuestionPolarity>>,

    /// Lower conceptual bound of the ability score
    #[arg(long, allow_negative_numbers = true)]
    pub min_bound: Option<f64>,

    /// Upper conceptual bound of the ability score
    #[arg(long, allow_negative_numbers = true)]
    pub max_bound: Option<f64>,

    /// Normalized ability at or above which ability counts as high
    #[arg(long)]
    pub ability_threshold: Option<f64>,

    /// Willingness score at or above which willingness counts as high
    #[arg(long)]
    pub willingness_threshold: Option<u8>,
}

impl ScoringArgs {
    /// Resolve the final config.
    pub fn resolve(&self) -> Result<ScoringConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => ScoringConfig::default(),
        };

        if let Some(preset) = self.questionnaire {
            config = config.with_polarity(preset.polarity());
        }
        if let Some(items) = &self.polarity {
            config = config.with_polarity(Polarity::from_slice(items)?);
        }

        if self.min_bound.is_some() || self.max_bound.is_some() {
            let min = self.min_bound.unwrap_or(config.bounds.min());
            let max = self.max_bound.unwrap_or(config.bounds.max());
            config = config.with_bounds(AbilityBounds::new(min, max)?);
        }

        if self.ability_threshold.is_some() || self.willingness_threshold.is_some() {
            let ability = self.ability_threshold.unwrap_or(config.thresholds.ability);
            let willingness = self
                .willingness_threshold
                .unwrap_or(config.thresholds.willingness);
            config = config.with_thresholds(Thresholds::new(ability, willingness)?);
        }

        Ok(config)
    }
}

fn load_config(path: &Path) -> Result<ScoringConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading scoring config {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("parsing scoring config {}", path.display()))
}
