//! Risk Profiler - Main binary
//!
//! Scores a single client from the command line, or generates a synthetic
//! client table and optionally scores and exports it.
//!
//! # Examples
//!
//! ```text
//! risk-profiler score --income 85000 --net-worth 120000 --liabilities 30000 \
//!     --horizon 15 --responses 4,3,4,2,5 --questionnaire reverse_worded
//! risk-profiler generate --count 1000 --seed 42 --score --output clients.parquet
//! risk-profiler questions --questionnaire standard
//! ```

mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use scoring::{CategoryTally, Questionnaire, RiskScoringEngine};
use tracing::info;
use types::{
    ClientFinancialProfile, IncomeStability, PsychometricResponses, QUESTION_COUNT, RiskObjective,
};

use crate::config::ScoringArgs;

/// Risk Profiler - investor ability/willingness scoring
#[derive(Parser, Debug)]
#[command(name = "risk-profiler")]
#[command(about = "Score investor risk tolerance and generate synthetic clients")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score one client
    Score {
        /// Annual income in dollars
        #[arg(long, default_value_t = 50_000.0)]
        income: f64,

        /// Net worth in dollars (may be negative)
        #[arg(long, default_value_t = 200_000.0, allow_negative_numbers = true)]
        net_worth: f64,

        /// Total liabilities in dollars
        #[arg(long, default_value_t = 50_000.0)]
        liabilities: f64,

        /// Investment horizon in years (1-30)
        #[arg(long, default_value_t = 10)]
        horizon: u8,

        /// Number of dependents
        #[arg(long, default_value_t = 0)]
        dependents: u8,

        /// Income stability (stable, fluctuating, variable)
        #[arg(long, default_value = "stable")]
        stability: IncomeStability,

        /// Answers to q1..q5 on the 1-5 scale
        #[arg(long, value_delimiter = ',', default_values_t = [3u8, 3, 3, 3, 3])]
        responses: Vec<u8>,

        /// Largest acceptable loss, in percent (0-100)
        #[arg(long, default_value_t = 5.0)]
        max_loss: f64,

        /// Target outperformance over a benchmark, in percent (0-10)
        #[arg(long, default_value_t = 2.0)]
        outperformance: f64,

        /// Print the assessment as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        scoring: ScoringArgs,
    },

    /// Generate synthetic clients
    Generate {
        /// Number of clients
        #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
        count: i64,

        /// Random seed (omit for OS entropy)
        #[arg(long, env = "RISK_SEED")]
        seed: Option<u64>,

        /// Write the table to this Parquet file
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Print the first N rows as JSON lines
        #[arg(long, default_value_t = 5)]
        show: usize,

        /// Score every client and print the category breakdown
        #[arg(long)]
        score: bool,

        #[command(flatten)]
        scoring: ScoringArgs,
    },

    /// Print a questionnaire's statements and scale anchors
    Questions {
        /// Preset to print (standard, reverse_worded)
        #[arg(long, default_value = "standard")]
        questionnaire: Questionnaire,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Score {
            income,
            net_worth,
            liabilities,
            horizon,
            dependents,
            stability,
            responses,
            max_loss,
            outperformance,
            json,
            scoring,
        } => {
            let profile = ClientFinancialProfile {
                income,
                net_worth,
                liabilities,
                time_horizon_years: horizon,
                dependents,
                income_stability: stability,
            };
            let objective = RiskObjective {
                absolute_max_loss_pct: max_loss,
                relative_outperformance_pct: outperformance,
            };
            run_score(profile, &responses, objective, json, &scoring)
        }
        Commands::Generate {
            count,
            seed,
            output,
            show,
            score,
            scoring,
        } => run_generate(count, seed, output, show, score, &scoring),
        Commands::Questions { questionnaire } => {
            print_questions(questionnaire);
            Ok(())
        }
    }
}

// ============================================================================
// Subcommands
// ============================================================================

fn run_score(
    profile: ClientFinancialProfile,
    responses: &[u8],
    objective: RiskObjective,
    json: bool,
    scoring: &ScoringArgs,
) -> Result<()> {
    // The engine trusts its inputs; range checks happen here at the boundary.
    profile.validate()?;
    objective.validate()?;
    let values: [u8; QUESTION_COUNT] = responses.try_into().with_context(|| {
        format!(
            "expected {QUESTION_COUNT} responses, got {}",
            responses.len()
        )
    })?;
    let responses = PsychometricResponses::from_values(values)?;

    let engine = RiskScoringEngine::new(scoring.resolve()?);
    let assessment = engine.assess(&profile, &responses, objective);

    if json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        println!("{}", assessment.score);
        println!("Quadrant: {}", assessment.quadrant);
        println!(
            "Objective: max loss {:.1}%, outperformance {:.1}%",
            objective.absolute_max_loss_pct, objective.relative_outperformance_pct
        );
    }
    Ok(())
}

fn run_generate(
    count: i64,
    seed: Option<u64>,
    output: Option<PathBuf>,
    show: usize,
    score: bool,
    scoring: &ScoringArgs,
) -> Result<()> {
    let table = synth::generate_synthetic(count, seed)?;
    info!(rows = table.len(), ?seed, "generated synthetic clients");

    for row in table.iter().take(show) {
        println!("{}", serde_json::to_string(row)?);
    }

    if score {
        let engine = RiskScoringEngine::new(scoring.resolve()?);
        let results: Vec<_> = table
            .iter()
            .map(|row| engine.score(&row.profile(), &row.responses()))
            .collect();
        println!("{}", CategoryTally::from_results(&results));
    }

    if let Some(path) = output {
        storage::write_parquet(&table, &path)
            .with_context(|| format!("exporting to {}", path.display()))?;
    }
    Ok(())
}

fn print_questions(questionnaire: Questionnaire) {
    println!("Questionnaire: {}", questionnaire.name());
    for (i, question) in questionnaire.questions().iter().enumerate() {
        let (low, high) = question.anchors;
        println!("q{}. {}", i + 1, question.statement);
        println!("    1 = {low}, 5 = {high}");
    }
}
