//! Command-line interface for the `saarthi` recommendation engine.
//!
//! Loads a catalog, taxonomy, and learner profile from files, runs the
//! pathway engine, and prints results as pretty JSON.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use saarthi_catalog::load_catalog;
use saarthi_engine::{
    AlgorithmKind, PathwayEngine, PathwayObjective, DEFAULT_MAX_RESOURCES,
};
use saarthi_market::{
    HttpProvider, MarketDataProvider, MarketIntelligence, RegionalDataProvider, StaticProvider,
};
use saarthi_profile::{LearnerProfile, SkillTaxonomy};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Where market and regional signals come from.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum ProviderKind {
    /// Deterministic built-in demand tables.
    #[default]
    Static,
    /// The market intelligence HTTP API (`SAARTHI_MARKET_BASE_URL`
    /// overrides the default base URL).
    Http,
}

impl ProviderKind {
    fn build(self) -> (Arc<dyn MarketDataProvider>, Arc<dyn RegionalDataProvider>) {
        match self {
            ProviderKind::Static => {
                let provider = Arc::new(StaticProvider);
                (provider.clone(), provider)
            }
            ProviderKind::Http => {
                let provider = Arc::new(HttpProvider::new());
                (provider.clone(), provider)
            }
        }
    }
}

/// Command-line interface for the `saarthi` application.
#[derive(Debug, Parser)]
#[command(
    name = "saarthi",
    about = "Personalized learning-pathway recommendations"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available `saarthi` commands.
#[derive(Debug, Subcommand)]
enum Commands {
    /// Recommends a learning pathway for a learner profile.
    Recommend {
        /// Path to the resource catalog (JSON array of resources).
        #[arg(long, value_name = "FILE")]
        catalog: PathBuf,
        /// Path to a skill taxonomy (TOML); the built-in taxonomy is used
        /// when omitted.
        #[arg(long, value_name = "FILE")]
        taxonomy: Option<PathBuf>,
        /// Path to the learner profile (JSON).
        #[arg(long, value_name = "FILE")]
        profile: PathBuf,
        /// Ranking algorithm: collaborative, content_based, hybrid, or
        /// multi_objective.
        #[arg(long, default_value = "hybrid")]
        algorithm: String,
        /// Optimization objective (repeatable); balanced when omitted.
        #[arg(long = "objective", value_name = "OBJECTIVE")]
        objectives: Vec<String>,
        /// Maximum number of resources in the pathway.
        #[arg(long, default_value_t = DEFAULT_MAX_RESOURCES)]
        max: usize,
        /// Market data source.
        #[arg(long, value_enum, default_value_t = ProviderKind::Static)]
        provider: ProviderKind,
        /// Also prints a plain-language explanation of the result.
        #[arg(long, default_value_t = false)]
        explain: bool,
    },
    /// Prints the processed market insight for a skill.
    Market {
        /// Skill token to look up.
        #[arg(required = true)]
        skill: String,
        /// State to localize demand for (e.g. "karnataka").
        #[arg(long)]
        location: Option<String>,
        /// Market data source.
        #[arg(long, value_enum, default_value_t = ProviderKind::Static)]
        provider: ProviderKind,
    },
}

fn load_taxonomy(path: Option<&Path>) -> anyhow::Result<SkillTaxonomy> {
    match path {
        Some(path) => SkillTaxonomy::load(path)
            .with_context(|| format!("loading taxonomy from {}", path.display())),
        None => Ok(SkillTaxonomy::builtin()),
    }
}

fn load_profile(path: &Path) -> anyhow::Result<LearnerProfile> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading profile from {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing profile {}", path.display()))
}

async fn run_recommend(
    catalog: &Path,
    taxonomy: Option<&Path>,
    profile: &Path,
    algorithm: &str,
    objectives: &[String],
    max: usize,
    provider: ProviderKind,
    explain: bool,
) -> anyhow::Result<()> {
    let algorithm: AlgorithmKind = algorithm.parse()?;
    let objectives: Vec<PathwayObjective> = objectives
        .iter()
        .map(|raw| raw.parse())
        .collect::<Result<_, _>>()?;

    let catalog = load_catalog(catalog)?;
    let taxonomy = load_taxonomy(taxonomy)?;
    let profile = load_profile(profile)?;
    tracing::debug!(
        learner = %profile.learner_id,
        careers = taxonomy.career_count(),
        "inputs loaded"
    );

    let (market, regional) = provider.build();
    let engine = PathwayEngine::new(
        Arc::new(catalog),
        taxonomy,
        Arc::new(MarketIntelligence::new(market)),
        regional,
    );

    let result = engine
        .recommend(&profile, &objectives, algorithm, max)
        .await?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    if explain {
        let explanation = engine.explain(&profile, &result).await;
        println!("{}", serde_json::to_string_pretty(&explanation)?);
    }
    Ok(())
}

async fn run_market(
    skill: &str,
    location: Option<&str>,
    provider: ProviderKind,
) -> anyhow::Result<()> {
    let (market, _) = provider.build();
    let intelligence = Arc::new(MarketIntelligence::new(market));
    let insight = intelligence.insight(skill, location).await;
    println!("{}", serde_json::to_string_pretty(&insight)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Recommend {
            catalog,
            taxonomy,
            profile,
            algorithm,
            objectives,
            max,
            provider,
            explain,
        } => {
            run_recommend(
                &catalog,
                taxonomy.as_deref(),
                &profile,
                &algorithm,
                &objectives,
                max,
                provider,
                explain,
            )
            .await
        }
        Commands::Market {
            skill,
            location,
            provider,
        } => run_market(&skill, location.as_deref(), provider).await,
    }
}
