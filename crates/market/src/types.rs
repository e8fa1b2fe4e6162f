use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Job-count ceiling for demand normalization (jobs / 100, capped here).
const JOB_COUNT_CEILING: f64 = 100.0;
/// Growth-rate ceiling, percent per year.
const GROWTH_RATE_CEILING: f64 = 15.0;
/// Future-demand multiplier ceiling.
const FUTURE_DEMAND_CEILING: f64 = 2.5;

/// Errors surfaced by market providers.
#[derive(Debug, thiserror::Error)]
pub enum MarketError {
    /// The provider request failed or returned a non-success status.
    #[error("provider request failed: {0}")]
    Provider(#[source] anyhow::Error),
    /// The provider did not answer within the fetch deadline.
    #[error("provider timed out after {0} ms")]
    Timeout(u64),
}

/// Reported shortage of workers holding a skill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortageLevel {
    /// Plentiful supply.
    Low,
    /// Balanced supply; the documented default.
    #[default]
    Medium,
    /// Short supply.
    High,
    /// Acute shortage.
    Critical,
}

impl ShortageLevel {
    /// Supply score implied by the shortage level (inverse relationship).
    pub fn supply_score(&self) -> f64 {
        match self {
            ShortageLevel::Low => 80.0,
            ShortageLevel::Medium => 60.0,
            ShortageLevel::High => 40.0,
            ShortageLevel::Critical => 20.0,
        }
    }

    /// Stable label used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            ShortageLevel::Low => "low",
            ShortageLevel::Medium => "medium",
            ShortageLevel::High => "high",
            ShortageLevel::Critical => "critical",
        }
    }
}

/// Raw signals returned by a market data provider for one skill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSignals {
    /// Open positions mentioning the skill.
    pub job_openings: u64,
    /// Trending score in [0, 1].
    pub trending_score: f64,
    /// Employment growth rate, percent per year.
    pub growth_rate: f64,
    /// Predicted demand multiplier over the forecast horizon.
    pub future_demand: f64,
    /// Reported worker shortage level.
    #[serde(default)]
    pub shortage_level: ShortageLevel,
    /// Average salary by experience band.
    #[serde(default)]
    pub average_salary: BTreeMap<String, f64>,
    /// Cities or districts with concentrated openings.
    #[serde(default)]
    pub geographic_hotspots: Vec<String>,
    /// Keywords trending alongside the skill.
    #[serde(default)]
    pub trending_keywords: Vec<String>,
}

/// Processed market insight for one skill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketInsight {
    /// Skill token the insight describes.
    pub skill: String,
    /// Demand score in [0, 100].
    pub demand_score: f64,
    /// Supply score in [0, 100].
    pub supply_score: f64,
    /// Demand over supply, floored at 0.1.
    pub gap_ratio: f64,
    /// Average salary by experience band.
    pub average_salary: BTreeMap<String, f64>,
    /// Open positions at fetch time.
    pub job_openings: u64,
    /// Employment growth rate, percent per year.
    pub growth_rate: f64,
    /// Cities or districts with concentrated openings.
    pub geographic_hotspots: Vec<String>,
    /// Keywords trending alongside the skill.
    pub trending_keywords: Vec<String>,
    /// Confidence in the underlying data, in [0, 1].
    pub source_confidence: f64,
    /// When the underlying signals were fetched.
    pub fetched_at: DateTime<Utc>,
}

impl MarketInsight {
    /// Fixed insight substituted when a provider fails or times out.
    pub fn fallback(skill: &str) -> Self {
        let mut average_salary = BTreeMap::new();
        average_salary.insert("entry_level".to_string(), 400_000.0);
        average_salary.insert("mid_level".to_string(), 800_000.0);
        average_salary.insert("senior_level".to_string(), 1_500_000.0);
        MarketInsight {
            skill: skill.to_string(),
            demand_score: 60.0,
            supply_score: 70.0,
            gap_ratio: 0.86,
            average_salary,
            job_openings: 500,
            growth_rate: 8.5,
            geographic_hotspots: ["mumbai", "bangalore", "pune", "hyderabad"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            trending_keywords: vec![skill.to_string(), "remote".to_string(), "full_time".to_string()],
            source_confidence: 0.3,
            fetched_at: Utc::now(),
        }
    }

    /// Normalized ranking weight in [0, 1] derived from the demand score.
    pub fn demand_weight(&self) -> f64 {
        (self.demand_score / 100.0).clamp(0.0, 1.0)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Fold raw provider signals into a [`MarketInsight`].
///
/// Demand blends four normalized terms: job count (30%), trending score
/// (20%), growth rate against a 15%/yr ceiling (25%), and the future-demand
/// multiplier against a 2.5x ceiling (25%), capped at 100. Supply comes from
/// the shortage lookup and the gap ratio is demand over supply, floored at
/// 0.1.
pub fn process_signals(skill: &str, signals: &MarketSignals, confidence: f64) -> MarketInsight {
    let job_term = ((signals.job_openings as f64 / 100.0).min(JOB_COUNT_CEILING)
        / JOB_COUNT_CEILING)
        * 30.0;
    let trending_term = signals.trending_score.clamp(0.0, 1.0) * 20.0;
    let growth_term = (signals.growth_rate / GROWTH_RATE_CEILING).clamp(0.0, 1.0) * 25.0;
    let future_term = (signals.future_demand / FUTURE_DEMAND_CEILING).clamp(0.0, 1.0) * 25.0;
    let demand_score = (job_term + trending_term + growth_term + future_term).min(100.0);

    let supply_score = signals.shortage_level.supply_score();
    let gap_ratio = (demand_score / supply_score.max(1.0)).max(0.1);

    MarketInsight {
        skill: skill.to_string(),
        demand_score: round2(demand_score),
        supply_score: round2(supply_score),
        gap_ratio: round2(gap_ratio),
        average_salary: signals.average_salary.clone(),
        job_openings: signals.job_openings,
        growth_rate: signals.growth_rate,
        geographic_hotspots: signals.geographic_hotspots.clone(),
        trending_keywords: signals.trending_keywords.clone(),
        source_confidence: confidence.clamp(0.0, 1.0),
        fetched_at: Utc::now(),
    }
}
