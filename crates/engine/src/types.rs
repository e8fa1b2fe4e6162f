use crate::error::EngineError;
use saarthi_catalog::LearningResource;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Optimization objective for pathway selection.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PathwayObjective {
    /// Prefer shorter total duration.
    MinimizeTime,
    /// Prefer lower total cost.
    MinimizeCost,
    /// Prefer higher employment impact.
    MaximizeEmployment,
    /// Prefer higher salary impact.
    MaximizeSalary,
    /// Weigh all four terms equally.
    BalanceAll,
}

impl PathwayObjective {
    /// Stable label used in logs and CLI arguments.
    pub fn label(&self) -> &'static str {
        match self {
            PathwayObjective::MinimizeTime => "minimize_time",
            PathwayObjective::MinimizeCost => "minimize_cost",
            PathwayObjective::MaximizeEmployment => "maximize_employment",
            PathwayObjective::MaximizeSalary => "maximize_salary",
            PathwayObjective::BalanceAll => "balance_all",
        }
    }
}

impl FromStr for PathwayObjective {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minimize_time" => Ok(PathwayObjective::MinimizeTime),
            "minimize_cost" => Ok(PathwayObjective::MinimizeCost),
            "maximize_employment" => Ok(PathwayObjective::MaximizeEmployment),
            "maximize_salary" => Ok(PathwayObjective::MaximizeSalary),
            "balance_all" => Ok(PathwayObjective::BalanceAll),
            other => Err(EngineError::UnknownObjective(other.to_string())),
        }
    }
}

impl fmt::Display for PathwayObjective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ranking strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmKind {
    /// Peer-similarity filtering over the behavior log.
    Collaborative,
    /// Skill-match scoring over the catalog.
    ContentBased,
    /// Half collaborative, half content-based, deduplicated.
    Hybrid,
    /// Window search over content-based candidates.
    MultiObjective,
}

impl AlgorithmKind {
    /// Stable label used in logs and CLI arguments.
    pub fn label(&self) -> &'static str {
        match self {
            AlgorithmKind::Collaborative => "collaborative",
            AlgorithmKind::ContentBased => "content_based",
            AlgorithmKind::Hybrid => "hybrid",
            AlgorithmKind::MultiObjective => "multi_objective",
        }
    }
}

impl FromStr for AlgorithmKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "collaborative" => Ok(AlgorithmKind::Collaborative),
            "content_based" => Ok(AlgorithmKind::ContentBased),
            "hybrid" => Ok(AlgorithmKind::Hybrid),
            "multi_objective" => Ok(AlgorithmKind::MultiObjective),
            other => Err(EngineError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Confidence value clamped to [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Confidence(f64);

impl Confidence {
    /// Confidence from a raw value; NaN becomes 0.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            Confidence(0.0)
        } else {
            Confidence(value.clamp(0.0, 1.0))
        }
    }

    /// Zero confidence.
    pub fn zero() -> Self {
        Confidence(0.0)
    }

    /// The inner value, guaranteed in [0, 1].
    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Aggregate outcome estimate for a selected pathway.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EstimatedOutcomes {
    /// Summed duration of the selected resources, hours.
    pub total_duration_hours: u64,
    /// Summed cost of the selected resources.
    pub total_cost: f64,
    /// Mean employment-impact score, in [0, 1].
    pub mean_employment_impact: f64,
    /// Mean salary-impact score, in [0, 1].
    pub mean_salary_impact: f64,
}

/// Fully-populated recommendation output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResult {
    /// Unique id generated per call.
    pub pathway_id: String,
    /// Selected resources; order is the ranking.
    pub resources: Vec<LearningResource>,
    /// Confidence in the selection.
    pub confidence_score: Confidence,
    /// The algorithm the caller requested.
    pub algorithm_used: AlgorithmKind,
    /// Normalized score per requested objective.
    pub objectives_met: BTreeMap<PathwayObjective, f64>,
    /// Factor name to weight or hint value.
    pub personalization_factors: BTreeMap<String, serde_json::Value>,
    /// Aggregate outcome estimate.
    pub estimated_outcomes: EstimatedOutcomes,
    /// Up to three alternative ranked id lists.
    pub alternative_pathways: Vec<Vec<String>>,
    /// Fallbacks and degradations that occurred while producing the result.
    pub notes: Vec<String>,
}
