use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// Errors raised while loading or validating catalog data.
///
/// Any of these at startup is fatal: the engine refuses to start on a
/// missing or invalid catalog rather than serving recommendations from
/// corrupt reference data.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file could not be read.
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    /// Catalog file is not valid JSON for the expected schema.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    /// A resource entry violates a model invariant.
    #[error("invalid resource '{id}': {reason}")]
    Invalid {
        /// Offending resource id (empty if the id itself is missing).
        id: String,
        /// Which invariant was violated.
        reason: String,
    },
    /// Two entries share the same id.
    #[error("duplicate resource id '{0}'")]
    DuplicateId(String),
}

/// Kind of learning resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    /// Structured course with a syllabus.
    Course,
    /// Industry or government certification.
    Certification,
    /// Hands-on project, typically mentor-reviewed.
    Project,
    /// Self-paced book or reading track.
    Book,
    /// One-on-one mentorship engagement.
    Mentorship,
}

impl ResourceType {
    /// Stable label used in logs and explanations.
    pub fn label(&self) -> &'static str {
        match self {
            ResourceType::Course => "course",
            ResourceType::Certification => "certification",
            ResourceType::Project => "project",
            ResourceType::Book => "book",
            ResourceType::Mentorship => "mentorship",
        }
    }
}

/// Difficulty tier of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// No prior exposure assumed.
    Beginner,
    /// Some working knowledge assumed.
    Intermediate,
    /// Substantial prior experience assumed.
    Advanced,
}

impl Difficulty {
    /// Stable label used in logs and explanations.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

/// An immutable catalog entry.
///
/// Skill tokens in `skills_covered` and `prerequisites` are normalized
/// (lowercase, underscore-joined) by the catalog author; the engine treats
/// them as opaque set members.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningResource {
    /// Unique id within the catalog.
    pub id: String,
    /// Human-readable title.
    #[serde(default)]
    pub title: String,
    /// Resource kind.
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    /// Issuing provider or platform.
    #[serde(default)]
    pub provider: String,
    /// National skills qualification framework level (1-10).
    pub nsqf_level: u8,
    /// Difficulty tier.
    pub difficulty: Difficulty,
    /// Nominal completion time in hours. Must be positive.
    pub duration_hours: u32,
    /// Cost in the catalog currency. Must be non-negative.
    pub cost: f64,
    /// Normalized skill tokens this resource teaches.
    #[serde(default)]
    pub skills_covered: BTreeSet<String>,
    /// Normalized skill tokens required before starting.
    #[serde(default)]
    pub prerequisites: BTreeSet<String>,
    /// Historical completion success rate in [0, 1].
    pub success_rate: f64,
    /// Individual user ratings, each in [0, 5]. May be empty.
    #[serde(default)]
    pub user_ratings: Vec<f64>,
    /// Independent employment impact score in [0, 1].
    pub employment_impact: f64,
    /// Independent salary impact score in [0, 1].
    pub salary_impact: f64,
    /// Free-text labels.
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl LearningResource {
    /// Mean of `user_ratings`, or `default` when no ratings exist.
    pub fn mean_rating(&self, default: f64) -> f64 {
        if self.user_ratings.is_empty() {
            default
        } else {
            self.user_ratings.iter().sum::<f64>() / self.user_ratings.len() as f64
        }
    }

    /// Check all model invariants, returning the first violation.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let invalid = |reason: &str| CatalogError::Invalid {
            id: self.id.clone(),
            reason: reason.to_string(),
        };

        if self.id.trim().is_empty() {
            return Err(CatalogError::Invalid {
                id: String::new(),
                reason: "id must be non-empty".to_string(),
            });
        }
        if !(1..=10).contains(&self.nsqf_level) {
            return Err(invalid("nsqf_level must be in 1..=10"));
        }
        if self.duration_hours == 0 {
            return Err(invalid("duration_hours must be positive"));
        }
        if self.cost < 0.0 || !self.cost.is_finite() {
            return Err(invalid("cost must be a non-negative finite number"));
        }
        if !(0.0..=1.0).contains(&self.success_rate) {
            return Err(invalid("success_rate must be in [0, 1]"));
        }
        if self.user_ratings.iter().any(|r| !(0.0..=5.0).contains(r)) {
            return Err(invalid("user_ratings entries must be in [0, 5]"));
        }
        if !(0.0..=1.0).contains(&self.employment_impact) {
            return Err(invalid("employment_impact must be in [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.salary_impact) {
            return Err(invalid("salary_impact must be in [0, 1]"));
        }
        Ok(())
    }
}
