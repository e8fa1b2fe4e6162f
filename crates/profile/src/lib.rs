//! Learner profile model, skill taxonomy, gap analysis, and readiness
//! scoring.
//!
//! This crate provides:
//! - The [`LearnerProfile`] snapshot type with socio-economic, psychometric,
//!   and accessibility sub-profiles.
//! - The read-only [`SkillTaxonomy`] (category and career-target tables).
//! - The skill-gap analyzer ([`analyze_skill_gap`]).
//! - The learning-readiness scorer ([`readiness_score`]).
//!
//! Profile-shaped input never fails: unrecognized enum tiers deserialize to
//! an `Unknown` variant and score at documented defaults.

#![deny(unsafe_code)]
#![warn(missing_docs)]

/// Skill-gap analysis against the taxonomy.
pub mod gap;
/// Learning-readiness scoring.
pub mod readiness;
/// Skill taxonomy tables and token normalization.
pub mod taxonomy;
/// Learner profile value types.
pub mod types;

pub use gap::{analyze_skill_gap, SkillGapAnalysis};
pub use readiness::{
    personalization_hints, readiness_score, ImprovementArea, PersonalizationHints, ReadinessLevel,
    ReadinessScore, RegionalOutlook,
};
pub use taxonomy::{normalize_skill, SkillTaxonomy, TaxonomyError, GENERIC_TARGET_SKILLS};
pub use types::{
    AccessibilityProfile, AreaType, Connectivity, DigitalAccess, GeoLocation, Impairment,
    LearnerProfile, LearningPace, LearningStyle, MotorImpairment, PsychometricProfile,
    RiskTolerance, SocioEconomicProfile, SupportTier, TechComfort,
};
