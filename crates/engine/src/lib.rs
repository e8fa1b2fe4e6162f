//! Pathway recommendation engine for saarthi.
//!
//! This crate provides:
//! - [`PathwayEngine`], the async orchestrator that turns a learner
//!   profile, a resource catalog, market demand, and behavior history into
//!   a ranked [`RecommendationResult`].
//! - Four interchangeable [`strategy::RankingStrategy`] implementations:
//!   collaborative filtering, content-based scoring, a hybrid blend, and
//!   multi-objective window search.
//! - A copy-on-write [`behavior::BehaviorLog`] with a periodic retrain
//!   hook, confidence and outcome aggregation, and deterministic
//!   explanations.

#![deny(unsafe_code)]
#![warn(missing_docs)]

/// Behavior history and feedback recording.
pub mod behavior;
/// Confidence, objective attainment, and outcome aggregation.
pub mod confidence;
mod engine;
/// Engine errors and argument bounds.
pub mod error;
/// Recommendation explanations.
pub mod explain;
/// Ranking strategies and their shared context.
pub mod strategy;
/// Engine value types.
pub mod types;

pub use behavior::{BehaviorLog, Feedback, LoggingRetrainHook, RetrainHook, UserBehavior};
pub use confidence::{confidence_score, estimated_outcomes, objectives_met};
pub use engine::PathwayEngine;
pub use error::{EngineError, DEFAULT_MAX_RESOURCES, MAX_RESOURCES_CAP};
pub use explain::Explanation;
pub use types::{
    AlgorithmKind, Confidence, EstimatedOutcomes, PathwayObjective, RecommendationResult,
};
