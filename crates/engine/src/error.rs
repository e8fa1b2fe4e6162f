use thiserror::Error;

/// Default number of resources in a pathway.
pub const DEFAULT_MAX_RESOURCES: usize = 10;
/// Hard cap on requested resources; bounds the multi-objective window
/// search.
pub const MAX_RESOURCES_CAP: usize = 50;

/// Errors surfaced to callers of the pathway engine.
///
/// Only malformed request parameters reject; profile-shaped degeneracy and
/// collaborator failures degrade to documented defaults with a note in the
/// result instead.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The caller supplied an algorithm name outside the closed set.
    #[error("unknown algorithm {0:?}")]
    UnknownAlgorithm(String),
    /// The caller supplied an objective name outside the closed set.
    #[error("unknown objective {0:?}")]
    UnknownObjective(String),
    /// `max_resources` outside `1..=MAX_RESOURCES_CAP`.
    #[error("max_resources must be between 1 and 50, got {0}")]
    MaxResourcesOutOfRange(usize),
}
