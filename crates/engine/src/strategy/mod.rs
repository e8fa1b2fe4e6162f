//! Interchangeable ranking strategies over a shared context.

mod collaborative;
mod content_based;
mod hybrid;
mod multi_objective;

pub use collaborative::Collaborative;
pub use content_based::ContentBased;
pub(crate) use content_based::ranked_candidates;
pub use hybrid::Hybrid;
pub use multi_objective::MultiObjective;

use crate::behavior::UserBehavior;
use crate::types::{AlgorithmKind, PathwayObjective};
use saarthi_catalog::{LearningResource, ResourceCatalog};
use saarthi_profile::{normalize_skill, LearnerProfile, LearningPace, SkillGapAnalysis};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Shared inputs for one ranking pass. All references; a strategy owns
/// nothing and mutates nothing.
pub struct RankingContext<'a> {
    /// The learner being served.
    pub profile: &'a LearnerProfile,
    /// Precomputed skill-gap analysis for the learner.
    pub gap: &'a SkillGapAnalysis,
    /// Market demand weight per skill token, each in [0, 1].
    pub market_weights: &'a BTreeMap<String, f64>,
    /// Behavior snapshot for collaborative filtering.
    pub behavior: &'a HashMap<String, UserBehavior>,
    /// The resource catalog.
    pub catalog: &'a dyn ResourceCatalog,
}

impl RankingContext<'_> {
    /// The learner's skills as normalized tokens.
    pub fn learner_skills(&self) -> BTreeSet<String> {
        self.profile
            .current_skills
            .iter()
            .map(|s| normalize_skill(s))
            .collect()
    }

    /// The uncovered target skills as a set.
    pub fn missing_skills(&self) -> BTreeSet<String> {
        self.gap.missing_skills.iter().cloned().collect()
    }
}

/// Ranking contract shared by all strategies.
pub trait RankingStrategy: Send + Sync {
    /// Rank catalog resources for the learner; at most `max_resources`
    /// entries, order meaningful. An empty result is not an error; the
    /// engine cascades to a fallback strategy.
    fn rank(
        &self,
        ctx: &RankingContext<'_>,
        objectives: &[PathwayObjective],
        max_resources: usize,
    ) -> Vec<LearningResource>;
}

/// Strategy instance for a selector value.
pub fn strategy_for(kind: AlgorithmKind) -> Box<dyn RankingStrategy> {
    match kind {
        AlgorithmKind::Collaborative => Box::new(Collaborative),
        AlgorithmKind::ContentBased => Box::new(ContentBased),
        AlgorithmKind::Hybrid => Box::new(Hybrid),
        AlgorithmKind::MultiObjective => Box::new(MultiObjective),
    }
}

/// Heuristic target NSQF level from the profile.
///
/// Base level 4, bumped for broader existing skills (3 and 6 token
/// thresholds) and a fast learning pace; clamped to the 1..=10 framework
/// range.
pub fn estimate_target_nsqf(profile: &LearnerProfile) -> u8 {
    let mut level: u8 = 4;
    let skills = profile.current_skills.len();
    if skills >= 3 {
        level += 1;
    }
    if skills >= 6 {
        level += 1;
    }
    if profile.learning_pace == LearningPace::Fast {
        level += 1;
    }
    level.clamp(1, 10)
}

/// Whether a resource's prerequisites are satisfied by the learner's
/// skills (an empty prerequisite list is always suitable).
pub fn is_suitable(resource: &LearningResource, learner_skills: &BTreeSet<String>) -> bool {
    resource.prerequisites.is_empty()
        || resource
            .prerequisites
            .iter()
            .all(|p| learner_skills.contains(&normalize_skill(p)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use saarthi_test_utils::{profile_with, ResourceBuilder};

    #[test]
    fn test_target_nsqf_scales_with_breadth_and_pace() {
        let novice = profile_with("n", &[], "data_scientist");
        assert_eq!(estimate_target_nsqf(&novice), 4);

        let broad = profile_with("b", &["a", "b", "c"], "data_scientist");
        assert_eq!(estimate_target_nsqf(&broad), 5);

        let mut fast = profile_with("f", &["a", "b", "c", "d", "e", "f"], "data_scientist");
        fast.learning_pace = LearningPace::Fast;
        assert_eq!(estimate_target_nsqf(&fast), 7);
    }

    #[test]
    fn test_suitability_checks_prerequisites() {
        let skills: BTreeSet<String> = ["python".to_string()].into_iter().collect();

        let open = ResourceBuilder::new("open").build();
        assert!(is_suitable(&open, &skills));

        let met = ResourceBuilder::new("met").prerequisites(&["python"]).build();
        assert!(is_suitable(&met, &skills));

        let unmet = ResourceBuilder::new("unmet")
            .prerequisites(&["python", "statistics"])
            .build();
        assert!(!is_suitable(&unmet, &skills));
    }
}
