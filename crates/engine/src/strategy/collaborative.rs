//! Collaborative filtering over the behavior snapshot.

use super::{is_suitable, RankingContext, RankingStrategy};
use crate::types::PathwayObjective;
use saarthi_catalog::LearningResource;
use saarthi_profile::normalize_skill;
use std::collections::{BTreeMap, BTreeSet};

/// Jaccard similarity threshold for "similar" users.
const SIMILARITY_THRESHOLD: f64 = 0.3;
/// Minimum rating for a resource to count as an endorsement.
const ENDORSEMENT_RATING: f64 = 4.0;
/// At most this many similar users contribute to the aggregate.
const MAX_SIMILAR_USERS: usize = 10;

fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

/// Skill tokens covered by the resources a user completed.
fn completed_skills(
    behavior: &crate::behavior::UserBehavior,
    ctx: &RankingContext<'_>,
) -> BTreeSet<String> {
    let mut skills = BTreeSet::new();
    for resource_id in &behavior.completed_resources {
        if let Some(resource) = ctx.catalog.get_by_id(resource_id) {
            skills.extend(resource.skills_covered.iter().map(|s| normalize_skill(s)));
        }
    }
    skills
}

/// User ids whose completed-resource skill coverage is Jaccard-similar to
/// the learner's skills, in id order for determinism.
fn similar_users(ctx: &RankingContext<'_>, learner_skills: &BTreeSet<String>) -> Vec<String> {
    let mut user_ids: Vec<&String> = ctx.behavior.keys().collect();
    user_ids.sort();

    user_ids
        .into_iter()
        .filter(|id| {
            let skills = completed_skills(&ctx.behavior[*id], ctx);
            jaccard(learner_skills, &skills) > SIMILARITY_THRESHOLD
        })
        .take(MAX_SIMILAR_USERS)
        .cloned()
        .collect()
}

/// Ranks resources that similar users rated highly, filtered to those the
/// learner is prepared for.
#[derive(Debug, Default)]
pub struct Collaborative;

impl RankingStrategy for Collaborative {
    fn rank(
        &self,
        ctx: &RankingContext<'_>,
        _objectives: &[PathwayObjective],
        max_resources: usize,
    ) -> Vec<LearningResource> {
        let learner_skills = ctx.learner_skills();
        let similar = similar_users(ctx, &learner_skills);

        let mut endorsements: BTreeMap<String, f64> = BTreeMap::new();
        for user_id in &similar {
            for (resource_id, rating) in &ctx.behavior[user_id].resource_ratings {
                if *rating >= ENDORSEMENT_RATING {
                    *endorsements.entry(resource_id.clone()).or_insert(0.0) += rating;
                }
            }
        }

        // Stable sort over id-ordered entries: equal sums rank by id.
        let mut ranked: Vec<(String, f64)> = endorsements.into_iter().collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        ranked
            .into_iter()
            .filter_map(|(resource_id, _)| ctx.catalog.get_by_id(&resource_id).cloned())
            .filter(|resource| is_suitable(resource, &learner_skills))
            .take(max_resources)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::UserBehavior;
    use saarthi_profile::{analyze_skill_gap, SkillTaxonomy};
    use saarthi_test_utils::{data_science_catalog, python_learner};
    use std::collections::HashMap;

    fn behavior_with(user_id: &str, completed: &[&str], ratings: &[(&str, f64)]) -> UserBehavior {
        UserBehavior {
            user_id: user_id.to_string(),
            completed_resources: completed.iter().map(|s| s.to_string()).collect(),
            resource_ratings: ratings
                .iter()
                .map(|(id, r)| (id.to_string(), *r))
                .collect(),
            ..Default::default()
        }
    }

    fn rank_with(behavior: HashMap<String, UserBehavior>) -> Vec<String> {
        let profile = python_learner();
        let taxonomy = SkillTaxonomy::builtin();
        let gap = analyze_skill_gap(&profile, &taxonomy);
        let catalog = data_science_catalog();
        let weights = BTreeMap::new();
        let ctx = RankingContext {
            profile: &profile,
            gap: &gap,
            market_weights: &weights,
            behavior: &behavior,
            catalog: &catalog,
        };
        Collaborative
            .rank(&ctx, &[], 10)
            .into_iter()
            .map(|r| r.id)
            .collect()
    }

    #[test]
    fn test_jaccard_basics() {
        let a: BTreeSet<String> = ["python".to_string()].into_iter().collect();
        let b: BTreeSet<String> = ["python".to_string(), "sql".to_string()]
            .into_iter()
            .collect();
        assert!((jaccard(&a, &b) - 0.5).abs() < 1e-9);
        assert_eq!(jaccard(&BTreeSet::new(), &BTreeSet::new()), 0.0);
    }

    #[test]
    fn test_similar_user_endorsements_rank_resources() {
        // python_course covers exactly the learner's skill, similarity 1.0.
        let behavior = HashMap::from([(
            "peer_1".to_string(),
            behavior_with(
                "peer_1",
                &["python_course"],
                &[("ml_course", 4.5), ("stats_course", 4.2), ("viz_course", 3.0)],
            ),
        )]);

        let ranked = rank_with(behavior);
        assert_eq!(ranked, vec!["ml_course", "stats_course"]);
    }

    #[test]
    fn test_dissimilar_users_are_ignored() {
        // viz_course covers data_visualization only; Jaccard with {python}
        // is 0.
        let behavior = HashMap::from([(
            "stranger".to_string(),
            behavior_with("stranger", &["viz_course"], &[("ml_course", 5.0)]),
        )]);

        assert!(rank_with(behavior).is_empty());
    }

    #[test]
    fn test_low_ratings_do_not_endorse() {
        let behavior = HashMap::from([(
            "peer_1".to_string(),
            behavior_with("peer_1", &["python_course"], &[("ml_course", 3.9)]),
        )]);

        assert!(rank_with(behavior).is_empty());
    }

    #[test]
    fn test_summed_ratings_order_and_id_tiebreak() {
        let behavior = HashMap::from([
            (
                "peer_1".to_string(),
                behavior_with(
                    "peer_1",
                    &["python_course"],
                    &[("stats_course", 4.0), ("sql_course", 4.0)],
                ),
            ),
            (
                "peer_2".to_string(),
                behavior_with("peer_2", &["python_course"], &[("stats_course", 4.5)]),
            ),
        ]);

        let ranked = rank_with(behavior);
        // stats_course sums 8.5; sql_course 4.0.
        assert_eq!(ranked, vec!["stats_course", "sql_course"]);
    }

    #[test]
    fn test_empty_history_yields_empty() {
        assert!(rank_with(HashMap::new()).is_empty());
    }
}
