//! Content-based ranking: skill-gap coverage plus fit and demand signals.

use super::{estimate_target_nsqf, RankingContext, RankingStrategy};
use crate::types::PathwayObjective;
use saarthi_catalog::LearningResource;
use saarthi_profile::{normalize_skill, LearningPace};
use std::collections::BTreeSet;

/// Points per covered gap skill.
const GAP_COVERAGE_POINTS: f64 = 10.0;
/// Maximum NSQF-proximity points.
const NSQF_POINTS: f64 = 10.0;
/// Success-rate multiplier.
const SUCCESS_RATE_POINTS: f64 = 5.0;
/// Market-demand multiplier.
const MARKET_POINTS: f64 = 10.0;
/// Rating contribution when a resource has no ratings.
const DEFAULT_RATING_POINTS: f64 = 2.0;
/// Market weight assumed for skills with no snapshot entry.
const DEFAULT_MARKET_WEIGHT: f64 = 0.5;

/// Pace-compatibility points for a duration bucket.
fn pace_points(pace: LearningPace, duration_hours: u32) -> f64 {
    let (slow, medium, fast) = if duration_hours <= 50 {
        (6.0, 8.0, 10.0)
    } else if duration_hours >= 150 {
        (10.0, 8.0, 6.0)
    } else {
        (8.0, 10.0, 6.0)
    };
    match pace {
        LearningPace::Slow => slow,
        LearningPace::Medium => medium,
        LearningPace::Fast => fast,
        LearningPace::Unknown => 8.0,
    }
}

/// Total content score for one resource.
pub(crate) fn score_resource(
    resource: &LearningResource,
    ctx: &RankingContext<'_>,
    missing: &BTreeSet<String>,
    target_nsqf: u8,
) -> f64 {
    let covered = resource
        .skills_covered
        .iter()
        .filter(|s| missing.contains(&normalize_skill(s)))
        .count();
    let mut score = covered as f64 * GAP_COVERAGE_POINTS;

    let nsqf_diff = (resource.nsqf_level as i32 - target_nsqf as i32).abs() as f64;
    score += (NSQF_POINTS - 2.0 * nsqf_diff).max(0.0);

    score += pace_points(ctx.profile.learning_pace, resource.duration_hours);
    score += resource.success_rate * SUCCESS_RATE_POINTS;
    score += resource.mean_rating(DEFAULT_RATING_POINTS);

    let max_weight = resource
        .skills_covered
        .iter()
        .map(|s| {
            ctx.market_weights
                .get(&normalize_skill(s))
                .copied()
                .unwrap_or(DEFAULT_MARKET_WEIGHT)
        })
        .fold(f64::NEG_INFINITY, f64::max);
    let max_weight = if max_weight.is_finite() {
        max_weight
    } else {
        DEFAULT_MARKET_WEIGHT
    };
    score += max_weight * MARKET_POINTS;

    score
}

/// Content-based candidates in rank order, ties preserving catalog order.
pub(crate) fn ranked_candidates(
    ctx: &RankingContext<'_>,
    max_resources: usize,
) -> Vec<LearningResource> {
    let missing = ctx.missing_skills();
    let target_nsqf = estimate_target_nsqf(ctx.profile);

    let mut scored: Vec<(usize, f64)> = ctx
        .catalog
        .list_all()
        .iter()
        .enumerate()
        .map(|(idx, resource)| (idx, score_resource(resource, ctx, &missing, target_nsqf)))
        .collect();
    // Stable sort: equal scores keep catalog insertion order.
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    scored
        .into_iter()
        .take(max_resources)
        .map(|(idx, _)| ctx.catalog.list_all()[idx].clone())
        .collect()
}

/// Scores every catalog resource against the learner's skill gaps, NSQF
/// target, pace, quality, and market demand.
#[derive(Debug, Default)]
pub struct ContentBased;

impl RankingStrategy for ContentBased {
    fn rank(
        &self,
        ctx: &RankingContext<'_>,
        _objectives: &[PathwayObjective],
        max_resources: usize,
    ) -> Vec<LearningResource> {
        ranked_candidates(ctx, max_resources)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saarthi_profile::{analyze_skill_gap, SkillTaxonomy};
    use saarthi_test_utils::{catalog_of, data_science_catalog, python_learner, ResourceBuilder};
    use std::collections::{BTreeMap, HashMap};

    fn context<'a>(
        profile: &'a saarthi_profile::LearnerProfile,
        gap: &'a saarthi_profile::SkillGapAnalysis,
        catalog: &'a saarthi_catalog::InMemoryCatalog,
        weights: &'a BTreeMap<String, f64>,
        behavior: &'a HashMap<String, crate::behavior::UserBehavior>,
    ) -> RankingContext<'a> {
        RankingContext {
            profile,
            gap,
            market_weights: weights,
            behavior,
            catalog,
        }
    }

    #[test]
    fn test_gap_coverage_dominates() {
        let profile = python_learner();
        let taxonomy = SkillTaxonomy::builtin();
        let gap = analyze_skill_gap(&profile, &taxonomy);
        let catalog = data_science_catalog();
        let weights = BTreeMap::new();
        let behavior = HashMap::new();
        let ctx = context(&profile, &gap, &catalog, &weights, &behavior);

        let ranked = ContentBased.rank(&ctx, &[], 5);
        // ml_course covers two gaps; nothing else covers more than one.
        assert_eq!(ranked[0].id, "ml_course");
    }

    #[test]
    fn test_ranking_is_deterministic() {
        let profile = python_learner();
        let taxonomy = SkillTaxonomy::builtin();
        let gap = analyze_skill_gap(&profile, &taxonomy);
        let catalog = data_science_catalog();
        let weights = BTreeMap::from([("machine_learning".to_string(), 0.9)]);
        let behavior = HashMap::new();
        let ctx = context(&profile, &gap, &catalog, &weights, &behavior);

        let first: Vec<String> = ContentBased
            .rank(&ctx, &[], 10)
            .into_iter()
            .map(|r| r.id)
            .collect();
        let second: Vec<String> = ContentBased
            .rank(&ctx, &[], 10)
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_ties_preserve_catalog_order() {
        let profile = python_learner();
        let taxonomy = SkillTaxonomy::builtin();
        let gap = analyze_skill_gap(&profile, &taxonomy);
        // Two byte-identical resources apart from id score identically.
        let catalog = catalog_of(vec![
            ResourceBuilder::new("first").skills(&["sql"]).build(),
            ResourceBuilder::new("second").skills(&["sql"]).build(),
        ]);
        let weights = BTreeMap::new();
        let behavior = HashMap::new();
        let ctx = context(&profile, &gap, &catalog, &weights, &behavior);

        let ranked = ContentBased.rank(&ctx, &[], 2);
        assert_eq!(ranked[0].id, "first");
        assert_eq!(ranked[1].id, "second");
    }

    #[test]
    fn test_market_weight_breaks_equal_coverage() {
        let profile = python_learner();
        let taxonomy = SkillTaxonomy::builtin();
        let gap = analyze_skill_gap(&profile, &taxonomy);
        let catalog = catalog_of(vec![
            ResourceBuilder::new("cold").skills(&["sql"]).build(),
            ResourceBuilder::new("hot").skills(&["statistics"]).build(),
        ]);
        let weights = BTreeMap::from([("statistics".to_string(), 0.95)]);
        let behavior = HashMap::new();
        let ctx = context(&profile, &gap, &catalog, &weights, &behavior);

        let ranked = ContentBased.rank(&ctx, &[], 2);
        assert_eq!(ranked[0].id, "hot");
    }

    #[test]
    fn test_pace_points_buckets() {
        assert_eq!(pace_points(LearningPace::Fast, 40), 10.0);
        assert_eq!(pace_points(LearningPace::Slow, 200), 10.0);
        assert_eq!(pace_points(LearningPace::Medium, 100), 10.0);
        assert_eq!(pace_points(LearningPace::Unknown, 100), 8.0);
    }

    #[test]
    fn test_empty_catalog_yields_empty() {
        let profile = python_learner();
        let taxonomy = SkillTaxonomy::builtin();
        let gap = analyze_skill_gap(&profile, &taxonomy);
        let catalog = catalog_of(vec![]);
        let weights = BTreeMap::new();
        let behavior = HashMap::new();
        let ctx = context(&profile, &gap, &catalog, &weights, &behavior);

        assert!(ContentBased.rank(&ctx, &[], 10).is_empty());
    }
}
