//! Pathway-level confidence, objective attainment, and outcome estimates.

use crate::types::{Confidence, EstimatedOutcomes, PathwayObjective};
use saarthi_catalog::LearningResource;
use saarthi_profile::normalize_skill;
use std::collections::{BTreeMap, BTreeSet};

// Confidence component weights.
const COVERAGE_WEIGHT: f64 = 0.3;
const SUCCESS_WEIGHT: f64 = 0.4;
const RATING_WEIGHT: f64 = 0.3;
/// Distinct covered skills at which coverage saturates.
const COVERAGE_SATURATION: f64 = 10.0;
/// Rating assumed for an unrated resource.
const UNRATED_DEFAULT: f64 = 3.5;
const MAX_RATING: f64 = 5.0;

/// Confidence in a selected pathway from skill breadth, historical
/// success, and learner ratings. An empty pathway has zero confidence.
pub fn confidence_score(resources: &[LearningResource]) -> Confidence {
    if resources.is_empty() {
        return Confidence::zero();
    }
    let count = resources.len() as f64;

    let distinct_skills: BTreeSet<String> = resources
        .iter()
        .flat_map(|r| r.skills_covered.iter().map(|s| normalize_skill(s)))
        .collect();
    let coverage = (distinct_skills.len() as f64 / COVERAGE_SATURATION).min(1.0);

    let mean_success = resources.iter().map(|r| r.success_rate).sum::<f64>() / count;
    let mean_rating = resources
        .iter()
        .map(|r| r.mean_rating(UNRATED_DEFAULT))
        .sum::<f64>()
        / count;

    Confidence::new(
        COVERAGE_WEIGHT * coverage
            + SUCCESS_WEIGHT * mean_success
            + RATING_WEIGHT * mean_rating / MAX_RATING,
    )
}

/// Aggregate totals and mean impacts over a pathway.
pub fn estimated_outcomes(resources: &[LearningResource]) -> EstimatedOutcomes {
    let count = resources.len() as f64;
    let total_duration_hours: u64 = resources.iter().map(|r| r.duration_hours as u64).sum();
    let total_cost: f64 = resources.iter().map(|r| r.cost).sum();
    let (mean_employment_impact, mean_salary_impact) = if resources.is_empty() {
        (0.0, 0.0)
    } else {
        (
            resources.iter().map(|r| r.employment_impact).sum::<f64>() / count,
            resources.iter().map(|r| r.salary_impact).sum::<f64>() / count,
        )
    };
    EstimatedOutcomes {
        total_duration_hours,
        total_cost,
        mean_employment_impact,
        mean_salary_impact,
    }
}

/// Attainment score per requested objective, each in [0, 1].
///
/// Minimization objectives decay with the pathway's totals; maximization
/// objectives report mean impact; balance reports the mean of all four.
pub fn objectives_met(
    resources: &[LearningResource],
    objectives: &[PathwayObjective],
) -> BTreeMap<PathwayObjective, f64> {
    let outcomes = estimated_outcomes(resources);
    let time_term = 1.0 / (1.0 + outcomes.total_duration_hours as f64 / 1000.0);
    let cost_term = 1.0 / (1.0 + outcomes.total_cost / 1000.0);

    objectives
        .iter()
        .map(|objective| {
            let score = match objective {
                PathwayObjective::MinimizeTime => time_term,
                PathwayObjective::MinimizeCost => cost_term,
                PathwayObjective::MaximizeEmployment => outcomes.mean_employment_impact,
                PathwayObjective::MaximizeSalary => outcomes.mean_salary_impact,
                PathwayObjective::BalanceAll => {
                    (time_term
                        + cost_term
                        + outcomes.mean_employment_impact
                        + outcomes.mean_salary_impact)
                        / 4.0
                }
            };
            (*objective, score)
        })
        .collect()
}

/// Up to three alternative pathways as id lists, rotated off the candidate
/// pool. The primary selection's exact id sequence is never repeated.
pub fn alternative_pathways(
    candidates: &[LearningResource],
    primary: &[LearningResource],
    selection_len: usize,
) -> Vec<Vec<String>> {
    let primary_ids: Vec<&str> = primary.iter().map(|r| r.id.as_str()).collect();
    let len = selection_len.min(candidates.len());
    if len == 0 {
        return Vec::new();
    }

    let mut alternatives = Vec::new();
    for offset in 0..candidates.len() {
        if alternatives.len() == 3 {
            break;
        }
        let ids: Vec<String> = (0..len)
            .map(|i| candidates[(offset + i) % candidates.len()].id.clone())
            .collect();
        if ids.iter().map(String::as_str).eq(primary_ids.iter().copied()) {
            continue;
        }
        if alternatives.contains(&ids) {
            continue;
        }
        alternatives.push(ids);
    }
    alternatives
}
