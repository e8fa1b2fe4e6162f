//! Window search over content-ranked candidates for objective trade-offs.

use super::content_based::ranked_candidates;
use super::{RankingContext, RankingStrategy};
use crate::types::PathwayObjective;
use saarthi_catalog::LearningResource;

/// Candidate pool is this multiple of the requested pathway length.
const CANDIDATE_FACTOR: usize = 2;

fn window_score(window: &[LearningResource], objectives: &[PathwayObjective]) -> f64 {
    let total_hours: u64 = window.iter().map(|r| r.duration_hours as u64).sum();
    let total_cost: f64 = window.iter().map(|r| r.cost).sum();
    let employment: f64 = window.iter().map(|r| r.employment_impact).sum();
    let salary: f64 = window.iter().map(|r| r.salary_impact).sum();

    let time_term = 1.0 / (1.0 + total_hours as f64 / 1000.0);
    let cost_term = 1.0 / (1.0 + total_cost / 1000.0);

    objectives
        .iter()
        .map(|objective| match objective {
            PathwayObjective::MinimizeTime => time_term,
            PathwayObjective::MinimizeCost => cost_term,
            PathwayObjective::MaximizeEmployment => employment,
            PathwayObjective::MaximizeSalary => salary,
            PathwayObjective::BalanceAll => time_term + cost_term + employment + salary,
        })
        .sum()
}

/// Highest-scoring contiguous window of at most `max_len` candidates.
/// Earlier windows win ties; an empty pool yields an empty selection.
pub(crate) fn best_window(
    candidates: &[LearningResource],
    objectives: &[PathwayObjective],
    max_len: usize,
) -> Vec<LearningResource> {
    let mut best: Option<(f64, &[LearningResource])> = None;
    for start in 0..candidates.len() {
        let limit = (start + max_len).min(candidates.len());
        for end in (start + 1)..=limit {
            let window = &candidates[start..end];
            let score = window_score(window, objectives);
            // Strictly greater: the first best window stands.
            if best.map_or(true, |(s, _)| score > s) {
                best = Some((score, window));
            }
        }
    }
    best.map(|(_, w)| w.to_vec()).unwrap_or_default()
}

/// Picks the contiguous run of content-ranked candidates that best serves
/// the requested objectives.
#[derive(Debug, Default)]
pub struct MultiObjective;

impl RankingStrategy for MultiObjective {
    fn rank(
        &self,
        ctx: &RankingContext<'_>,
        objectives: &[PathwayObjective],
        max_resources: usize,
    ) -> Vec<LearningResource> {
        let candidates = ranked_candidates(ctx, max_resources.saturating_mul(CANDIDATE_FACTOR));
        best_window(&candidates, objectives, max_resources)
    }
}
