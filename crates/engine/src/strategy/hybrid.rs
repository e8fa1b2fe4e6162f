//! Blend of collaborative and content-based rankings.

use super::multi_objective::best_window;
use super::{Collaborative, ContentBased, RankingContext, RankingStrategy};
use crate::types::PathwayObjective;
use saarthi_catalog::LearningResource;
use std::collections::BTreeSet;

/// Whether a blended selection should be re-ranked against the objectives.
fn wants_rerank(objectives: &[PathwayObjective]) -> bool {
    objectives.len() > 1 || objectives.contains(&PathwayObjective::BalanceAll)
}

/// Half collaborative, half content-based, first occurrence wins on
/// duplicates. Multi-objective requests get a window re-rank over the
/// blended pool.
#[derive(Debug, Default)]
pub struct Hybrid;

impl RankingStrategy for Hybrid {
    fn rank(
        &self,
        ctx: &RankingContext<'_>,
        objectives: &[PathwayObjective],
        max_resources: usize,
    ) -> Vec<LearningResource> {
        let half = max_resources / 2;
        let mut blended = Collaborative.rank(ctx, objectives, half);
        blended.extend(ContentBased.rank(ctx, objectives, half));

        let mut seen = BTreeSet::new();
        blended.retain(|resource| seen.insert(resource.id.clone()));

        if wants_rerank(objectives) {
            return best_window(&blended, objectives, max_resources);
        }
        blended.truncate(max_resources);
        blended
    }
}
