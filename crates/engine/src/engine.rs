//! The pathway recommendation engine.

use crate::behavior::{BehaviorLog, Feedback, LoggingRetrainHook, UserBehavior};
use crate::confidence::{
    alternative_pathways, confidence_score, estimated_outcomes, objectives_met,
};
use crate::error::{EngineError, MAX_RESOURCES_CAP};
use crate::explain::{explain, Explanation};
use crate::strategy::{ranked_candidates, strategy_for, RankingContext};
use crate::types::{AlgorithmKind, PathwayObjective, RecommendationResult};
use saarthi_catalog::{LearningResource, ResourceCatalog};
use saarthi_market::{MarketIntelligence, RegionalDataProvider};
use saarthi_profile::{
    analyze_skill_gap, personalization_hints, readiness_score, LearnerProfile, SkillTaxonomy,
};
use serde_json::json;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Personalized pathway recommendations over a catalog, live market
/// signals, and accumulated learner behavior.
///
/// `recommend` degrades rather than fails: strategy misses cascade to
/// content-based ranking and then to leading catalog entries, market
/// outages fall back to baseline demand, and every degradation is recorded
/// in the result's notes.
pub struct PathwayEngine {
    catalog: Arc<dyn ResourceCatalog>,
    taxonomy: SkillTaxonomy,
    market: Arc<MarketIntelligence>,
    regional: Arc<dyn RegionalDataProvider>,
    behavior: BehaviorLog,
}

impl PathwayEngine {
    /// Engine with an empty behavior history and the default retrain hook.
    pub fn new(
        catalog: Arc<dyn ResourceCatalog>,
        taxonomy: SkillTaxonomy,
        market: Arc<MarketIntelligence>,
        regional: Arc<dyn RegionalDataProvider>,
    ) -> Self {
        Self {
            catalog,
            taxonomy,
            market,
            regional,
            behavior: BehaviorLog::new(Box::new(LoggingRetrainHook)),
        }
    }

    /// Engine seeded with existing behavior history.
    pub fn with_behavior(
        catalog: Arc<dyn ResourceCatalog>,
        taxonomy: SkillTaxonomy,
        market: Arc<MarketIntelligence>,
        regional: Arc<dyn RegionalDataProvider>,
        history: HashMap<String, UserBehavior>,
    ) -> Self {
        Self {
            catalog,
            taxonomy,
            market,
            regional,
            behavior: BehaviorLog::with_history(history, Box::new(LoggingRetrainHook)),
        }
    }

    /// Recommend a learning pathway for the learner.
    ///
    /// An empty `objectives` slice means balanced optimization. Fails only
    /// on invalid arguments; data-plane problems degrade with a note.
    pub async fn recommend(
        &self,
        profile: &LearnerProfile,
        objectives: &[PathwayObjective],
        algorithm: AlgorithmKind,
        max_resources: usize,
    ) -> Result<RecommendationResult, EngineError> {
        if max_resources == 0 || max_resources > MAX_RESOURCES_CAP {
            return Err(EngineError::MaxResourcesOutOfRange(max_resources));
        }
        let objectives: Vec<PathwayObjective> = if objectives.is_empty() {
            vec![PathwayObjective::BalanceAll]
        } else {
            objectives.to_vec()
        };

        let gap = analyze_skill_gap(profile, &self.taxonomy);
        let location = non_empty(&profile.socio_economic.geographic_location.state);

        let market_weights = self
            .market
            .demand_weights(&gap.missing_skills, location)
            .await;
        debug!(
            learner = %profile.learner_id,
            missing = gap.missing_skills.len(),
            "computed skill gap and market weights"
        );

        let snapshot = self.behavior.snapshot();
        let ctx = RankingContext {
            profile,
            gap: &gap,
            market_weights: &market_weights,
            behavior: &snapshot,
            catalog: self.catalog.as_ref(),
        };

        let mut notes = Vec::new();
        let mut resources = strategy_for(algorithm).rank(&ctx, &objectives, max_resources);

        if resources.is_empty() && algorithm != AlgorithmKind::ContentBased {
            notes.push(format!(
                "{} ranking produced no candidates; fell back to content-based ranking",
                algorithm.label()
            ));
            resources = strategy_for(AlgorithmKind::ContentBased).rank(&ctx, &objectives, max_resources);
        }
        if resources.is_empty() {
            let leading: Vec<LearningResource> = self
                .catalog
                .list_all()
                .iter()
                .take(max_resources)
                .cloned()
                .collect();
            if leading.is_empty() {
                notes.push("no resources available".to_string());
            } else {
                notes.push(
                    "no strategy produced candidates; returning leading catalog entries"
                        .to_string(),
                );
            }
            resources = leading;
        }

        let outlook = match self.regional.outlook(&profile.socio_economic.geographic_location.state).await {
            Ok(outlook) => outlook,
            Err(err) => {
                warn!(error = %err, "regional outlook unavailable");
                notes.push("regional outlook unavailable; readiness used national baseline".to_string());
                None
            }
        };
        let readiness = readiness_score(profile, outlook.as_ref());
        let hints = personalization_hints(profile);

        let mut personalization_factors = BTreeMap::new();
        personalization_factors.insert(
            "recommended_session_minutes".to_string(),
            json!(hints.recommended_session_minutes),
        );
        personalization_factors.insert("pace".to_string(), json!(hints.pace));
        personalization_factors.insert("structure".to_string(), json!(hints.structure));
        personalization_factors.insert("content_style".to_string(), json!(hints.content_style));
        personalization_factors.insert(
            "skill_coverage".to_string(),
            json!(gap.coverage_percent / 100.0),
        );
        personalization_factors.insert("readiness".to_string(), json!(readiness.overall / 100.0));

        let candidates = ranked_candidates(&ctx, max_resources.saturating_mul(2));
        let alternative_pathways = alternative_pathways(&candidates, &resources, resources.len());

        let result = RecommendationResult {
            pathway_id: format!("pathway_{}", Uuid::new_v4()),
            confidence_score: confidence_score(&resources),
            algorithm_used: algorithm,
            objectives_met: objectives_met(&resources, &objectives),
            personalization_factors,
            estimated_outcomes: estimated_outcomes(&resources),
            alternative_pathways,
            notes,
            resources,
        };
        info!(
            pathway = %result.pathway_id,
            algorithm = algorithm.label(),
            selected = result.resources.len(),
            confidence = result.confidence_score.value(),
            "produced recommendation"
        );
        Ok(result)
    }

    /// Explain a recommendation in terms of the learner's gaps and the
    /// demand signals that shaped it. Market lookups hit the cache warmed
    /// by the originating `recommend` call.
    pub async fn explain(
        &self,
        profile: &LearnerProfile,
        result: &RecommendationResult,
    ) -> Explanation {
        let gap = analyze_skill_gap(profile, &self.taxonomy);
        let location = non_empty(&profile.socio_economic.geographic_location.state);
        let market_weights = self
            .market
            .demand_weights(&gap.missing_skills, location)
            .await;
        explain(result, &gap, &market_weights)
    }

    /// Record learner feedback on a resource.
    pub fn submit_feedback(&self, user_id: &str, resource_id: &str, feedback: &Feedback) {
        self.behavior.record(user_id, resource_id, feedback);
    }

    /// Number of learners with recorded behavior.
    pub fn tracked_learners(&self) -> usize {
        self.behavior.user_count()
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saarthi_market::StaticProvider;
    use saarthi_test_utils::{catalog_of, data_science_catalog, python_learner};

    fn engine_over(catalog: Arc<dyn ResourceCatalog>) -> PathwayEngine {
        let provider = Arc::new(StaticProvider);
        PathwayEngine::new(
            catalog,
            SkillTaxonomy::builtin(),
            Arc::new(MarketIntelligence::new(provider.clone())),
            provider,
        )
    }

    #[tokio::test]
    async fn test_recommend_returns_ranked_pathway() {
        let engine = engine_over(Arc::new(data_science_catalog()));
        let result = engine
            .recommend(&python_learner(), &[], AlgorithmKind::ContentBased, 3)
            .await
            .unwrap();
        assert!(!result.resources.is_empty());
        assert!(result.resources.len() <= 3);
        assert_eq!(result.algorithm_used, AlgorithmKind::ContentBased);
        assert!(result.objectives_met.contains_key(&PathwayObjective::BalanceAll));
        assert!(result.pathway_id.starts_with("pathway_"));
    }

    #[tokio::test]
    async fn test_empty_catalog_degrades_with_note() {
        let engine = engine_over(Arc::new(catalog_of(Vec::new())));
        let result = engine
            .recommend(&python_learner(), &[], AlgorithmKind::ContentBased, 3)
            .await
            .unwrap();
        assert!(result.resources.is_empty());
        assert_eq!(result.confidence_score.value(), 0.0);
        assert!(result.notes.iter().any(|n| n.contains("no resources available")));
    }

    #[tokio::test]
    async fn test_collaborative_without_history_cascades_to_content() {
        let engine = engine_over(Arc::new(data_science_catalog()));
        let result = engine
            .recommend(&python_learner(), &[], AlgorithmKind::Collaborative, 3)
            .await
            .unwrap();
        assert!(!result.resources.is_empty());
        assert_eq!(result.algorithm_used, AlgorithmKind::Collaborative);
        assert!(result.notes.iter().any(|n| n.contains("content-based")));
    }

    #[tokio::test]
    async fn test_max_resources_bounds_enforced() {
        let engine = engine_over(Arc::new(data_science_catalog()));
        let zero = engine
            .recommend(&python_learner(), &[], AlgorithmKind::ContentBased, 0)
            .await;
        assert!(matches!(zero, Err(EngineError::MaxResourcesOutOfRange(0))));
        let oversized = engine
            .recommend(&python_learner(), &[], AlgorithmKind::ContentBased, 51)
            .await;
        assert!(matches!(oversized, Err(EngineError::MaxResourcesOutOfRange(51))));
    }

    #[tokio::test]
    async fn test_personalization_factors_present() {
        let engine = engine_over(Arc::new(data_science_catalog()));
        let result = engine
            .recommend(&python_learner(), &[], AlgorithmKind::ContentBased, 3)
            .await
            .unwrap();
        for key in [
            "recommended_session_minutes",
            "pace",
            "structure",
            "content_style",
            "skill_coverage",
            "readiness",
        ] {
            assert!(result.personalization_factors.contains_key(key), "{key}");
        }
        let readiness = result.personalization_factors["readiness"].as_f64().unwrap();
        assert!((0.0..=1.0).contains(&readiness));
    }

    #[tokio::test]
    async fn test_explain_covers_each_selected_resource() {
        let engine = engine_over(Arc::new(data_science_catalog()));
        let profile = python_learner();
        let result = engine
            .recommend(&profile, &[], AlgorithmKind::ContentBased, 3)
            .await
            .unwrap();
        let explanation = engine.explain(&profile, &result).await;
        assert_eq!(explanation.skill_alignment.len(), result.resources.len());
        assert!(!explanation.market_summary.is_empty());
    }

    #[tokio::test]
    async fn test_feedback_is_tracked() {
        let engine = engine_over(Arc::new(data_science_catalog()));
        engine.submit_feedback(
            "learner_001",
            "python_course",
            &Feedback {
                rating: Some(4.5),
                completed: Some(true),
                ..Default::default()
            },
        );
        assert_eq!(engine.tracked_learners(), 1);
    }
}
