//! Human-readable rationale for a recommendation.

use crate::types::{AlgorithmKind, RecommendationResult};
use saarthi_profile::{normalize_skill, SkillGapAnalysis};
use std::collections::BTreeMap;

/// Plain-language account of why a pathway looks the way it does.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Explanation {
    /// Why this ranking approach was used.
    pub algorithm_rationale: String,
    /// Per-resource note on which skill gaps it addresses.
    pub skill_alignment: Vec<String>,
    /// How market demand shaped the selection.
    pub market_summary: String,
}

fn rationale_for(algorithm: AlgorithmKind) -> &'static str {
    match algorithm {
        AlgorithmKind::Collaborative => {
            "Ranked by resources that learners with similar skill histories rated highly."
        }
        AlgorithmKind::ContentBased => {
            "Ranked by how directly each resource covers your skill gaps at a suitable level."
        }
        AlgorithmKind::Hybrid => {
            "Blended peer endorsements with direct skill-gap coverage."
        }
        AlgorithmKind::MultiObjective => {
            "Selected the run of candidates that best balances your stated objectives."
        }
    }
}

/// Deterministic explanation for a recommendation result.
pub fn explain(
    result: &RecommendationResult,
    gap: &SkillGapAnalysis,
    market_weights: &BTreeMap<String, f64>,
) -> Explanation {
    let skill_alignment = result
        .resources
        .iter()
        .map(|resource| {
            let addressed: Vec<&str> = resource
                .skills_covered
                .iter()
                .filter(|s| gap.missing_skills.contains(&normalize_skill(s)))
                .map(String::as_str)
                .collect();
            if addressed.is_empty() {
                format!("{}: broadens your foundation beyond the identified gaps", resource.id)
            } else {
                format!("{}: addresses {}", resource.id, addressed.join(", "))
            }
        })
        .collect();

    let market_summary = if market_weights.is_empty() {
        "Market demand data was unavailable; ranking used baseline demand.".to_string()
    } else {
        // BTreeMap iteration keeps the hottest-skill choice deterministic.
        let hottest = market_weights
            .iter()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal));
        match hottest {
            Some((skill, weight)) => format!(
                "Demand signals over {} skills informed the ranking; {} shows the strongest demand (weight {:.2}).",
                market_weights.len(),
                skill,
                weight
            ),
            None => "Market demand data was unavailable; ranking used baseline demand.".to_string(),
        }
    };

    Explanation {
        algorithm_rationale: rationale_for(result.algorithm_used).to_string(),
        skill_alignment,
        market_summary,
    }
}
