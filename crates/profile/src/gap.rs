use crate::taxonomy::{normalize_skill, SkillTaxonomy, GENERIC_TARGET_SKILLS};
use crate::types::LearnerProfile;
use serde::{Deserialize, Serialize};

/// Result of comparing a learner's current skills against the target set
/// implied by their career aspiration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGapAnalysis {
    /// Share of target skills already covered, as a percentage rounded to
    /// two decimals.
    pub coverage_percent: f64,
    /// Target skills in taxonomy-authoring order.
    pub target_skills: Vec<String>,
    /// Target skills the learner does not yet have, preserving target order.
    pub missing_skills: Vec<String>,
    /// False when the aspiration had no taxonomy entry and the generic
    /// fallback set was used.
    pub aspiration_resolved: bool,
}

/// Analyze the gap between `current_skills` and the aspiration's target set.
///
/// Deterministic for identical inputs and never fails: an unknown
/// aspiration falls back to a generic low-confidence target set, and empty
/// inputs yield 0% coverage with the full target list missing.
pub fn analyze_skill_gap(profile: &LearnerProfile, taxonomy: &SkillTaxonomy) -> SkillGapAnalysis {
    let (target_skills, aspiration_resolved): (Vec<String>, bool) =
        match taxonomy.target_skills_for(&profile.career_aspiration) {
            Some(targets) => (targets.to_vec(), true),
            None => (
                GENERIC_TARGET_SKILLS.iter().map(|s| s.to_string()).collect(),
                false,
            ),
        };

    let current: std::collections::BTreeSet<String> = profile
        .current_skills
        .iter()
        .map(|s| normalize_skill(s))
        .collect();

    let covered = target_skills
        .iter()
        .filter(|t| current.contains(*t))
        .count();
    let missing_skills: Vec<String> = target_skills
        .iter()
        .filter(|t| !current.contains(*t))
        .cloned()
        .collect();

    let coverage = covered as f64 / target_skills.len().max(1) as f64;
    let coverage_percent = (coverage * 100.0 * 100.0).round() / 100.0;

    if !aspiration_resolved && !profile.career_aspiration.is_empty() {
        tracing::debug!(
            aspiration = %profile.career_aspiration,
            "aspiration not in taxonomy, using generic target set"
        );
    }

    SkillGapAnalysis {
        coverage_percent,
        target_skills,
        missing_skills,
        aspiration_resolved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(skills: &[&str], aspiration: &str) -> LearnerProfile {
        LearnerProfile {
            learner_id: "t".to_string(),
            current_skills: skills.iter().map(|s| s.to_string()).collect(),
            career_aspiration: aspiration.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_data_scientist_scenario() {
        let taxonomy = SkillTaxonomy::builtin();
        let gap = analyze_skill_gap(&profile(&["python"], "data_scientist"), &taxonomy);

        assert_eq!(gap.coverage_percent, 20.0);
        assert!(gap.aspiration_resolved);
        assert_eq!(
            gap.missing_skills,
            vec!["machine_learning", "statistics", "sql", "data_visualization"]
        );
    }

    #[test]
    fn test_empty_skills_full_gap() {
        let taxonomy = SkillTaxonomy::builtin();
        let gap = analyze_skill_gap(&profile(&[], "data_scientist"), &taxonomy);
        assert_eq!(gap.coverage_percent, 0.0);
        assert_eq!(gap.missing_skills, gap.target_skills);
    }

    #[test]
    fn test_superset_skills_no_gap() {
        let taxonomy = SkillTaxonomy::builtin();
        let gap = analyze_skill_gap(
            &profile(
                &[
                    "python",
                    "machine_learning",
                    "statistics",
                    "sql",
                    "data_visualization",
                    "extra_skill",
                ],
                "data_scientist",
            ),
            &taxonomy,
        );
        assert_eq!(gap.coverage_percent, 100.0);
        assert!(gap.missing_skills.is_empty());
    }

    #[test]
    fn test_unknown_aspiration_falls_back() {
        let taxonomy = SkillTaxonomy::builtin();
        let gap = analyze_skill_gap(&profile(&["teamwork"], "astronaut"), &taxonomy);
        assert!(!gap.aspiration_resolved);
        assert_eq!(
            gap.target_skills,
            vec!["communication", "problem_solving", "teamwork"]
        );
        assert_eq!(gap.missing_skills, vec!["communication", "problem_solving"]);
        assert!((gap.coverage_percent - 33.33).abs() < 1e-9);
    }

    #[test]
    fn test_current_skills_normalized() {
        let taxonomy = SkillTaxonomy::builtin();
        let gap = analyze_skill_gap(&profile(&["Machine Learning"], "data_scientist"), &taxonomy);
        assert!(!gap.missing_skills.contains(&"machine_learning".to_string()));
    }

    #[test]
    fn test_deterministic() {
        let taxonomy = SkillTaxonomy::builtin();
        let p = profile(&["python", "sql"], "data_analyst");
        let a = analyze_skill_gap(&p, &taxonomy);
        let b = analyze_skill_gap(&p, &taxonomy);
        assert_eq!(a.coverage_percent, b.coverage_percent);
        assert_eq!(a.missing_skills, b.missing_skills);
    }
}
