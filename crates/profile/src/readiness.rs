use crate::types::{
    AccessibilityProfile, LearnerProfile, PsychometricProfile, SocioEconomicProfile, SupportTier,
    TechComfort,
};
use serde::{Deserialize, Serialize};

/// Maximum contribution of the socio-economic component.
pub const SOCIO_MAX: f64 = 40.0;
/// Maximum contribution of the psychometric component.
pub const PSYCHO_MAX: f64 = 35.0;
/// Maximum contribution of the accessibility component.
pub const ACCESS_MAX: f64 = 25.0;

/// Component floors below which an improvement area is flagged
/// (37.5% of 40, ~34% of 35, 32% of 25).
const SOCIO_IMPROVEMENT_FLOOR: f64 = 15.0;
const PSYCHO_IMPROVEMENT_FLOOR: f64 = 12.0;
const ACCESS_IMPROVEMENT_FLOOR: f64 = 8.0;

/// Motivation tags treated as intrinsic.
const INTRINSIC_MOTIVATORS: [&str; 3] = ["personal_growth", "curiosity", "mastery"];

/// Regional employment snapshot consumed by the readiness scorer.
///
/// Comes from the regional-data collaborator; the default stands in when
/// the learner's state is unknown or the collaborator is unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionalOutlook {
    /// Employment rate, percent.
    pub employment_rate: f64,
    /// Annual employment growth rate, percent.
    pub growth_rate: f64,
}

impl Default for RegionalOutlook {
    fn default() -> Self {
        Self {
            employment_rate: 35.0,
            growth_rate: 2.0,
        }
    }
}

/// Readiness tier derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessLevel {
    /// Overall score >= 80.
    High,
    /// Overall score >= 60.
    Medium,
    /// Overall score >= 40.
    Low,
    /// Overall score below 40; learner needs support before starting.
    RequiresIntervention,
}

impl ReadinessLevel {
    /// Tier for a given overall score.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            ReadinessLevel::High
        } else if score >= 60.0 {
            ReadinessLevel::Medium
        } else if score >= 40.0 {
            ReadinessLevel::Low
        } else {
            ReadinessLevel::RequiresIntervention
        }
    }

    /// Stable label used in logs and explanations.
    pub fn label(&self) -> &'static str {
        match self {
            ReadinessLevel::High => "high",
            ReadinessLevel::Medium => "medium",
            ReadinessLevel::Low => "low",
            ReadinessLevel::RequiresIntervention => "requires_intervention",
        }
    }
}

/// Improvement areas flagged when a component scores below its floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImprovementArea {
    /// Socio-economic component below 15 of 40 points.
    SocioEconomicSupport,
    /// Psychometric component below 12 of 35 points.
    MotivationAndPreparation,
    /// Accessibility component below 8 of 25 points.
    AccessibilityAccommodations,
}

impl ImprovementArea {
    /// Stable label used in logs and explanations.
    pub fn label(&self) -> &'static str {
        match self {
            ImprovementArea::SocioEconomicSupport => "socio_economic_support",
            ImprovementArea::MotivationAndPreparation => "motivation_and_preparation",
            ImprovementArea::AccessibilityAccommodations => "accessibility_accommodations",
        }
    }
}

/// Composite learning-readiness score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessScore {
    /// Overall score in [0, 100], rounded to two decimals.
    pub overall: f64,
    /// Socio-economic component, at most [`SOCIO_MAX`].
    pub socio_economic: f64,
    /// Psychometric component, at most [`PSYCHO_MAX`].
    pub psychological: f64,
    /// Accessibility component, at most [`ACCESS_MAX`].
    pub accessibility: f64,
    /// Readiness tier.
    pub level: ReadinessLevel,
    /// Components below their floors.
    pub improvement_areas: Vec<ImprovementArea>,
}

/// Adaptive-learning hints derived from the profile.
///
/// Consumed downstream as personalization factors alongside the readiness
/// score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalizationHints {
    /// Recommended study-session length in minutes, from attention span
    /// clamped to [15, 60].
    pub recommended_session_minutes: u32,
    /// "accelerated" for high risk tolerance, otherwise "standard".
    pub pace: &'static str,
    /// "flexible" when family support is low, otherwise "structured".
    pub structure: &'static str,
    /// Primary learning-style label.
    pub content_style: &'static str,
}

/// Derive adaptive-learning hints from the psychometric and socio-economic
/// sub-profiles.
pub fn personalization_hints(profile: &LearnerProfile) -> PersonalizationHints {
    let psycho = &profile.psychometric;
    PersonalizationHints {
        recommended_session_minutes: psycho.attention_span_minutes.clamp(15, 60),
        pace: if psycho.risk_tolerance == crate::types::RiskTolerance::High {
            "accelerated"
        } else {
            "standard"
        },
        structure: if profile.socio_economic.family_support == SupportTier::Low {
            "flexible"
        } else {
            "structured"
        },
        content_style: psycho.learning_style.label(),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Affordability index from per-capita monthly income banding.
fn affordability_index(socio: &SocioEconomicProfile) -> f64 {
    let income = socio.family_monthly_income.unwrap_or(25_000.0);
    let per_capita = income / socio.family_size.max(1) as f64;
    if per_capita > 15_000.0 {
        1.0
    } else if per_capita > 10_000.0 {
        0.8
    } else if per_capita > 5_000.0 {
        0.6
    } else {
        0.4
    }
}

/// Regional opportunity score: equal parts employment rate (against 100%)
/// and growth rate (against a 10%/yr ceiling).
fn opportunity_score(regional: &RegionalOutlook) -> f64 {
    let employment = (regional.employment_rate / 100.0).clamp(0.0, 1.0);
    let growth = (regional.growth_rate / 10.0).clamp(0.0, 1.0);
    0.5 * employment + 0.5 * growth
}

fn family_support_bonus(tier: SupportTier) -> f64 {
    if tier == SupportTier::High {
        1.0
    } else {
        0.5
    }
}

/// Intrinsic motivation from the factor tags: 0.4 base, +0.2 per intrinsic
/// tag, +0.1 per other tag, clamped to [0, 1].
fn intrinsic_motivation(psycho: &PsychometricProfile) -> f64 {
    let mut score: f64 = 0.4;
    for factor in &psycho.motivation_factors {
        if INTRINSIC_MOTIVATORS.contains(&factor.as_str()) {
            score += 0.2;
        } else {
            score += 0.1;
        }
    }
    score.clamp(0.0, 1.0)
}

fn tech_comfort_bonus(comfort: TechComfort) -> f64 {
    match comfort {
        TechComfort::Expert | TechComfort::Intermediate => 1.0,
        _ => 0.5,
    }
}

fn stress_management_bonus(tier: SupportTier) -> f64 {
    match tier {
        SupportTier::High | SupportTier::Medium => 1.0,
        _ => 0.3,
    }
}

/// Inclusion score: 1.0 base, -0.2 per visual/hearing barrier and cognitive
/// considerations, -0.1 for motor impairment, +0.2 when assistive
/// technology is in use; clamped to [0.1, 1.0].
fn inclusion_score(access: &AccessibilityProfile) -> f64 {
    let mut score: f64 = 1.0;
    if access.visual_impairment.present() {
        score -= 0.2;
    }
    if access.hearing_impairment.present() {
        score -= 0.2;
    }
    if access.motor_impairment.present() {
        score -= 0.1;
    }
    if !access.cognitive_considerations.is_empty() {
        score -= 0.2;
    }
    if !access.assistive_technology.is_empty() {
        score += 0.2;
    }
    score.clamp(0.1, 1.0)
}

/// Compute the composite readiness score for a learner.
///
/// Pure function of the profile, the static lookup tables, and the optional
/// regional snapshot; missing optional fields use documented defaults and
/// the function never fails.
pub fn readiness_score(
    profile: &LearnerProfile,
    regional: Option<&RegionalOutlook>,
) -> ReadinessScore {
    let default_regional = RegionalOutlook::default();
    let regional = regional.unwrap_or(&default_regional);

    let socio = &profile.socio_economic;
    let socio_score = (socio.connectivity.score() * 0.3
        + affordability_index(socio) * 0.3
        + opportunity_score(regional) * 0.2
        + family_support_bonus(socio.family_support) * 0.2)
        * SOCIO_MAX;

    let psycho = &profile.psychometric;
    let psycho_score = (intrinsic_motivation(psycho) * 0.4
        + tech_comfort_bonus(psycho.technology_comfort) * 0.3
        + stress_management_bonus(psycho.stress_tolerance) * 0.3)
        * PSYCHO_MAX;

    let access_score = inclusion_score(&profile.accessibility) * ACCESS_MAX;

    // Components are reported rounded; the overall score is their exact sum
    // so the weighting identity holds for consumers.
    let socio_score = round2(socio_score);
    let psycho_score = round2(psycho_score);
    let access_score = round2(access_score);
    let overall = round2(socio_score + psycho_score + access_score);

    let mut improvement_areas = Vec::new();
    if socio_score < SOCIO_IMPROVEMENT_FLOOR {
        improvement_areas.push(ImprovementArea::SocioEconomicSupport);
    }
    if psycho_score < PSYCHO_IMPROVEMENT_FLOOR {
        improvement_areas.push(ImprovementArea::MotivationAndPreparation);
    }
    if access_score < ACCESS_IMPROVEMENT_FLOOR {
        improvement_areas.push(ImprovementArea::AccessibilityAccommodations);
    }

    ReadinessScore {
        overall,
        socio_economic: socio_score,
        psychological: psycho_score,
        accessibility: access_score,
        level: ReadinessLevel::from_score(overall),
        improvement_areas,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Connectivity, Impairment, MotorImpairment};
    use proptest::prelude::*;

    fn strong_profile() -> LearnerProfile {
        let mut profile = LearnerProfile {
            learner_id: "strong".to_string(),
            ..Default::default()
        };
        profile.socio_economic.connectivity = Connectivity::HighSpeed;
        profile.socio_economic.family_monthly_income = Some(80_000.0);
        profile.socio_economic.family_size = 4;
        profile.socio_economic.family_support = SupportTier::High;
        profile.psychometric.technology_comfort = TechComfort::Expert;
        profile.psychometric.stress_tolerance = SupportTier::High;
        profile.psychometric.motivation_factors =
            ["personal_growth", "curiosity", "financial"]
                .iter()
                .map(|s| s.to_string())
                .collect();
        profile
    }

    fn constrained_profile() -> LearnerProfile {
        let mut profile = LearnerProfile {
            learner_id: "constrained".to_string(),
            ..Default::default()
        };
        profile.socio_economic.connectivity = Connectivity::None;
        profile.socio_economic.family_monthly_income = Some(8_000.0);
        profile.socio_economic.family_size = 6;
        profile.socio_economic.family_support = SupportTier::Low;
        profile.psychometric.technology_comfort = TechComfort::Novice;
        profile.psychometric.stress_tolerance = SupportTier::Low;
        profile.accessibility.visual_impairment = Impairment::Partial;
        profile.accessibility.hearing_impairment = Impairment::Partial;
        profile.accessibility.motor_impairment = MotorImpairment::Moderate;
        profile
            .accessibility
            .cognitive_considerations
            .push("dyslexia".to_string());
        profile
    }

    #[test]
    fn test_components_sum_to_overall() {
        let score = readiness_score(&strong_profile(), None);
        let sum = score.socio_economic + score.psychological + score.accessibility;
        assert!(
            (score.overall - sum).abs() < 1e-6,
            "overall {} vs sum {}",
            score.overall,
            sum
        );
    }

    #[test]
    fn test_strong_profile_is_high_readiness() {
        let score = readiness_score(
            &strong_profile(),
            Some(&RegionalOutlook {
                employment_rate: 45.2,
                growth_rate: 4.2,
            }),
        );
        assert_eq!(score.level, ReadinessLevel::High);
        assert!(score.improvement_areas.is_empty());
    }

    #[test]
    fn test_constrained_profile_flags_improvement_areas() {
        let score = readiness_score(&constrained_profile(), None);
        assert!(score
            .improvement_areas
            .contains(&ImprovementArea::SocioEconomicSupport));
        assert!(score
            .improvement_areas
            .contains(&ImprovementArea::AccessibilityAccommodations));
        assert!(score.overall < 60.0);
    }

    #[test]
    fn test_assistive_technology_recovers_inclusion() {
        let mut profile = constrained_profile();
        let before = readiness_score(&profile, None).accessibility;
        profile
            .accessibility
            .assistive_technology
            .push("screen_reader".to_string());
        let after = readiness_score(&profile, None).accessibility;
        assert!(after > before);
    }

    #[test]
    fn test_inclusion_score_floor() {
        let mut access = AccessibilityProfile {
            visual_impairment: Impairment::Complete,
            hearing_impairment: Impairment::Complete,
            motor_impairment: MotorImpairment::Severe,
            ..Default::default()
        };
        access.cognitive_considerations.push("adhd".to_string());
        // 1.0 - 0.2 - 0.2 - 0.1 - 0.2 = 0.3, above the 0.1 floor
        assert!((inclusion_score(&access) - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_affordability_banding() {
        let mut socio = SocioEconomicProfile::default();
        socio.family_size = 1;
        socio.family_monthly_income = Some(20_000.0);
        assert_eq!(affordability_index(&socio), 1.0);
        socio.family_monthly_income = Some(12_000.0);
        assert_eq!(affordability_index(&socio), 0.8);
        socio.family_monthly_income = Some(6_000.0);
        assert_eq!(affordability_index(&socio), 0.6);
        socio.family_monthly_income = Some(2_000.0);
        assert_eq!(affordability_index(&socio), 0.4);
    }

    #[test]
    fn test_zero_family_size_does_not_divide_by_zero() {
        let mut socio = SocioEconomicProfile::default();
        socio.family_size = 0;
        socio.family_monthly_income = Some(16_000.0);
        assert_eq!(affordability_index(&socio), 1.0);
    }

    #[test]
    fn test_default_regional_outlook() {
        let outlook = RegionalOutlook::default();
        assert_eq!(outlook.employment_rate, 35.0);
        assert_eq!(outlook.growth_rate, 2.0);
    }

    #[test]
    fn test_level_tiers() {
        assert_eq!(ReadinessLevel::from_score(85.0), ReadinessLevel::High);
        assert_eq!(ReadinessLevel::from_score(80.0), ReadinessLevel::High);
        assert_eq!(ReadinessLevel::from_score(65.0), ReadinessLevel::Medium);
        assert_eq!(ReadinessLevel::from_score(45.0), ReadinessLevel::Low);
        assert_eq!(
            ReadinessLevel::from_score(20.0),
            ReadinessLevel::RequiresIntervention
        );
    }

    #[test]
    fn test_personalization_hints() {
        let mut profile = LearnerProfile::default();
        profile.psychometric.attention_span_minutes = 90;
        profile.psychometric.risk_tolerance = crate::types::RiskTolerance::High;
        profile.socio_economic.family_support = SupportTier::Low;

        let hints = personalization_hints(&profile);
        assert_eq!(hints.recommended_session_minutes, 60);
        assert_eq!(hints.pace, "accelerated");
        assert_eq!(hints.structure, "flexible");
        assert_eq!(hints.content_style, "visual");
    }

    #[test]
    fn test_intrinsic_motivation_default() {
        let psycho = PsychometricProfile::default();
        assert!((intrinsic_motivation(&psycho) - 0.4).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn readiness_always_in_bounds(
            income in proptest::option::of(0.0..500_000.0f64),
            family_size in 0u32..20,
            employment in 0.0..100.0f64,
            growth in 0.0..25.0f64,
        ) {
            let mut profile = LearnerProfile::default();
            profile.socio_economic.family_monthly_income = income;
            profile.socio_economic.family_size = family_size;
            let regional = RegionalOutlook { employment_rate: employment, growth_rate: growth };

            let score = readiness_score(&profile, Some(&regional));
            prop_assert!(score.overall >= 0.0 && score.overall <= 100.0);
            prop_assert!(score.socio_economic >= 0.0 && score.socio_economic <= SOCIO_MAX);
            prop_assert!(score.psychological >= 0.0 && score.psychological <= PSYCHO_MAX);
            prop_assert!(score.accessibility >= 0.0 && score.accessibility <= ACCESS_MAX);
        }
    }
}
