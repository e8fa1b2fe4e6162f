use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Self-reported learning pace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LearningPace {
    /// Prefers longer, spread-out engagements.
    Slow,
    /// Default cadence.
    #[default]
    Medium,
    /// Prefers short, intensive engagements.
    Fast,
    /// Unrecognized value; scored at the medium default.
    #[serde(other)]
    Unknown,
}

/// Overall digital access tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DigitalAccess {
    /// Shared or sporadic device access.
    Low,
    /// Regular access to at least one device.
    #[default]
    Medium,
    /// Dedicated device(s) and reliable access.
    High,
    /// Unrecognized value.
    #[serde(other)]
    Unknown,
}

/// Internet connectivity tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Connectivity {
    /// Broadband-class connection.
    HighSpeed,
    /// Usable but constrained bandwidth.
    LowSpeed,
    /// Connection drops regularly.
    Intermittent,
    /// No connectivity at all.
    None,
    /// Unrecognized or unreported; scored at the 0.5 midpoint.
    #[default]
    #[serde(other)]
    Unknown,
}

impl Connectivity {
    /// Connectivity quality score used by the readiness scorer.
    pub fn score(&self) -> f64 {
        match self {
            Connectivity::HighSpeed => 1.0,
            Connectivity::LowSpeed => 0.7,
            Connectivity::Intermittent => 0.4,
            Connectivity::None => 0.0,
            Connectivity::Unknown => 0.5,
        }
    }
}

/// Three-level support/tolerance tier used by several profile fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportTier {
    /// Strong support or tolerance.
    High,
    /// Moderate support or tolerance.
    #[default]
    Medium,
    /// Weak support or tolerance.
    Low,
    /// Unrecognized value; scored as the field's documented default.
    #[serde(other)]
    Unknown,
}

/// Risk tolerance tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTolerance {
    /// Comfortable with uncertain outcomes.
    High,
    /// Default.
    #[default]
    Medium,
    /// Prefers predictable outcomes.
    Low,
    /// Unrecognized value.
    #[serde(other)]
    Unknown,
}

/// Technology comfort tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TechComfort {
    /// Fully self-sufficient with new tools.
    Expert,
    /// Comfortable with common tools; the documented default.
    #[default]
    Intermediate,
    /// Needs occasional guidance.
    Beginner,
    /// Needs structured onboarding.
    Novice,
    /// Unrecognized value; scored below the comfort threshold.
    #[serde(other)]
    Unknown,
}

/// Preferred learning style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LearningStyle {
    /// Learns best from diagrams and video.
    #[default]
    Visual,
    /// Learns best from spoken content.
    Auditory,
    /// Learns best by doing.
    Kinesthetic,
    /// Learns best from text.
    ReadingWriting,
    /// Unrecognized value.
    #[serde(other)]
    Unknown,
}

impl LearningStyle {
    /// Stable label used in personalization factors.
    pub fn label(&self) -> &'static str {
        match self {
            LearningStyle::Visual => "visual",
            LearningStyle::Auditory => "auditory",
            LearningStyle::Kinesthetic => "kinesthetic",
            LearningStyle::ReadingWriting => "reading_writing",
            LearningStyle::Unknown => "unknown",
        }
    }
}

/// Visual or hearing impairment tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impairment {
    /// No impairment; the documented default.
    #[default]
    None,
    /// Partial impairment.
    Partial,
    /// Complete impairment.
    Complete,
    /// Unrecognized value; treated as no impairment.
    #[serde(other)]
    Unknown,
}

impl Impairment {
    /// Whether the impairment affects content delivery.
    pub fn present(&self) -> bool {
        matches!(self, Impairment::Partial | Impairment::Complete)
    }
}

/// Motor impairment tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotorImpairment {
    /// No impairment; the documented default.
    #[default]
    None,
    /// Mild impairment.
    Mild,
    /// Moderate impairment.
    Moderate,
    /// Severe impairment.
    Severe,
    /// Unrecognized value; treated as no impairment.
    #[serde(other)]
    Unknown,
}

impl MotorImpairment {
    /// Whether the impairment affects content interaction.
    pub fn present(&self) -> bool {
        matches!(
            self,
            MotorImpairment::Mild | MotorImpairment::Moderate | MotorImpairment::Severe
        )
    }
}

/// Urban/rural classification of the learner's location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaType {
    /// Urban area.
    Urban,
    /// Rural area.
    Rural,
    /// Unrecognized or unreported.
    #[default]
    #[serde(other)]
    Unknown,
}

/// Geographic location of the learner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// State key, normalized lowercase (e.g. "karnataka").
    #[serde(default)]
    pub state: String,
    /// District, free text.
    #[serde(default)]
    pub district: String,
    /// Urban/rural classification.
    #[serde(default)]
    pub area: AreaType,
}

/// Socio-economic sub-profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocioEconomicProfile {
    /// Monthly family income, in the catalog currency. Missing income is
    /// treated as the 25,000 reference band.
    #[serde(default)]
    pub family_monthly_income: Option<f64>,
    /// Household size; defaults to 4.
    #[serde(default = "default_family_size")]
    pub family_size: u32,
    /// Geographic location.
    #[serde(default)]
    pub geographic_location: GeoLocation,
    /// Digital devices available (smartphone, laptop, tablet, ...).
    #[serde(default)]
    pub devices: Vec<String>,
    /// Internet connectivity tier.
    #[serde(default)]
    pub connectivity: Connectivity,
    /// Family support for learning.
    #[serde(default)]
    pub family_support: SupportTier,
}

fn default_family_size() -> u32 {
    4
}

impl Default for SocioEconomicProfile {
    fn default() -> Self {
        Self {
            family_monthly_income: None,
            family_size: default_family_size(),
            geographic_location: Default::default(),
            devices: Default::default(),
            connectivity: Default::default(),
            family_support: Default::default(),
        }
    }
}

/// Psychometric sub-profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PsychometricProfile {
    /// Preferred learning style.
    #[serde(default)]
    pub learning_style: LearningStyle,
    /// Sustained attention span in minutes; defaults to 30.
    #[serde(default = "default_attention_span")]
    pub attention_span_minutes: u32,
    /// Risk tolerance.
    #[serde(default)]
    pub risk_tolerance: RiskTolerance,
    /// Technology comfort tier.
    #[serde(default)]
    pub technology_comfort: TechComfort,
    /// Stress tolerance tier.
    #[serde(default)]
    pub stress_tolerance: SupportTier,
    /// Motivation factor tags (personal_growth, financial, family, ...).
    #[serde(default)]
    pub motivation_factors: BTreeSet<String>,
}

fn default_attention_span() -> u32 {
    30
}

impl Default for PsychometricProfile {
    fn default() -> Self {
        Self {
            learning_style: Default::default(),
            attention_span_minutes: default_attention_span(),
            risk_tolerance: Default::default(),
            technology_comfort: Default::default(),
            stress_tolerance: Default::default(),
            motivation_factors: Default::default(),
        }
    }
}

/// Accessibility and inclusion sub-profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccessibilityProfile {
    /// Visual impairment tier.
    #[serde(default)]
    pub visual_impairment: Impairment,
    /// Hearing impairment tier.
    #[serde(default)]
    pub hearing_impairment: Impairment,
    /// Motor impairment tier.
    #[serde(default)]
    pub motor_impairment: MotorImpairment,
    /// Cognitive consideration tags (dyslexia, adhd, ...).
    #[serde(default)]
    pub cognitive_considerations: Vec<String>,
    /// Assistive technology in use.
    #[serde(default)]
    pub assistive_technology: Vec<String>,
    /// Preferred content formats (text, audio, video, interactive).
    #[serde(default)]
    pub content_format_preferences: Vec<String>,
}

/// Immutable learner snapshot supplied per recommendation request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LearnerProfile {
    /// Opaque learner id.
    pub learner_id: String,
    /// Normalized skill tokens the learner already has.
    #[serde(default)]
    pub current_skills: BTreeSet<String>,
    /// Free-text career aspiration; normalized to a taxonomy key when
    /// possible.
    #[serde(default)]
    pub career_aspiration: String,
    /// Self-reported learning pace.
    #[serde(default)]
    pub learning_pace: LearningPace,
    /// Overall digital access tier.
    #[serde(default)]
    pub digital_access: DigitalAccess,
    /// Socio-economic context.
    #[serde(default)]
    pub socio_economic: SocioEconomicProfile,
    /// Psychometric assessment.
    #[serde(default)]
    pub psychometric: PsychometricProfile,
    /// Accessibility requirements.
    #[serde(default)]
    pub accessibility: AccessibilityProfile,
}
