use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Fallback target set used when an aspiration has no taxonomy entry.
///
/// Deliberately generic and low-confidence, never an error.
pub const GENERIC_TARGET_SKILLS: [&str; 3] = ["communication", "problem_solving", "teamwork"];

/// Errors raised while loading the taxonomy. Fatal at startup.
#[derive(Debug, Error)]
pub enum TaxonomyError {
    /// Taxonomy file could not be read.
    #[error("failed to read taxonomy: {0}")]
    Io(#[from] std::io::Error),
    /// Taxonomy file is not valid TOML for the expected schema.
    #[error("failed to parse taxonomy: {0}")]
    Parse(#[from] toml::de::Error),
    /// Taxonomy has no career-target entries.
    #[error("taxonomy defines no career targets")]
    Empty,
}

/// Normalize a free-text skill or aspiration token: lowercase,
/// whitespace-trimmed, internal whitespace collapsed to underscores.
pub fn normalize_skill(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

#[derive(Debug, Deserialize)]
struct TaxonomyFile {
    #[serde(default)]
    categories: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    careers: BTreeMap<String, Vec<String>>,
}

/// Static skill taxonomy: category tables plus career-aspiration target
/// sets. Loaded once at process start and never mutated by a request.
#[derive(Debug, Clone)]
pub struct SkillTaxonomy {
    categories: BTreeMap<String, Vec<String>>,
    career_targets: BTreeMap<String, Vec<String>>,
}

impl SkillTaxonomy {
    fn from_parts(
        categories: BTreeMap<String, Vec<String>>,
        careers: BTreeMap<String, Vec<String>>,
    ) -> Result<Self, TaxonomyError> {
        if careers.is_empty() {
            return Err(TaxonomyError::Empty);
        }
        let normalize_table = |table: BTreeMap<String, Vec<String>>| {
            table
                .into_iter()
                .map(|(key, tokens)| {
                    (
                        normalize_skill(&key),
                        tokens.iter().map(|t| normalize_skill(t)).collect(),
                    )
                })
                .collect()
        };
        Ok(Self {
            categories: normalize_table(categories),
            career_targets: normalize_table(careers),
        })
    }

    /// Built-in default tables covering the common career aspirations.
    pub fn builtin() -> Self {
        let categories: BTreeMap<String, Vec<String>> = [
            (
                "programming",
                vec!["python", "java", "javascript", "c++", "go"],
            ),
            (
                "data_science",
                vec![
                    "machine_learning",
                    "statistics",
                    "data_visualization",
                    "deep_learning",
                ],
            ),
            (
                "web_development",
                vec!["html", "css", "react", "angular", "node_js"],
            ),
            (
                "cloud_computing",
                vec!["aws", "azure", "gcp", "docker", "kubernetes"],
            ),
            (
                "digital_marketing",
                vec!["seo", "social_media", "content_marketing", "ppc"],
            ),
            (
                "project_management",
                vec![
                    "agile",
                    "scrum",
                    "risk_management",
                    "stakeholder_management",
                ],
            ),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.into_iter().map(String::from).collect()))
        .collect();

        let careers: BTreeMap<String, Vec<String>> = [
            (
                "data_scientist",
                vec![
                    "python",
                    "machine_learning",
                    "statistics",
                    "sql",
                    "data_visualization",
                ],
            ),
            (
                "software_developer",
                vec![
                    "programming",
                    "web_development",
                    "databases",
                    "version_control",
                    "testing",
                ],
            ),
            (
                "digital_marketer",
                vec![
                    "seo",
                    "social_media",
                    "content_marketing",
                    "analytics",
                    "paid_advertising",
                ],
            ),
            (
                "web_developer",
                vec!["html", "css", "javascript", "responsive_design", "frameworks"],
            ),
            (
                "data_analyst",
                vec!["excel", "sql", "python", "tableau", "statistics"],
            ),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.into_iter().map(String::from).collect()))
        .collect();

        // Both tables are static literals; normalization cannot fail here.
        Self::from_parts(categories, careers).unwrap_or(Self {
            categories: BTreeMap::new(),
            career_targets: BTreeMap::new(),
        })
    }

    /// Parse a taxonomy from TOML text.
    pub fn from_toml_str(raw: &str) -> Result<Self, TaxonomyError> {
        let file: TaxonomyFile = toml::from_str(raw)?;
        Self::from_parts(file.categories, file.careers)
    }

    /// Load a taxonomy from a TOML file.
    pub fn load(path: &Path) -> Result<Self, TaxonomyError> {
        let raw = std::fs::read_to_string(path)?;
        let taxonomy = Self::from_toml_str(&raw)?;
        tracing::info!(
            path = %path.display(),
            careers = taxonomy.career_targets.len(),
            categories = taxonomy.categories.len(),
            "taxonomy loaded"
        );
        Ok(taxonomy)
    }

    /// Ordered target skills for a career aspiration, matched on the
    /// normalized key. `None` means the aspiration is not in the taxonomy
    /// and the caller should fall back to [`GENERIC_TARGET_SKILLS`].
    pub fn target_skills_for(&self, aspiration: &str) -> Option<&[String]> {
        self.career_targets
            .get(&normalize_skill(aspiration))
            .map(Vec::as_slice)
    }

    /// Canonical skill tokens for a category.
    pub fn category_skills(&self, category: &str) -> Option<&[String]> {
        self.categories
            .get(&normalize_skill(category))
            .map(Vec::as_slice)
    }

    /// Number of career-target entries.
    pub fn career_count(&self) -> usize {
        self.career_targets.len()
    }
}
