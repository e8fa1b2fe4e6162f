//! Shared test fixtures for saarthi crates.
//!
//! Builders for learning resources, catalogs, and learner profiles used
//! across the workspace's test suites.

use saarthi_catalog::{Difficulty, InMemoryCatalog, LearningResource, ResourceType};
use saarthi_profile::LearnerProfile;
use std::collections::BTreeSet;

/// Builder for a valid [`LearningResource`] with sensible defaults.
///
/// Defaults: course at NSQF level 4, 80 hours, cost 5000, success rate 0.8,
/// no ratings, no prerequisites.
pub struct ResourceBuilder {
    resource: LearningResource,
}

impl ResourceBuilder {
    /// Resource with the given id and default fields.
    pub fn new(id: &str) -> Self {
        Self {
            resource: LearningResource {
                id: id.to_string(),
                title: format!("{} course", id),
                resource_type: ResourceType::Course,
                provider: "test_provider".to_string(),
                nsqf_level: 4,
                difficulty: Difficulty::Intermediate,
                duration_hours: 80,
                cost: 5_000.0,
                skills_covered: BTreeSet::new(),
                prerequisites: BTreeSet::new(),
                success_rate: 0.8,
                user_ratings: Vec::new(),
                employment_impact: 0.5,
                salary_impact: 0.5,
                tags: BTreeSet::new(),
            },
        }
    }

    /// Set the covered skill tokens.
    pub fn skills(mut self, skills: &[&str]) -> Self {
        self.resource.skills_covered = skills.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Set the prerequisite skill tokens.
    pub fn prerequisites(mut self, prerequisites: &[&str]) -> Self {
        self.resource.prerequisites = prerequisites.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Set the NSQF level.
    pub fn nsqf_level(mut self, level: u8) -> Self {
        self.resource.nsqf_level = level;
        self
    }

    /// Set the duration in hours.
    pub fn duration_hours(mut self, hours: u32) -> Self {
        self.resource.duration_hours = hours;
        self
    }

    /// Set the cost.
    pub fn cost(mut self, cost: f64) -> Self {
        self.resource.cost = cost;
        self
    }

    /// Set the success rate.
    pub fn success_rate(mut self, rate: f64) -> Self {
        self.resource.success_rate = rate;
        self
    }

    /// Set the user ratings.
    pub fn ratings(mut self, ratings: &[f64]) -> Self {
        self.resource.user_ratings = ratings.to_vec();
        self
    }

    /// Set the employment and salary impact scores.
    pub fn impact(mut self, employment: f64, salary: f64) -> Self {
        self.resource.employment_impact = employment;
        self.resource.salary_impact = salary;
        self
    }

    /// Set the resource type.
    pub fn resource_type(mut self, resource_type: ResourceType) -> Self {
        self.resource.resource_type = resource_type;
        self
    }

    /// Finish the builder.
    pub fn build(self) -> LearningResource {
        self.resource
    }
}

/// In-memory catalog from prebuilt resources, preserving insertion order.
///
/// Panics when a resource violates a catalog invariant; fixtures are test
/// input and should be well formed.
pub fn catalog_of(resources: Vec<LearningResource>) -> InMemoryCatalog {
    InMemoryCatalog::new(resources).expect("test fixture resources must be valid")
}

/// Catalog spanning the data-science target skills at mixed levels.
///
/// Ids in insertion order: `ml_course`, `stats_course`, `sql_course`,
/// `viz_course`, `python_course`.
pub fn data_science_catalog() -> InMemoryCatalog {
    catalog_of(vec![
        ResourceBuilder::new("ml_course")
            .skills(&["machine_learning", "statistics"])
            .nsqf_level(5)
            .duration_hours(120)
            .cost(15_000.0)
            .success_rate(0.85)
            .ratings(&[4.5, 4.0])
            .impact(0.8, 0.9)
            .build(),
        ResourceBuilder::new("stats_course")
            .skills(&["statistics"])
            .nsqf_level(4)
            .duration_hours(60)
            .cost(6_000.0)
            .success_rate(0.9)
            .ratings(&[4.2])
            .impact(0.6, 0.5)
            .build(),
        ResourceBuilder::new("sql_course")
            .skills(&["sql"])
            .nsqf_level(3)
            .duration_hours(40)
            .cost(3_000.0)
            .success_rate(0.92)
            .impact(0.7, 0.4)
            .build(),
        ResourceBuilder::new("viz_course")
            .skills(&["data_visualization"])
            .nsqf_level(4)
            .duration_hours(50)
            .cost(4_000.0)
            .success_rate(0.88)
            .ratings(&[3.9, 4.1])
            .impact(0.5, 0.5)
            .build(),
        ResourceBuilder::new("python_course")
            .skills(&["python"])
            .nsqf_level(3)
            .duration_hours(70)
            .cost(5_000.0)
            .success_rate(0.95)
            .ratings(&[4.8])
            .impact(0.9, 0.7)
            .build(),
    ])
}

/// Learner profile with the given skills and aspiration; every other field
/// at its documented default.
pub fn profile_with(learner_id: &str, skills: &[&str], aspiration: &str) -> LearnerProfile {
    LearnerProfile {
        learner_id: learner_id.to_string(),
        current_skills: skills.iter().map(|s| s.to_string()).collect(),
        career_aspiration: aspiration.to_string(),
        ..Default::default()
    }
}

/// Canonical fixture profile: one python skill, data-scientist aspiration.
pub fn python_learner() -> LearnerProfile {
    profile_with("learner_001", &["python"], "data_scientist")
}
