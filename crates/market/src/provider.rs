//! Market data providers: a table-driven baseline and an HTTP-backed source.

use crate::types::{MarketError, MarketSignals, ShortageLevel};
use async_trait::async_trait;
use saarthi_profile::RegionalOutlook;
use std::collections::BTreeMap;

const MARKET_API_BASE: &str = "https://api.saarthi.dev";

/// Get the market API base URL, allowing override for testing.
fn market_api_base() -> String {
    std::env::var("SAARTHI_MARKET_BASE_URL").unwrap_or_else(|_| MARKET_API_BASE.to_string())
}

/// Source of raw per-skill market signals.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetch signals for one skill, optionally scoped to a location.
    async fn fetch_signals(
        &self,
        skill: &str,
        location: Option<&str>,
    ) -> Result<MarketSignals, MarketError>;

    /// Confidence in this provider's data, in [0, 1].
    fn confidence(&self) -> f64;
}

/// Source of regional employment outlooks keyed by state.
#[async_trait]
pub trait RegionalDataProvider: Send + Sync {
    /// Outlook for a state, or `None` when the state is not covered.
    async fn outlook(&self, state: &str) -> Result<Option<RegionalOutlook>, MarketError>;
}

/// Baseline provider backed by compiled-in demand and location tables.
///
/// Deterministic: the same skill and location always produce the same
/// signals. Used as the default source and as the test double.
#[derive(Debug, Default, Clone)]
pub struct StaticProvider;

/// Baseline weekly openings for well-known skill tokens.
fn base_demand(skill: &str) -> u64 {
    match skill {
        "python" => 5_000,
        "java" => 4_500,
        "javascript" => 4_200,
        "data_science" => 4_000,
        "ai" => 3_800,
        "machine_learning" => 3_500,
        "react" => 3_000,
        "aws" => 2_800,
        "azure" => 2_400,
        "docker" => 2_000,
        "cybersecurity" => 1_800,
        "blockchain" => 1_200,
        _ => 1_000,
    }
}

/// Demand multiplier for states with concentrated hiring.
fn location_multiplier(location: Option<&str>) -> f64 {
    match location {
        Some("maharashtra") => 1.8,
        Some("karnataka") => 1.6,
        Some("delhi") => 1.5,
        Some("telangana") => 1.4,
        Some("tamil_nadu") => 1.3,
        Some("gujarat") => 1.2,
        Some("west_bengal") => 1.1,
        Some("punjab") => 0.8,
        _ => 1.0,
    }
}

fn shortage_for(base: u64) -> ShortageLevel {
    if base >= 3_500 {
        ShortageLevel::High
    } else if base >= 2_000 {
        ShortageLevel::Medium
    } else {
        ShortageLevel::Low
    }
}

fn salary_bands(base: u64) -> BTreeMap<String, f64> {
    let mid = base as f64 * 160.0;
    let mut bands = BTreeMap::new();
    bands.insert("entry_level".to_string(), mid * 0.6);
    bands.insert("mid_level".to_string(), mid);
    bands.insert("senior_level".to_string(), mid * 1.8);
    bands
}

fn hotspots(location: Option<&str>) -> Vec<String> {
    let cities: &[&str] = match location {
        Some("maharashtra") => &["mumbai", "pune", "nagpur"],
        Some("karnataka") => &["bangalore", "mysore"],
        Some("tamil_nadu") => &["chennai", "coimbatore"],
        _ => &["mumbai", "bangalore", "pune", "hyderabad"],
    };
    cities.iter().map(|s| s.to_string()).collect()
}

#[async_trait]
impl MarketDataProvider for StaticProvider {
    async fn fetch_signals(
        &self,
        skill: &str,
        location: Option<&str>,
    ) -> Result<MarketSignals, MarketError> {
        let base = base_demand(skill);
        let jobs = (base as f64 * location_multiplier(location)).round() as u64;
        Ok(MarketSignals {
            job_openings: jobs,
            trending_score: (base as f64 / 5_000.0).min(1.0),
            growth_rate: (2.0 + base as f64 / 500.0).min(15.0),
            future_demand: (1.0 + base as f64 / 4_000.0).min(2.5),
            shortage_level: shortage_for(base),
            average_salary: salary_bands(base),
            geographic_hotspots: hotspots(location),
            trending_keywords: vec![
                skill.to_string(),
                "remote".to_string(),
                "full_time".to_string(),
            ],
        })
    }

    fn confidence(&self) -> f64 {
        0.6
    }
}

/// Compiled-in regional outlooks for states with baseline data.
#[async_trait]
impl RegionalDataProvider for StaticProvider {
    async fn outlook(&self, state: &str) -> Result<Option<RegionalOutlook>, MarketError> {
        let outlook = match state {
            "maharashtra" => Some(RegionalOutlook {
                employment_rate: 45.2,
                growth_rate: 4.2,
            }),
            "karnataka" => Some(RegionalOutlook {
                employment_rate: 42.8,
                growth_rate: 3.9,
            }),
            "tamil_nadu" => Some(RegionalOutlook {
                employment_rate: 41.5,
                growth_rate: 3.4,
            }),
            _ => None,
        };
        Ok(outlook)
    }
}

/// Provider backed by the market intelligence HTTP API.
#[derive(Debug, Clone)]
pub struct HttpProvider {
    client: reqwest::Client,
    base_url: String,
}

impl HttpProvider {
    /// Provider against the configured base URL
    /// (`SAARTHI_MARKET_BASE_URL` overrides the default).
    pub fn new() -> Self {
        Self::with_base_url(market_api_base())
    }

    /// Provider against an explicit base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for HttpProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketDataProvider for HttpProvider {
    async fn fetch_signals(
        &self,
        skill: &str,
        location: Option<&str>,
    ) -> Result<MarketSignals, MarketError> {
        let mut request = self
            .client
            .get(format!("{}/market/skills/{}", self.base_url, skill));
        if let Some(location) = location {
            request = request.query(&[("location", location)]);
        }
        let response = request
            .send()
            .await
            .map_err(|e| MarketError::Provider(e.into()))?;
        if !response.status().is_success() {
            return Err(MarketError::Provider(anyhow::anyhow!(
                "market API error ({}) for skill {}",
                response.status(),
                skill
            )));
        }
        response
            .json::<MarketSignals>()
            .await
            .map_err(|e| MarketError::Provider(e.into()))
    }

    fn confidence(&self) -> f64 {
        0.85
    }
}

#[async_trait]
impl RegionalDataProvider for HttpProvider {
    async fn outlook(&self, state: &str) -> Result<Option<RegionalOutlook>, MarketError> {
        let response = self
            .client
            .get(format!("{}/regional/{}", self.base_url, state))
            .send()
            .await
            .map_err(|e| MarketError::Provider(e.into()))?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(MarketError::Provider(anyhow::anyhow!(
                "regional API error ({}) for state {}",
                response.status(),
                state
            )));
        }
        let outlook = response
            .json::<RegionalOutlook>()
            .await
            .map_err(|e| MarketError::Provider(e.into()))?;
        Ok(Some(outlook))
    }
}
