//! Cached market-insight orchestration over a pluggable provider.

use crate::provider::MarketDataProvider;
use crate::types::{process_signals, MarketError, MarketInsight};
use chrono::{Duration as ChronoDuration, Utc};
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tracing::{debug, warn};

/// Default cache time-to-live.
pub const DEFAULT_CACHE_TTL_HOURS: i64 = 6;
/// Default per-fetch deadline.
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 300;

type CacheKey = (String, String);

/// Market intelligence service with a per-(skill, location) insight cache.
///
/// Reads outside the TTL, provider errors, and timeouts all degrade to the
/// fixed fallback insight for the affected skill only. Fallbacks are never
/// cached, so the next request retries the provider.
pub struct MarketIntelligence {
    provider: Arc<dyn MarketDataProvider>,
    cache: RwLock<HashMap<CacheKey, MarketInsight>>,
    cache_ttl: ChronoDuration,
    fetch_timeout: Duration,
}

impl MarketIntelligence {
    /// Service with the default TTL and fetch deadline.
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self::with_limits(
            provider,
            ChronoDuration::hours(DEFAULT_CACHE_TTL_HOURS),
            Duration::from_millis(DEFAULT_FETCH_TIMEOUT_MS),
        )
    }

    /// Service with explicit cache TTL and fetch deadline.
    pub fn with_limits(
        provider: Arc<dyn MarketDataProvider>,
        cache_ttl: ChronoDuration,
        fetch_timeout: Duration,
    ) -> Self {
        Self {
            provider,
            cache: RwLock::new(HashMap::new()),
            cache_ttl,
            fetch_timeout,
        }
    }

    fn cache_key(skill: &str, location: Option<&str>) -> CacheKey {
        (skill.to_string(), location.unwrap_or("national").to_string())
    }

    fn cached(&self, key: &CacheKey) -> Option<MarketInsight> {
        let cache = self.cache.read();
        let insight = cache.get(key)?;
        if Utc::now() - insight.fetched_at < self.cache_ttl {
            Some(insight.clone())
        } else {
            None
        }
    }

    async fn fetch(&self, skill: &str, location: Option<&str>) -> Result<MarketInsight, MarketError> {
        let signals = tokio::time::timeout(
            self.fetch_timeout,
            self.provider.fetch_signals(skill, location),
        )
        .await
        .map_err(|_| MarketError::Timeout(self.fetch_timeout.as_millis() as u64))??;
        Ok(process_signals(skill, &signals, self.provider.confidence()))
    }

    /// Insight for one skill, from cache when fresh.
    ///
    /// Never fails: a provider error or timeout yields the fallback insight.
    pub async fn insight(&self, skill: &str, location: Option<&str>) -> MarketInsight {
        let key = Self::cache_key(skill, location);
        if let Some(insight) = self.cached(&key) {
            debug!(skill, "market cache hit");
            return insight;
        }

        match self.fetch(skill, location).await {
            Ok(insight) => {
                self.cache.write().insert(key, insight.clone());
                insight
            }
            Err(err) => {
                warn!(skill, error = %err, "market fetch failed, using fallback");
                MarketInsight::fallback(skill)
            }
        }
    }

    /// Insights for several skills, fetched concurrently.
    ///
    /// Each skill degrades independently; the result always has one entry
    /// per distinct input skill.
    pub async fn insights(
        self: &Arc<Self>,
        skills: &[String],
        location: Option<&str>,
    ) -> BTreeMap<String, MarketInsight> {
        let mut tasks = JoinSet::new();
        for skill in skills {
            let this = Arc::clone(self);
            let skill = skill.clone();
            let location = location.map(|s| s.to_string());
            tasks.spawn(async move {
                let insight = this.insight(&skill, location.as_deref()).await;
                (skill, insight)
            });
        }

        let mut insights = BTreeMap::new();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((skill, insight)) => {
                    insights.insert(skill, insight);
                }
                Err(err) => warn!(error = %err, "market fetch task panicked"),
            }
        }
        insights
    }

    /// Normalized demand weights in [0, 1] for several skills.
    pub async fn demand_weights(
        self: &Arc<Self>,
        skills: &[String],
        location: Option<&str>,
    ) -> BTreeMap<String, f64> {
        self.insights(skills, location)
            .await
            .into_iter()
            .map(|(skill, insight)| (skill, insight.demand_weight()))
            .collect()
    }

    /// Number of live cache entries. Expired entries are counted until
    /// overwritten.
    pub fn cache_len(&self) -> usize {
        self.cache.read().len()
    }
}
