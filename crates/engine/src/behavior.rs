//! User behavior log backing collaborative filtering.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::info;

/// Retrain cadence: the hook fires on every Nth recorded feedback.
pub const RETRAIN_CADENCE: u64 = 10;

/// Historical behavior for one user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserBehavior {
    /// User id.
    pub user_id: String,
    /// Ids of resources the user completed, in completion order.
    pub completed_resources: Vec<String>,
    /// Ratings by resource id, each in [0, 5].
    pub resource_ratings: BTreeMap<String, f64>,
    /// Hours spent by resource id.
    pub time_spent: BTreeMap<String, u32>,
    /// Observed learning patterns, free-form key/value.
    pub learning_patterns: BTreeMap<String, String>,
}

impl UserBehavior {
    fn new(user_id: &str) -> Self {
        UserBehavior {
            user_id: user_id.to_string(),
            ..Default::default()
        }
    }
}

/// One feedback submission. All fields optional; absent fields leave the
/// stored behavior unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Feedback {
    /// Rating in [0, 5].
    pub rating: Option<f64>,
    /// Whether the user completed the resource.
    pub completed: Option<bool>,
    /// Hours spent on the resource.
    pub time_spent: Option<u32>,
    /// Learning-pattern observations to merge in.
    #[serde(default)]
    pub learning_patterns: BTreeMap<String, String>,
}

/// Hook fired every [`RETRAIN_CADENCE`] feedback events.
///
/// Implementations may refit lightweight outcome estimators here; the
/// default only logs.
pub trait RetrainHook: Send + Sync {
    /// Called with the post-append behavior snapshot.
    fn retrain(&self, snapshot: &HashMap<String, UserBehavior>);
}

/// Default hook: records that a retrain point was reached.
#[derive(Debug, Default)]
pub struct LoggingRetrainHook;

impl RetrainHook for LoggingRetrainHook {
    fn retrain(&self, snapshot: &HashMap<String, UserBehavior>) {
        info!(users = snapshot.len(), "retrain point reached");
    }
}

/// Append-only behavior log with copy-on-write snapshots.
///
/// Readers take an `Arc` snapshot and are unaffected by subsequent appends;
/// writers clone the map, mutate the clone, and swap the pointer.
pub struct BehaviorLog {
    entries: RwLock<Arc<HashMap<String, UserBehavior>>>,
    feedback_count: RwLock<u64>,
    hook: Box<dyn RetrainHook>,
}

impl Default for BehaviorLog {
    fn default() -> Self {
        Self::new(Box::new(LoggingRetrainHook))
    }
}

impl BehaviorLog {
    /// Empty log with the given retrain hook.
    pub fn new(hook: Box<dyn RetrainHook>) -> Self {
        Self {
            entries: RwLock::new(Arc::new(HashMap::new())),
            feedback_count: RwLock::new(0),
            hook,
        }
    }

    /// Log pre-seeded with historical behavior.
    pub fn with_history(history: HashMap<String, UserBehavior>, hook: Box<dyn RetrainHook>) -> Self {
        Self {
            entries: RwLock::new(Arc::new(history)),
            feedback_count: RwLock::new(0),
            hook,
        }
    }

    /// Current snapshot; cheap to clone and stable under appends.
    pub fn snapshot(&self) -> Arc<HashMap<String, UserBehavior>> {
        Arc::clone(&self.entries.read())
    }

    /// Record one feedback event for a (user, resource) pair.
    ///
    /// Fires the retrain hook when the running feedback count reaches a
    /// multiple of [`RETRAIN_CADENCE`].
    pub fn record(&self, user_id: &str, resource_id: &str, feedback: &Feedback) {
        let updated = {
            let mut entries = self.entries.write();
            let mut next: HashMap<String, UserBehavior> = (**entries).clone();
            let behavior = next
                .entry(user_id.to_string())
                .or_insert_with(|| UserBehavior::new(user_id));

            if let Some(rating) = feedback.rating {
                behavior
                    .resource_ratings
                    .insert(resource_id.to_string(), rating);
            }
            if feedback.completed == Some(true)
                && !behavior.completed_resources.iter().any(|id| id == resource_id)
            {
                behavior.completed_resources.push(resource_id.to_string());
            }
            if let Some(hours) = feedback.time_spent {
                behavior.time_spent.insert(resource_id.to_string(), hours);
            }
            behavior
                .learning_patterns
                .extend(feedback.learning_patterns.clone());

            let next = Arc::new(next);
            *entries = Arc::clone(&next);
            next
        };

        let count = {
            let mut count = self.feedback_count.write();
            *count += 1;
            *count
        };
        if count % RETRAIN_CADENCE == 0 {
            self.hook.retrain(&updated);
        }
    }

    /// Number of users with recorded behavior.
    pub fn user_count(&self) -> usize {
        self.entries.read().len()
    }
}
