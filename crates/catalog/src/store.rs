use crate::types::{CatalogError, LearningResource};
use std::collections::HashMap;
use std::path::Path;

/// Read-only catalog capability consumed by the recommendation engine.
///
/// Implementations are expected to be cheap to query: the engine calls
/// `list_all` once per ranking pass and `get_by_id` while resolving
/// behavior-history entries.
pub trait ResourceCatalog: Send + Sync {
    /// All resources in catalog insertion order.
    ///
    /// Insertion order is meaningful: content-based ranking breaks score
    /// ties by it, so implementations must not reorder entries.
    fn list_all(&self) -> &[LearningResource];

    /// Look up a single resource by id.
    fn get_by_id(&self, id: &str) -> Option<&LearningResource>;
}

/// In-memory catalog backed by a validated, order-preserving list.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    resources: Vec<LearningResource>,
    index: HashMap<String, usize>,
}

impl InMemoryCatalog {
    /// Build a catalog from resources, validating every entry.
    ///
    /// Fails on the first invariant violation or duplicate id; a failure
    /// here should abort process start.
    pub fn new(resources: Vec<LearningResource>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(resources.len());
        for (pos, resource) in resources.iter().enumerate() {
            resource.validate()?;
            if index.insert(resource.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateId(resource.id.clone()));
            }
        }
        tracing::debug!(count = resources.len(), "catalog built");
        Ok(Self { resources, index })
    }

    /// Number of resources in the catalog.
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// True when the catalog holds no resources.
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl ResourceCatalog for InMemoryCatalog {
    fn list_all(&self) -> &[LearningResource] {
        &self.resources
    }

    fn get_by_id(&self, id: &str) -> Option<&LearningResource> {
        self.index.get(id).map(|&pos| &self.resources[pos])
    }
}

/// Load and validate a catalog from a JSON file holding an array of
/// resources.
pub fn load_catalog(path: &Path) -> Result<InMemoryCatalog, CatalogError> {
    let raw = std::fs::read_to_string(path)?;
    let resources: Vec<LearningResource> = serde_json::from_str(&raw)?;
    let catalog = InMemoryCatalog::new(resources)?;
    tracing::info!(
        path = %path.display(),
        count = catalog.len(),
        "catalog loaded"
    );
    Ok(catalog)
}
