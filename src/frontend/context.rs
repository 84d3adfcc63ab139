use std::sync::Arc;

use anyhow::Context as _;

use crate::engine::schema::FieldCatalog;
use crate::engine::store::PolicyStore;
use crate::shared::config::CONFIG;

/// Shared state handed to every connection task.
pub struct FrontendContext {
    pub catalog: FieldCatalog,
    pub store: Arc<PolicyStore>,
}

impl FrontendContext {
    pub fn from_config() -> anyhow::Result<Arc<Self>> {
        let store = PolicyStore::open(&CONFIG.database.path)
            .with_context(|| format!("opening policies database at {}", CONFIG.database.path))?;

        Ok(Arc::new(Self {
            catalog: FieldCatalog::new(),
            store: Arc::new(store),
        }))
    }

    /// Context over an arbitrary store; used by tests with seeded databases.
    pub fn with_store(store: PolicyStore) -> Arc<Self> {
        Arc::new(Self {
            catalog: FieldCatalog::new(),
            store: Arc::new(store),
        })
    }
}
