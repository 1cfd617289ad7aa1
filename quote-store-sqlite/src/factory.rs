use async_trait::async_trait;
use quote_core::store::{DraftStoreFactory, StoreConfig};
use quote_core::{DraftStore, StoreError};
use tracing::info;

use crate::store::SqliteDraftStore;

/// Turns a configured connection string into a sqlx URL.
///
/// * `:memory:` becomes `sqlite::memory:`.
/// * Anything already starting with `sqlite:` is used as is.
/// * A bare path becomes `sqlite:<path>?mode=rwc`, creating the file if needed.
pub fn connection_url(connection_string: &str) -> String {
    let trimmed = connection_string.trim();
    if trimmed == ":memory:" {
        "sqlite::memory:".to_string()
    } else if trimmed.starts_with("sqlite:") {
        trimmed.to_string()
    } else {
        format!("sqlite:{}?mode=rwc", trimmed)
    }
}

/// [`DraftStoreFactory`] for SQLite.
///
/// ```rust,no_run
/// use quote_core::store::DraftStoreRegistry;
/// use quote_store_sqlite::SqliteDraftStoreFactory;
///
/// let mut registry = DraftStoreRegistry::new();
/// registry.register(Box::new(SqliteDraftStoreFactory));
/// ```
pub struct SqliteDraftStoreFactory;

#[async_trait]
impl DraftStoreFactory for SqliteDraftStoreFactory {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    /// Opens the database and applies pending migrations.
    async fn create(
        &self,
        config: &StoreConfig,
    ) -> Result<Box<dyn DraftStore>, StoreError> {
        let url = connection_url(&config.connection_string);
        let store = SqliteDraftStore::new(&url)
            .await
            .map_err(|e| StoreError::Connection(format!("{e:#}")))?;
        store
            .run_migrations()
            .await
            .map_err(|e| StoreError::Backend(format!("{e:#}")))?;
        info!(%url, "sqlite draft store ready");
        Ok(Box::new(store))
    }
}
