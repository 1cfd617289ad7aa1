use std::sync::Arc;

use anyhow::{Context, Result};
use quote_core::store::{DraftStoreRegistry, MemoryDraftStoreFactory, StoreConfig};
use quote_core::{DraftStore, PricingCatalog};
use quote_data::CatalogLoader;
use quote_mailer::EmailJsClient;
use quote_store_sqlite::SqliteDraftStoreFactory;
use tracing::{debug, info, warn};

use crate::config::{AppConfig, CatalogConfig};

/// Construct a [`DraftStoreRegistry`] with every backend compiled into this binary.
pub fn build_registry() -> DraftStoreRegistry {
    let mut registry = DraftStoreRegistry::new();
    registry.register(Box::new(SqliteDraftStoreFactory));
    registry.register(Box::new(MemoryDraftStoreFactory));
    registry
}

pub async fn open_store(config: &StoreConfig) -> Result<Arc<dyn DraftStore>> {
    debug!("opening {} draft store", config.backend);
    let store = build_registry()
        .create(config)
        .await
        .with_context(|| format!("Failed to open {} draft store", config.backend))?;
    Ok(Arc::from(store))
}

pub fn load_catalog(config: &CatalogConfig) -> Result<PricingCatalog> {
    match &config.path {
        Some(path) => {
            let catalog = CatalogLoader::load_path(path)
                .with_context(|| format!("Failed to load catalog: {}", path.display()))?;
            info!(path = %path.display(), "loaded pricing catalog");
            Ok(catalog)
        }
        None => Ok(PricingCatalog::builtin()),
    }
}

/// Builds the email client. An incomplete `[email]` section is not fatal:
/// the wizard still runs and a submit reports the problem.
pub fn build_sender(config: &AppConfig) -> Result<EmailJsClient> {
    if let Err(e) = config.email.validate() {
        warn!(error = %e, "email delivery is not configured");
    }
    EmailJsClient::new(config.email.clone()).context("Failed to build email client")
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use quote_core::ServiceKind;
    use quote_core::store::DRAFT_KEY;

    use super::*;

    #[test]
    fn registry_offers_memory_and_sqlite() {
        assert_eq!(build_registry().available_backends(), vec!["memory", "sqlite"]);
    }

    #[tokio::test]
    async fn opens_memory_store() {
        let config = StoreConfig {
            backend: "memory".to_string(),
            connection_string: String::new(),
        };

        let store = open_store(&config).await.unwrap();
        store.save(DRAFT_KEY, "{}").await.unwrap();

        assert_eq!(store.load(DRAFT_KEY).await.unwrap(), Some("{}".to_string()));
    }

    #[tokio::test]
    async fn unknown_backend_fails_with_context() {
        let config = StoreConfig {
            backend: "redis".to_string(),
            connection_string: String::new(),
        };

        let err = open_store(&config).await.err().unwrap();

        assert!(format!("{err:#}").contains("redis"));
    }

    #[test]
    fn catalog_defaults_to_builtin() {
        let catalog = load_catalog(&CatalogConfig::default()).unwrap();

        assert_eq!(catalog, PricingCatalog::builtin());
    }

    #[test]
    fn catalog_loads_from_csv() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "section,key,label,base_price,description\nservice,web,Sites,900,"
        )
        .unwrap();

        let catalog = load_catalog(&CatalogConfig {
            path: Some(file.path().to_path_buf()),
        })
        .unwrap();

        assert_eq!(catalog.service(ServiceKind::Web).map(|c| c.base_price), Some(900));
    }

    #[test]
    fn unconfigured_email_still_builds_a_client() {
        assert!(build_sender(&AppConfig::default()).is_ok());
    }
}
