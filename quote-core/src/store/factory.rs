use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::draft_store::{DraftStore, StoreError};

/// Backend-agnostic draft store configuration.
///
/// `backend` must match the [`DraftStoreFactory::backend_name`] of a
/// registered factory.  `connection_string` is passed through to that
/// factory unchanged; its meaning is backend-specific.
///
/// | backend  | connection_string examples                    |
/// |----------|-----------------------------------------------|
/// | `sqlite` | `drafts.db`, `sqlite:drafts.db?mode=rwc`, `:memory:` |
/// | `memory` | ignored                                       |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Lowercase identifier matching a registered factory (e.g. `"sqlite"`).
    pub backend: String,
    /// Opaque value forwarded to the factory's `create` method.
    pub connection_string: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: "sqlite".to_string(),
            connection_string: "sqlite:drafts.db?mode=rwc".to_string(),
        }
    }
}

/// One implementation per storage backend, registered with a
/// [`DraftStoreRegistry`] at startup.
#[async_trait]
pub trait DraftStoreFactory: Send + Sync {
    /// Unique, lowercase identifier for this backend.
    fn backend_name(&self) -> &'static str;

    /// Open (or create) the store described by `config`.
    async fn create(&self, config: &StoreConfig) -> Result<Box<dyn DraftStore>, StoreError>;
}

/// Registry of [`DraftStoreFactory`] instances, keyed by backend name.
pub struct DraftStoreRegistry {
    factories: HashMap<&'static str, Box<dyn DraftStoreFactory>>,
}

impl DraftStoreRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a backend factory, replacing any factory with the same name.
    pub fn register(&mut self, factory: Box<dyn DraftStoreFactory>) {
        self.factories.insert(factory.backend_name(), factory);
    }

    /// Names of every registered backend, sorted alphabetically.
    pub fn available_backends(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Dispatch to the factory that matches `config.backend`.
    ///
    /// # Errors
    /// * [`StoreError::Configuration`] when no factory is registered for the
    ///   requested backend name.
    /// * Any error the chosen factory itself returns.
    pub async fn create(&self, config: &StoreConfig) -> Result<Box<dyn DraftStore>, StoreError> {
        let factory = self
            .factories
            .get(config.backend.as_str())
            .ok_or_else(|| {
                StoreError::Configuration(format!(
                    "unknown backend '{}'; available: {:?}",
                    config.backend,
                    self.available_backends()
                ))
            })?;

        factory.create(config).await
    }
}

impl Default for DraftStoreRegistry {
    fn default() -> Self {
        Self::new()
    }
}
