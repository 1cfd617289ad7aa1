use async_trait::async_trait;
use thiserror::Error;

/// Key the wizard draft is stored under.
pub const DRAFT_KEY: &str = "wizard_data";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Record not found")]
    NotFound,

    #[error("Storage backend error: {0}")]
    Backend(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Durable key-value storage for serialized form drafts.
#[async_trait]
pub trait DraftStore: Send + Sync {
    /// Returns `None` when nothing is stored under `key`.
    async fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn save(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Deletes `key`. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
}
