//! Storage port.
//!
//! Two namespaces are exposed: a "secure" one for credentials, which
//! implementations must protect from casual inspection, and a "plain" one
//! for cached, non-sensitive records.

use async_trait::async_trait;

use crate::errors::Result;

/// Key-value contract the use cases rely on for session state.
#[async_trait]
pub trait StoragePort: Send + Sync {
    /// Stores a value in the secure namespace, replacing any previous value.
    async fn save_secure(&self, key: &str, value: &str) -> Result<()>;

    /// Reads a value from the secure namespace.
    async fn get_secure(&self, key: &str) -> Result<Option<String>>;

    /// Removes a value from the secure namespace. Missing keys are not an error.
    async fn remove_secure(&self, key: &str) -> Result<()>;

    /// Stores a value in the plain namespace.
    async fn save(&self, key: &str, value: &str) -> Result<()>;

    async fn get(&self, key: &str) -> Result<Option<String>>;

    async fn remove(&self, key: &str) -> Result<()>;

    /// Wipes both namespaces.
    async fn clear(&self) -> Result<()>;
}
