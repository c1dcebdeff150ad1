use async_trait::async_trait;
use log::debug;
use std::path::Path;

use walletwise_core::storage::StoragePort;
use walletwise_core::Result;

use crate::json_store::JsonFileStore;
use crate::secrets::FileSecretStore;
use crate::{SECRETS_FILE_NAME, STORE_FILE_NAME};

/// `StoragePort` over two files in one data directory.
pub struct LocalStorage {
    secrets: FileSecretStore,
    store: JsonFileStore,
}

impl LocalStorage {
    pub fn new(secrets: FileSecretStore, store: JsonFileStore) -> Self {
        Self { secrets, store }
    }

    /// Opens `secrets.json` and `store.json` under `data_dir`.
    pub fn open(data_dir: &Path, encryption_key: Option<&str>) -> Result<Self> {
        let secrets = FileSecretStore::new(data_dir.join(SECRETS_FILE_NAME), encryption_key)?;
        debug!(
            "Opening local storage in {} (encrypted secrets: {})",
            data_dir.display(),
            secrets.is_encrypted()
        );
        Ok(Self::new(
            secrets,
            JsonFileStore::new(data_dir.join(STORE_FILE_NAME)),
        ))
    }
}

#[async_trait]
impl StoragePort for LocalStorage {
    async fn save_secure(&self, key: &str, value: &str) -> Result<()> {
        self.secrets.set(key, value)
    }

    async fn get_secure(&self, key: &str) -> Result<Option<String>> {
        self.secrets.get(key)
    }

    async fn remove_secure(&self, key: &str) -> Result<()> {
        self.secrets.delete(key)
    }

    async fn save(&self, key: &str, value: &str) -> Result<()> {
        self.store.set(key, value)
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.store.get(key)
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.store.delete(key)
    }

    async fn clear(&self) -> Result<()> {
        let secrets = self.secrets.clear();
        let store = self.store.clear();
        secrets.and(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tempfile::tempdir;
    use walletwise_core::auth::{
        AccessTokenSource, StorageTokenSource, ACCESS_TOKEN_KEY, USER_KEY,
    };

    #[tokio::test]
    async fn namespaces_are_separate() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::open(dir.path(), None).unwrap();

        storage.save_secure("key", "secret").await.unwrap();
        storage.save("key", "plain").await.unwrap();

        assert_eq!(storage.get_secure("key").await.unwrap().as_deref(), Some("secret"));
        assert_eq!(storage.get("key").await.unwrap().as_deref(), Some("plain"));

        storage.remove_secure("key").await.unwrap();
        assert!(storage.get_secure("key").await.unwrap().is_none());
        assert_eq!(storage.get("key").await.unwrap().as_deref(), Some("plain"));

        assert!(dir.path().join(SECRETS_FILE_NAME).exists());
        assert!(dir.path().join(STORE_FILE_NAME).exists());
    }

    #[tokio::test]
    async fn clear_wipes_both_namespaces() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::open(dir.path(), Some("0123456789abcdef0123456789abcdef"))
            .unwrap();
        storage.save_secure(ACCESS_TOKEN_KEY, "tok").await.unwrap();
        storage.save(USER_KEY, "{}").await.unwrap();

        storage.clear().await.unwrap();

        assert!(storage.get_secure(ACCESS_TOKEN_KEY).await.unwrap().is_none());
        assert!(storage.get(USER_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn clear_recovers_from_rotated_key() {
        let dir = tempdir().unwrap();
        LocalStorage::open(dir.path(), Some("0123456789abcdef0123456789abcdef"))
            .unwrap()
            .save_secure(ACCESS_TOKEN_KEY, "tok")
            .await
            .unwrap();

        let storage = LocalStorage::open(dir.path(), Some("fedcba9876543210fedcba9876543210"))
            .unwrap();
        assert!(storage.remove_secure(ACCESS_TOKEN_KEY).await.is_err());

        storage.clear().await.unwrap();
        assert!(storage.get_secure(ACCESS_TOKEN_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn token_source_reads_persisted_token() {
        let dir = tempdir().unwrap();
        let storage: Arc<dyn StoragePort> = Arc::new(LocalStorage::open(dir.path(), None).unwrap());
        let tokens = StorageTokenSource::new(storage.clone());

        assert!(tokens.access_token().await.unwrap().is_none());
        storage.save_secure(ACCESS_TOKEN_KEY, "abc").await.unwrap();
        assert_eq!(tokens.access_token().await.unwrap().as_deref(), Some("abc"));
    }
}
