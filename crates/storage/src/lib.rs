//! Walletwise Storage - file-backed implementation of the core `StoragePort`.
//!
//! Credentials go to a [`FileSecretStore`], encrypted at rest when a key is
//! configured. Everything else goes to a plain [`JsonFileStore`].

pub mod json_store;
pub mod local_storage;
pub mod secrets;

pub use json_store::JsonFileStore;
pub use local_storage::LocalStorage;
pub use secrets::FileSecretStore;

/// File name of the secure namespace inside the data directory.
pub const SECRETS_FILE_NAME: &str = "secrets.json";

/// File name of the plain namespace inside the data directory.
pub const STORE_FILE_NAME: &str = "store.json";
