//! Storage module - the key-value port used for session persistence.

mod storage_traits;

pub use storage_traits::StoragePort;
