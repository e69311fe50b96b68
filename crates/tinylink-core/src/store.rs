use crate::error::StorageError;
use async_trait::async_trait;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// A read-only view of a key-value store.
///
/// This trait provides only the read operations from [`Store`], allowing the
/// lookup path to hold read-only access.
#[async_trait]
pub trait ReadStore: Send + Sync + 'static {
    /// Retrieves the value stored under `key`.
    /// Returns `None` if the key does not exist.
    async fn get(&self, key: &str) -> Result<Option<String>>;
}

/// A durable key-value store holding raw string values.
///
/// Backends are opaque: the registry only relies on the operations below and
/// performs no retries of its own.
#[async_trait]
pub trait Store: ReadStore {
    /// Writes `value` under `key`, replacing any previous value.
    async fn put(&self, key: &str, value: &str) -> Result<()>;

    /// Writes `value` under `key` only if the key is absent.
    ///
    /// Returns `None` when the value was written, or the value already present
    /// (which is left untouched) otherwise. The check and the write must be a
    /// single atomic step of the backend.
    async fn put_if_absent(&self, key: &str, value: &str) -> Result<Option<String>>;
}
