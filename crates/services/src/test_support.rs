use async_trait::async_trait;
use storage::InMemoryStore;
use storage::repository::{KeyValueStore, StorageError, StorageKey};

/// In-memory store that yields to the executor before every access, so
/// concurrent callers interleave the way they do against `SQLite`.
#[derive(Clone, Default)]
pub(crate) struct YieldingStore {
    pub(crate) inner: InMemoryStore,
}

#[async_trait]
impl KeyValueStore for YieldingStore {
    async fn get(&self, key: StorageKey) -> Result<Option<String>, StorageError> {
        tokio::task::yield_now().await;
        self.inner.get(key).await
    }

    async fn set(&self, key: StorageKey, value: &str) -> Result<(), StorageError> {
        tokio::task::yield_now().await;
        self.inner.set(key, value).await
    }
}
