use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

/// The persisted keys. Their string forms are the on-disk key names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Words,
    KnownWords,
    ReviewWords,
    AutoPlay,
    AutoFlip,
    ShowImage,
}

impl StorageKey {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            StorageKey::Words => "flashcardWords",
            StorageKey::KnownWords => "knownWords",
            StorageKey::ReviewWords => "reviewWords",
            StorageKey::AutoPlay => "flashcardAutoPlay",
            StorageKey::AutoFlip => "flashcardAutoFlip",
            StorageKey::ShowImage => "flashcardShowImage",
        }
    }
}

impl std::fmt::Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// String-keyed store of serialized values that survives restarts.
///
/// No read-modify-write sequence built on top of it is atomic.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Fetch the raw serialized value for `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get(&self, key: StorageKey) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    async fn set(&self, key: StorageKey, value: &str) -> Result<(), StorageError>;
}

/// Read and deserialize the JSON value at `key`.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if the stored value is not valid
/// JSON for `T`, or any backend error.
pub async fn load_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: StorageKey,
) -> Result<Option<T>, StorageError> {
    match store.get(key).await? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Serialize `value` as JSON and store it at `key`.
///
/// # Errors
///
/// Returns `StorageError` if serialization or the write fails.
pub async fn save_json<T: Serialize + ?Sized + Sync>(
    store: &dyn KeyValueStore,
    key: StorageKey,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw).await
}

/// Simple in-memory store for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    entries: Arc<Mutex<HashMap<StorageKey, String>>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: StorageKey) -> Result<Option<String>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(&key).cloned())
    }

    async fn set(&self, key: StorageKey, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key, value.to_owned());
        Ok(())
    }
}

/// The key-value backend behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub kv: Arc<dyn KeyValueStore>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            kv: Arc::new(InMemoryStore::new()),
        }
    }
}
