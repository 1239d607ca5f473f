use std::sync::Arc;

use flashcards_core::Preferences;
use storage::repository::{KeyValueStore, StorageError, StorageKey, load_json, save_json};
use tokio::sync::Mutex;

use crate::error::PreferencesError;

/// Loads and saves the three display flags as one record.
#[derive(Clone)]
pub struct PreferencesService {
    store: Arc<dyn KeyValueStore>,
    // Saves write three keys; this keeps two saves from interleaving.
    write_lock: Arc<Mutex<()>>,
}

impl PreferencesService {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Load persisted preferences; absent or unreadable flags take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `PreferencesError` if the store itself cannot be read.
    pub async fn load(&self) -> Result<Preferences, PreferencesError> {
        let defaults = Preferences::default();
        Ok(Preferences {
            auto_play: self.flag(StorageKey::AutoPlay, defaults.auto_play).await?,
            auto_flip: self.flag(StorageKey::AutoFlip, defaults.auto_flip).await?,
            show_image: self.flag(StorageKey::ShowImage, defaults.show_image).await?,
        })
    }

    /// Persist all three flags. Concurrent saves land whole, in call order.
    ///
    /// # Errors
    ///
    /// Returns `PreferencesError` if any write fails.
    pub async fn save(&self, preferences: &Preferences) -> Result<(), PreferencesError> {
        let _guard = self.write_lock.lock().await;
        let store = self.store.as_ref();
        save_json(store, StorageKey::AutoPlay, &preferences.auto_play).await?;
        save_json(store, StorageKey::AutoFlip, &preferences.auto_flip).await?;
        save_json(store, StorageKey::ShowImage, &preferences.show_image).await?;
        Ok(())
    }

    async fn flag(&self, key: StorageKey, default: bool) -> Result<bool, PreferencesError> {
        match load_json::<bool>(self.store.as_ref(), key).await {
            Ok(value) => Ok(value.unwrap_or(default)),
            Err(StorageError::Serialization(reason)) => {
                tracing::warn!(%key, %reason, "unreadable preference flag, using default");
                Ok(default)
            }
            Err(err) => Err(err.into()),
        }
    }
}
