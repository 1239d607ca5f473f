use std::sync::Arc;

use flashcards_core::{Notification, ProgressList};
use storage::repository::{KeyValueStore, StorageError, StorageKey, load_json, save_json};

use tokio::sync::Mutex;

use crate::error::ProgressError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProgressSummary {
    pub known: usize,
    pub review: usize,
}

/// Learner-curated known / review word lists.
///
/// Lists only grow; a word already present is left alone.
#[derive(Clone)]
pub struct ProgressService {
    store: Arc<dyn KeyValueStore>,
    // Held across each read-modify-write so overlapping marks cannot drop a word.
    write_lock: Arc<Mutex<()>>,
}

impl ProgressService {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Append `word` to `list` unless present, then persist.
    ///
    /// Returns the confirmation to show, or `None` if the word was already listed.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError` if the store cannot be read or written.
    pub async fn mark(
        &self,
        word: &str,
        list: ProgressList,
    ) -> Result<Option<Notification>, ProgressError> {
        let key = key_for(list);
        let _guard = self.write_lock.lock().await;
        let mut words = self.load_list(key).await?;
        if words.iter().any(|existing| existing == word) {
            tracing::debug!(%key, word, "word already listed");
            return Ok(None);
        }

        words.push(word.to_owned());
        save_json(self.store.as_ref(), key, &words).await?;
        tracing::info!(%key, word, "word listed");

        Ok(Some(match list {
            ProgressList::Known => Notification::marked_known(),
            ProgressList::Review => Notification::marked_for_review(),
        }))
    }

    /// # Errors
    ///
    /// Returns `ProgressError` if the store cannot be read.
    pub async fn known_words(&self) -> Result<Vec<String>, ProgressError> {
        self.load_list(StorageKey::KnownWords).await
    }

    /// # Errors
    ///
    /// Returns `ProgressError` if the store cannot be read.
    pub async fn review_words(&self) -> Result<Vec<String>, ProgressError> {
        self.load_list(StorageKey::ReviewWords).await
    }

    /// Counts of both lists.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError` if the store cannot be read.
    pub async fn summary(&self) -> Result<ProgressSummary, ProgressError> {
        Ok(ProgressSummary {
            known: self.known_words().await?.len(),
            review: self.review_words().await?.len(),
        })
    }

    // Absent or unparseable lists read as empty.
    async fn load_list(&self, key: StorageKey) -> Result<Vec<String>, ProgressError> {
        match load_json::<Vec<String>>(self.store.as_ref(), key).await {
            Ok(words) => Ok(words.unwrap_or_default()),
            Err(StorageError::Serialization(reason)) => {
                tracing::warn!(%key, %reason, "corrupt progress list, treating as empty");
                Ok(Vec::new())
            }
            Err(err) => Err(err.into()),
        }
    }
}

fn key_for(list: ProgressList) -> StorageKey {
    match list {
        ProgressList::Known => StorageKey::KnownWords,
        ProgressList::Review => StorageKey::ReviewWords,
    }
}
