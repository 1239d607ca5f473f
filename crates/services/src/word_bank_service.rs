use std::sync::Arc;

use flashcards_core::WordEntry;
use flashcards_core::model::{defaults::default_bank, validate_bank};
use storage::repository::{KeyValueStore, StorageKey, load_json, save_json};

use crate::error::WordBankError;

/// Loads and replaces the durable word bank.
#[derive(Clone)]
pub struct WordBankService {
    store: Arc<dyn KeyValueStore>,
}

impl WordBankService {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load the persisted bank, installing the built-in default on first run.
    ///
    /// A persisted empty bank is returned as-is.
    ///
    /// # Errors
    ///
    /// Returns `WordBankError::Storage` if the store fails or the persisted
    /// value is not a valid word list.
    pub async fn load_or_seed(&self) -> Result<Vec<WordEntry>, WordBankError> {
        let persisted: Option<Vec<WordEntry>> =
            load_json(self.store.as_ref(), StorageKey::Words).await?;
        if let Some(words) = persisted {
            tracing::debug!(count = words.len(), "loaded word bank");
            return Ok(words);
        }

        let words = default_bank();
        save_json(self.store.as_ref(), StorageKey::Words, &words).await?;
        tracing::info!(count = words.len(), "installed default word bank");
        Ok(words)
    }

    /// Install the default bank only if nothing is persisted yet.
    ///
    /// Returns `true` when the default was written.
    ///
    /// # Errors
    ///
    /// Returns `WordBankError::Storage` on store failures.
    pub async fn seed_default_if_missing(&self) -> Result<bool, WordBankError> {
        if self.store.get(StorageKey::Words).await?.is_some() {
            return Ok(false);
        }
        self.replace(&default_bank()).await?;
        Ok(true)
    }

    /// Validate and persist `entries` as the new bank.
    ///
    /// # Errors
    ///
    /// Returns `WordBankError::Word` for blank or duplicate words, or
    /// `WordBankError::Storage` if the write fails.
    pub async fn replace(&self, entries: &[WordEntry]) -> Result<(), WordBankError> {
        validate_bank(entries)?;
        save_json(self.store.as_ref(), StorageKey::Words, entries).await?;
        tracing::info!(count = entries.len(), "replaced word bank");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flashcards_core::WordError;
    use storage::InMemoryStore;

    fn service() -> (InMemoryStore, WordBankService) {
        let store = InMemoryStore::new();
        let svc = WordBankService::new(Arc::new(store.clone()));
        (store, svc)
    }

    #[tokio::test]
    async fn first_load_persists_default_bank() {
        let (store, svc) = service();
        let words = svc.load_or_seed().await.unwrap();
        assert_eq!(words, default_bank());

        let persisted: Vec<WordEntry> = load_json(&store, StorageKey::Words)
            .await
            .unwrap()
            .expect("bank persisted");
        assert_eq!(persisted, words);
    }

    #[tokio::test]
    async fn later_loads_return_persisted_bank() {
        let (store, svc) = service();
        store
            .set(StorageKey::Words, r#"[{"word":"sun","topic":"nature"}]"#)
            .await
            .unwrap();
        let words = svc.load_or_seed().await.unwrap();
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].word, "sun");
    }

    #[tokio::test]
    async fn persisted_empty_bank_is_not_reseeded() {
        let (store, svc) = service();
        store.set(StorageKey::Words, "[]").await.unwrap();
        assert!(svc.load_or_seed().await.unwrap().is_empty());
        assert!(!svc.seed_default_if_missing().await.unwrap());
    }

    #[tokio::test]
    async fn corrupt_bank_is_an_error() {
        let (store, svc) = service();
        store.set(StorageKey::Words, "{oops").await.unwrap();
        assert!(matches!(
            svc.load_or_seed().await,
            Err(WordBankError::Storage(_))
        ));
    }

    #[tokio::test]
    async fn replace_rejects_duplicate_words() {
        let (store, svc) = service();
        let mut words = default_bank();
        words.push(words[0].clone());
        let err = svc.replace(&words).await.unwrap_err();
        assert!(matches!(err, WordBankError::Word(WordError::DuplicateWord(_))));
        assert_eq!(store.get(StorageKey::Words).await.unwrap(), None);
    }
}
