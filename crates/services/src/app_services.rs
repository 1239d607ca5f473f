use std::sync::Arc;

use flashcards_core::{AssetRoot, Effect};
use storage::Storage;

use crate::controller::FlashcardController;
use crate::effects::EffectRunner;
use crate::error::{AppServicesError, ControllerError};
use crate::media_service::MediaService;
use crate::preferences_service::PreferencesService;
use crate::progress_service::ProgressService;
use crate::word_bank_service::WordBankService;

/// Assembles the storage-backed services shared by the UI.
///
/// Media backends are host-specific and supplied later via `effect_runner`.
#[derive(Clone)]
pub struct FlashcardServices {
    word_bank: Arc<WordBankService>,
    progress: Arc<ProgressService>,
    preferences: Arc<PreferencesService>,
}

impl FlashcardServices {
    #[must_use]
    pub fn from_storage(storage: &Storage) -> Self {
        Self {
            word_bank: Arc::new(WordBankService::new(Arc::clone(&storage.kv))),
            progress: Arc::new(ProgressService::new(Arc::clone(&storage.kv))),
            preferences: Arc::new(PreferencesService::new(Arc::clone(&storage.kv))),
        }
    }

    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage))
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_storage(&Storage::in_memory())
    }

    /// Load the session and perform the first render.
    ///
    /// # Errors
    ///
    /// Returns `ControllerError` if the bank or preferences cannot be loaded.
    pub async fn initialize_controller(
        &self,
        assets: AssetRoot,
    ) -> Result<(FlashcardController, Vec<Effect>), ControllerError> {
        FlashcardController::initialize(&self.word_bank, &self.preferences, assets).await
    }

    #[must_use]
    pub fn effect_runner(&self, media: MediaService) -> EffectRunner {
        EffectRunner::new(
            Arc::clone(&self.progress),
            Arc::clone(&self.preferences),
            media,
        )
    }

    #[must_use]
    pub fn word_bank(&self) -> Arc<WordBankService> {
        Arc::clone(&self.word_bank)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn preferences(&self) -> Arc<PreferencesService> {
        Arc::clone(&self.preferences)
    }
}
