use std::sync::Arc;

use flashcards_core::model::{AudioOutcome, ImageOutcome};
use flashcards_core::{Effect, Notification};

use crate::controller::FlashcardController;
use crate::error::ControllerError;
use crate::media_service::MediaService;
use crate::preferences_service::PreferencesService;
use crate::progress_service::ProgressService;

/// What finished after running an effect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Completion {
    Image(ImageOutcome),
    Audio(AudioOutcome),
    Notify(Notification),
    Saved,
}

/// Performs controller effects against storage and media backends.
#[derive(Clone)]
pub struct EffectRunner {
    progress: Arc<ProgressService>,
    preferences: Arc<PreferencesService>,
    media: MediaService,
}

impl EffectRunner {
    #[must_use]
    pub fn new(
        progress: Arc<ProgressService>,
        preferences: Arc<PreferencesService>,
        media: MediaService,
    ) -> Self {
        Self {
            progress,
            preferences,
            media,
        }
    }

    /// Run a single effect.
    ///
    /// Media effects never fail; storage effects propagate their errors.
    /// A mark that changes nothing completes with `Saved` and no notification.
    ///
    /// # Errors
    ///
    /// Returns `ControllerError` when persisting progress or preferences fails.
    pub async fn run(&self, effect: Effect) -> Result<Completion, ControllerError> {
        match effect {
            Effect::LoadImage { src, fallback } => Ok(Completion::Image(
                self.media.load_image(&src, &fallback).await,
            )),
            Effect::PlayAudio { src, word } => {
                Ok(Completion::Audio(self.media.play_audio(&src, &word).await))
            }
            Effect::SavePreferences(preferences) => {
                self.preferences.save(&preferences).await?;
                Ok(Completion::Saved)
            }
            Effect::MarkWord { word, list } => {
                let notification = self.progress.mark(&word, list).await?;
                Ok(notification.map_or(Completion::Saved, Completion::Notify))
            }
        }
    }

    /// Run effects in order, applying image outcomes back to `controller`.
    ///
    /// Returns the notifications to show.
    ///
    /// # Errors
    ///
    /// Stops at the first storage failure.
    pub async fn run_all(
        &self,
        controller: &mut FlashcardController,
        effects: Vec<Effect>,
    ) -> Result<Vec<Notification>, ControllerError> {
        let mut notifications = Vec::new();
        for effect in effects {
            match self.run(effect).await? {
                Completion::Image(outcome) => controller.apply_image_outcome(&outcome),
                Completion::Notify(notification) => notifications.push(notification),
                Completion::Audio(_) | Completion::Saved => {}
            }
        }
        Ok(notifications)
    }
}
