//! Image and audio fallback chains.
//!
//! Backends are host adapters (a webview in the desktop app, fakes in tests)
//! and may be `!Send`.

use std::rc::Rc;

use async_trait::async_trait;
use flashcards_core::model::{AudioOutcome, ImageOutcome, SPEECH_LANG};

use crate::error::MediaError;

#[async_trait(?Send)]
pub trait ImageLoader {
    /// Resolve once the image at `src` has loaded or failed.
    async fn load(&self, src: &str) -> Result<(), MediaError>;
}

#[async_trait(?Send)]
pub trait AudioPlayer {
    /// Start playback of `src`; fails if the file is missing or playback is blocked.
    async fn play(&self, src: &str) -> Result<(), MediaError>;
}

#[async_trait(?Send)]
pub trait SpeechSynthesizer {
    /// Whether the host can speak at all.
    async fn is_available(&self) -> bool;

    async fn speak(&self, text: &str, lang: &str) -> Result<(), MediaError>;
}

#[derive(Clone)]
pub struct MediaService {
    images: Rc<dyn ImageLoader>,
    audio: Rc<dyn AudioPlayer>,
    speech: Option<Rc<dyn SpeechSynthesizer>>,
}

impl MediaService {
    #[must_use]
    pub fn new(
        images: Rc<dyn ImageLoader>,
        audio: Rc<dyn AudioPlayer>,
        speech: Option<Rc<dyn SpeechSynthesizer>>,
    ) -> Self {
        Self {
            images,
            audio,
            speech,
        }
    }

    /// Load `src`; on failure hand back the declared `fallback` instead.
    ///
    /// The fallback itself is not probed.
    pub async fn load_image(&self, src: &str, fallback: &str) -> ImageOutcome {
        match self.images.load(src).await {
            Ok(()) => ImageOutcome::Loaded {
                src: src.to_owned(),
            },
            Err(err) => {
                tracing::warn!(%src, %err, "image failed to load, using fallback");
                ImageOutcome::Fallback {
                    src: fallback.to_owned(),
                }
            }
        }
    }

    /// Play `src`, falling back to speaking `word` when playback fails.
    pub async fn play_audio(&self, src: &str, word: &str) -> AudioOutcome {
        let Err(err) = self.audio.play(src).await else {
            return AudioOutcome::Played;
        };
        tracing::error!(%src, %err, "error playing audio");

        let Some(speech) = self.speech.as_ref() else {
            tracing::debug!("no speech synthesizer configured");
            return AudioOutcome::Silent;
        };
        if !speech.is_available().await {
            tracing::debug!("speech synthesis unavailable");
            return AudioOutcome::Silent;
        }

        match speech.speak(word, SPEECH_LANG).await {
            Ok(()) => AudioOutcome::Spoken,
            Err(err) => {
                tracing::warn!(word, %err, "speech synthesis failed");
                AudioOutcome::Silent
            }
        }
    }
}
