//! Media backends that run inside the desktop webview.

use std::rc::Rc;

use async_trait::async_trait;
use dioxus::document::eval;
use services::{AudioPlayer, ImageLoader, MediaError, MediaService, SpeechSynthesizer};

mod scripts;

use scripts::{audio_play_script, image_probe_script, speak_script, speech_available_script};

#[derive(Clone, Copy, Debug, Default)]
pub struct WebviewImageLoader;

#[async_trait(?Send)]
impl ImageLoader for WebviewImageLoader {
    async fn load(&self, src: &str) -> Result<(), MediaError> {
        let loaded = eval(&image_probe_script(src))
            .join::<bool>()
            .await
            .map_err(|err| MediaError::Backend(format!("{err:?}")))?;
        if loaded {
            Ok(())
        } else {
            Err(MediaError::NotFound(src.to_owned()))
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct WebviewAudioPlayer;

#[async_trait(?Send)]
impl AudioPlayer for WebviewAudioPlayer {
    async fn play(&self, src: &str) -> Result<(), MediaError> {
        let status = eval(&audio_play_script(src))
            .join::<String>()
            .await
            .map_err(|err| MediaError::Backend(format!("{err:?}")))?;
        match status.as_str() {
            "ok" => Ok(()),
            "NotAllowedError" => Err(MediaError::Blocked(src.to_owned())),
            "NotSupportedError" => Err(MediaError::NotFound(src.to_owned())),
            other => Err(MediaError::Backend(other.to_owned())),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct WebviewSpeech;

#[async_trait(?Send)]
impl SpeechSynthesizer for WebviewSpeech {
    async fn is_available(&self) -> bool {
        eval(speech_available_script())
            .join::<bool>()
            .await
            .unwrap_or(false)
    }

    async fn speak(&self, text: &str, lang: &str) -> Result<(), MediaError> {
        eval(&speak_script(text, lang))
            .join::<bool>()
            .await
            .map(|_| ())
            .map_err(|err| MediaError::Backend(format!("{err:?}")))
    }
}

/// Media chain wired to the webview.
#[must_use]
pub fn webview_media() -> MediaService {
    MediaService::new(
        Rc::new(WebviewImageLoader),
        Rc::new(WebviewAudioPlayer),
        Some(Rc::new(WebviewSpeech) as Rc<dyn SpeechSynthesizer>),
    )
}
