#![forbid(unsafe_code)]

pub mod app_services;
pub mod controller;
pub mod effects;
pub mod error;
pub mod media_service;
pub mod preferences_service;
pub mod progress_service;
pub mod word_bank_service;

#[cfg(test)]
mod test_support;

pub use app_services::FlashcardServices;
pub use controller::FlashcardController;
pub use effects::{Completion, EffectRunner};
pub use error::{
    AppServicesError, ControllerError, MediaError, PreferencesError, ProgressError, WordBankError,
};
pub use media_service::{AudioPlayer, ImageLoader, MediaService, SpeechSynthesizer};
pub use preferences_service::PreferencesService;
pub use progress_service::{ProgressService, ProgressSummary};
pub use word_bank_service::WordBankService;
