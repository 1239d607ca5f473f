//! Shared error types for the services crate.

use thiserror::Error;

use flashcards_core::WordError;
use storage::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `WordBankService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WordBankError {
    #[error(transparent)]
    Word(#[from] WordError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `ProgressService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `PreferencesService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PreferencesError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Failures reported by media backends. Never shown to the learner.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MediaError {
    #[error("media resource not found: {0}")]
    NotFound(String),
    #[error("playback blocked: {0}")]
    Blocked(String),
    #[error("media backend error: {0}")]
    Backend(String),
}

/// Errors emitted by the controller and effect runner.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ControllerError {
    #[error(transparent)]
    WordBank(#[from] WordBankError),
    #[error(transparent)]
    Progress(#[from] ProgressError),
    #[error(transparent)]
    Preferences(#[from] PreferencesError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
