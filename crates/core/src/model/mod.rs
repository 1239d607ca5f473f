mod media;
mod notification;
mod preferences;
mod word;
pub mod defaults;

pub use media::{AssetRoot, AudioOutcome, FALLBACK_IMAGE_PATH, ImageOutcome, SPEECH_LANG};
pub use notification::{Notification, Severity};
pub use preferences::Preferences;
pub use word::{WordEntry, WordError, distinct_topics, filter_by_topic, validate_bank};
