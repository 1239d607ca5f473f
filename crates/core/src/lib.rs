#![forbid(unsafe_code)]

pub mod event;
pub mod model;
pub mod view;

pub use event::{ControlEvent, Effect, ProgressList};
pub use model::{AssetRoot, Notification, Preferences, Severity, WordEntry, WordError};
pub use view::{CardFace, CardView, ImageView};
