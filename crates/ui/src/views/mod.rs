mod flashcard;
mod state;
mod toast;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use flashcard::FlashcardView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use toast::Toast;
