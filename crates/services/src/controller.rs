//! Session owner for the flashcard surface.
//!
//! All state mutation is synchronous. Anything touching storage or media is
//! handed back as an `Effect` for the host to run without blocking input.

use flashcards_core::model::{ImageOutcome, distinct_topics, filter_by_topic};
use flashcards_core::view::format_counter;
use flashcards_core::{
    AssetRoot, CardFace, CardView, ControlEvent, Effect, ImageView, Preferences, ProgressList,
    WordEntry,
};

use crate::error::ControllerError;
use crate::preferences_service::PreferencesService;
use crate::word_bank_service::WordBankService;

#[derive(Clone, Debug)]
pub struct FlashcardController {
    word_list: Vec<WordEntry>,
    current_index: usize,
    face: CardFace,
    image: ImageView,
    preferences: Preferences,
    assets: AssetRoot,
}

impl FlashcardController {
    /// Build a controller over an already-loaded list. Nothing is rendered yet.
    #[must_use]
    pub fn new(word_list: Vec<WordEntry>, preferences: Preferences, assets: AssetRoot) -> Self {
        Self {
            word_list,
            current_index: 0,
            face: CardFace::Front,
            image: ImageView::default(),
            preferences,
            assets,
        }
    }

    /// Load (or seed) the bank and preferences, then perform the first render.
    ///
    /// # Errors
    ///
    /// Returns `ControllerError` if the bank or preferences cannot be loaded.
    pub async fn initialize(
        bank: &WordBankService,
        preferences: &PreferencesService,
        assets: AssetRoot,
    ) -> Result<(Self, Vec<Effect>), ControllerError> {
        let word_list = bank.load_or_seed().await?;
        let preferences = preferences.load().await?;
        let mut controller = Self::new(word_list, preferences, assets);
        let effects = controller.render();
        Ok((controller, effects))
    }

    /// Route a control event to its operation.
    pub fn handle(&mut self, event: ControlEvent) -> Vec<Effect> {
        match event {
            ControlEvent::Previous => self.previous(),
            ControlEvent::Next => self.next(),
            ControlEvent::Flip => {
                self.flip();
                Vec::new()
            }
            ControlEvent::Pronounce => self.pronounce(),
            ControlEvent::MarkKnown => self.mark_current(ProgressList::Known),
            ControlEvent::MarkForReview => self.mark_current(ProgressList::Review),
            ControlEvent::TopicSelected(topic) => self.filter_by_topic(&topic),
            ControlEvent::AutoPlayChanged(on) => self.update_preferences(|p| p.auto_play = on),
            ControlEvent::AutoFlipChanged(on) => self.update_preferences(|p| p.auto_flip = on),
            ControlEvent::ShowImageChanged(on) => self.update_preferences(|p| p.show_image = on),
        }
    }

    pub fn previous(&mut self) -> Vec<Effect> {
        if self.current_index == 0 {
            return Vec::new();
        }
        self.current_index -= 1;
        self.render()
    }

    pub fn next(&mut self) -> Vec<Effect> {
        if self.current_index + 1 >= self.word_list.len() {
            return Vec::new();
        }
        self.current_index += 1;
        self.render()
    }

    /// Toggle the card face. Not persisted; the next render resets it.
    pub fn flip(&mut self) {
        self.face = self.face.toggled();
    }

    #[must_use]
    pub fn pronounce(&self) -> Vec<Effect> {
        self.current_entry()
            .map(|entry| vec![self.play_effect(entry)])
            .unwrap_or_default()
    }

    #[must_use]
    pub fn mark_current(&self, list: ProgressList) -> Vec<Effect> {
        self.current_entry()
            .map(|entry| {
                vec![Effect::MarkWord {
                    word: entry.word.clone(),
                    list,
                }]
            })
            .unwrap_or_default()
    }

    /// Narrow the current list to `topic`.
    ///
    /// Empty topics and topics with no matches leave everything untouched.
    /// The narrowed list is never written back to the bank.
    pub fn filter_by_topic(&mut self, topic: &str) -> Vec<Effect> {
        if topic.is_empty() {
            return Vec::new();
        }

        let filtered = filter_by_topic(&self.word_list, topic);
        if filtered.is_empty() {
            tracing::debug!(topic, "topic filter matched nothing, ignored");
            return Vec::new();
        }

        tracing::info!(topic, count = filtered.len(), "applied topic filter");
        self.word_list = filtered;
        self.current_index = 0;
        self.render()
    }

    /// Rebuild the surface for the current entry.
    ///
    /// Resets the face to front, starts the image load and, with auto-play on,
    /// requests audio. Does nothing on an empty list.
    pub fn render(&mut self) -> Vec<Effect> {
        let Some(entry) = self.word_list.get(self.current_index) else {
            return Vec::new();
        };

        let src = self.assets.resolve(&entry.image);
        let mut effects = vec![Effect::LoadImage {
            src: src.clone(),
            fallback: self.assets.fallback_image(),
        }];
        if self.preferences.auto_play {
            effects.push(self.play_effect(entry));
        }

        self.image = ImageView::loading(src);
        self.face = CardFace::Front;
        effects
    }

    /// Complete an image load started by `render`.
    pub fn apply_image_outcome(&mut self, outcome: &ImageOutcome) {
        self.image = ImageView {
            src: outcome.src().to_owned(),
            loading: false,
            placeholder_visible: false,
        };
    }

    /// The current surface, or `None` when there is nothing to show.
    #[must_use]
    pub fn view(&self) -> Option<CardView> {
        let entry = self.current_entry()?;
        Some(CardView {
            word: entry.word.clone(),
            phonetic: entry.phonetic.clone(),
            meaning: entry.meaning.clone(),
            example: entry.example.clone(),
            word_type: entry.word_type.clone(),
            topic: entry.topic.clone(),
            counter: format_counter(self.current_index, self.word_list.len()),
            image: self.image.clone(),
            face: self.face,
            image_panel_visible: self.preferences.show_image,
        })
    }

    #[must_use]
    pub fn current_entry(&self) -> Option<&WordEntry> {
        self.word_list.get(self.current_index)
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn word_list(&self) -> &[WordEntry] {
        &self.word_list
    }

    #[must_use]
    pub fn face(&self) -> CardFace {
        self.face
    }

    #[must_use]
    pub fn preferences(&self) -> Preferences {
        self.preferences
    }

    /// Topics present in the current list, for the topic selector.
    #[must_use]
    pub fn topics(&self) -> Vec<String> {
        distinct_topics(&self.word_list)
    }

    fn play_effect(&self, entry: &WordEntry) -> Effect {
        Effect::PlayAudio {
            src: self.assets.resolve(&entry.audio),
            word: entry.word.clone(),
        }
    }

    fn update_preferences(&mut self, change: impl FnOnce(&mut Preferences)) -> Vec<Effect> {
        change(&mut self.preferences);
        vec![Effect::SavePreferences(self.preferences)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flashcards_core::model::defaults::default_bank;

    fn controller() -> FlashcardController {
        let mut controller =
            FlashcardController::new(default_bank(), Preferences::default(), AssetRoot::default());
        controller.render();
        controller
    }

    fn counter(controller: &FlashcardController) -> String {
        controller.view().expect("card visible").counter
    }

    #[test]
    fn previous_never_goes_below_zero() {
        let mut c = controller();
        assert!(c.previous().is_empty());
        assert_eq!(c.current_index(), 0);
        assert_eq!(counter(&c), "1/2");
    }

    #[test]
    fn next_stops_at_last_entry() {
        let mut c = controller();
        assert!(!c.next().is_empty());
        assert!(c.next().is_empty());
        assert_eq!(c.current_index(), 1);
        assert_eq!(counter(&c), "2/2");
    }

    #[test]
    fn render_twice_yields_identical_view() {
        let mut c = controller();
        let first_effects = c.render();
        let first = c.view();
        let second_effects = c.render();
        assert_eq!(first, c.view());
        assert_eq!(first_effects, second_effects);
    }

    #[test]
    fn render_resets_flip_to_front() {
        let mut c = controller();
        c.flip();
        assert_eq!(c.face(), CardFace::Back);
        c.render();
        assert_eq!(c.face(), CardFace::Front);

        c.flip();
        c.next();
        assert_eq!(c.view().unwrap().face, CardFace::Front);
    }

    #[test]
    fn render_starts_image_load_with_declared_fallback() {
        let mut c = FlashcardController::new(
            default_bank(),
            Preferences::default(),
            AssetRoot::new("/srv"),
        );
        let effects = c.render();
        assert_eq!(
            effects,
            [Effect::LoadImage {
                src: "/srv/FlashCards/assets/images/apple.jpg".into(),
                fallback: "/srv/FlashCards/assets/images/placeholder.jpg".into(),
            }]
        );
        let image = c.view().unwrap().image;
        assert!(image.loading);
        assert!(image.placeholder_visible);
    }

    #[test]
    fn image_outcome_clears_loading_state() {
        let mut c = controller();
        c.apply_image_outcome(&ImageOutcome::Fallback {
            src: "fallback.jpg".into(),
        });
        let image = c.view().unwrap().image;
        assert_eq!(image.src, "fallback.jpg");
        assert!(!image.loading);
        assert!(!image.placeholder_visible);
    }

    #[test]
    fn auto_play_requests_audio_on_render() {
        let prefs = Preferences {
            auto_play: true,
            ..Preferences::default()
        };
        let mut c = FlashcardController::new(default_bank(), prefs, AssetRoot::default());
        let effects = c.render();
        assert!(effects.contains(&Effect::PlayAudio {
            src: "FlashCards/assets/audio/apple.mp3".into(),
            word: "apple".into(),
        }));
    }

    #[test]
    fn filter_keeps_only_matching_topic() {
        let mut c = controller();
        c.next();
        let effects = c.filter_by_topic("food");
        assert!(!effects.is_empty());
        assert!(c.word_list().iter().all(|entry| entry.topic == "food"));
        assert_eq!(c.current_index(), 0);
        assert_eq!(counter(&c), "1/1");
    }

    #[test]
    fn unmatched_or_empty_topic_is_ignored() {
        let mut c = controller();
        c.next();
        assert!(c.filter_by_topic("nonexistent").is_empty());
        assert!(c.filter_by_topic("").is_empty());
        assert_eq!(c.word_list().len(), 2);
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn filtering_only_narrows() {
        let mut c = controller();
        c.filter_by_topic("food");
        assert!(c.filter_by_topic("education").is_empty());
        assert_eq!(c.word_list().len(), 1);
        assert_eq!(c.topics(), ["food"]);
    }

    #[test]
    fn empty_list_renders_nothing() {
        let mut c =
            FlashcardController::new(Vec::new(), Preferences::default(), AssetRoot::default());
        assert!(c.render().is_empty());
        assert!(c.view().is_none());
        assert!(c.next().is_empty());
        assert!(c.previous().is_empty());
        assert!(c.pronounce().is_empty());
        assert!(c.handle(ControlEvent::MarkKnown).is_empty());
    }

    #[test]
    fn mark_events_target_current_word() {
        let mut c = controller();
        c.next();
        assert_eq!(
            c.handle(ControlEvent::MarkForReview),
            [Effect::MarkWord {
                word: "book".into(),
                list: ProgressList::Review,
            }]
        );
    }

    #[test]
    fn show_image_toggle_applies_and_persists() {
        let mut c = controller();
        let effects = c.handle(ControlEvent::ShowImageChanged(false));
        assert!(!c.view().unwrap().image_panel_visible);
        assert_eq!(
            effects,
            [Effect::SavePreferences(Preferences {
                show_image: false,
                ..Preferences::default()
            })]
        );
    }

    #[test]
    fn auto_flip_is_stored_without_changing_the_card() {
        let mut c = controller();
        let before = c.view();
        let effects = c.handle(ControlEvent::AutoFlipChanged(true));
        assert!(c.preferences().auto_flip);
        assert_eq!(before, c.view());
        assert_eq!(effects.len(), 1);
    }
}
