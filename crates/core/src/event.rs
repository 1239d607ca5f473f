use crate::model::Preferences;

/// One variant per control on the card surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControlEvent {
    Previous,
    Next,
    Flip,
    Pronounce,
    MarkKnown,
    MarkForReview,
    TopicSelected(String),
    AutoPlayChanged(bool),
    AutoFlipChanged(bool),
    ShowImageChanged(bool),
}

/// Which learner list a word is being added to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgressList {
    Known,
    Review,
}

/// Side effects requested by the controller and performed by the host.
///
/// None of them gate rendering; the host may run them in any order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    LoadImage { src: String, fallback: String },
    PlayAudio { src: String, word: String },
    SavePreferences(Preferences),
    MarkWord { word: String, list: ProgressList },
}
