//! Display model for the card surface. Built by the controller's render step only.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardFace {
    #[default]
    Front,
    Back,
}

impl CardFace {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            CardFace::Front => CardFace::Back,
            CardFace::Back => CardFace::Front,
        }
    }

    #[must_use]
    pub fn is_flipped(self) -> bool {
        self == CardFace::Back
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageView {
    pub src: String,
    pub loading: bool,
    pub placeholder_visible: bool,
}

impl ImageView {
    /// Loading state shown while `src` is being fetched.
    #[must_use]
    pub fn loading(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            loading: true,
            placeholder_visible: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub word: String,
    pub phonetic: String,
    pub meaning: String,
    pub example: String,
    pub word_type: String,
    pub topic: String,
    pub counter: String,
    pub image: ImageView,
    pub face: CardFace,
    pub image_panel_visible: bool,
}

/// "index/total" with a 1-based index.
#[must_use]
pub fn format_counter(index: usize, total: usize) -> String {
    format!("{}/{total}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_is_one_based() {
        assert_eq!(format_counter(0, 2), "1/2");
        assert_eq!(format_counter(1, 2), "2/2");
    }

    #[test]
    fn toggling_twice_returns_to_front() {
        let face = CardFace::Front.toggled();
        assert!(face.is_flipped());
        assert_eq!(face.toggled(), CardFace::Front);
    }
}
