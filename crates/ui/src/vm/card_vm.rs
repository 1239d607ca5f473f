use flashcards_core::CardView;

/// UI-ready card: display strings plus the CSS hooks derived from state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardVm {
    pub word: String,
    pub phonetic: String,
    pub meaning: String,
    pub example: String,
    pub word_type: String,
    pub topic: String,
    pub counter: String,
    pub image_src: String,
    pub card_class: &'static str,
    pub image_class: &'static str,
    pub placeholder_style: &'static str,
    pub panel_style: &'static str,
}

#[must_use]
pub fn map_card_vm(view: &CardView) -> CardVm {
    CardVm {
        word: view.word.clone(),
        phonetic: view.phonetic.clone(),
        meaning: view.meaning.clone(),
        example: view.example.clone(),
        word_type: view.word_type.clone(),
        topic: view.topic.clone(),
        counter: view.counter.clone(),
        image_src: view.image.src.clone(),
        card_class: if view.face.is_flipped() {
            "flashcard flipped"
        } else {
            "flashcard"
        },
        image_class: if view.image.loading { "loading" } else { "" },
        placeholder_style: if view.image.placeholder_visible {
            "display: flex;"
        } else {
            "display: none;"
        },
        panel_style: if view.image_panel_visible {
            "display: block;"
        } else {
            "display: none;"
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flashcards_core::{CardFace, ImageView};

    fn view() -> CardView {
        CardView {
            word: "apple".into(),
            phonetic: "/ˈæp.əl/".into(),
            meaning: "quả táo".into(),
            example: "I eat an apple every day.".into(),
            word_type: "noun".into(),
            topic: "food".into(),
            counter: "1/2".into(),
            image: ImageView::loading("apple.jpg"),
            face: CardFace::Front,
            image_panel_visible: true,
        }
    }

    #[test]
    fn loading_front_card_shows_placeholder() {
        let vm = map_card_vm(&view());
        assert_eq!(vm.card_class, "flashcard");
        assert_eq!(vm.image_class, "loading");
        assert_eq!(vm.placeholder_style, "display: flex;");
        assert_eq!(vm.panel_style, "display: block;");
    }

    #[test]
    fn flipped_card_with_hidden_panel() {
        let mut view = view();
        view.face = CardFace::Back;
        view.image_panel_visible = false;
        view.image.loading = false;
        view.image.placeholder_visible = false;

        let vm = map_card_vm(&view);
        assert_eq!(vm.card_class, "flashcard flipped");
        assert_eq!(vm.image_class, "");
        assert_eq!(vm.placeholder_style, "display: none;");
        assert_eq!(vm.panel_style, "display: none;");
    }
}
