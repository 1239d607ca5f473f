//! Built-in word bank installed on first run.

use super::WordEntry;

/// The bank used when nothing has been persisted yet.
#[must_use]
pub fn default_bank() -> Vec<WordEntry> {
    vec![
        WordEntry {
            word: "apple".into(),
            phonetic: "/ˈæp.əl/".into(),
            meaning: "quả táo".into(),
            example: "I eat an apple every day.".into(),
            word_type: "noun".into(),
            topic: "food".into(),
            image: "FlashCards/assets/images/apple.jpg".into(),
            audio: "FlashCards/assets/audio/apple.mp3".into(),
        },
        WordEntry {
            word: "book".into(),
            phonetic: "/bʊk/".into(),
            meaning: "sách".into(),
            example: "I love reading books.".into(),
            word_type: "noun".into(),
            topic: "education".into(),
            image: "FlashCards/assets/images/book.jpg".into(),
            audio: "FlashCards/assets/audio/book.mp3".into(),
        },
    ]
}
