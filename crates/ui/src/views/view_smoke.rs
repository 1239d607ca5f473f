use flashcards_core::ControlEvent;
use storage::repository::{KeyValueStore, Storage, StorageKey};

use super::test_harness::{setup_view_harness, setup_view_harness_with_storage};

#[tokio::test(flavor = "current_thread")]
async fn flashcard_view_smoke_renders_first_card() {
    let mut harness = setup_view_harness().await;
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("apple"), "missing word in {html}");
    assert!(html.contains("1/2"), "missing counter in {html}");
    assert!(html.contains("quả táo"), "missing meaning in {html}");
    assert!(html.contains("All topics"), "missing topic select in {html}");
    assert!(html.contains("education"), "missing topic option in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn flashcard_view_smoke_navigates_within_bounds() {
    let mut harness = setup_view_harness().await;
    harness.rebuild();
    harness.drive_async().await;

    harness.send(ControlEvent::Next).await;
    let html = harness.render();
    assert!(html.contains("2/2"), "missing counter in {html}");
    assert!(html.contains("book"), "missing word in {html}");

    harness.send(ControlEvent::Next).await;
    assert!(harness.render().contains("2/2"));

    harness.send(ControlEvent::Previous).await;
    let html = harness.render();
    assert!(html.contains("1/2"), "missing counter in {html}");
    assert_eq!(harness.controller().map(|c| c.current_index()), Some(0));
}

#[tokio::test(flavor = "current_thread")]
async fn flashcard_view_smoke_flip_resets_on_navigation() {
    let mut harness = setup_view_harness().await;
    harness.rebuild();
    harness.drive_async().await;

    harness.send(ControlEvent::Flip).await;
    assert!(harness.render().contains("flashcard flipped"));

    harness.send(ControlEvent::Next).await;
    assert!(!harness.render().contains("flashcard flipped"));
}

#[tokio::test(flavor = "current_thread")]
async fn flashcard_view_smoke_mark_known_shows_toast_once() {
    let mut harness = setup_view_harness().await;
    harness.rebuild();
    harness.drive_async().await;

    harness.send(ControlEvent::MarkKnown).await;
    let html = harness.render();
    assert!(html.contains("Marked as known"), "missing toast in {html}");
    assert!(html.contains("toast--success"), "missing severity in {html}");
    assert!(html.contains("Known: 1"), "missing progress in {html}");

    harness.send(ControlEvent::MarkKnown).await;
    assert_eq!(
        harness
            .storage
            .kv
            .get(StorageKey::KnownWords)
            .await
            .unwrap()
            .as_deref(),
        Some(r#"["apple"]"#)
    );
}

#[tokio::test(flavor = "current_thread")]
async fn flashcard_view_smoke_filters_by_topic() {
    let mut harness = setup_view_harness().await;
    harness.rebuild();
    harness.drive_async().await;

    harness
        .send(ControlEvent::TopicSelected("education".into()))
        .await;
    let html = harness.render();
    assert!(html.contains("1/1"), "missing counter in {html}");
    assert!(html.contains("book"), "missing word in {html}");

    harness
        .send(ControlEvent::TopicSelected("nonexistent".into()))
        .await;
    assert!(harness.render().contains("1/1"));
}

#[tokio::test(flavor = "current_thread")]
async fn flashcard_view_smoke_hides_image_panel() {
    let mut harness = setup_view_harness().await;
    harness.rebuild();
    harness.drive_async().await;

    let visible = r#"class="word-image" style="display: block;""#;
    let hidden = r#"class="word-image" style="display: none;""#;
    assert!(harness.render().contains(visible));

    harness.send(ControlEvent::ShowImageChanged(false)).await;
    let html = harness.render();
    assert!(html.contains(hidden), "panel still visible in {html}");
    assert_eq!(
        harness
            .storage
            .kv
            .get(StorageKey::ShowImage)
            .await
            .unwrap()
            .as_deref(),
        Some("false")
    );
}

#[tokio::test(flavor = "current_thread")]
async fn flashcard_view_smoke_renders_error_state() {
    let storage = Storage::in_memory();
    storage.kv.set(StorageKey::Words, "{broken").await.unwrap();

    let mut harness = setup_view_harness_with_storage(storage).await;
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Something went wrong"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}
