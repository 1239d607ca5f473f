use std::time::Duration;

use dioxus::prelude::*;
use flashcards_core::{ControlEvent, Effect, Notification};
use services::{Completion, EffectRunner, FlashcardController, MediaService, ProgressSummary};

use crate::context::AppContext;
use crate::media::webview_media;
use crate::views::{Toast, ViewError, ViewState, view_state_from_resource};
use crate::vm::map_card_vm;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

const TOAST_DURATION: Duration = Duration::from_secs(3);

#[component]
pub fn FlashcardView() -> Element {
    let ctx = use_context::<AppContext>();
    let services = ctx.services();
    let runner = use_hook(|| {
        let media = try_consume_context::<MediaService>().unwrap_or_else(webview_media);
        services.effect_runner(media)
    });

    let controller = use_signal(|| None::<FlashcardController>);
    let toast = use_signal(|| None::<Notification>);
    let mut toast_seq = use_signal(|| 0_u64);

    let progress_service = services.progress();
    let progress = use_resource(move || {
        let progress_service = progress_service.clone();
        async move {
            progress_service
                .summary()
                .await
                .map_err(|_| ViewError::Unknown)
        }
    });

    let show_toast = use_callback(move |notification: Notification| {
        let mut toast = toast;
        toast.set(Some(notification));
        let seq = toast_seq() + 1;
        toast_seq.set(seq);
        spawn(async move {
            tokio::time::sleep(TOAST_DURATION).await;
            if toast_seq() == seq {
                toast.set(None);
            }
        });
    });

    // Effects run detached so rendering and input never wait on media or storage.
    let dispatch_effects = {
        let runner: EffectRunner = runner.clone();
        use_callback(move |effects: Vec<Effect>| {
            for effect in effects {
                let runner = runner.clone();
                let mut controller = controller;
                let mut progress = progress;
                spawn(async move {
                    match runner.run(effect).await {
                        Ok(Completion::Image(outcome)) => {
                            if let Some(controller) = controller.write().as_mut() {
                                controller.apply_image_outcome(&outcome);
                            }
                        }
                        Ok(Completion::Notify(notification)) => {
                            show_toast.call(notification);
                            progress.restart();
                        }
                        Ok(Completion::Audio(_) | Completion::Saved) => {}
                        Err(err) => tracing::error!(%err, "flashcard effect failed"),
                    }
                });
            }
        })
    };

    let handle = use_callback(move |event: ControlEvent| {
        let mut controller = controller;
        let effects = controller
            .write()
            .as_mut()
            .map(|controller| controller.handle(event))
            .unwrap_or_default();
        dispatch_effects.call(effects);
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<FlashcardTestHandles>() {
                handles.register(handle, controller);
            }
        }
    }

    let asset_root = ctx.asset_root();
    let resource = use_resource(move || {
        let services = services.clone();
        let asset_root = asset_root.clone();
        let mut controller = controller;
        async move {
            let (loaded, effects) = services
                .initialize_controller(asset_root)
                .await
                .map_err(|err| {
                    tracing::error!(%err, "failed to initialize flashcards");
                    ViewError::Unknown
                })?;
            controller.set(Some(loaded));
            dispatch_effects.call(effects);
            Ok::<_, ViewError>(())
        }
    });

    let state = view_state_from_resource(&resource);
    let summary = match progress.value().read().as_ref() {
        Some(Ok(summary)) => *summary,
        _ => ProgressSummary::default(),
    };

    rsx! {
        div { class: "page flashcard-page",
            header { class: "view-header",
                h2 { class: "view-title", "Flashcards" }
            }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
                ViewState::Ready(()) => rsx! {
                    FlashcardSurface { controller, on_event: handle }
                    p { class: "flashcard-progress",
                        "Known: {summary.known} · Review: {summary.review}"
                    }
                },
            }
            Toast { notification: toast() }
        }
    }
}

#[component]
fn FlashcardSurface(
    controller: Signal<Option<FlashcardController>>,
    on_event: Callback<ControlEvent>,
) -> Element {
    let guard = controller.read();
    let Some(current) = guard.as_ref() else {
        return rsx! {};
    };
    let preferences = current.preferences();
    let topics = current.topics();
    let card = current.view().map(|view| map_card_vm(&view));
    drop(guard);

    rsx! {
        if let Some(card) = card {
            div { class: "{card.card_class}",
                div { class: "flashcard-front",
                    div { class: "word-image", style: "{card.panel_style}",
                        div { class: "image-placeholder", style: "{card.placeholder_style}" }
                        img {
                            class: "{card.image_class}",
                            src: "{card.image_src}",
                            alt: "{card.word}",
                        }
                    }
                    h3 { class: "word", "{card.word}" }
                    p { class: "phonetic", "{card.phonetic}" }
                }
                div { class: "flashcard-back",
                    p { class: "meaning", "{card.meaning}" }
                    p { class: "example", "{card.example}" }
                    div { class: "word-type", "Type: " span { "{card.word_type}" } }
                    div { class: "word-category", "Topic: " span { "{card.topic}" } }
                }
            }
            div { class: "flashcard-nav",
                button {
                    id: "prevCard",
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| on_event.call(ControlEvent::Previous),
                    "Previous"
                }
                span { id: "cardCounter", class: "card-counter", "{card.counter}" }
                button {
                    id: "nextCard",
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| on_event.call(ControlEvent::Next),
                    "Next"
                }
            }
            div { class: "flashcard-actions",
                button {
                    id: "flipCard",
                    class: "btn",
                    r#type: "button",
                    onclick: move |_| on_event.call(ControlEvent::Flip),
                    "Flip"
                }
                button {
                    id: "volume",
                    class: "btn",
                    r#type: "button",
                    onclick: move |_| on_event.call(ControlEvent::Pronounce),
                    "Pronounce"
                }
                button {
                    id: "markAsKnown",
                    class: "btn btn-success",
                    r#type: "button",
                    onclick: move |_| on_event.call(ControlEvent::MarkKnown),
                    "I know this"
                }
                button {
                    id: "markForReview",
                    class: "btn btn-info",
                    r#type: "button",
                    onclick: move |_| on_event.call(ControlEvent::MarkForReview),
                    "Review later"
                }
            }
        } else {
            p { class: "flashcard-empty", "No words to study." }
        }
        div { class: "flashcard-settings",
            label {
                "Topic "
                select {
                    id: "topicFlashcards",
                    onchange: move |evt: FormEvent| {
                        on_event.call(ControlEvent::TopicSelected(evt.value()));
                    },
                    option { value: "", "All topics" }
                    for topic in topics {
                        option { key: "{topic}", value: "{topic}", "{topic}" }
                    }
                }
            }
            label {
                input {
                    id: "autoPlay",
                    r#type: "checkbox",
                    checked: preferences.auto_play,
                    onchange: move |evt: FormEvent| {
                        on_event.call(ControlEvent::AutoPlayChanged(evt.checked()));
                    },
                }
                " Auto-play audio"
            }
            label {
                input {
                    id: "autoFlip",
                    r#type: "checkbox",
                    checked: preferences.auto_flip,
                    onchange: move |evt: FormEvent| {
                        on_event.call(ControlEvent::AutoFlipChanged(evt.checked()));
                    },
                }
                " Auto-flip"
            }
            label {
                input {
                    id: "showImage",
                    r#type: "checkbox",
                    checked: preferences.show_image,
                    onchange: move |evt: FormEvent| {
                        on_event.call(ControlEvent::ShowImageChanged(evt.checked()));
                    },
                }
                " Show image"
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct FlashcardTestHandles {
    handle: Rc<RefCell<Option<Callback<ControlEvent>>>>,
    controller: Rc<RefCell<Option<Signal<Option<FlashcardController>>>>>,
}

#[cfg(test)]
impl FlashcardTestHandles {
    pub(crate) fn register(
        &self,
        handle: Callback<ControlEvent>,
        controller: Signal<Option<FlashcardController>>,
    ) {
        *self.handle.borrow_mut() = Some(handle);
        *self.controller.borrow_mut() = Some(controller);
    }

    pub(crate) fn handle(&self) -> Callback<ControlEvent> {
        (*self.handle.borrow()).expect("flashcard handle registered")
    }

    pub(crate) fn controller(&self) -> Signal<Option<FlashcardController>> {
        (*self.controller.borrow()).expect("flashcard controller registered")
    }
}
