use std::rc::Rc;
use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use flashcards_core::{AssetRoot, ControlEvent};
use services::{
    AudioPlayer, FlashcardController, FlashcardServices, ImageLoader, MediaError, MediaService,
};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::FlashcardView;
use crate::views::flashcard::FlashcardTestHandles;

#[derive(Clone)]
struct TestApp {
    services: FlashcardServices,
}

impl UiApp for TestApp {
    fn services(&self) -> FlashcardServices {
        self.services.clone()
    }

    fn asset_root(&self) -> AssetRoot {
        AssetRoot::default()
    }
}

/// Every image loads; every audio file is missing. No speech.
struct OfflineMedia;

#[async_trait(?Send)]
impl ImageLoader for OfflineMedia {
    async fn load(&self, _src: &str) -> Result<(), MediaError> {
        Ok(())
    }
}

#[async_trait(?Send)]
impl AudioPlayer for OfflineMedia {
    async fn play(&self, src: &str) -> Result<(), MediaError> {
        Err(MediaError::NotFound(src.to_owned()))
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: FlashcardTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| {
        let media = Rc::new(OfflineMedia);
        MediaService::new(media.clone(), media, None)
    });
    use_context_provider(|| props.handles.clone());
    rsx! { FlashcardView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub handles: FlashcardTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        for _ in 0..3 {
            let _ = tokio::time::timeout(
                std::time::Duration::from_millis(50),
                self.dom.wait_for_work(),
            )
            .await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
    }

    pub async fn send(&mut self, event: ControlEvent) {
        let handle = self.handles.handle();
        self.dom.in_runtime(|| handle.call(event));
        self.drive_async().await;
    }

    pub fn controller(&self) -> Option<FlashcardController> {
        let signal = self.handles.controller();
        self.dom.in_runtime(|| signal.read().clone())
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub async fn setup_view_harness() -> ViewHarness {
    setup_view_harness_with_storage(Storage::in_memory()).await
}

pub async fn setup_view_harness_with_storage(storage: Storage) -> ViewHarness {
    let app = Arc::new(TestApp {
        services: FlashcardServices::from_storage(&storage),
    });
    let handles = FlashcardTestHandles::default();

    let dom = VirtualDom::new_with_props(
        ViewHarnessRoot,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    ViewHarness {
        dom,
        storage,
        handles,
    }
}
