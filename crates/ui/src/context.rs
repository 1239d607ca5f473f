use std::sync::Arc;

use flashcards_core::AssetRoot;
use services::FlashcardServices;

pub trait UiApp: Send + Sync {
    fn services(&self) -> FlashcardServices;
    fn asset_root(&self) -> AssetRoot;
}

#[derive(Clone)]
pub struct AppContext {
    services: FlashcardServices,
    asset_root: AssetRoot,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            services: app.services(),
            asset_root: app.asset_root(),
        }
    }

    #[must_use]
    pub fn services(&self) -> FlashcardServices {
        self.services.clone()
    }

    #[must_use]
    pub fn asset_root(&self) -> AssetRoot {
        self.asset_root.clone()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
