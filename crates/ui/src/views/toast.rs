use dioxus::prelude::*;
use flashcards_core::Notification;

use crate::vm::map_toast;

/// Transient confirmation. Empty when there is nothing to show.
#[component]
pub fn Toast(notification: Option<Notification>) -> Element {
    let Some(notification) = notification else {
        return rsx! {};
    };
    let vm = map_toast(&notification);

    rsx! {
        div { class: "{vm.class}", role: "status", aria_live: "polite",
            "{vm.message}"
        }
    }
}
