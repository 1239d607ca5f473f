use flashcards_core::Notification;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastVm {
    pub message: String,
    pub class: String,
}

#[must_use]
pub fn map_toast(notification: &Notification) -> ToastVm {
    ToastVm {
        message: notification.message().to_owned(),
        class: format!("toast toast--{}", notification.severity().as_str()),
    }
}
