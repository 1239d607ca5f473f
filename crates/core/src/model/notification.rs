#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
}

impl Severity {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
        }
    }
}

/// A transient message for the toast surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    message: String,
    severity: Severity,
}

impl Notification {
    #[must_use]
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    #[must_use]
    pub fn marked_known() -> Self {
        Self::new("Marked as known", Severity::Success)
    }

    #[must_use]
    pub fn marked_for_review() -> Self {
        Self::new("Added to review list", Severity::Info)
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }
}
