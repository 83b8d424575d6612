use std::cell::RefCell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Destructive,
}

/// A transient message raised by a component for the user to see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notice {
    #[must_use]
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Info,
        }
    }

    #[must_use]
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Destructive,
        }
    }

    #[must_use]
    pub fn is_destructive(&self) -> bool {
        self.severity == Severity::Destructive
    }
}

/// Sink for notices. Components receive it as an argument instead of reaching
/// for a global toast facility.
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// Writes every notice to the tracing subscriber. Used by the headless CLI.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice.severity {
            Severity::Info => {
                tracing::info!(title = %notice.title, "{}", notice.description);
            }
            Severity::Destructive => {
                tracing::warn!(title = %notice.title, "{}", notice.description);
            }
        }
    }
}

impl Notifier for RefCell<Vec<Notice>> {
    fn notify(&self, notice: Notice) {
        self.borrow_mut().push(notice);
    }
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, notice: Notice) {
        (**self).notify(notice);
    }
}
