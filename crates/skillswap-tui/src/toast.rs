use std::cell::RefCell;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

use skillswap_core::{Notice, Notifier};

/// Most recent toasts kept on screen; older ones are dropped first.
pub const MAX_TOASTS: usize = 3;

#[derive(Debug, Clone)]
pub struct Toast {
    pub notice: Notice,
    pub expires_at: Instant,
}

/// Notifier that buffers notices as toasts until they expire.
#[derive(Debug)]
pub struct ToastQueue {
    ttl: Duration,
    toasts: RefCell<VecDeque<Toast>>,
}

impl ToastQueue {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            toasts: RefCell::new(VecDeque::new()),
        }
    }

    /// Snapshot of the live toasts, oldest first.
    #[must_use]
    pub fn visible(&self) -> Vec<Toast> {
        self.toasts.borrow().iter().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.borrow().is_empty()
    }

    /// Drop toasts whose deadline is at or before `now`.
    pub fn expire(&self, now: Instant) {
        self.toasts.borrow_mut().retain(|t| t.expires_at > now);
    }

    pub fn dismiss_all(&self) {
        self.toasts.borrow_mut().clear();
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, notice: Notice) {
        tracing::debug!(title = %notice.title, destructive = notice.is_destructive(), "toast");
        let mut toasts = self.toasts.borrow_mut();
        toasts.push_back(Toast {
            notice,
            expires_at: Instant::now() + self.ttl,
        });
        while toasts.len() > MAX_TOASTS {
            toasts.pop_front();
        }
    }
}
