//! Fire-and-forget user notifications.
//!
//! The checker reports validation failures and completed runs through the
//! [`Notifier`] trait. The TUI collects them as expiring toasts, the headless
//! command prints them to stderr.

use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Sink for transient notifications. Return values are never consumed.
pub trait Notifier {
    fn error(&self, message: &str);
    fn success(&self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Error,
    Success,
}

/// A notification that auto-dismisses after its duration.
#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>, duration: Duration) -> Self {
        Self {
            kind,
            message: message.into(),
            created_at: Instant::now(),
            duration,
        }
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }
}

/// Maximum number of toasts kept at once; older ones are dropped first.
const MAX_TOASTS: usize = 4;

/// Shared queue of live toasts, fed by [`Notifier`] calls.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    inner: Arc<Mutex<VecDeque<Toast>>>,
    duration: Duration,
}

impl ToastQueue {
    pub fn new(duration: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(VecDeque::new())),
            duration,
        }
    }

    fn push(&self, kind: ToastKind, message: &str) {
        let mut toasts = self.inner.lock();
        if toasts.len() >= MAX_TOASTS {
            toasts.pop_front();
        }
        toasts.push_back(Toast::new(kind, message, self.duration));
    }

    /// Drop expired toasts.
    pub fn prune(&self) {
        self.prune_at(Instant::now());
    }

    pub fn prune_at(&self, now: Instant) {
        self.inner.lock().retain(|toast| !toast.is_expired_at(now));
    }

    /// Snapshot of live toasts, oldest first.
    pub fn visible(&self) -> Vec<Toast> {
        self.inner.lock().iter().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

impl Notifier for ToastQueue {
    fn error(&self, message: &str) {
        tracing::debug!(message, "Error toast");
        self.push(ToastKind::Error, message);
    }

    fn success(&self, message: &str) {
        tracing::debug!(message, "Success toast");
        self.push(ToastKind::Success, message);
    }
}

/// Writes notifications to stderr, for the headless command.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn error(&self, message: &str) {
        eprintln!("error: {message}");
    }

    fn success(&self, message: &str) {
        eprintln!("{message}");
    }
}
