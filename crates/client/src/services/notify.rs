//! User-visible notifications.
//!
//! Sessions report outcomes (including failures) as notifications so a front
//! end can show them without inspecting errors.

use std::sync::{Mutex, PoisonError};

use serde::Serialize;

/// How a notification should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    /// Failure the user should notice.
    Destructive,
}

/// A short message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Info,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Destructive,
        }
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

/// Sink for notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Records notifications for later display, and traces them as they arrive.
#[derive(Debug, Default)]
pub struct NotificationLog {
    entries: Mutex<Vec<Notification>>,
}

impl NotificationLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return everything recorded so far.
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.entries.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// The most recent notification, if any.
    #[must_use]
    pub fn last(&self) -> Option<Notification> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl Notifier for NotificationLog {
    fn notify(&self, notification: Notification) {
        emit(&notification);
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}

fn emit(notification: &Notification) {
    match notification.severity {
        Severity::Info => tracing::info!(
            title = %notification.title,
            description = %notification.description,
            "notification"
        ),
        Severity::Destructive => tracing::warn!(
            title = %notification.title,
            description = %notification.description,
            "notification"
        ),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_log_records_in_order_and_drains() {
        let log = NotificationLog::new();
        log.notify(Notification::info("One", "first"));
        log.notify(Notification::destructive("Two", "second"));

        assert_eq!(log.last().unwrap().title, "Two");
        let drained = log.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].severity, Severity::Info);
        assert!(log.drain().is_empty());
    }

    #[test]
    fn test_display() {
        let n = Notification::info("Status Updated", "done");
        assert_eq!(n.to_string(), "Status Updated: done");
    }
}
