// CsvEdit - app/notify.rs
//
// Notification sink: success/failure outcomes of user operations.
// Purely observational; no editing logic depends on a sink being present.

use crate::util::constants;
use chrono::{DateTime, Duration, Utc};
use std::collections::VecDeque;
use std::fmt;

/// Whether an operation succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Failure,
}

/// The user operation a notification reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Update,
    Delete,
    Add,
    Export,
}

impl Operation {
    pub fn label(&self) -> &'static str {
        match self {
            Operation::Load => "Load",
            Operation::Update => "Update",
            Operation::Delete => "Delete",
            Operation::Add => "Add",
            Operation::Export => "Export",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One reported outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub level: Level,
    pub operation: Operation,
    pub message: String,
    pub at: DateTime<Utc>,
}

impl Notification {
    pub fn success(operation: Operation, message: impl Into<String>) -> Self {
        Self {
            level: Level::Success,
            operation,
            message: message.into(),
            at: Utc::now(),
        }
    }

    pub fn failure(operation: Operation, message: impl Into<String>) -> Self {
        Self {
            level: Level::Failure,
            operation,
            message: message.into(),
            at: Utc::now(),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.level == Level::Failure
    }
}

/// Receiver of operation outcomes.
pub trait NotificationSink {
    fn notify(&mut self, notification: Notification);
}

/// Bounded in-memory sink backing the toasts and the status bar.
///
/// Every notification is also written to the log. Once `capacity` is
/// reached the oldest notification is dropped.
#[derive(Debug)]
pub struct NotificationLog {
    entries: VecDeque<Notification>,
    capacity: usize,
}

impl Default for NotificationLog {
    fn default() -> Self {
        Self::with_capacity(constants::MAX_NOTIFICATIONS)
    }
}

impl NotificationLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(64)),
            capacity: capacity.max(1),
        }
    }

    /// Most recent notification.
    pub fn latest(&self) -> Option<&Notification> {
        self.entries.back()
    }

    /// Notifications newer than `now - window`, newest first.
    pub fn recent(&self, now: DateTime<Utc>, window: Duration) -> Vec<&Notification> {
        let cutoff = now - window;
        self.entries.iter().rev().take_while(|n| n.at >= cutoff).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl NotificationSink for NotificationLog {
    fn notify(&mut self, notification: Notification) {
        match notification.level {
            Level::Success => tracing::info!(
                operation = %notification.operation,
                message = %notification.message,
                "Operation succeeded"
            ),
            Level::Failure => tracing::warn!(
                operation = %notification.operation,
                message = %notification.message,
                "Operation failed"
            ),
        }

        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(notification);
    }
}

/// Sink that discards everything. Useful for headless callers.
#[derive(Debug, Default)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn notify(&mut self, _notification: Notification) {}
}
