//! Notification service implementation
//!
//! Outcomes of user-triggered operations are reported as transient toasts.
//! A [`NotificationSink`] decides how they are presented; the
//! [`NotificationService`] stamps them with the configured display duration
//! and keeps delivery statistics.

use std::collections::{HashMap, VecDeque};
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;
use crate::config::NotificationConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
    Info,
}

impl std::fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationLevel::Success => write!(f, "success"),
            NotificationLevel::Error => write!(f, "error"),
            NotificationLevel::Info => write!(f, "info"),
        }
    }
}

/// A single transient message
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: Uuid,
    pub level: NotificationLevel,
    pub message: String,
    pub created_at: Instant,
    pub display_for: Duration,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<String>, display_for: Duration) -> Self {
        Self {
            id: Uuid::new_v4(),
            level,
            message: message.into(),
            created_at: Instant::now(),
            display_for,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.display_for
    }
}

/// Where notifications are presented.
///
/// Implementations must not panic and must not block for long; a call made
/// after the owning view is gone is allowed to do nothing.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// In-memory toast stack.
///
/// Notifications are never dropped on arrival; they stay queued until their
/// display time has passed and [`ToastQueue::prune`] removes them.
#[derive(Debug)]
pub struct ToastQueue {
    toasts: Mutex<VecDeque<Notification>>,
    max_visible: usize,
}

impl ToastQueue {
    pub fn new(max_visible: usize) -> Self {
        Self {
            toasts: Mutex::new(VecDeque::new()),
            max_visible: max_visible.max(1),
        }
    }

    // A panic while holding the lock must not take notifications down with it.
    fn lock(&self) -> MutexGuard<'_, VecDeque<Notification>> {
        self.toasts.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Unexpired notifications in arrival order, at most `max_visible`
    pub fn visible_at(&self, now: Instant) -> Vec<Notification> {
        self.lock()
            .iter()
            .filter(|toast| !toast.is_expired(now))
            .take(self.max_visible)
            .cloned()
            .collect()
    }

    pub fn visible(&self) -> Vec<Notification> {
        self.visible_at(Instant::now())
    }

    /// Drop expired notifications, returning how many were removed
    pub fn prune_at(&self, now: Instant) -> usize {
        let mut toasts = self.lock();
        let before = toasts.len();
        toasts.retain(|toast| !toast.is_expired(now));
        before - toasts.len()
    }

    pub fn prune(&self) -> usize {
        self.prune_at(Instant::now())
    }

    /// Everything queued, expired or not
    pub fn all(&self) -> Vec<Notification> {
        self.lock().iter().cloned().collect()
    }

    pub fn messages(&self) -> Vec<String> {
        self.lock().iter().map(|toast| toast.message.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl NotificationSink for ToastQueue {
    fn notify(&self, notification: Notification) {
        self.lock().push_back(notification);
    }
}

/// Writes notifications to stderr as they arrive
#[derive(Debug, Default)]
pub struct TerminalSink;

impl NotificationSink for TerminalSink {
    fn notify(&self, notification: Notification) {
        let marker = match notification.level {
            NotificationLevel::Success => "✔",
            NotificationLevel::Error => "✖",
            NotificationLevel::Info => "•",
        };
        // Ignore a closed stderr.
        let _ = writeln!(std::io::stderr(), "{} {}", marker, notification.message);
    }
}

/// Notification statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationStats {
    pub total_success: u64,
    pub total_error: u64,
    pub total_info: u64,
    pub sent_by_message: HashMap<String, u64>,
}

/// Notification front door used by dashboards
#[derive(Clone)]
pub struct NotificationService {
    sink: Arc<dyn NotificationSink>,
    display_for: Duration,
    stats: Arc<Mutex<NotificationStats>>,
}

impl std::fmt::Debug for NotificationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationService")
            .field("display_for", &self.display_for)
            .finish_non_exhaustive()
    }
}

impl NotificationService {
    /// Create a new NotificationService instance
    pub fn new(sink: Arc<dyn NotificationSink>, config: &NotificationConfig) -> Self {
        Self {
            sink,
            display_for: config.display_duration(),
            stats: Arc::new(Mutex::new(NotificationStats::default())),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.send(NotificationLevel::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.send(NotificationLevel::Error, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.send(NotificationLevel::Info, message.into());
    }

    fn send(&self, level: NotificationLevel, message: String) {
        match level {
            NotificationLevel::Error => warn!(level = %level, message = %message, "Showing notification"),
            _ => debug!(level = %level, message = %message, "Showing notification"),
        }

        self.update_stats(level, &message);
        self.sink.notify(Notification::new(level, message, self.display_for));
    }

    fn update_stats(&self, level: NotificationLevel, message: &str) {
        let mut stats = self.stats.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        match level {
            NotificationLevel::Success => stats.total_success += 1,
            NotificationLevel::Error => stats.total_error += 1,
            NotificationLevel::Info => stats.total_info += 1,
        }
        *stats.sent_by_message.entry(message.to_string()).or_insert(0) += 1;
    }

    /// Get notification statistics
    pub fn stats(&self) -> NotificationStats {
        self.stats
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Reset statistics
    pub fn reset_stats(&self) {
        let mut stats = self.stats.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *stats = NotificationStats::default();
        info!("Notification statistics reset");
    }
}
