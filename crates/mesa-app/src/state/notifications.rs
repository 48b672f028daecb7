//! # Notification Center
//!
//! Short-lived user-facing toasts. Every toast expires on its own after
//! three seconds; nothing dismisses one early.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Notification Lifecycle                               │
//! │                                                                         │
//! │  Command outcome                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  push(message, kind) ──► appended to the active list                   │
//! │       │                  (ids are monotonic, so the display order      │
//! │       │                   is the emission order)                        │
//! │       ▼                                                                 │
//! │  spawned timer sleeps 3s ──► retire(id) removes the toast              │
//! │                                                                         │
//! │  active() ──► snapshot of the currently visible toasts                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// How long a toast stays visible.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

/// Visual flavor of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// Something completed (item added, table charged, ...).
    Success,
    /// Neutral state change (table status).
    Info,
    /// A rejected operation (business rule violation).
    Warning,
}

/// A visible toast.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
}

/// Shared notification state.
#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    active: Arc<Mutex<Vec<Notification>>>,
    next_id: Arc<AtomicU64>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        NotificationCenter::default()
    }

    /// Pushes a toast and schedules its expiry.
    ///
    /// ## Returns
    /// The toast's id (mostly useful in tests).
    pub fn push(&self, message: impl Into<String>, kind: NotificationKind) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let message = message.into();
        debug!(id, %message, "Notification pushed");

        self.active
            .lock()
            .expect("Notification mutex poisoned")
            .push(Notification { id, message, kind });

        // Self-expiry: each toast carries its own timer
        let active = Arc::clone(&self.active);
        tokio::spawn(async move {
            tokio::time::sleep(NOTIFICATION_TTL).await;
            active
                .lock()
                .expect("Notification mutex poisoned")
                .retain(|n| n.id != id);
        });

        id
    }

    /// Pushes a success toast.
    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.push(message, NotificationKind::Success)
    }

    /// Pushes an info toast.
    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.push(message, NotificationKind::Info)
    }

    /// Pushes a warning toast.
    pub fn warning(&self, message: impl Into<String>) -> u64 {
        self.push(message, NotificationKind::Warning)
    }

    /// Snapshot of the currently visible toasts, in emission order.
    pub fn active(&self) -> Vec<Notification> {
        self.active
            .lock()
            .expect("Notification mutex poisoned")
            .clone()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
