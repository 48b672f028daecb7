//! # Command Surface
//!
//! The operations the frontend invokes, grouped by concern:
//!
//! - [`table`] - Status transitions and table administration
//! - [`order`] - Order mutation and checkout
//! - [`menu`] - Menu item and category administration
//! - [`report`] - The daily report
//!
//! ## Command Shape
//! Mutating commands return nothing: outcomes surface as toasts and the
//! frontend re-reads the views it renders. Rule violations become warning
//! toasts, unknown ids do nothing at all, and a failed snapshot write is
//! only logged. No command ever returns an error to the frontend.

pub mod menu;
pub mod order;
pub mod report;
pub mod table;

use crate::state::Notification;
use crate::{persist, AppState};

/// The currently visible toasts, in emission order.
pub fn active_notifications(state: &AppState) -> Vec<Notification> {
    state.notifications.active()
}

/// Snapshots the floor into the store, best-effort.
///
/// Clones the floor out of the lock first; the mutex is never held across
/// an await point.
pub(crate) async fn persist_floor(state: &AppState) {
    let snapshot = state.floor.with_floor(|f| f.clone());
    persist::save_snapshot(&state.store, &snapshot).await;
}
