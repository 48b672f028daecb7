//! # Order Commands
//!
//! Order mutation and checkout.
//!
//! ## Checkout Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  User presses "Cobrar" in the order modal                              │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  checkout(state, tableId)                                               │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │  1. Engine records the sale (if total > 0), closes the         │    │
//! │  │     order and frees the table                                  │    │
//! │  │  2. Info toast:    "Mesa 4 ahora está libre."                  │    │
//! │  │  3. Success toast: "Mesa 4 cobrada por un total de 21.00€."    │    │
//! │  │  4. Snapshot written, best-effort                              │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use mesa_core::{Order, TableStatus};
use tracing::debug;

use super::persist_floor;
use crate::{messages, AppState};

/// The open order for a table, if any. Read-only view for the order modal.
pub fn order_for_table(state: &AppState, table_id: &str) -> Option<Order> {
    debug!(table_id, "order_for_table command");
    state.floor.with_floor(|f| f.order_for_table(table_id).cloned())
}

/// Adds one unit of a menu item to a table's order.
///
/// Toasts only when the line actually changed; a missing dish, table or
/// order stays silent.
pub async fn add_item(state: &AppState, table_id: &str, menu_item_id: &str) {
    debug!(table_id, menu_item_id, "add_item command");

    let added = state
        .floor
        .with_floor_mut(|f| f.add_item(table_id, menu_item_id));

    if let Some(added) = added {
        state
            .notifications
            .success(messages::item_added(&added.item_name, added.table_number));
        persist_floor(state).await;
    }
}

/// Sets an order line's quantity (< 1 removes the line). Silent.
pub async fn set_item_quantity(state: &AppState, table_id: &str, menu_item_id: &str, quantity: i64) {
    debug!(table_id, menu_item_id, quantity, "set_item_quantity command");

    state
        .floor
        .with_floor_mut(|f| f.set_item_quantity(table_id, menu_item_id, quantity));
    persist_floor(state).await;
}

/// Removes an order line. Silent and idempotent.
pub async fn remove_item(state: &AppState, table_id: &str, menu_item_id: &str) {
    debug!(table_id, menu_item_id, "remove_item command");

    state
        .floor
        .with_floor_mut(|f| f.remove_item(table_id, menu_item_id));
    persist_floor(state).await;
}

/// Charges a table: finalizes the order and frees it.
///
/// Emits the freeing toast before the charged toast, the order the user
/// watches them appear in.
pub async fn checkout(state: &AppState, table_id: &str) {
    debug!(table_id, "checkout command");

    let receipt = state.floor.with_floor_mut(|f| f.checkout(table_id));

    if let Some(receipt) = receipt {
        state.notifications.info(messages::status_changed(
            receipt.table_number,
            TableStatus::Free,
        ));
        state.notifications.success(messages::table_checked_out(
            receipt.table_number,
            receipt.total,
        ));
        persist_floor(state).await;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
