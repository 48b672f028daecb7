//! # Table Commands
//!
//! Status transitions plus the admin operations on the table map.
//!
//! ## Status Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  User taps a table on the map and picks a status                       │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  set_table_status(state, tableId, status)                              │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │  1. Engine applies the transition (occupied bookkeeping)       │    │
//! │  │  2. Info toast: "Mesa 4 ahora está ocupada."                   │    │
//! │  │  3. Snapshot written, best-effort                              │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use mesa_core::{FloorError, Position, Table, TableStatus, Zone};
use tracing::debug;

use super::persist_floor;
use crate::{messages, AppState};

/// The table map, for rendering.
pub fn tables(state: &AppState) -> Vec<Table> {
    debug!("tables command");
    state.floor.with_floor(|f| f.tables.clone())
}

/// Sets a table's status.
///
/// Unknown table: nothing happens, not even a toast.
pub async fn set_table_status(state: &AppState, table_id: &str, status: TableStatus) {
    debug!(table_id, ?status, "set_table_status command");

    let change = state
        .floor
        .with_floor_mut(|f| f.set_table_status(table_id, status));

    if let Some(change) = change {
        state
            .notifications
            .info(messages::status_changed(change.table_number, change.status));
        persist_floor(state).await;
    }
}

/// Adds a table to the map.
pub async fn add_table(state: &AppState, number: u32, capacity: u32, zone: Zone) {
    debug!(number, capacity, ?zone, "add_table command");

    let result = state
        .floor
        .with_floor_mut(|f| f.add_table(number, capacity, zone));

    match result {
        Ok(table) => {
            state.notifications.success(messages::table_added(table.number));
            persist_floor(state).await;
        }
        Err(FloorError::DuplicateTableNumber { number }) => {
            state
                .notifications
                .warning(messages::duplicate_table_number(number));
        }
        Err(err) => {
            state.notifications.warning(err.to_string());
        }
    }
}

/// Deletes a table from the map.
///
/// Matches the rest of the delete flows: the success toast also fires when
/// the id matched nothing, since from the user's side the table is gone
/// either way.
pub async fn delete_table(state: &AppState, table_id: &str) {
    debug!(table_id, "delete_table command");

    let result = state.floor.with_floor_mut(|f| f.delete_table(table_id));

    match result {
        Ok(()) => {
            state.notifications.success(messages::table_deleted());
            persist_floor(state).await;
        }
        Err(FloorError::TableInUse { .. }) => {
            state.notifications.warning(messages::table_in_use());
        }
        Err(err) => {
            state.notifications.warning(err.to_string());
        }
    }
}

/// Updates a table's seat count. Silent: the admin form shows the result.
pub async fn set_table_capacity(state: &AppState, table_id: &str, capacity: u32) {
    debug!(table_id, capacity, "set_table_capacity command");

    state
        .floor
        .with_floor_mut(|f| f.set_table_capacity(table_id, capacity));
    persist_floor(state).await;
}

/// Moves a table on the map. Silent: the drag itself is the feedback.
pub async fn move_table(state: &AppState, table_id: &str, x: f32, y: f32) {
    debug!(table_id, x, y, "move_table command");

    state
        .floor
        .with_floor_mut(|f| f.move_table(table_id, Position { x, y }));
    persist_floor(state).await;
}

// =============================================================================
// Unit Tests
// =============================================================================
