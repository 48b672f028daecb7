//! # Best-Effort Persistence
//!
//! Snapshots the floor collections into the store after each mutation.
//!
//! ## Failure Policy
//! The in-memory floor is the source of truth. A failed write is logged and
//! otherwise ignored: the operation the user just performed is **not**
//! rolled back, and no error reaches the frontend. The next successful
//! snapshot heals the gap.

use mesa_core::Floor;
use mesa_store::{keys, Store};
use tracing::{debug, error};

/// Saves every floor collection under its well-known key.
///
/// Takes an owned snapshot rather than a lock guard so the floor mutex is
/// never held across an await point.
pub async fn save_snapshot(store: &Store, floor: &Floor) {
    let gateway = store.entries();

    let writes = [
        (keys::TABLES, serde_json::to_value(&floor.tables)),
        (keys::ORDERS, serde_json::to_value(&floor.orders)),
        (keys::MENU, serde_json::to_value(&floor.menu)),
        (keys::CATEGORIES, serde_json::to_value(&floor.categories)),
        (
            keys::OCCUPATION_HISTORY,
            serde_json::to_value(&floor.occupation_history),
        ),
        (keys::SALES_HISTORY, serde_json::to_value(&floor.sales)),
    ];

    for (key, value) in writes {
        let result = match value {
            Ok(value) => gateway.save(key, &value).await,
            Err(err) => Err(err.into()),
        };

        if let Err(err) = result {
            error!(key, error = %err, "Snapshot write failed, in-memory state stands");
        }
    }

    debug!("Floor snapshot written");
}
