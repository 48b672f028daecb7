//! # Key/Value Snapshot Gateway
//!
//! JSON document storage over the `kv_entries` table.
//!
//! ## Snapshot Persistence Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Snapshot Persistence                                │
//! │                                                                         │
//! │  Floor mutation (in memory)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  save(keys::TABLES, &floor.tables) ← whole collection as one JSON      │
//! │                                      document, replaced atomically     │
//! │                                                                         │
//! │  App startup                                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  load(keys::TABLES) ──► Some(tables)  → use stored state               │
//! │                    └──► None          → seed defaults                  │
//! │                                                                         │
//! │  A stored document that no longer parses also loads as None:           │
//! │  corrupted state degrades to the seed, it never blocks startup.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::{debug, warn};

use crate::error::StoreResult;

// =============================================================================
// Gateway
// =============================================================================

/// Generic JSON document gateway over `kv_entries`.
#[derive(Debug, Clone)]
pub struct KvGateway {
    pool: SqlitePool,
}

impl KvGateway {
    /// Creates a new gateway backed by the given pool.
    pub fn new(pool: SqlitePool) -> Self {
        KvGateway { pool }
    }

    /// Loads and deserializes the document stored under `key`.
    ///
    /// ## Returns
    /// * `Ok(Some(value))` - A parseable document was stored
    /// * `Ok(None)` - No document, **or** the stored document no longer
    ///   parses as `T` (logged as a warning; the caller falls back to
    ///   defaults)
    /// * `Err(StoreError)` - The read itself failed
    pub async fn load<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        let stored: Option<String> =
            sqlx::query_scalar("SELECT value FROM kv_entries WHERE key = ?")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;

        let Some(raw) = stored else {
            debug!(key, "No stored document");
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                warn!(key, error = %err, "Stored document is unreadable, falling back to defaults");
                Ok(None)
            }
        }
    }

    /// Serializes `value` and stores it under `key`, replacing any previous
    /// document.
    pub async fn save<T: Serialize>(&self, key: &str, value: &T) -> StoreResult<()> {
        let json = serde_json::to_string(value)?;

        sqlx::query(
            "INSERT INTO kv_entries (key, value, updated_at)
             VALUES (?, ?, datetime('now'))
             ON CONFLICT(key) DO UPDATE SET
                 value = excluded.value,
                 updated_at = excluded.updated_at",
        )
        .bind(key)
        .bind(json)
        .execute(&self.pool)
        .await?;

        debug!(key, "Document saved");
        Ok(())
    }

    /// Removes the document stored under `key`. Idempotent.
    pub async fn remove(&self, key: &str) -> StoreResult<()> {
        sqlx::query("DELETE FROM kv_entries WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;

        debug!(key, "Document removed");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Store, StoreConfig};
    use mesa_core::{Table, Zone};

    async fn test_store() -> Store {
        Store::new(StoreConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn missing_key_loads_as_none() {
        let store = test_store().await;
        let loaded: Option<Vec<Table>> = store.entries().load("restaurant_tables").await.unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn save_then_load_returns_the_document() {
        let store = test_store().await;
        let gateway = store.entries();

        let tables = vec![Table::new(1, 4, Zone::Bar), Table::new(2, 2, Zone::Dining)];
        gateway.save("restaurant_tables", &tables).await.unwrap();

        let loaded: Vec<Table> = gateway
            .load("restaurant_tables")
            .await
            .unwrap()
            .expect("document should exist");

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].number, 1);
        assert_eq!(loaded[1].capacity, 2);
    }

    #[tokio::test]
    async fn save_replaces_the_previous_document() {
        let store = test_store().await;
        let gateway = store.entries();

        gateway.save("restaurant_occupation_history", &vec![1000i64]).await.unwrap();
        gateway
            .save("restaurant_occupation_history", &vec![1000i64, 2000i64])
            .await
            .unwrap();

        let loaded: Vec<i64> = gateway
            .load("restaurant_occupation_history")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(loaded, vec![1000, 2000]);
    }

    #[tokio::test]
    async fn unreadable_document_loads_as_none() {
        let store = test_store().await;

        // Plant a document that is not a Vec<Table>
        sqlx::query("INSERT INTO kv_entries (key, value, updated_at) VALUES (?, ?, datetime('now'))")
            .bind("restaurant_tables")
            .bind("{not json at all")
            .execute(store.pool())
            .await
            .unwrap();

        let loaded: Option<Vec<Table>> = store.entries().load("restaurant_tables").await.unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn remove_is_idempotent() {
        let store = test_store().await;
        let gateway = store.entries();

        gateway.save("restaurant_menu", &Vec::<String>::new()).await.unwrap();
        gateway.remove("restaurant_menu").await.unwrap();
        gateway.remove("restaurant_menu").await.unwrap();

        let loaded: Option<Vec<String>> = gateway.load("restaurant_menu").await.unwrap();
        assert!(loaded.is_none());
    }
}
