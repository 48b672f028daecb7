//! # mesa-store: Storage Layer for Mesa POS
//!
//! This crate persists the floor state. It uses SQLite via sqlx, storing
//! each collection as a JSON snapshot document in a key/value table.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Mesa POS Data Flow                               │
//! │                                                                         │
//! │  mesa-app command (checkout, save_menu_item, ...)                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    mesa-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │     Store     │    │   KvGateway   │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │ (gateway.rs)  │    │  (embedded)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ load / save   │    │ 001_kv_...   │  │   │
//! │  │   │ WAL, config   │    │ JSON snapshot │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   keys.rs: the six restaurant_* collection keys                │   │
//! │  │   seed.rs: first-run floor and menu                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite file (one kv_entries table)                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`gateway`] - Generic JSON document load/save
//! - [`keys`] - The well-known collection keys
//! - [`seed`] - Default floor and menu for first run
//! - [`migrations`] - Embedded store migrations
//! - [`error`] - Storage error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mesa_store::{keys, Store, StoreConfig};
//!
//! let store = Store::new(StoreConfig::new("path/to/mesa.db")).await?;
//!
//! let tables: Option<Vec<Table>> = store.entries().load(keys::TABLES).await?;
//! store.entries().save(keys::TABLES, &tables).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod gateway;
pub mod keys;
pub mod migrations;
pub mod pool;
pub mod seed;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use gateway::KvGateway;
pub use pool::{Store, StoreConfig};
