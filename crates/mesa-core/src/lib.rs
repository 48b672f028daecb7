//! # mesa-core: Pure Business Logic for Mesa POS
//!
//! This crate is the **heart** of Mesa POS. It contains the floor state
//! engine and all supporting business logic as pure functions with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Mesa POS Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Frontend (TypeScript SPA)                      │   │
//! │  │    Table Map ──► Order Modal ──► Admin Panel ──► Reports       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    mesa-app Commands                            │   │
//! │  │    set_table_status, add_item, checkout, daily_report, ...     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ mesa-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   floor   │  │  report   │  │   │
//! │  │   │   Table   │  │   Money   │  │   Floor   │  │DailyReport│  │   │
//! │  │   │   Order   │  │  (cents)  │  │  engine   │  │aggregation│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    mesa-store (Storage Layer)                   │   │
//! │  │        SQLite key/value gateway, JSON collection snapshots      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Table, Order, MenuItem, Sale, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`floor`] - The floor state engine (transitions, orders, checkout, admin)
//! - [`report`] - On-demand daily report aggregation
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: Rejections are typed; not-found conditions are silent no-ops
//!
//! ## Example Usage
//!
//! ```rust
//! use mesa_core::{Floor, TableStatus};
//!
//! let mut floor = Floor::default();
//! let table_id = floor.add_table(1, 4, mesa_core::Zone::Bar).unwrap().id;
//!
//! // Seating a party opens an empty order and stamps the occupation start
//! floor.set_table_status(&table_id, TableStatus::Occupied);
//! assert!(floor.order_for_table(&table_id).is_some());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod floor;
pub mod money;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use mesa_core::Money` instead of
// `use mesa_core::money::Money`

pub use error::{FloorError, ValidationError};
pub use floor::{Floor, ItemAdded, Receipt, StatusChange};
pub use money::Money;
pub use report::{DailyReport, TableUsage};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum seats a table can have.
///
/// ## Business Reason
/// A table with zero capacity cannot seat anyone; capacity edits from the
/// admin panel are clamped up to this rather than rejected.
pub const MIN_TABLE_CAPACITY: u32 = 1;

/// Upper bound of the table map coordinate space.
///
/// Positions are percentages of the floor map, so both axes live in
/// `[0, POSITION_MAX]`. Drag placement outside the map is clamped back in.
pub const POSITION_MAX: f32 = 100.0;
