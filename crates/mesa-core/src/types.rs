//! # Domain Types
//!
//! Core domain types used throughout Mesa POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Table       │   │     Order       │   │      Sale       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  id (UUID)      │       │
//! │  │  number (biz)   │   │  table_id (FK)  │   │  order_id (FK)  │       │
//! │  │  status         │   │  items          │   │  total_cents    │       │
//! │  │  position       │   │  created_at     │   │  items snapshot │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  MenuCategory   │   │    MenuItem     │   │   TableStatus   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id, name       │   │  category_id    │   │  Free           │       │
//! │  └─────────────────┘   │  price_cents    │   │  Reserved       │       │
//! │                        └─────────────────┘   │  Occupied       │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every entity has:
//! - `id`: UUID v4 - immutable, used for cross-collection references
//! - Business ID where one exists: `Table.number` - human-readable, unique
//!   across active tables, printed on tickets and shouted across the floor

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::money::Money;

/// Generates a fresh entity id.
///
/// ## Usage
/// ```rust,ignore
/// let id = new_entity_id();
/// let table = Table { id, ... };
/// ```
pub fn new_entity_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Zone
// =============================================================================

/// Coarse spatial grouping of tables, used for display and report labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    /// High tables near the bar counter.
    Bar,
    /// The main dining room.
    Dining,
}

// =============================================================================
// Table Status
// =============================================================================

/// The status of a floor table.
///
/// Any status may be set regardless of the current one; there is no guarded
/// state machine. Only the occupied entry/exit edges carry bookkeeping
/// (see the floor engine).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum TableStatus {
    /// Available for seating.
    Free,
    /// Held for a booking.
    Reserved,
    /// A party is seated; an open order exists for the table.
    Occupied,
}

impl Default for TableStatus {
    fn default() -> Self {
        TableStatus::Free
    }
}

// =============================================================================
// Position
// =============================================================================

/// A table's placement on the floor map.
///
/// Both axes are percentages of the map, so valid values live in
/// `[0, 100]²`. The engine clamps out-of-range drags back onto the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    /// The default spot for a freshly added table: the center of the map.
    pub const CENTER: Position = Position { x: 50.0, y: 50.0 };

    /// Returns this position clamped onto the map.
    pub fn clamped(self) -> Position {
        Position {
            x: self.x.clamp(0.0, crate::POSITION_MAX),
            y: self.y.clamp(0.0, crate::POSITION_MAX),
        }
    }
}

// =============================================================================
// Table
// =============================================================================

/// A physical table on the restaurant floor.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Table number - business identifier, unique across active tables.
    pub number: u32,

    /// Which part of the floor the table stands in.
    pub zone: Zone,

    /// Number of seats (>= 1).
    pub capacity: u32,

    /// Current status.
    pub status: TableStatus,

    /// Placement on the floor map.
    pub position: Position,

    /// When the current occupation began. Set on the transition into
    /// `Occupied`, cleared (and turned into a history entry) on the way out.
    #[ts(as = "Option<String>")]
    pub occupation_start: Option<DateTime<Utc>>,

    /// How many times this table has been occupied.
    pub usage_count: u32,
}

impl Table {
    /// Creates a new free table at the center of the map.
    pub fn new(number: u32, capacity: u32, zone: Zone) -> Self {
        Table {
            id: new_entity_id(),
            number,
            zone,
            capacity,
            status: TableStatus::Free,
            position: Position::CENTER,
            occupation_start: None,
            usage_count: 0,
        }
    }

    /// Checks whether the table may be deleted (only free tables may go).
    #[inline]
    pub fn is_free(&self) -> bool {
        self.status == TableStatus::Free
    }
}

// =============================================================================
// Menu
// =============================================================================

/// A menu category ("Raciones", "Burgers", ...).
///
/// Deleted only while no MenuItem references it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MenuCategory {
    pub id: String,
    pub name: String,
}

/// A dish or drink on the menu.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Unique identifier (UUID v4). An empty id on an admin upsert means
    /// "new item" and gets a fresh identity assigned.
    pub id: String,

    /// Category this item belongs to. Must reference an existing category.
    pub category_id: String,

    /// Display name shown on the menu and the ticket.
    pub name: String,

    /// Price in euro cents (>= 0).
    pub price_cents: i64,

    /// Optional description for the menu card.
    pub description: Option<String>,

    /// Optional image for the interactive menu.
    pub image_url: Option<String>,
}

impl MenuItem {
    /// Returns the current price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Order
// =============================================================================

/// A line item in an open order.
/// Uses the snapshot pattern: the unit price is frozen when the line is
/// added, so later menu edits never reprice food already ordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// The menu item this line refers to.
    pub menu_item_id: String,

    /// Quantity ordered (>= 1; a quantity that would drop below 1 removes
    /// the line instead).
    pub quantity: i64,

    /// Unit price in cents at the time of ordering (frozen).
    pub unit_price_cents: i64,
}

impl OrderItem {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

/// The open order of an occupied table.
///
/// ## Invariants
/// - At most one order per table at any time
/// - Created only by the transition into `Occupied`, destroyed by checkout
/// - Lines are unique by `menu_item_id` (adding the same dish again
///   increases the quantity)
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,

    /// The table this order belongs to.
    pub table_id: String,

    /// Ordered sequence of lines, in the order they were first added.
    pub items: Vec<OrderItem>,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Opens a fresh, empty order for a table.
    pub fn open(table_id: &str, created_at: DateTime<Utc>) -> Self {
        Order {
            id: new_entity_id(),
            table_id: table_id.to_string(),
            items: Vec::new(),
            created_at,
        }
    }

    /// Calculates the order total: Σ price × quantity over all lines.
    pub fn total(&self) -> Money {
        self.items.iter().map(OrderItem::line_total).sum()
    }

    /// Checks if the order has no lines.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Sale
// =============================================================================

/// A finalized sale, created at checkout.
/// Append-only historical record: never mutated, never deleted.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: String,

    /// The order this sale finalized.
    pub order_id: String,

    /// The table that was checked out.
    pub table_id: String,

    /// Total charged, in cents. Always equals the sum of
    /// `unit_price_cents × quantity` over the item snapshot.
    pub total_cents: i64,

    /// Snapshot of the order's lines at checkout time.
    pub items: Vec<OrderItem>,

    /// When the checkout happened.
    #[ts(as = "String")]
    pub date: DateTime<Utc>,
}

impl Sale {
    /// Returns the total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table_defaults() {
        let table = Table::new(4, 2, Zone::Bar);
        assert_eq!(table.status, TableStatus::Free);
        assert_eq!(table.usage_count, 0);
        assert!(table.occupation_start.is_none());
        assert_eq!(table.position.x, 50.0);
    }

    #[test]
    fn test_position_clamped() {
        let off_map = Position { x: -3.0, y: 140.0 };
        let clamped = off_map.clamped();
        assert_eq!(clamped.x, 0.0);
        assert_eq!(clamped.y, 100.0);
    }

    #[test]
    fn test_order_total() {
        let mut order = Order::open("t-1", Utc::now());
        order.items.push(OrderItem {
            menu_item_id: "m-1".to_string(),
            quantity: 2,
            unit_price_cents: 650,
        });
        order.items.push(OrderItem {
            menu_item_id: "m-2".to_string(),
            quantity: 1,
            unit_price_cents: 800,
        });
        assert_eq!(order.total().cents(), 2100);
    }

    #[test]
    fn test_order_item_line_total() {
        let line = OrderItem {
            menu_item_id: "m-1".to_string(),
            quantity: 3,
            unit_price_cents: 1250,
        };
        assert_eq!(line.line_total().cents(), 3750);
    }
}
