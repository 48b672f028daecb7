//! # Floor State Engine
//!
//! The owned state of the restaurant floor and every mutation the UI can
//! trigger on it: table status transitions, order mutation, checkout, and
//! the admin CRUD for tables, menu items and categories.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Floor Engine Operations                              │
//! │                                                                         │
//! │  Frontend Action          Command               Floor Mutation          │
//! │  ───────────────          ─────────────         ─────────────────       │
//! │                                                                         │
//! │  Seat party ─────────────► set_table_status ──► stamp start, bump      │
//! │                            (occupied)           usage, open order      │
//! │                                                                         │
//! │  Tap dish in menu ───────► add_item ──────────► qty += 1 or new line   │
//! │                                                 (price frozen)         │
//! │                                                                         │
//! │  Change quantity ────────► set_item_quantity ─► qty = n (< 1 removes)  │
//! │                                                                         │
//! │  Charge the table ───────► checkout ──────────► record sale, drop      │
//! │                                                 order, free the table  │
//! │                                                                         │
//! │  NOTE: unknown ids are silent no-ops, never errors. Admin rule         │
//! │        violations return FloorError; the app layer turns those         │
//! │        into warning toasts.                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Transition Permissiveness
//! `set_table_status` applies **any** status regardless of the current one
//! (free → free is legal and does nothing interesting). Only the edges into
//! and out of `Occupied` carry bookkeeping. This mirrors how the floor is
//! actually worked: staff correct mistakes by just setting the right status.

use chrono::Utc;

use crate::error::{FloorError, FloorResult};
use crate::money::Money;
use crate::types::{
    new_entity_id, MenuCategory, MenuItem, Order, OrderItem, Position, Sale, Table, TableStatus,
    Zone,
};
use crate::validation::{validate_name, validate_price_cents, validate_table_number};
use crate::MIN_TABLE_CAPACITY;

// =============================================================================
// Operation Outcomes
// =============================================================================

/// Outcome of a status transition, for the caller to toast on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    pub table_number: u32,
    pub status: TableStatus,
}

/// Outcome of adding a line to an order.
/// Returned only when the mutation actually applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemAdded {
    pub table_number: u32,
    pub item_name: String,
}

/// Outcome of a checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub table_number: u32,
    pub total: Money,
    /// False for zero-value orders: the table is still freed, but no Sale
    /// record is written.
    pub sale_recorded: bool,
}

// =============================================================================
// Floor
// =============================================================================

/// The in-memory state of the restaurant floor.
///
/// ## Invariants
/// - Table numbers are unique across the `tables` collection
/// - At most one order per table
/// - `sales` and `occupation_history` are append-only
/// - Every mutation goes through the methods below; views never touch the
///   collections directly
#[derive(Debug, Clone, Default)]
pub struct Floor {
    /// Physical tables on the map.
    pub tables: Vec<Table>,

    /// Open orders, at most one per table.
    pub orders: Vec<Order>,

    /// The menu.
    pub menu: Vec<MenuItem>,

    /// Menu categories.
    pub categories: Vec<MenuCategory>,

    /// One duration (milliseconds) per completed occupation.
    pub occupation_history: Vec<i64>,

    /// Finalized sales, append-only.
    pub sales: Vec<Sale>,
}

impl Floor {
    // =========================================================================
    // Lookups
    // =========================================================================

    /// Finds a table by id.
    pub fn table(&self, table_id: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.id == table_id)
    }

    /// Finds the open order for a table, if any.
    pub fn order_for_table(&self, table_id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.table_id == table_id)
    }

    /// Finds a menu item by id.
    pub fn menu_item(&self, menu_item_id: &str) -> Option<&MenuItem> {
        self.menu.iter().find(|m| m.id == menu_item_id)
    }

    // =========================================================================
    // Table Status Transitions
    // =========================================================================

    /// Sets a table's status, running the occupation bookkeeping on the way
    /// in and out of `Occupied`.
    ///
    /// ## Behavior
    /// - Unknown table: silent no-op (returns `None`)
    /// - Into `Occupied`: stamps `occupation_start`, bumps `usage_count`,
    ///   and opens an empty order if the table has none
    /// - Out of `Occupied` (previous status was occupied and a start was
    ///   stamped): appends the elapsed milliseconds to the occupation
    ///   history and clears the stamp
    ///
    /// ## Returns
    /// The applied change (table number + new status) for notification text.
    pub fn set_table_status(&mut self, table_id: &str, status: TableStatus) -> Option<StatusChange> {
        let idx = self.tables.iter().position(|t| t.id == table_id)?;
        let now = Utc::now();

        let previous = self.tables[idx].status;
        self.tables[idx].status = status;
        let table_number = self.tables[idx].number;

        if status == TableStatus::Occupied {
            self.tables[idx].occupation_start = Some(now);
            self.tables[idx].usage_count += 1;

            // Order creation happens here and only here
            if self.order_for_table(table_id).is_none() {
                self.orders.push(Order::open(table_id, now));
            }
        } else if previous == TableStatus::Occupied {
            if let Some(start) = self.tables[idx].occupation_start.take() {
                let duration_ms = (now - start).num_milliseconds();
                self.occupation_history.push(duration_ms);
            }
        }

        Some(StatusChange {
            table_number,
            status,
        })
    }

    // =========================================================================
    // Order Mutation
    // =========================================================================

    /// Adds one unit of a menu item to a table's open order.
    ///
    /// ## Behavior
    /// - Unknown menu item or table, or no open order: silent no-op
    /// - Line already present: quantity += 1, price untouched
    /// - Line not present: appended with quantity 1 and the menu item's
    ///   **current** price frozen into the line
    ///
    /// Never opens an order; that is the occupied transition's job.
    pub fn add_item(&mut self, table_id: &str, menu_item_id: &str) -> Option<ItemAdded> {
        let menu_item = self.menu.iter().find(|m| m.id == menu_item_id)?.clone();
        let table_number = self.table(table_id)?.number;
        let order = self.orders.iter_mut().find(|o| o.table_id == table_id)?;

        if let Some(line) = order.items.iter_mut().find(|i| i.menu_item_id == menu_item_id) {
            line.quantity += 1;
        } else {
            order.items.push(OrderItem {
                menu_item_id: menu_item.id.clone(),
                quantity: 1,
                unit_price_cents: menu_item.price_cents,
            });
        }

        Some(ItemAdded {
            table_number,
            item_name: menu_item.name,
        })
    }

    /// Sets the quantity of an existing order line.
    ///
    /// ## Behavior
    /// - Quantity < 1: removes the line (an order never holds a dead line)
    /// - No order or no such line: silent no-op
    pub fn set_item_quantity(&mut self, table_id: &str, menu_item_id: &str, quantity: i64) {
        if quantity < 1 {
            self.remove_item(table_id, menu_item_id);
            return;
        }

        if let Some(order) = self.orders.iter_mut().find(|o| o.table_id == table_id) {
            if let Some(line) = order.items.iter_mut().find(|i| i.menu_item_id == menu_item_id) {
                line.quantity = quantity;
            }
        }
    }

    /// Removes an order line. Idempotent: removing a line that is not there
    /// is a no-op.
    pub fn remove_item(&mut self, table_id: &str, menu_item_id: &str) {
        if let Some(order) = self.orders.iter_mut().find(|o| o.table_id == table_id) {
            order.items.retain(|i| i.menu_item_id != menu_item_id);
        }
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// Finalizes a table's open order into a sale and frees the table.
    ///
    /// ## Behavior
    /// - No order or no table for `table_id`: silent no-op
    /// - Total > 0: a `Sale` snapshotting the order lines is appended to
    ///   the sales history
    /// - Total == 0: the order is still closed and the table still freed,
    ///   but nothing enters the sales history
    /// - Freeing goes through [`Floor::set_table_status`], so the
    ///   exit-from-occupied bookkeeping (occupation history) runs
    pub fn checkout(&mut self, table_id: &str) -> Option<Receipt> {
        let order = self.order_for_table(table_id)?.clone();
        let table_number = self.table(table_id)?.number;

        let total = order.total();
        let sale_recorded = total.is_positive();

        if sale_recorded {
            self.sales.push(Sale {
                id: new_entity_id(),
                order_id: order.id.clone(),
                table_id: table_id.to_string(),
                total_cents: total.cents(),
                items: order.items.clone(),
                date: Utc::now(),
            });
        }

        self.orders.retain(|o| o.table_id != table_id);
        self.set_table_status(table_id, TableStatus::Free);

        Some(Receipt {
            table_number,
            total,
            sale_recorded,
        })
    }

    // =========================================================================
    // Administration: Tables
    // =========================================================================

    /// Adds a new table.
    ///
    /// ## Behavior
    /// - Duplicate table number: rejected
    /// - Capacity below the minimum is clamped, not rejected
    /// - New tables start free, unused, at the center of the map
    ///
    /// ## Returns
    /// The created table.
    pub fn add_table(&mut self, number: u32, capacity: u32, zone: Zone) -> FloorResult<Table> {
        validate_table_number(number)?;

        if self.tables.iter().any(|t| t.number == number) {
            return Err(FloorError::DuplicateTableNumber { number });
        }

        let table = Table::new(number, capacity.max(MIN_TABLE_CAPACITY), zone);
        self.tables.push(table.clone());
        Ok(table)
    }

    /// Deletes a table.
    ///
    /// ## Behavior
    /// - Reserved or occupied table: rejected, nothing changes
    /// - Unknown table: silent no-op
    pub fn delete_table(&mut self, table_id: &str) -> FloorResult<()> {
        let Some(table) = self.table(table_id) else {
            return Ok(());
        };

        if !table.is_free() {
            return Err(FloorError::TableInUse {
                number: table.number,
            });
        }

        self.tables.retain(|t| t.id != table_id);
        Ok(())
    }

    /// Updates a table's seat count, clamped to the minimum.
    /// Unknown table: silent no-op.
    pub fn set_table_capacity(&mut self, table_id: &str, capacity: u32) {
        if let Some(table) = self.tables.iter_mut().find(|t| t.id == table_id) {
            table.capacity = capacity.max(MIN_TABLE_CAPACITY);
        }
    }

    /// Moves a table on the map, clamping the position onto it.
    /// Unknown table: silent no-op.
    pub fn move_table(&mut self, table_id: &str, position: Position) {
        if let Some(table) = self.tables.iter_mut().find(|t| t.id == table_id) {
            table.position = position.clamped();
        }
    }

    // =========================================================================
    // Administration: Menu
    // =========================================================================

    /// Creates or replaces a menu item.
    ///
    /// ## Identity Convention
    /// An empty `id` means "new": a fresh identity is assigned. A non-empty
    /// `id` replaces the matching record (and is a silent no-op when nothing
    /// matches).
    ///
    /// ## Returns
    /// The saved item, with its identity filled in.
    pub fn save_menu_item(&mut self, mut item: MenuItem) -> FloorResult<MenuItem> {
        validate_name(&item.name)?;
        validate_price_cents(item.price_cents)?;

        if item.id.is_empty() {
            item.id = new_entity_id();
            self.menu.push(item.clone());
        } else if let Some(existing) = self.menu.iter_mut().find(|m| m.id == item.id) {
            *existing = item.clone();
        }

        Ok(item)
    }

    /// Deletes a menu item. Order lines already referencing it keep their
    /// price snapshot; reports skip dangling references.
    pub fn delete_menu_item(&mut self, menu_item_id: &str) {
        self.menu.retain(|m| m.id != menu_item_id);
    }

    // =========================================================================
    // Administration: Categories
    // =========================================================================

    /// Creates or replaces a category. Same empty-id convention as
    /// [`Floor::save_menu_item`].
    pub fn save_category(&mut self, mut category: MenuCategory) -> FloorResult<MenuCategory> {
        validate_name(&category.name)?;

        if category.id.is_empty() {
            category.id = new_entity_id();
            self.categories.push(category.clone());
        } else if let Some(existing) = self.categories.iter_mut().find(|c| c.id == category.id) {
            *existing = category.clone();
        }

        Ok(category)
    }

    /// Deletes a category.
    ///
    /// ## Behavior
    /// - Any menu item still references it: rejected
    /// - Unknown category: silent no-op
    pub fn delete_category(&mut self, category_id: &str) -> FloorResult<()> {
        let Some(category) = self.categories.iter().find(|c| c.id == category_id) else {
            return Ok(());
        };

        if self.menu.iter().any(|m| m.category_id == category_id) {
            return Err(FloorError::CategoryInUse {
                name: category.name.clone(),
            });
        }

        self.categories.retain(|c| c.id != category_id);
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_menu_item(id: &str, category_id: &str, name: &str, price_cents: i64) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            category_id: category_id.to_string(),
            name: name.to_string(),
            price_cents,
            description: None,
            image_url: None,
        }
    }

    /// A floor with one free table and two dishes on the menu.
    fn test_floor() -> (Floor, String) {
        let mut floor = Floor::default();
        let table_id = floor.add_table(1, 4, Zone::Bar).unwrap().id;
        floor.categories.push(MenuCategory {
            id: "cat-1".to_string(),
            name: "Raciones".to_string(),
        });
        floor
            .menu
            .push(test_menu_item("dish-1", "cat-1", "Patatas Bravas", 650));
        floor
            .menu
            .push(test_menu_item("dish-2", "cat-1", "Croquetas de Jamón", 800));
        (floor, table_id)
    }

    // -------------------------------------------------------------------------
    // Status transitions
    // -------------------------------------------------------------------------

    #[test]
    fn occupying_a_table_opens_an_order_and_bumps_usage() {
        let (mut floor, table_id) = test_floor();

        let change = floor
            .set_table_status(&table_id, TableStatus::Occupied)
            .unwrap();

        assert_eq!(change.table_number, 1);
        assert_eq!(change.status, TableStatus::Occupied);

        let table = floor.table(&table_id).unwrap();
        assert_eq!(table.usage_count, 1);
        assert!(table.occupation_start.is_some());

        let order = floor.order_for_table(&table_id).unwrap();
        assert!(order.is_empty());
    }

    #[test]
    fn reoccupying_does_not_open_a_second_order() {
        let (mut floor, table_id) = test_floor();

        floor.set_table_status(&table_id, TableStatus::Occupied);
        floor.set_table_status(&table_id, TableStatus::Occupied);

        let open_orders = floor
            .orders
            .iter()
            .filter(|o| o.table_id == table_id)
            .count();
        assert_eq!(open_orders, 1);
        // Usage counts every occupation, including the redundant one
        assert_eq!(floor.table(&table_id).unwrap().usage_count, 2);
    }

    #[test]
    fn leaving_occupied_records_an_occupation_duration() {
        let (mut floor, table_id) = test_floor();

        floor.set_table_status(&table_id, TableStatus::Occupied);
        assert!(floor.occupation_history.is_empty());

        floor.set_table_status(&table_id, TableStatus::Free);

        assert_eq!(floor.occupation_history.len(), 1);
        assert!(floor.occupation_history[0] >= 0);
        assert!(floor.table(&table_id).unwrap().occupation_start.is_none());
    }

    #[test]
    fn transitions_are_unguarded() {
        let (mut floor, table_id) = test_floor();

        // free -> free is legal and records nothing
        let change = floor.set_table_status(&table_id, TableStatus::Free).unwrap();
        assert_eq!(change.status, TableStatus::Free);
        assert!(floor.occupation_history.is_empty());

        // reserved -> reserved is legal too
        floor.set_table_status(&table_id, TableStatus::Reserved);
        floor.set_table_status(&table_id, TableStatus::Reserved);
        assert_eq!(floor.table(&table_id).unwrap().status, TableStatus::Reserved);
    }

    #[test]
    fn reserved_to_free_records_no_duration() {
        let (mut floor, table_id) = test_floor();

        floor.set_table_status(&table_id, TableStatus::Reserved);
        floor.set_table_status(&table_id, TableStatus::Free);

        assert!(floor.occupation_history.is_empty());
    }

    #[test]
    fn unknown_table_status_is_a_noop() {
        let (mut floor, _) = test_floor();
        assert!(floor.set_table_status("nope", TableStatus::Occupied).is_none());
        assert!(floor.orders.is_empty());
    }

    // -------------------------------------------------------------------------
    // Order mutation
    // -------------------------------------------------------------------------

    #[test]
    fn add_item_appends_a_line_with_frozen_price() {
        let (mut floor, table_id) = test_floor();
        floor.set_table_status(&table_id, TableStatus::Occupied);

        let added = floor.add_item(&table_id, "dish-1").unwrap();
        assert_eq!(added.item_name, "Patatas Bravas");
        assert_eq!(added.table_number, 1);

        // Reprice the dish; the order line must keep the old price
        floor.menu[0].price_cents = 999;
        let order = floor.order_for_table(&table_id).unwrap();
        assert_eq!(order.items[0].unit_price_cents, 650);
    }

    #[test]
    fn add_item_increments_existing_line() {
        let (mut floor, table_id) = test_floor();
        floor.set_table_status(&table_id, TableStatus::Occupied);

        floor.add_item(&table_id, "dish-1");
        floor.add_item(&table_id, "dish-1");
        floor.add_item(&table_id, "dish-1");

        let order = floor.order_for_table(&table_id).unwrap();
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].quantity, 3);
        assert_eq!(order.items[0].unit_price_cents, 650);
    }

    #[test]
    fn add_item_requires_menu_item_and_order() {
        let (mut floor, table_id) = test_floor();

        // Table is free, no order yet: no-op
        assert!(floor.add_item(&table_id, "dish-1").is_none());

        floor.set_table_status(&table_id, TableStatus::Occupied);

        // Unknown dish: no-op
        assert!(floor.add_item(&table_id, "no-such-dish").is_none());
        assert!(floor.order_for_table(&table_id).unwrap().is_empty());
    }

    #[test]
    fn set_item_quantity_below_one_removes_the_line() {
        let (mut floor, table_id) = test_floor();
        floor.set_table_status(&table_id, TableStatus::Occupied);
        floor.add_item(&table_id, "dish-1");

        floor.set_item_quantity(&table_id, "dish-1", 5);
        assert_eq!(floor.order_for_table(&table_id).unwrap().items[0].quantity, 5);

        floor.set_item_quantity(&table_id, "dish-1", 0);
        assert!(floor.order_for_table(&table_id).unwrap().is_empty());
    }

    #[test]
    fn remove_item_is_idempotent() {
        let (mut floor, table_id) = test_floor();
        floor.set_table_status(&table_id, TableStatus::Occupied);
        floor.add_item(&table_id, "dish-1");

        floor.remove_item(&table_id, "dish-1");
        let after_first = floor.order_for_table(&table_id).unwrap().items.clone();

        floor.remove_item(&table_id, "dish-1");
        let after_second = floor.order_for_table(&table_id).unwrap().items.clone();

        assert!(after_first.is_empty());
        assert_eq!(after_first, after_second);
    }

    #[test]
    fn order_total_matches_surviving_lines() {
        let (mut floor, table_id) = test_floor();
        floor.set_table_status(&table_id, TableStatus::Occupied);

        floor.add_item(&table_id, "dish-1");
        floor.add_item(&table_id, "dish-1");
        floor.add_item(&table_id, "dish-2");
        floor.set_item_quantity(&table_id, "dish-2", 3);
        floor.remove_item(&table_id, "dish-1");

        let order = floor.order_for_table(&table_id).unwrap();
        assert_eq!(order.total().cents(), 2400); // 3 × 8.00€
        assert!(order.items.iter().all(|i| i.quantity >= 1));
    }

    // -------------------------------------------------------------------------
    // Checkout
    // -------------------------------------------------------------------------

    #[test]
    fn checkout_records_sale_and_frees_the_table() {
        let (mut floor, table_id) = test_floor();
        floor.set_table_status(&table_id, TableStatus::Occupied);

        // 2 × 6.50€ + 1 × 8.00€ = 21.00€
        floor.add_item(&table_id, "dish-1");
        floor.add_item(&table_id, "dish-1");
        floor.add_item(&table_id, "dish-2");

        let receipt = floor.checkout(&table_id).unwrap();

        assert_eq!(receipt.total.cents(), 2100);
        assert!(receipt.sale_recorded);
        assert_eq!(receipt.table_number, 1);

        assert!(floor.order_for_table(&table_id).is_none());
        assert_eq!(floor.table(&table_id).unwrap().status, TableStatus::Free);

        let sale = &floor.sales[0];
        assert_eq!(sale.total_cents, 2100);
        assert_eq!(sale.items.len(), 2);
        // Invariant: Sale.total equals the sum over its snapshot
        let snapshot_total: i64 = sale.items.iter().map(|i| i.line_total().cents()).sum();
        assert_eq!(sale.total_cents, snapshot_total);

        // Checkout left occupied status, so the duration was recorded
        assert_eq!(floor.occupation_history.len(), 1);
    }

    #[test]
    fn checkout_without_order_is_a_noop() {
        let (mut floor, table_id) = test_floor();
        assert!(floor.checkout(&table_id).is_none());
        assert!(floor.sales.is_empty());
    }

    #[test]
    fn zero_total_checkout_frees_table_without_a_sale() {
        let (mut floor, table_id) = test_floor();
        floor.set_table_status(&table_id, TableStatus::Occupied);

        let receipt = floor.checkout(&table_id).unwrap();

        assert!(!receipt.sale_recorded);
        assert!(receipt.total.is_zero());
        assert!(floor.sales.is_empty());
        assert_eq!(floor.table(&table_id).unwrap().status, TableStatus::Free);
        assert!(floor.order_for_table(&table_id).is_none());
    }

    // -------------------------------------------------------------------------
    // Administration
    // -------------------------------------------------------------------------

    #[test]
    fn add_table_rejects_duplicate_number() {
        let (mut floor, _) = test_floor();

        let err = floor.add_table(1, 2, Zone::Dining).unwrap_err();
        assert!(matches!(err, FloorError::DuplicateTableNumber { number: 1 }));
        assert_eq!(floor.tables.len(), 1);

        assert!(floor.add_table(2, 2, Zone::Dining).is_ok());
    }

    #[test]
    fn add_table_clamps_capacity() {
        let mut floor = Floor::default();
        let table = floor.add_table(9, 0, Zone::Dining).unwrap();
        assert_eq!(table.capacity, MIN_TABLE_CAPACITY);
    }

    #[test]
    fn delete_table_rejected_while_in_use() {
        let (mut floor, table_id) = test_floor();
        floor.set_table_status(&table_id, TableStatus::Occupied);

        let err = floor.delete_table(&table_id).unwrap_err();
        assert!(matches!(err, FloorError::TableInUse { number: 1 }));
        assert_eq!(floor.tables.len(), 1);
        assert_eq!(floor.table(&table_id).unwrap().status, TableStatus::Occupied);

        floor.checkout(&table_id);
        assert!(floor.delete_table(&table_id).is_ok());
        assert!(floor.tables.is_empty());
    }

    #[test]
    fn move_table_clamps_onto_the_map() {
        let (mut floor, table_id) = test_floor();
        floor.move_table(&table_id, Position { x: 150.0, y: -10.0 });

        let position = floor.table(&table_id).unwrap().position;
        assert_eq!(position.x, 100.0);
        assert_eq!(position.y, 0.0);
    }

    #[test]
    fn save_menu_item_assigns_identity_to_new_items() {
        let (mut floor, _) = test_floor();

        let saved = floor
            .save_menu_item(test_menu_item("", "cat-1", "Tosta de Jamón", 700))
            .unwrap();
        assert!(!saved.id.is_empty());
        assert_eq!(floor.menu.len(), 3);

        // Non-empty id replaces in place
        let mut updated = saved.clone();
        updated.price_cents = 750;
        floor.save_menu_item(updated).unwrap();
        assert_eq!(floor.menu.len(), 3);
        assert_eq!(floor.menu_item(&saved.id).unwrap().price_cents, 750);
    }

    #[test]
    fn save_menu_item_validates_input() {
        let (mut floor, _) = test_floor();

        assert!(floor
            .save_menu_item(test_menu_item("", "cat-1", "", 700))
            .is_err());
        assert!(floor
            .save_menu_item(test_menu_item("", "cat-1", "Gazpacho", -1))
            .is_err());
        assert_eq!(floor.menu.len(), 2);
    }

    #[test]
    fn delete_category_rejected_while_referenced() {
        let (mut floor, _) = test_floor();

        let err = floor.delete_category("cat-1").unwrap_err();
        assert!(matches!(err, FloorError::CategoryInUse { .. }));
        assert_eq!(floor.categories.len(), 1);

        floor.delete_menu_item("dish-1");
        floor.delete_menu_item("dish-2");
        assert!(floor.delete_category("cat-1").is_ok());
        assert!(floor.categories.is_empty());
    }

    #[test]
    fn delete_unknown_category_is_a_noop() {
        let (mut floor, _) = test_floor();
        assert!(floor.delete_category("nope").is_ok());
        assert_eq!(floor.categories.len(), 1);
    }
}
