//! # Storage Keys
//!
//! The well-known keys the floor collections are stored under. Existing
//! deployments already hold data under these names, so they are frozen;
//! renaming one would silently orphan saved state.

/// Floor tables.
pub const TABLES: &str = "restaurant_tables";

/// Open orders.
pub const ORDERS: &str = "restaurant_orders";

/// Menu items.
pub const MENU: &str = "restaurant_menu";

/// Menu categories.
pub const CATEGORIES: &str = "restaurant_categories";

/// Completed occupation durations (milliseconds).
pub const OCCUPATION_HISTORY: &str = "restaurant_occupation_history";

/// Finalized sales.
pub const SALES_HISTORY: &str = "restaurant_sales_history";

/// All collection keys, in load order.
pub const ALL: [&str; 6] = [
    TABLES,
    ORDERS,
    MENU,
    CATEGORIES,
    OCCUPATION_HISTORY,
    SALES_HISTORY,
];
