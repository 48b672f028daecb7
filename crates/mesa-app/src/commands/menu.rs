//! # Menu Commands
//!
//! Admin operations on menu items and categories. Upserts follow the
//! empty-id convention: an item or category arriving with an empty `id`
//! is created, anything else replaces the matching record.

use mesa_core::{FloorError, MenuCategory, MenuItem};
use tracing::debug;

use super::persist_floor;
use crate::{messages, AppState};

/// The menu, for rendering.
pub fn menu(state: &AppState) -> Vec<MenuItem> {
    debug!("menu command");
    state.floor.with_floor(|f| f.menu.clone())
}

/// The categories, for rendering.
pub fn categories(state: &AppState) -> Vec<MenuCategory> {
    debug!("categories command");
    state.floor.with_floor(|f| f.categories.clone())
}

/// Creates or updates a menu item.
pub async fn save_menu_item(state: &AppState, item: MenuItem) {
    debug!(name = %item.name, "save_menu_item command");
    let creating = item.id.is_empty();

    let result = state.floor.with_floor_mut(|f| f.save_menu_item(item));

    match result {
        Ok(_) => {
            let message = if creating {
                messages::dish_added()
            } else {
                messages::dish_updated()
            };
            state.notifications.success(message);
            persist_floor(state).await;
        }
        Err(err) => {
            state.notifications.warning(err.to_string());
        }
    }
}

/// Deletes a menu item.
pub async fn delete_menu_item(state: &AppState, menu_item_id: &str) {
    debug!(menu_item_id, "delete_menu_item command");

    state.floor.with_floor_mut(|f| f.delete_menu_item(menu_item_id));
    state.notifications.success(messages::dish_deleted());
    persist_floor(state).await;
}

/// Creates or updates a category.
pub async fn save_category(state: &AppState, category: MenuCategory) {
    debug!(name = %category.name, "save_category command");
    let creating = category.id.is_empty();

    let result = state.floor.with_floor_mut(|f| f.save_category(category));

    match result {
        Ok(_) => {
            let message = if creating {
                messages::category_added()
            } else {
                messages::category_updated()
            };
            state.notifications.success(message);
            persist_floor(state).await;
        }
        Err(err) => {
            state.notifications.warning(err.to_string());
        }
    }
}

/// Deletes a category, provided no menu item still references it.
pub async fn delete_category(state: &AppState, category_id: &str) {
    debug!(category_id, "delete_category command");

    let result = state.floor.with_floor_mut(|f| f.delete_category(category_id));

    match result {
        Ok(()) => {
            state.notifications.success(messages::category_deleted());
            persist_floor(state).await;
        }
        Err(FloorError::CategoryInUse { .. }) => {
            state.notifications.warning(messages::category_in_use());
        }
        Err(err) => {
            state.notifications.warning(err.to_string());
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
