//! # Seed Data
//!
//! The default floor and menu, used on first run or whenever a stored
//! collection is missing. Ten tables across two zones and a small Spanish
//! tapas menu.

use mesa_core::{new_entity_id, MenuCategory, MenuItem, Position, Table, TableStatus, Zone};

// =============================================================================
// Tables
// =============================================================================

/// The default table layout: six bar tables, four dining tables.
pub fn initial_tables() -> Vec<Table> {
    let layout: [(u32, Zone, u32, f32, f32); 10] = [
        (1, Zone::Bar, 4, 15.0, 20.0),
        (2, Zone::Bar, 4, 15.0, 50.0),
        (3, Zone::Bar, 2, 15.0, 80.0),
        (4, Zone::Bar, 2, 35.0, 20.0),
        (5, Zone::Bar, 4, 35.0, 50.0),
        (6, Zone::Bar, 6, 35.0, 80.0),
        (7, Zone::Dining, 4, 65.0, 25.0),
        (8, Zone::Dining, 4, 85.0, 25.0),
        (9, Zone::Dining, 8, 65.0, 75.0),
        (10, Zone::Dining, 6, 85.0, 75.0),
    ];

    layout
        .into_iter()
        .map(|(number, zone, capacity, x, y)| Table {
            id: new_entity_id(),
            number,
            zone,
            capacity,
            status: TableStatus::Free,
            position: Position { x, y },
            occupation_start: None,
            usage_count: 0,
        })
        .collect()
}

// =============================================================================
// Menu
// =============================================================================

/// The default menu: seven categories and thirteen items.
///
/// Returned together so the items can reference the freshly generated
/// category identities.
pub fn initial_catalog() -> (Vec<MenuCategory>, Vec<MenuItem>) {
    let categories: Vec<MenuCategory> = [
        "Raciones",
        "Croquetas",
        "Carnes",
        "Ensaladas",
        "Burgers",
        "Fast Food",
        "Tostas",
    ]
    .into_iter()
    .map(|name| MenuCategory {
        id: new_entity_id(),
        name: name.to_string(),
    })
    .collect();

    // (category index, name, price in cents, description)
    let dishes: [(usize, &str, i64, Option<&str>); 13] = [
        (0, "Patatas Bravas", 650, Some("Patatas con salsa brava casera.")),
        (0, "Calamares a la Romana", 1200, Some("Anillas de calamar rebozadas.")),
        (0, "Pulpo a la Gallega", 1850, None),
        (1, "Croquetas de Jamón", 800, Some("6 unidades de cremosas croquetas de jamón ibérico.")),
        (1, "Croquetas de Boletus", 850, Some("6 unidades de croquetas caseras de boletus.")),
        (2, "Entrecot de Ternera", 2200, Some("300g de lomo alto de ternera a la parrilla.")),
        (2, "Solomillo Ibérico", 1950, Some("Solomillo de cerdo ibérico con salsa a elegir.")),
        (3, "Ensalada César", 1050, Some("Lechuga, pollo crujiente, parmesano y salsa césar.")),
        (4, "Burger Clásica", 1250, Some("200g de ternera, lechuga, tomate, queso y bacon.")),
        (4, "Burger de Pollo", 1150, Some("Pechuga de pollo crujiente, mayonesa y brotes.")),
        (5, "Pizza Margarita", 900, None),
        (5, "Perrito Caliente", 550, None),
        (6, "Tosta de Jamón con Tomate", 700, None),
    ];

    let menu = dishes
        .into_iter()
        .map(|(category, name, price_cents, description)| MenuItem {
            id: new_entity_id(),
            category_id: categories[category].id.clone(),
            name: name.to_string(),
            price_cents,
            description: description.map(str::to_string),
            image_url: None,
        })
        .collect();

    (categories, menu)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_tables_are_free_and_uniquely_numbered() {
        let tables = initial_tables();
        assert_eq!(tables.len(), 10);

        let numbers: HashSet<u32> = tables.iter().map(|t| t.number).collect();
        assert_eq!(numbers.len(), 10);

        assert!(tables.iter().all(|t| t.is_free()));
        assert!(tables.iter().all(|t| t.usage_count == 0));
        assert!(tables.iter().all(|t| t.capacity >= 1));
    }

    #[test]
    fn seed_menu_references_seed_categories() {
        let (categories, menu) = initial_catalog();
        assert_eq!(categories.len(), 7);
        assert_eq!(menu.len(), 13);

        let category_ids: HashSet<&str> = categories.iter().map(|c| c.id.as_str()).collect();
        assert!(menu.iter().all(|m| category_ids.contains(m.category_id.as_str())));
        assert!(menu.iter().all(|m| m.price_cents > 0));
    }

    #[test]
    fn seed_prices_are_exact_cents() {
        let (_, menu) = initial_catalog();
        let bravas = menu.iter().find(|m| m.name == "Patatas Bravas").unwrap();
        assert_eq!(bravas.price(), mesa_core::Money::from_cents(650));
        assert_eq!(bravas.price().to_string(), "6.50€");
    }
}
