//! # User-Facing Messages
//!
//! Every toast text in one place, in the Spanish the staff reads. Commands
//! build their notifications from these helpers so wording stays uniform
//! across the app.

use mesa_core::{Money, TableStatus};

/// The status word as it appears in toasts.
pub fn status_word(status: TableStatus) -> &'static str {
    match status {
        TableStatus::Free => "libre",
        TableStatus::Reserved => "reservada",
        TableStatus::Occupied => "ocupada",
    }
}

pub fn status_changed(table_number: u32, status: TableStatus) -> String {
    format!(
        "Mesa {} ahora está {}.",
        table_number,
        status_word(status)
    )
}

pub fn item_added(item_name: &str, table_number: u32) -> String {
    format!("{} añadido a la mesa {}.", item_name, table_number)
}

pub fn table_checked_out(table_number: u32, total: Money) -> String {
    format!("Mesa {} cobrada por un total de {}.", table_number, total)
}

pub fn table_added(table_number: u32) -> String {
    format!("Mesa {} añadida con éxito.", table_number)
}

pub fn duplicate_table_number(table_number: u32) -> String {
    format!("La mesa número {} ya existe.", table_number)
}

pub fn table_in_use() -> String {
    "No se puede eliminar una mesa que está en uso.".to_string()
}

pub fn table_deleted() -> String {
    "Mesa eliminada.".to_string()
}

pub fn dish_added() -> String {
    "Plato añadido con éxito.".to_string()
}

pub fn dish_updated() -> String {
    "Plato actualizado.".to_string()
}

pub fn dish_deleted() -> String {
    "Plato eliminado.".to_string()
}

pub fn category_added() -> String {
    "Categoría añadida.".to_string()
}

pub fn category_updated() -> String {
    "Categoría actualizada.".to_string()
}

pub fn category_deleted() -> String {
    "Categoría eliminada.".to_string()
}

pub fn category_in_use() -> String {
    "No se puede eliminar una categoría con platos asociados.".to_string()
}
