//! End-to-end persistence tests: bootstrap, command, restart.

use mesa_app::{commands, AppState};
use mesa_core::{new_entity_id, Sale, Table, TableStatus};
use mesa_store::{keys, StoreConfig};

/// A unique on-disk store path, so restart tests see real files.
fn scratch_db_path() -> std::path::PathBuf {
    std::env::temp_dir().join(format!("mesa-pos-test-{}.db", new_entity_id()))
}

fn remove_scratch_db(path: &std::path::Path) {
    // SQLite WAL leaves sidecar files next to the database
    let _ = std::fs::remove_file(path);
    for suffix in ["-wal", "-shm"] {
        let mut sidecar = path.as_os_str().to_owned();
        sidecar.push(suffix);
        let _ = std::fs::remove_file(std::path::PathBuf::from(sidecar));
    }
}

#[tokio::test]
async fn empty_store_bootstraps_the_seed() {
    let state = AppState::bootstrap(StoreConfig::in_memory()).await.unwrap();

    let (tables, menu, categories) = state
        .floor
        .with_floor(|f| (f.tables.len(), f.menu.len(), f.categories.len()));

    assert_eq!(tables, 10);
    assert_eq!(menu, 13);
    assert_eq!(categories, 7);

    state
        .floor
        .with_floor(|f| assert!(f.orders.is_empty() && f.sales.is_empty()));

    // The seed was snapshotted immediately
    let stored: Vec<Table> = state
        .store
        .entries()
        .load(keys::TABLES)
        .await
        .unwrap()
        .expect("seed snapshot");
    assert_eq!(stored.len(), 10);
}

#[tokio::test]
async fn checkout_writes_the_sale_to_the_store() {
    let state = AppState::bootstrap(StoreConfig::in_memory()).await.unwrap();
    let table_id = state.floor.with_floor(|f| f.tables[0].id.clone());
    let dish_id = state.floor.with_floor(|f| f.menu[0].id.clone());

    commands::table::set_table_status(&state, &table_id, TableStatus::Occupied).await;
    commands::order::add_item(&state, &table_id, &dish_id).await;
    commands::order::checkout(&state, &table_id).await;

    let stored: Vec<Sale> = state
        .store
        .entries()
        .load(keys::SALES_HISTORY)
        .await
        .unwrap()
        .expect("sales snapshot");

    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].total_cents, 650);
    assert_eq!(stored[0].items.len(), 1);
}

#[tokio::test]
async fn floor_state_survives_a_restart() {
    let path = scratch_db_path();

    {
        let state = AppState::bootstrap(StoreConfig::new(&path)).await.unwrap();
        let table_id = state.floor.with_floor(|f| f.tables[1].id.clone());
        let dish_id = state.floor.with_floor(|f| f.menu[0].id.clone());

        commands::table::set_table_status(&state, &table_id, TableStatus::Occupied).await;
        commands::order::add_item(&state, &table_id, &dish_id).await;
        commands::order::checkout(&state, &table_id).await;

        state.store.close().await;
    }

    let state = AppState::bootstrap(StoreConfig::new(&path)).await.unwrap();

    state.floor.with_floor(|f| {
        assert_eq!(f.sales.len(), 1);
        assert_eq!(f.tables[1].usage_count, 1);
        assert_eq!(f.tables[1].status, TableStatus::Free);
        assert!(f.orders.is_empty());
        assert_eq!(f.occupation_history.len(), 1);
    });

    state.store.close().await;
    remove_scratch_db(&path);
}

#[tokio::test]
async fn daily_report_over_a_seeded_day() {
    let state = AppState::bootstrap(StoreConfig::in_memory()).await.unwrap();
    let first = state.floor.with_floor(|f| f.tables[0].id.clone());
    let second = state.floor.with_floor(|f| f.tables[1].id.clone());
    let dish_id = state.floor.with_floor(|f| f.menu[0].id.clone());

    // Two services on table 1, one on table 2
    for _ in 0..2 {
        commands::table::set_table_status(&state, &first, TableStatus::Occupied).await;
        commands::order::add_item(&state, &first, &dish_id).await;
        commands::order::checkout(&state, &first).await;
    }
    commands::table::set_table_status(&state, &second, TableStatus::Occupied).await;
    commands::order::add_item(&state, &second, &dish_id).await;
    commands::order::checkout(&state, &second).await;

    let report = commands::report::daily_report(&state);
    assert_eq!(report.sales_count_today, 3);
    assert_eq!(report.total_sales_today.cents(), 3 * 650);

    let usage = report.most_used_table.unwrap();
    assert_eq!(usage.number, 1);
    assert_eq!(usage.usage_count, 2);
}
