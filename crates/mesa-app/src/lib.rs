//! # mesa-app: Application Layer for Mesa POS
//!
//! Wires the pure floor engine to the store and exposes the command surface
//! the frontend invokes.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Mesa POS Application                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Frontend (TypeScript SPA)                      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ invoke                                 │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 ★ mesa-app (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   commands/   set_table_status, add_item, checkout, ...        │   │
//! │  │   state/      FloorState (Mutex), NotificationCenter (3s TTL)  │   │
//! │  │   persist     best-effort snapshots after each mutation        │   │
//! │  │   messages    Spanish toast texts                              │   │
//! │  └───────────┬─────────────────────────────────┬───────────────────┘   │
//! │              │                                 │                        │
//! │     ┌────────▼────────┐               ┌────────▼────────┐              │
//! │     │    mesa-core    │               │   mesa-store    │              │
//! │     │  Floor engine   │               │  SQLite / JSON  │              │
//! │     └─────────────────┘               └─────────────────┘              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Startup
//!
//! ```rust,ignore
//! mesa_app::init_tracing();
//! let state = mesa_app::AppState::bootstrap(StoreConfig::new("mesa.db")).await?;
//! ```
//!
//! Bootstrap loads each collection from the store and falls back to the
//! seed data for anything missing or unreadable. Only a store that cannot
//! open at all is fatal; after startup, storage failures are logged and
//! the in-memory floor carries on.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod commands;
pub mod messages;
pub mod persist;
pub mod state;

// =============================================================================
// Re-exports
// =============================================================================

pub use state::{FloorState, Notification, NotificationCenter, NotificationKind};

use mesa_core::Floor;
use mesa_store::{keys, seed, Store, StoreConfig, StoreResult};
use tracing::info;

// =============================================================================
// Application State
// =============================================================================

/// Everything a command needs: the floor, the store, and the toast list.
#[derive(Debug, Clone)]
pub struct AppState {
    pub floor: FloorState,
    pub store: Store,
    pub notifications: NotificationCenter,
}

impl AppState {
    /// Opens the store and builds the initial floor.
    ///
    /// ## Load-or-Seed
    /// Each collection is read from the store independently; a missing or
    /// unreadable document falls back to its seed. Categories and menu are
    /// seeded **together** when either is missing, so the seeded menu always
    /// references seeded category identities.
    ///
    /// ## Errors
    /// Only store open/migration failures propagate. This is the one place
    /// where a storage error is fatal.
    pub async fn bootstrap(config: StoreConfig) -> StoreResult<Self> {
        let store = Store::new(config).await?;
        let gateway = store.entries();

        let tables = match gateway.load(keys::TABLES).await? {
            Some(tables) => tables,
            None => {
                info!("No stored tables, seeding default floor");
                seed::initial_tables()
            }
        };

        let stored_categories = gateway.load(keys::CATEGORIES).await?;
        let stored_menu = gateway.load(keys::MENU).await?;
        let (categories, menu) = match (stored_categories, stored_menu) {
            (Some(categories), Some(menu)) => (categories, menu),
            _ => {
                info!("Menu or categories missing, seeding default catalog");
                seed::initial_catalog()
            }
        };

        let orders = gateway.load(keys::ORDERS).await?.unwrap_or_default();
        let occupation_history = gateway
            .load(keys::OCCUPATION_HISTORY)
            .await?
            .unwrap_or_default();
        let sales = gateway.load(keys::SALES_HISTORY).await?.unwrap_or_default();

        let floor = Floor {
            tables,
            orders,
            menu,
            categories,
            occupation_history,
            sales,
        };

        info!(
            tables = floor.tables.len(),
            menu_items = floor.menu.len(),
            open_orders = floor.orders.len(),
            "Floor ready"
        );

        // First snapshot so a freshly seeded floor survives a restart
        // before any mutation happens
        persist::save_snapshot(&store, &floor).await;

        Ok(AppState {
            floor: FloorState::new(floor),
            store,
            notifications: NotificationCenter::new(),
        })
    }
}

// =============================================================================
// Tracing Setup
// =============================================================================

/// Initializes the tracing subscriber.
///
/// Respects `RUST_LOG` when set; defaults to `info` otherwise.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
