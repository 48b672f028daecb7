//! # Floor State
//!
//! Manages the shared in-memory floor.
//!
//! ## Thread Safety
//! The floor is wrapped in `Arc<Mutex<T>>` because:
//! 1. Commands run on the async runtime's worker threads
//! 2. Only one command should modify the floor at a time
//!
//! A single client drives the app, so the lock is never contended in
//! practice; it exists to make the sharing sound, not to arbitrate load.

use std::sync::{Arc, Mutex};

use mesa_core::Floor;

/// Managed floor state.
///
/// ## Why Not RwLock?
/// Floor operations are quick and most of them write.
/// A RwLock would add complexity with minimal benefit.
#[derive(Debug, Clone)]
pub struct FloorState {
    floor: Arc<Mutex<Floor>>,
}

impl FloorState {
    /// Wraps a floor (usually the one bootstrap loaded or seeded).
    pub fn new(floor: Floor) -> Self {
        FloorState {
            floor: Arc::new(Mutex::new(floor)),
        }
    }

    /// Executes a function with read access to the floor.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let report = floor_state.with_floor(|f| f.daily_report());
    /// ```
    pub fn with_floor<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Floor) -> R,
    {
        let floor = self.floor.lock().expect("Floor mutex poisoned");
        f(&floor)
    }

    /// Executes a function with write access to the floor.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// floor_state.with_floor_mut(|f| f.checkout(&table_id));
    /// ```
    pub fn with_floor_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Floor) -> R,
    {
        let mut floor = self.floor.lock().expect("Floor mutex poisoned");
        f(&mut floor)
    }
}
