//! # Report Command
//!
//! The daily report view. Pure read: aggregates on demand from the floor,
//! nothing is cached or persisted.

use mesa_core::DailyReport;
use tracing::debug;

use crate::AppState;

/// Builds the daily report for the local calendar day.
pub fn daily_report(state: &AppState) -> DailyReport {
    debug!("daily_report command");
    state.floor.with_floor(|f| f.daily_report())
}

// =============================================================================
// Unit Tests
// =============================================================================
