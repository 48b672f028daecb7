//! # Daily Report
//!
//! Aggregation of today's sales and the floor's usage statistics into the
//! figures the report view shows. Pure read-only derivation: building a
//! report never mutates the floor.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::floor::Floor;
use crate::money::Money;

// =============================================================================
// Report Types
// =============================================================================

/// The most-used table entry of the daily report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TableUsage {
    /// Business number of the table.
    pub number: u32,
    /// Lifetime occupation count.
    pub usage_count: u32,
}

/// The figures shown on the daily sales report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DailyReport {
    /// Sum of the totals of today's sales.
    pub total_sales_today: Money,

    /// How many sales happened today.
    pub sales_count_today: usize,

    /// The table with the highest lifetime usage count. `None` on an empty
    /// floor. Ties go to the table listed first.
    pub most_used_table: Option<TableUsage>,

    /// Mean completed occupation duration in minutes, over the **whole**
    /// occupation history (not just today). 0 when no occupation has
    /// completed yet.
    pub avg_occupation_minutes: f64,
}

// =============================================================================
// Aggregation
// =============================================================================

impl Floor {
    /// Builds the daily report for the local calendar day.
    ///
    /// "Today" follows the machine's local timezone, because that is the
    /// day the staff closing the till cares about.
    pub fn daily_report(&self) -> DailyReport {
        self.daily_report_on(Local::now().date_naive())
    }

    /// Builds the report treating `today` as the current local day.
    /// Split out so the day window is testable without clock control.
    pub fn daily_report_on(&self, today: NaiveDate) -> DailyReport {
        let todays_sales = self
            .sales
            .iter()
            .filter(|s| s.date.with_timezone(&Local).date_naive() == today);

        let mut total_sales_today = Money::zero();
        let mut sales_count_today = 0;
        for sale in todays_sales {
            total_sales_today += sale.total();
            sales_count_today += 1;
        }

        // First maximum wins on ties, so the winner is stable across reloads
        let mut most_used: Option<&crate::types::Table> = None;
        for table in &self.tables {
            match most_used {
                Some(best) if table.usage_count > best.usage_count => most_used = Some(table),
                None => most_used = Some(table),
                _ => {}
            }
        }

        let avg_occupation_minutes = if self.occupation_history.is_empty() {
            0.0
        } else {
            let total_ms: i64 = self.occupation_history.iter().sum();
            total_ms as f64 / self.occupation_history.len() as f64 / 60_000.0
        };

        DailyReport {
            total_sales_today,
            sales_count_today,
            most_used_table: most_used.map(|t| TableUsage {
                number: t.number,
                usage_count: t.usage_count,
            }),
            avg_occupation_minutes,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{new_entity_id, Sale, Zone};
    use chrono::{Duration, Utc};

    fn sale_of(total_cents: i64, date: chrono::DateTime<Utc>) -> Sale {
        Sale {
            id: new_entity_id(),
            order_id: new_entity_id(),
            table_id: new_entity_id(),
            total_cents,
            items: Vec::new(),
            date,
        }
    }

    #[test]
    fn empty_floor_reports_zeroes() {
        let floor = Floor::default();
        let report = floor.daily_report();

        assert!(report.total_sales_today.is_zero());
        assert_eq!(report.sales_count_today, 0);
        assert!(report.most_used_table.is_none());
        assert_eq!(report.avg_occupation_minutes, 0.0);
    }

    #[test]
    fn sums_only_todays_sales() {
        let mut floor = Floor::default();
        let now = Utc::now();
        floor.sales.push(sale_of(2100, now));
        floor.sales.push(sale_of(800, now));
        floor.sales.push(sale_of(99_999, now - Duration::days(2)));

        let report = floor.daily_report();
        assert_eq!(report.total_sales_today.cents(), 2900);
        assert_eq!(report.sales_count_today, 2);
    }

    #[test]
    fn first_maximum_wins_usage_ties() {
        let mut floor = Floor::default();
        floor.add_table(1, 4, Zone::Bar).unwrap();
        floor.add_table(2, 4, Zone::Dining).unwrap();
        floor.add_table(3, 4, Zone::Dining).unwrap();
        floor.tables[0].usage_count = 5;
        floor.tables[1].usage_count = 5;
        floor.tables[2].usage_count = 3;

        let usage = floor.daily_report().most_used_table.unwrap();
        assert_eq!(usage.number, 1);
        assert_eq!(usage.usage_count, 5);
    }

    #[test]
    fn averages_whole_occupation_history_in_minutes() {
        let mut floor = Floor::default();
        // 10 and 20 minutes in milliseconds
        floor.occupation_history.push(600_000);
        floor.occupation_history.push(1_200_000);

        let report = floor.daily_report();
        assert_eq!(report.avg_occupation_minutes, 15.0);
    }

    #[test]
    fn report_does_not_mutate_the_floor() {
        let mut floor = Floor::default();
        floor.add_table(1, 4, Zone::Bar).unwrap();
        floor.sales.push(sale_of(500, Utc::now()));

        let before = (floor.tables.len(), floor.sales.len());
        let _ = floor.daily_report();
        assert_eq!((floor.tables.len(), floor.sales.len()), before);
    }
}
