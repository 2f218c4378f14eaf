// ABOUTME: Weight statistics over a period-filtered entry window
// ABOUTME: Distinguishes the no-data sentinel from zero since zero is never a valid weight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! Weight statistics
//!
//! Computes the stats card next to the weight chart: current value, change
//! over the window, and window extremes. `current`/`highest`/`lowest` are
//! `None` when the window holds no entries — weight is strictly positive, so
//! `0` would be indistinguishable from real data.

use super::period::{filter_sorted, DateRange};
use crate::models::WeightEntry;
use serde::{Deserialize, Serialize};

/// Aggregated weight statistics for one window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightStats {
    /// Most recent weight in the window, `None` when the window is empty
    pub current: Option<f64>,
    /// Current minus the first in-window weight; `0` with fewer than 2 entries
    pub change_kg: f64,
    /// Highest weight within the window (not all-time)
    pub highest: Option<f64>,
    /// Lowest weight within the window (not all-time)
    pub lowest: Option<f64>,
    /// Number of entries in the window
    pub count: usize,
}

impl WeightStats {
    /// The explicit no-data state
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            current: None,
            change_kg: 0.0,
            highest: None,
            lowest: None,
            count: 0,
        }
    }
}

/// Compute weight statistics over the entries falling inside `range`
///
/// Extremes are intentionally window-local: the card answers "highest this
/// period", not "highest ever".
#[must_use]
pub fn weight_stats(entries: &[WeightEntry], range: &DateRange) -> WeightStats {
    let filtered = filter_sorted(entries, range, |e| e.date);
    let count = filtered.len();

    let Some(last) = filtered.last() else {
        return WeightStats::empty();
    };

    let current = last.weight_kg;
    let change_kg = if count < 2 {
        0.0
    } else {
        // filtered is non-empty, so first() is present
        filtered.first().map_or(0.0, |first| current - first.weight_kg)
    };

    let highest = filtered.iter().map(|e| e.weight_kg).fold(f64::MIN, f64::max);
    let lowest = filtered.iter().map(|e| e.weight_kg).fold(f64::MAX, f64::min);

    WeightStats {
        current: Some(current),
        change_kg,
        highest: Some(highest),
        lowest: Some(lowest),
        count,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::intelligence::period::TimePeriod;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn entry(date: (i32, u32, u32), weight_kg: f64) -> WeightEntry {
        WeightEntry {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            date: Utc
                .with_ymd_and_hms(date.0, date.1, date.2, 8, 0, 0)
                .unwrap(),
            weight_kg,
            note: None,
        }
    }

    fn all_until(date: (i32, u32, u32)) -> DateRange {
        TimePeriod::All.resolve_at(
            Utc.with_ymd_and_hms(date.0, date.1, date.2, 0, 0, 0)
                .unwrap(),
        )
    }

    #[test]
    fn test_two_entry_window() {
        let entries = vec![entry((2024, 1, 1), 80.0), entry((2024, 2, 1), 78.0)];
        let stats = weight_stats(&entries, &all_until((2024, 3, 1)));
        assert_eq!(
            stats,
            WeightStats {
                current: Some(78.0),
                change_kg: -2.0,
                highest: Some(80.0),
                lowest: Some(78.0),
                count: 2,
            }
        );
    }

    #[test]
    fn test_empty_window_is_explicit() {
        let stats = weight_stats(&[], &TimePeriod::OneMonth.resolve());
        assert_eq!(stats, WeightStats::empty());
        assert_eq!(stats.current, None);
        assert_eq!(stats.change_kg, 0.0);
    }

    #[test]
    fn test_single_entry_has_zero_change() {
        let entries = vec![entry((2024, 1, 15), 82.5)];
        let stats = weight_stats(&entries, &all_until((2024, 2, 1)));
        assert_eq!(stats.current, Some(82.5));
        assert_eq!(stats.change_kg, 0.0);
        assert_eq!(stats.highest, Some(82.5));
        assert_eq!(stats.lowest, Some(82.5));
        assert_eq!(stats.count, 1);
    }

    #[test]
    fn test_extremes_are_window_local() {
        // The 90kg reading predates the window and must not leak into it
        let entries = vec![
            entry((2023, 1, 1), 90.0),
            entry((2024, 1, 10), 81.0),
            entry((2024, 2, 10), 79.0),
        ];
        let range = TimePeriod::ThreeMonths
            .resolve_at(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
        let stats = weight_stats(&entries, &range);
        assert_eq!(stats.highest, Some(81.0));
        assert_eq!(stats.lowest, Some(79.0));
        assert_eq!(stats.count, 2);
    }

    #[test]
    fn test_unsorted_input_is_ordered_before_aggregation() {
        let entries = vec![
            entry((2024, 2, 1), 78.0),
            entry((2024, 1, 1), 80.0),
            entry((2024, 3, 1), 77.0),
        ];
        let stats = weight_stats(&entries, &all_until((2024, 4, 1)));
        // current comes from the chronologically last entry, change from the first
        assert_eq!(stats.current, Some(77.0));
        assert_eq!(stats.change_kg, -3.0);
    }

    #[test]
    fn test_invariants_hold() {
        let entries = vec![
            entry((2024, 1, 1), 80.0),
            entry((2024, 1, 8), 83.0),
            entry((2024, 1, 15), 79.5),
        ];
        let range = all_until((2024, 2, 1));
        let stats = weight_stats(&entries, &range);

        assert!(stats.highest.unwrap() >= stats.lowest.unwrap());
        assert_eq!(
            stats.change_kg,
            stats.current.unwrap() - entries[0].weight_kg
        );

        // Idempotence: identical inputs, identical output
        assert_eq!(stats, weight_stats(&entries, &range));
    }
}
