// ABOUTME: Macro averages and ISO-week bucketed series over a filtered window
// ABOUTME: Empty windows average to zero, a legitimate no-intake-logged state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! Nutrition statistics
//!
//! Arithmetic means per macro field over the filtered window, plus a weekly
//! series for charting. Unlike weight, a zero here is meaningful ("no intake
//! logged"), so empty windows average to `0.0` instead of a null sentinel.
//! Weeks are calendar weeks with a Monday 00:00 boundary, labeled with ISO
//! week numbers.

use super::period::{filter_sorted, DateRange};
use crate::models::MacroEntry;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregated nutrition statistics for one window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroStats {
    /// Mean calories per entry over the window
    pub avg_calories: f64,
    /// Mean protein (g) per entry
    pub avg_protein_g: f64,
    /// Mean carbohydrates (g) per entry
    pub avg_carbs_g: f64,
    /// Mean fat (g) per entry
    pub avg_fat_g: f64,
    /// Per-week means in chronological order
    pub weekly: Vec<WeeklyMacros>,
}

impl MacroStats {
    /// The no-entries state: zero means, empty series
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            avg_calories: 0.0,
            avg_protein_g: 0.0,
            avg_carbs_g: 0.0,
            avg_fat_g: 0.0,
            weekly: Vec::new(),
        }
    }
}

/// Per-week calorie and protein means for the nutrition chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyMacros {
    /// ISO week label, e.g. `2024-W05`
    pub week_label: String,
    /// Monday of the week
    pub week_start: NaiveDate,
    /// Mean calories per entry that week
    pub avg_calories: f64,
    /// Mean protein (g) per entry that week
    pub avg_protein_g: f64,
}

/// Compute macro statistics over the entries falling inside `range`
#[must_use]
pub fn macro_stats(entries: &[MacroEntry], range: &DateRange) -> MacroStats {
    let filtered = filter_sorted(entries, range, |e| e.date);
    if filtered.is_empty() {
        return MacroStats::empty();
    }

    let n = filtered.len() as f64;
    let avg_calories = filtered.iter().map(|e| e.calories).sum::<f64>() / n;
    let avg_protein_g = filtered.iter().map(|e| e.protein_g).sum::<f64>() / n;
    let avg_carbs_g = filtered.iter().map(|e| e.carbs_g).sum::<f64>() / n;
    let avg_fat_g = filtered.iter().map(|e| e.fat_g).sum::<f64>() / n;

    MacroStats {
        avg_calories,
        avg_protein_g,
        avg_carbs_g,
        avg_fat_g,
        weekly: weekly_series(&filtered),
    }
}

/// Bucket filtered entries into calendar weeks and average per bucket
///
/// Keyed by the Monday of each entry's week; the `BTreeMap` keeps the series
/// chronological without a separate sort.
fn weekly_series(filtered: &[MacroEntry]) -> Vec<WeeklyMacros> {
    let mut buckets: BTreeMap<NaiveDate, Vec<&MacroEntry>> = BTreeMap::new();
    for entry in filtered {
        buckets.entry(monday_of(entry.date.date_naive())).or_default().push(entry);
    }

    buckets
        .into_iter()
        .map(|(week_start, entries)| {
            let n = entries.len() as f64;
            let iso = week_start.iso_week();
            WeeklyMacros {
                week_label: format!("{}-W{:02}", iso.year(), iso.week()),
                week_start,
                avg_calories: entries.iter().map(|e| e.calories).sum::<f64>() / n,
                avg_protein_g: entries.iter().map(|e| e.protein_g).sum::<f64>() / n,
            }
        })
        .collect()
}

/// Monday 00:00 week boundary for a date
fn monday_of(date: NaiveDate) -> NaiveDate {
    date - chrono::Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::intelligence::period::TimePeriod;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn entry(date: (i32, u32, u32), calories: f64, protein_g: f64) -> MacroEntry {
        MacroEntry {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            date: Utc
                .with_ymd_and_hms(date.0, date.1, date.2, 12, 0, 0)
                .unwrap(),
            calories,
            protein_g,
            carbs_g: 200.0,
            fat_g: 70.0,
        }
    }

    fn all_until(date: (i32, u32, u32)) -> DateRange {
        TimePeriod::All.resolve_at(
            Utc.with_ymd_and_hms(date.0, date.1, date.2, 0, 0, 0)
                .unwrap(),
        )
    }

    #[test]
    fn test_means_over_window() {
        let entries = vec![
            entry((2024, 1, 1), 2000.0, 120.0),
            entry((2024, 1, 2), 2200.0, 140.0),
        ];
        let stats = macro_stats(&entries, &all_until((2024, 2, 1)));
        assert_eq!(stats.avg_calories, 2100.0);
        assert_eq!(stats.avg_protein_g, 130.0);
        assert_eq!(stats.avg_carbs_g, 200.0);
        assert_eq!(stats.avg_fat_g, 70.0);
    }

    #[test]
    fn test_empty_window_averages_zero() {
        // Zero is the legitimate "no intake logged" state, not a null sentinel
        let stats = macro_stats(&[], &TimePeriod::OneMonth.resolve());
        assert_eq!(stats, MacroStats::empty());
        assert_eq!(stats.avg_calories, 0.0);
        assert!(stats.weekly.is_empty());
    }

    #[test]
    fn test_weeks_split_on_monday() {
        // 2024-01-07 is a Sunday, 2024-01-08 a Monday: adjacent days, two weeks
        let entries = vec![
            entry((2024, 1, 7), 1800.0, 100.0),
            entry((2024, 1, 8), 2400.0, 160.0),
        ];
        let stats = macro_stats(&entries, &all_until((2024, 2, 1)));
        assert_eq!(stats.weekly.len(), 2);
        assert_eq!(stats.weekly[0].week_label, "2024-W01");
        assert_eq!(stats.weekly[1].week_label, "2024-W02");
        assert_eq!(
            stats.weekly[0].week_start,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        assert_eq!(
            stats.weekly[1].week_start,
            NaiveDate::from_ymd_opt(2024, 1, 8).unwrap()
        );
    }

    #[test]
    fn test_weekly_series_is_chronological_and_averaged() {
        let entries = vec![
            entry((2024, 1, 10), 2000.0, 100.0),
            entry((2024, 1, 9), 2400.0, 140.0),
            entry((2024, 1, 2), 1600.0, 90.0),
        ];
        let stats = macro_stats(&entries, &all_until((2024, 2, 1)));
        assert_eq!(stats.weekly.len(), 2);
        assert!(stats.weekly[0].week_start < stats.weekly[1].week_start);
        // Second week holds the Jan 9 + Jan 10 entries
        assert_eq!(stats.weekly[1].avg_calories, 2200.0);
        assert_eq!(stats.weekly[1].avg_protein_g, 120.0);
    }

    #[test]
    fn test_iso_week_label_crosses_year_boundary() {
        // 2024-12-30 is a Monday belonging to ISO week 2025-W01
        let entries = vec![entry((2024, 12, 30), 2000.0, 100.0)];
        let stats = macro_stats(&entries, &all_until((2025, 2, 1)));
        assert_eq!(stats.weekly[0].week_label, "2025-W01");
    }
}
