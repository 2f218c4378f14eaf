// ABOUTME: Workout totals and category distribution with largest-remainder rounding
// ABOUTME: Distribution percentages always sum to exactly 100 for the frontend pie chart
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! Workout statistics
//!
//! Totals and means over the filtered window plus a category distribution for
//! the training-split chart. Sessions are tallied once per tagged muscle
//! group (falling back to the workout type when untagged), and percentages
//! are rounded with the largest-remainder method so the chart always sums to
//! exactly 100 — independent rounding drifts. Chart colors are assigned by
//! the frontend from the category index; no display concern lives here.

use super::period::{filter_sorted, DateRange};
use crate::models::WorkoutSession;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Aggregated workout statistics for one window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutStats {
    /// Number of sessions in the window
    pub total_sessions: usize,
    /// Summed session length in minutes
    pub total_duration_minutes: u64,
    /// Mean session length in minutes, `0` with no sessions
    pub avg_duration_minutes: f64,
    /// Summed energy expenditure (kcal)
    pub total_calories_burned: f64,
    /// Category shares, largest first, summing to exactly 100
    pub distribution: Vec<CategoryShare>,
}

impl WorkoutStats {
    /// The no-sessions state
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            total_sessions: 0,
            total_duration_minutes: 0,
            avg_duration_minutes: 0.0,
            total_calories_burned: 0.0,
            distribution: Vec::new(),
        }
    }
}

/// One category's share of the training split
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryShare {
    /// Muscle group or workout type
    pub category: String,
    /// Whole-percent share; all shares sum to 100
    pub percent: u32,
}

/// Compute workout statistics over the sessions falling inside `range`
#[must_use]
pub fn workout_stats(sessions: &[WorkoutSession], range: &DateRange) -> WorkoutStats {
    let filtered = filter_sorted(sessions, range, |s| s.date);
    if filtered.is_empty() {
        return WorkoutStats::empty();
    }

    let total_sessions = filtered.len();
    let total_duration_minutes = filtered
        .iter()
        .map(|s| u64::from(s.duration_minutes))
        .sum::<u64>();
    let avg_duration_minutes = total_duration_minutes as f64 / total_sessions as f64;
    let total_calories_burned = filtered.iter().map(|s| s.calories_burned).sum::<f64>();

    WorkoutStats {
        total_sessions,
        total_duration_minutes,
        avg_duration_minutes,
        total_calories_burned,
        distribution: distribution(&filtered),
    }
}

/// Tally category occurrences and convert to whole percents summing to 100
///
/// Each session contributes one occurrence per tagged muscle group, or one
/// for its workout type when no groups are tagged. Percentages are taken over
/// the occurrence total — the only denominator under which multi-group
/// sessions still sum to 100.
fn distribution(sessions: &[WorkoutSession]) -> Vec<CategoryShare> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for session in sessions {
        if session.muscle_groups.is_empty() {
            *counts.entry(session.workout_type.as_str()).or_insert(0) += 1;
        } else {
            for group in &session.muscle_groups {
                *counts.entry(group.as_str()).or_insert(0) += 1;
            }
        }
    }

    let total: u64 = counts.values().sum();
    if total == 0 {
        return Vec::new();
    }

    // Deterministic bucket order: count descending, then category name
    let mut buckets: Vec<(&str, u64)> = counts.into_iter().collect();
    buckets.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    largest_remainder(&buckets, total)
}

/// Largest-remainder rounding of `count/total` shares to whole percents
///
/// Floors every share, then hands the leftover points to the largest
/// fractional remainders. Remainder ties resolve in bucket order, which is
/// already deterministic.
fn largest_remainder(buckets: &[(&str, u64)], total: u64) -> Vec<CategoryShare> {
    let mut shares: Vec<(usize, u32, f64)> = buckets
        .iter()
        .enumerate()
        .map(|(idx, (_, count))| {
            let exact = *count as f64 * 100.0 / total as f64;
            (idx, exact.floor() as u32, exact - exact.floor())
        })
        .collect();

    let floored: u32 = shares.iter().map(|(_, floor, _)| floor).sum();
    let mut leftover = 100 - floored;

    // Stable sort keeps bucket order among equal remainders
    let mut by_remainder: Vec<usize> = (0..shares.len()).collect();
    by_remainder.sort_by(|&a, &b| {
        shares[b]
            .2
            .partial_cmp(&shares[a].2)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    for idx in by_remainder {
        if leftover == 0 {
            break;
        }
        shares[idx].1 += 1;
        leftover -= 1;
    }

    shares
        .into_iter()
        .map(|(idx, percent, _)| CategoryShare {
            category: buckets[idx].0.to_owned(),
            percent,
        })
        .collect()
}
