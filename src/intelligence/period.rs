// ABOUTME: Period token resolution mapping coarse window selectors to concrete date ranges
// ABOUTME: Unknown tokens deliberately fall back to the unbounded all-time window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! Period token resolution
//!
//! The frontend selects analytics windows with coarse tokens (`1m`, `3m`,
//! `6m`, `1y`, `all`). A token resolves to a half-open `[start, end)` range
//! where `end` is always "now" at call time. Unrecognized tokens resolve to
//! the all-time window rather than failing; a period selector glitch should
//! widen the chart, not break it.

use chrono::{DateTime, Months, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Coarse time-window selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimePeriod {
    /// Last calendar month
    #[serde(rename = "1m")]
    OneMonth,
    /// Last three months
    #[serde(rename = "3m")]
    ThreeMonths,
    /// Last six months
    #[serde(rename = "6m")]
    SixMonths,
    /// Last year
    #[serde(rename = "1y")]
    OneYear,
    /// Entire history, no lower bound
    #[default]
    All,
}

impl TimePeriod {
    /// Parse a period token; unknown tokens resolve to [`Self::All`]
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token.to_lowercase().as_str() {
            "1m" => Self::OneMonth,
            "3m" => Self::ThreeMonths,
            "6m" => Self::SixMonths,
            "1y" => Self::OneYear,
            // "all" and anything unrecognized: unbounded window
            _ => Self::All,
        }
    }

    /// The wire token for this period
    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::OneMonth => "1m",
            Self::ThreeMonths => "3m",
            Self::SixMonths => "6m",
            Self::OneYear => "1y",
            Self::All => "all",
        }
    }

    /// Number of months this period spans, `None` for the unbounded window
    const fn months(self) -> Option<u32> {
        match self {
            Self::OneMonth => Some(1),
            Self::ThreeMonths => Some(3),
            Self::SixMonths => Some(6),
            Self::OneYear => Some(12),
            Self::All => None,
        }
    }

    /// Resolve to a concrete range ending now
    #[must_use]
    pub fn resolve(self) -> DateRange {
        self.resolve_at(Utc::now())
    }

    /// Resolve to a concrete range ending at `now`
    ///
    /// Month arithmetic is calendar-aware: `1m` back from March 31 lands on
    /// February's last day, not an invalid date.
    #[must_use]
    pub fn resolve_at(self, now: DateTime<Utc>) -> DateRange {
        let start = self
            .months()
            .and_then(|m| now.checked_sub_months(Months::new(m)));
        DateRange { start, end: now }
    }
}

impl Display for TimePeriod {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_token())
    }
}

/// A half-open `[start, end)` time window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// Inclusive lower bound; `None` means unbounded
    pub start: Option<DateTime<Utc>>,
    /// Exclusive upper bound
    pub end: DateTime<Utc>,
}

impl DateRange {
    /// Whether `ts` falls inside `[start, end)`
    #[must_use]
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        self.start.is_none_or(|s| ts >= s) && ts < self.end
    }
}

/// Retain in-range items and sort them ascending by date
///
/// Shared preamble of every aggregator: the result is always a subset of the
/// input, time-ordered, ready for first/last and bucketing passes.
pub fn filter_sorted<T, F>(items: &[T], range: &DateRange, date_of: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> DateTime<Utc>,
{
    let mut filtered: Vec<T> = items
        .iter()
        .filter(|item| range.contains(date_of(item)))
        .cloned()
        .collect();
    filtered.sort_by_key(|item| date_of(item));
    filtered
}
