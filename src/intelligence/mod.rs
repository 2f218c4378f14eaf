// ABOUTME: Aggregation and recommendation computations over immutable in-memory inputs
// ABOUTME: Pure synchronous functions; all I/O happens in the service layer above
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! # Intelligence Layer
//!
//! Pure computation over data fetched once per request: period resolution,
//! weight/nutrition/workout statistics, and recommendation ranking. Nothing in
//! this module performs I/O or mutates shared state, so concurrent requests
//! need no coordination and every function is total — empty input is a
//! modeled output, not an error.

/// Time-window resolution for period tokens
pub mod period;

/// Weight statistics over a filtered window
pub mod weight;

/// Macro averages and weekly series
pub mod nutrition;

/// Workout totals and category distribution
pub mod workouts;

/// Plan recommendation filtering and scoring
pub mod recommendations;

pub use period::{DateRange, TimePeriod};
pub use recommendations::{DietaryRules, RankedRecommendations, ScoringWeights};
pub use weight::WeightStats;
pub use nutrition::{MacroStats, WeeklyMacros};
pub use workouts::{CategoryShare, WorkoutStats};
