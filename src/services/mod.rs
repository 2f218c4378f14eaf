// ABOUTME: Service layer between route handlers and the intelligence computations
// ABOUTME: Each facade fetches once, computes synchronously, and returns wire-ready types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! Service facades
//!
//! Routes stay thin; these facades own validation, repository access, and the
//! hand-off into the pure intelligence layer.

/// Progress analytics over the user's logs
pub mod analytics;

/// Plan recommendations from profile and catalog
pub mod recommendations;

pub use analytics::AnalyticsService;
pub use recommendations::RecommendationService;
