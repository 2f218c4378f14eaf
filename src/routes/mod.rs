// ABOUTME: Route module organization for the Stride server HTTP endpoints
// ABOUTME: Centralized route definitions organized by domain with thin handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! Route module for the Stride server
//!
//! Routes are organized by domain; each module contains only route
//! definitions and thin handler functions that delegate to the service
//! layer.

use crate::resources::ServerResources;
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Progress analytics routes
pub mod analytics;
/// Health check and system status routes
pub mod health;
/// Preference profile routes
pub mod preferences;
/// Plan recommendation routes
pub mod recommendations;

pub use analytics::AnalyticsRoutes;
pub use health::HealthRoutes;
pub use preferences::PreferenceRoutes;
pub use recommendations::RecommendationRoutes;

/// Default per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Assemble the full application router
#[must_use]
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(AnalyticsRoutes::routes(Arc::clone(&resources)))
        .merge(RecommendationRoutes::routes(Arc::clone(&resources)))
        .merge(PreferenceRoutes::routes(resources))
        .merge(HealthRoutes::routes())
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(CorsLayer::permissive())
}
