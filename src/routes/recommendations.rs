// ABOUTME: Plan recommendation route handler returning ranked workouts and nutrition plans
// ABOUTME: Delegates profile lookup, hard filtering, and scoring to the recommendation service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! Recommendation routes

use crate::auth::AuthedUser;
use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::services::RecommendationService;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;

/// Recommendation routes
pub struct RecommendationRoutes;

impl RecommendationRoutes {
    /// Create all recommendation routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/recommendations", get(Self::handle_recommendations))
            .with_state(resources)
    }

    /// Handle recommendations request
    async fn handle_recommendations(
        State(resources): State<Arc<ServerResources>>,
        user: AuthedUser,
    ) -> Result<Response, AppError> {
        let service = RecommendationService::new(&resources);
        let response = service.recommendations_for(user.user_id).await?;
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
