// ABOUTME: Progress analytics route handlers for weight, nutrition, and workout statistics
// ABOUTME: Thin axum handlers delegating period resolution and aggregation to the service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! Analytics routes
//!
//! The `/api/analytics/*` surface consumed by the progress pages: log
//! retrieval with period-bucketed statistics, log submission, and the
//! combined summary feeding the dashboard charts.

use crate::auth::AuthedUser;
use crate::errors::AppError;
use crate::intelligence::TimePeriod;
use crate::resources::ServerResources;
use crate::services::analytics::{
    AnalyticsService, LogMacrosRequest, LogWeightRequest, LogWorkoutRequest,
};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

/// Query parameters shared by all analytics reads
#[derive(Deserialize)]
struct PeriodQuery {
    /// Period token; unknown values resolve to the all-time window
    #[serde(default)]
    period: Option<String>,
}

impl PeriodQuery {
    fn resolve(&self) -> TimePeriod {
        self.period
            .as_deref()
            .map_or(TimePeriod::All, TimePeriod::from_token)
    }
}

/// Analytics routes
pub struct AnalyticsRoutes;

impl AnalyticsRoutes {
    /// Create all analytics routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/analytics/weight", get(Self::handle_weight_analytics))
            .route("/api/analytics/weight", post(Self::handle_log_weight))
            .route(
                "/api/analytics/weight/:id",
                delete(Self::handle_delete_weight),
            )
            .route(
                "/api/analytics/nutrition",
                get(Self::handle_nutrition_analytics),
            )
            .route("/api/analytics/nutrition", post(Self::handle_log_macros))
            .route(
                "/api/analytics/workouts",
                get(Self::handle_workout_analytics),
            )
            .route("/api/analytics/workouts", post(Self::handle_log_workout))
            .route("/api/analytics/summary", get(Self::handle_summary))
            .with_state(resources)
    }

    /// Handle weight analytics request
    async fn handle_weight_analytics(
        State(resources): State<Arc<ServerResources>>,
        user: AuthedUser,
        Query(params): Query<PeriodQuery>,
    ) -> Result<Response, AppError> {
        let service = AnalyticsService::new(&resources);
        let response = service
            .weight_analytics(user.user_id, params.resolve())
            .await?;
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle weight submission
    async fn handle_log_weight(
        State(resources): State<Arc<ServerResources>>,
        user: AuthedUser,
        Json(request): Json<LogWeightRequest>,
    ) -> Result<Response, AppError> {
        let service = AnalyticsService::new(&resources);
        let entry = service.log_weight(user.user_id, request).await?;
        Ok((StatusCode::CREATED, Json(entry)).into_response())
    }

    /// Handle weight entry deletion
    async fn handle_delete_weight(
        State(resources): State<Arc<ServerResources>>,
        user: AuthedUser,
        Path(entry_id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let service = AnalyticsService::new(&resources);
        service.delete_weight(user.user_id, entry_id).await?;
        Ok(StatusCode::NO_CONTENT.into_response())
    }

    /// Handle nutrition analytics request
    async fn handle_nutrition_analytics(
        State(resources): State<Arc<ServerResources>>,
        user: AuthedUser,
        Query(params): Query<PeriodQuery>,
    ) -> Result<Response, AppError> {
        let service = AnalyticsService::new(&resources);
        let response = service
            .nutrition_analytics(user.user_id, params.resolve())
            .await?;
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle nutrition submission
    async fn handle_log_macros(
        State(resources): State<Arc<ServerResources>>,
        user: AuthedUser,
        Json(request): Json<LogMacrosRequest>,
    ) -> Result<Response, AppError> {
        let service = AnalyticsService::new(&resources);
        let entry = service.log_macros(user.user_id, request).await?;
        Ok((StatusCode::CREATED, Json(entry)).into_response())
    }

    /// Handle workout analytics request
    async fn handle_workout_analytics(
        State(resources): State<Arc<ServerResources>>,
        user: AuthedUser,
        Query(params): Query<PeriodQuery>,
    ) -> Result<Response, AppError> {
        let service = AnalyticsService::new(&resources);
        let response = service
            .workout_analytics(user.user_id, params.resolve())
            .await?;
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle workout submission
    async fn handle_log_workout(
        State(resources): State<Arc<ServerResources>>,
        user: AuthedUser,
        Json(request): Json<LogWorkoutRequest>,
    ) -> Result<Response, AppError> {
        let service = AnalyticsService::new(&resources);
        let session = service.log_workout(user.user_id, request).await?;
        Ok((StatusCode::CREATED, Json(session)).into_response())
    }

    /// Handle combined summary request
    async fn handle_summary(
        State(resources): State<Arc<ServerResources>>,
        user: AuthedUser,
        Query(params): Query<PeriodQuery>,
    ) -> Result<Response, AppError> {
        let service = AnalyticsService::new(&resources);
        let response = service.summary(user.user_id, params.resolve()).await?;
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
