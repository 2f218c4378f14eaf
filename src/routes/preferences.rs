// ABOUTME: Preference profile route handlers for reading, updating, and resetting
// ABOUTME: Profiles are upserted from partial updates and reset to defaults, never deleted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! Preference routes
//!
//! Reads return the stored profile or 404 when the user never saved one.
//! Updates are partial: omitted fields keep their stored values (or the
//! registration defaults for a first write). Reset writes the defaults back
//! in place — profiles are never deleted.

use crate::auth::AuthedUser;
use crate::errors::AppError;
use crate::models::{FitnessLevel, PreferenceProfile};
use crate::resources::ServerResources;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Partial preference update; omitted fields keep their current values
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePreferencesRequest {
    /// New fitness level
    pub fitness_level: Option<FitnessLevel>,
    /// Replacement workout preference set
    pub workout_preferences: Option<BTreeSet<String>>,
    /// Replacement dietary restriction set
    pub dietary_restrictions: Option<BTreeSet<String>>,
    /// Replacement goal set
    pub goals: Option<BTreeSet<String>>,
}

/// Preference routes
pub struct PreferenceRoutes;

impl PreferenceRoutes {
    /// Create all preference routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/preferences", get(Self::handle_get_preferences))
            .route("/api/preferences", post(Self::handle_update_preferences))
            .route("/api/preferences", put(Self::handle_update_preferences))
            .route("/api/preferences/reset", post(Self::handle_reset_preferences))
            .with_state(resources)
    }

    /// Handle profile read
    async fn handle_get_preferences(
        State(resources): State<Arc<ServerResources>>,
        user: AuthedUser,
    ) -> Result<Response, AppError> {
        let profile = resources
            .preferences
            .preference_profile(user.user_id)
            .await
            .map_err(|e| AppError::upstream("preference store", e.to_string()))?
            .ok_or_else(|| AppError::not_found("preference profile").with_user_id(user.user_id))?;

        Ok((StatusCode::OK, Json(profile)).into_response())
    }

    /// Handle partial profile update
    async fn handle_update_preferences(
        State(resources): State<Arc<ServerResources>>,
        user: AuthedUser,
        Json(request): Json<UpdatePreferencesRequest>,
    ) -> Result<Response, AppError> {
        let mut profile = resources
            .preferences
            .preference_profile(user.user_id)
            .await
            .map_err(|e| AppError::upstream("preference store", e.to_string()))?
            .unwrap_or_else(|| PreferenceProfile::default_for(user.user_id));

        if let Some(fitness_level) = request.fitness_level {
            profile.fitness_level = fitness_level;
        }
        if let Some(workout_preferences) = request.workout_preferences {
            profile.workout_preferences = workout_preferences;
        }
        if let Some(dietary_restrictions) = request.dietary_restrictions {
            profile.dietary_restrictions = dietary_restrictions;
        }
        if let Some(goals) = request.goals {
            profile.goals = goals;
        }

        resources
            .preferences
            .upsert_preference_profile(&profile)
            .await
            .map_err(|e| AppError::upstream("preference store", e.to_string()))?;

        tracing::info!(user_id = %user.user_id, "preference profile updated");
        Ok((StatusCode::OK, Json(profile)).into_response())
    }

    /// Handle profile reset to registration defaults
    async fn handle_reset_preferences(
        State(resources): State<Arc<ServerResources>>,
        user: AuthedUser,
    ) -> Result<Response, AppError> {
        let profile = PreferenceProfile::default_for(user.user_id);
        resources
            .preferences
            .upsert_preference_profile(&profile)
            .await
            .map_err(|e| AppError::upstream("preference store", e.to_string()))?;

        Ok((StatusCode::OK, Json(profile)).into_response())
    }
}
