// ABOUTME: Analytics facade wiring the log store, period resolver, and aggregators
// ABOUTME: Validates submissions and returns explicit empty states, never fabricated data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! Analytics service
//!
//! Fetches a user's logs once per request, resolves the period window, and
//! hands the immutable slices to the aggregators. Missing data surfaces as
//! the aggregators' explicit empty states — this facade never substitutes
//! placeholder values for a thin response.

use crate::database::LogRepository;
use crate::errors::{AppError, AppResult};
use crate::intelligence::{
    nutrition, period::filter_sorted, weight, workouts, MacroStats, TimePeriod, WeeklyMacros,
    WeightStats, WorkoutStats,
};
use crate::models::{MacroEntry, WeightEntry, WorkoutSession};
use crate::resources::ServerResources;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;
use uuid::Uuid;

/// Weight analytics response: in-window entries plus their stats
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightAnalytics {
    /// Entries inside the window, ascending by date
    pub entries: Vec<WeightEntry>,
    /// Aggregated statistics over those entries
    pub stats: WeightStats,
}

/// Nutrition analytics response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionAnalytics {
    /// Entries inside the window, ascending by date
    pub entries: Vec<MacroEntry>,
    /// Aggregated statistics over those entries
    pub stats: MacroStats,
}

/// Workout analytics response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutAnalytics {
    /// Sessions inside the window, ascending by date
    pub sessions: Vec<WorkoutSession>,
    /// Aggregated statistics over those sessions
    pub stats: WorkoutStats,
}

/// One point of the weight trend chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    /// Day of the measurement
    pub date: NaiveDate,
    /// Weight in kilograms
    pub weight_kg: f64,
}

/// Chart-ready series for the summary page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryCharts {
    /// Weekly calorie/protein means
    pub weekly_nutrition: Vec<WeeklyMacros>,
    /// Training split shares summing to 100
    pub workout_distribution: Vec<crate::intelligence::CategoryShare>,
    /// Weight line, ascending by date
    pub weight_trend: Vec<TrendPoint>,
}

/// Combined summary across all log kinds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    /// Workout totals and split
    pub workouts: WorkoutStats,
    /// Nutrition means and weekly series
    pub nutrition: MacroStats,
}

/// Summary response: stats plus chart series
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    /// Aggregated statistics
    pub summary: SummaryStats,
    /// Chart series derived from the same window
    pub charts: SummaryCharts,
}

/// Request body for logging a weight measurement
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogWeightRequest {
    /// Body weight in kilograms, strictly positive
    pub weight: f64,
    /// Measurement time; defaults to now
    pub date: Option<DateTime<Utc>>,
    /// Optional free-form note
    pub note: Option<String>,
}

/// Request body for logging a nutrition entry
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogMacrosRequest {
    /// Total calories (kcal)
    pub calories: f64,
    /// Protein in grams
    pub protein_g: f64,
    /// Carbohydrates in grams
    pub carbs_g: f64,
    /// Fat in grams
    pub fat_g: f64,
    /// Day logged for; defaults to now
    pub date: Option<DateTime<Utc>>,
}

/// Request body for logging a workout session
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogWorkoutRequest {
    /// Kind of workout
    pub workout_type: String,
    /// Session length in minutes
    pub duration_minutes: u32,
    /// Estimated energy expenditure (kcal)
    pub calories_burned: f64,
    /// Muscle groups trained
    #[serde(default)]
    pub muscle_groups: BTreeSet<String>,
    /// Session time; defaults to now
    pub date: Option<DateTime<Utc>>,
}

/// Progress analytics facade
pub struct AnalyticsService {
    logs: Arc<dyn LogRepository>,
}

impl AnalyticsService {
    /// Build the service from shared resources
    #[must_use]
    pub fn new(resources: &ServerResources) -> Self {
        Self {
            logs: Arc::clone(&resources.logs),
        }
    }

    /// Weight entries and stats for one period window
    ///
    /// # Errors
    ///
    /// Returns an upstream error when the log store read fails.
    pub async fn weight_analytics(
        &self,
        user_id: Uuid,
        period: TimePeriod,
    ) -> AppResult<WeightAnalytics> {
        let entries = self
            .logs
            .weight_entries(user_id)
            .await
            .map_err(|e| AppError::upstream("log store", e.to_string()))?;

        let range = period.resolve();
        let stats = weight::weight_stats(&entries, &range);
        let entries = filter_sorted(&entries, &range, |e| e.date);
        Ok(WeightAnalytics { entries, stats })
    }

    /// Validate and store a weight measurement
    ///
    /// # Errors
    ///
    /// Rejects non-positive weights and future dates; propagates store
    /// failures as upstream errors.
    pub async fn log_weight(
        &self,
        user_id: Uuid,
        request: LogWeightRequest,
    ) -> AppResult<WeightEntry> {
        if request.weight <= 0.0 || !request.weight.is_finite() {
            return Err(AppError::out_of_range(format!(
                "weight must be greater than zero, got {}",
                request.weight
            )));
        }
        let date = validate_date(request.date)?;

        let entry = WeightEntry {
            id: Uuid::new_v4(),
            user_id,
            date,
            weight_kg: request.weight,
            note: request.note,
        };
        self.logs
            .insert_weight_entry(&entry)
            .await
            .map_err(|e| AppError::upstream("log store", e.to_string()))?;

        tracing::info!(user_id = %user_id, entry_id = %entry.id, "weight entry logged");
        Ok(entry)
    }

    /// Delete a weight entry by id
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the entry does not exist or belongs to
    /// another user.
    pub async fn delete_weight(&self, user_id: Uuid, entry_id: Uuid) -> AppResult<()> {
        let deleted = self
            .logs
            .delete_weight_entry(user_id, entry_id)
            .await
            .map_err(|e| AppError::upstream("log store", e.to_string()))?;

        if deleted {
            Ok(())
        } else {
            Err(AppError::not_found("weight entry").with_resource_id(entry_id.to_string()))
        }
    }

    /// Macro entries and stats for one period window
    ///
    /// # Errors
    ///
    /// Returns an upstream error when the log store read fails.
    pub async fn nutrition_analytics(
        &self,
        user_id: Uuid,
        period: TimePeriod,
    ) -> AppResult<NutritionAnalytics> {
        let entries = self
            .logs
            .macro_entries(user_id)
            .await
            .map_err(|e| AppError::upstream("log store", e.to_string()))?;

        let range = period.resolve();
        let stats = nutrition::macro_stats(&entries, &range);
        let entries = filter_sorted(&entries, &range, |e| e.date);
        Ok(NutritionAnalytics { entries, stats })
    }

    /// Validate and store a nutrition entry
    ///
    /// # Errors
    ///
    /// Rejects negative macro values and future dates.
    pub async fn log_macros(
        &self,
        user_id: Uuid,
        request: LogMacrosRequest,
    ) -> AppResult<MacroEntry> {
        for (name, value) in [
            ("calories", request.calories),
            ("proteinG", request.protein_g),
            ("carbsG", request.carbs_g),
            ("fatG", request.fat_g),
        ] {
            if value < 0.0 || !value.is_finite() {
                return Err(AppError::out_of_range(format!(
                    "{name} must be non-negative, got {value}"
                )));
            }
        }
        let date = validate_date(request.date)?;

        let entry = MacroEntry {
            id: Uuid::new_v4(),
            user_id,
            date,
            calories: request.calories,
            protein_g: request.protein_g,
            carbs_g: request.carbs_g,
            fat_g: request.fat_g,
        };
        self.logs
            .insert_macro_entry(&entry)
            .await
            .map_err(|e| AppError::upstream("log store", e.to_string()))?;
        Ok(entry)
    }

    /// Workout sessions and stats for one period window
    ///
    /// # Errors
    ///
    /// Returns an upstream error when the log store read fails.
    pub async fn workout_analytics(
        &self,
        user_id: Uuid,
        period: TimePeriod,
    ) -> AppResult<WorkoutAnalytics> {
        let sessions = self
            .logs
            .workout_sessions(user_id)
            .await
            .map_err(|e| AppError::upstream("log store", e.to_string()))?;

        let range = period.resolve();
        let stats = workouts::workout_stats(&sessions, &range);
        let sessions = filter_sorted(&sessions, &range, |s| s.date);
        Ok(WorkoutAnalytics { sessions, stats })
    }

    /// Validate and store a workout session
    ///
    /// # Errors
    ///
    /// Rejects zero-length sessions, negative calories, and future dates.
    pub async fn log_workout(
        &self,
        user_id: Uuid,
        request: LogWorkoutRequest,
    ) -> AppResult<WorkoutSession> {
        if request.duration_minutes == 0 {
            return Err(AppError::out_of_range(
                "durationMinutes must be greater than zero",
            ));
        }
        if request.calories_burned < 0.0 || !request.calories_burned.is_finite() {
            return Err(AppError::out_of_range(format!(
                "caloriesBurned must be non-negative, got {}",
                request.calories_burned
            )));
        }
        if request.workout_type.trim().is_empty() {
            return Err(AppError::invalid_input("workoutType must not be empty"));
        }
        let date = validate_date(request.date)?;

        let session = WorkoutSession {
            id: Uuid::new_v4(),
            user_id,
            date,
            workout_type: request.workout_type,
            duration_minutes: request.duration_minutes,
            calories_burned: request.calories_burned,
            muscle_groups: request.muscle_groups,
        };
        self.logs
            .insert_workout_session(&session)
            .await
            .map_err(|e| AppError::upstream("log store", e.to_string()))?;
        Ok(session)
    }

    /// Combined summary and chart series for one period window
    ///
    /// # Errors
    ///
    /// Returns an upstream error when any log store read fails.
    pub async fn summary(&self, user_id: Uuid, period: TimePeriod) -> AppResult<AnalyticsSummary> {
        let workouts_analytics = self.workout_analytics(user_id, period).await?;
        let nutrition_analytics = self.nutrition_analytics(user_id, period).await?;
        let weight_analytics = self.weight_analytics(user_id, period).await?;

        let weight_trend = weight_analytics
            .entries
            .iter()
            .map(|e| TrendPoint {
                date: e.date.date_naive(),
                weight_kg: e.weight_kg,
            })
            .collect();

        Ok(AnalyticsSummary {
            charts: SummaryCharts {
                weekly_nutrition: nutrition_analytics.stats.weekly.clone(),
                workout_distribution: workouts_analytics.stats.distribution.clone(),
                weight_trend,
            },
            summary: SummaryStats {
                workouts: workouts_analytics.stats,
                nutrition: nutrition_analytics.stats,
            },
        })
    }
}

/// Entry dates must not lie in the future
fn validate_date(date: Option<DateTime<Utc>>) -> AppResult<DateTime<Utc>> {
    let now = Utc::now();
    let date = date.unwrap_or(now);
    if date > now {
        return Err(AppError::invalid_input(format!(
            "entry date {date} is in the future"
        )));
    }
    Ok(date)
}
