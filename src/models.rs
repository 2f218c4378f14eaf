// ABOUTME: Core data models and types for the Stride fitness analytics API
// ABOUTME: Defines log entries, preference profiles, and the plan catalog structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! # Data Models
//!
//! Common data structures shared by the repositories, the intelligence layer,
//! and the HTTP surface. Wire field names are camelCase to match the existing
//! frontend contract. Every set that reaches the wire or the scorer is a
//! `BTreeSet` so iteration and serialization order are deterministic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter, Result as FmtResult};
use uuid::Uuid;

/// A single weight log entry
///
/// Immutable once created; removed only by explicit delete, never edited in
/// place. `weight_kg` is strictly positive — zero is reserved as "no data"
/// at the aggregation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightEntry {
    /// Unique entry identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// When the measurement was taken
    pub date: DateTime<Utc>,
    /// Body weight in kilograms, strictly positive
    pub weight_kg: f64,
    /// Optional free-form note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A single nutrition log entry with macronutrient totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroEntry {
    /// Unique entry identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Day the intake was logged for
    pub date: DateTime<Utc>,
    /// Total calories (kcal)
    pub calories: f64,
    /// Protein in grams
    pub protein_g: f64,
    /// Carbohydrates in grams
    pub carbs_g: f64,
    /// Fat in grams
    pub fat_g: f64,
}

/// A completed workout session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSession {
    /// Unique session identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// When the session took place
    pub date: DateTime<Utc>,
    /// Kind of workout (e.g. "strength", "cardio", "yoga")
    pub workout_type: String,
    /// Session length in minutes
    pub duration_minutes: u32,
    /// Estimated energy expenditure (kcal)
    pub calories_burned: f64,
    /// Muscle groups trained during the session
    pub muscle_groups: BTreeSet<String>,
}

/// Self-reported fitness level used for difficulty matching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessLevel {
    /// New to structured training
    #[default]
    Beginner,
    /// Trains regularly
    Intermediate,
    /// Years of consistent training
    Advanced,
}

impl FitnessLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "intermediate" => Self::Intermediate,
            "advanced" => Self::Advanced,
            _ => Self::Beginner, // Default fallback
        }
    }
}

impl Display for FitnessLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Beginner => write!(f, "beginner"),
            Self::Intermediate => write!(f, "intermediate"),
            Self::Advanced => write!(f, "advanced"),
        }
    }
}

/// A user's training and dietary preferences
///
/// One profile per user, created with defaults at registration. Profiles are
/// never deleted — a reset writes the defaults back instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceProfile {
    /// Owning user
    pub user_id: Uuid,
    /// Self-reported fitness level
    pub fitness_level: FitnessLevel,
    /// Preferred workout types (e.g. "strength", "hiit")
    pub workout_preferences: BTreeSet<String>,
    /// Dietary restriction tags (e.g. "vegan", `"gluten_free"`)
    pub dietary_restrictions: BTreeSet<String>,
    /// Training goals (e.g. `"weight_loss"`, "endurance")
    pub goals: BTreeSet<String>,
}

impl PreferenceProfile {
    /// Registration-time defaults for a new user
    #[must_use]
    pub fn default_for(user_id: Uuid) -> Self {
        Self {
            user_id,
            fitness_level: FitnessLevel::Beginner,
            workout_preferences: BTreeSet::new(),
            dietary_restrictions: BTreeSet::new(),
            goals: BTreeSet::new(),
        }
    }
}

/// Variant-specific attributes of a catalog item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CatalogDetails {
    /// A workout program
    #[serde(rename_all = "camelCase")]
    Workout {
        /// Length of a single session in minutes
        duration_minutes: u32,
    },
    /// A nutrition plan
    #[serde(rename_all = "camelCase")]
    NutritionPlan {
        /// Daily calorie target (kcal)
        calories_per_day: u32,
        /// Ingredient tags used for dietary-restriction filtering
        ingredients: BTreeSet<String>,
    },
}

/// A recommendable content unit: workout program or nutrition plan
///
/// The catalog is read-only to this subsystem; items are owned and maintained
/// by the content-management side of the application. `target_goals` is never
/// empty for a published item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Stable catalog identifier, also the ranking tie-breaker
    pub id: String,
    /// Display name
    pub name: String,
    /// Goals this item targets
    pub target_goals: BTreeSet<String>,
    /// Difficulty rating matched against the user's fitness level
    pub difficulty: FitnessLevel,
    /// Item type (e.g. "strength" for workouts, "meal_plan" for nutrition)
    pub item_type: String,
    /// Variant-specific attributes
    pub details: CatalogDetails,
}

impl CatalogItem {
    /// Whether this item is a workout program
    #[must_use]
    pub const fn is_workout(&self) -> bool {
        matches!(self.details, CatalogDetails::Workout { .. })
    }

    /// Ingredient tags for nutrition plans, `None` for workouts
    #[must_use]
    pub const fn ingredients(&self) -> Option<&BTreeSet<String>> {
        match &self.details {
            CatalogDetails::NutritionPlan { ingredients, .. } => Some(ingredients),
            CatalogDetails::Workout { .. } => None,
        }
    }
}
