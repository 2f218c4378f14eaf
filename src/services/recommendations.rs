// ABOUTME: Recommendation facade joining preference profiles with the plan catalog
// ABOUTME: Missing profile is NotFound; empty catalog or filtered-out items are normal results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! Recommendation service
//!
//! Fetches the user's preference profile and the plan catalog, then delegates
//! to the pure ranking engine. A user without a stored profile gets a
//! `NotFound` — distinct from an empty-but-valid profile, which ranks
//! normally with no goal bonus.

use crate::database::{CatalogProvider, PreferenceRepository};
use crate::errors::{AppError, AppResult};
use crate::intelligence::recommendations::{rank, DEFAULT_LIMIT_PER_CATEGORY};
use crate::intelligence::{DietaryRules, RankedRecommendations, ScoringWeights};
use crate::models::PreferenceProfile;
use crate::resources::ServerResources;
use std::sync::Arc;
use uuid::Uuid;

/// Plan recommendation facade
pub struct RecommendationService {
    preferences: Arc<dyn PreferenceRepository>,
    catalog: Arc<dyn CatalogProvider>,
    weights: ScoringWeights,
    rules: DietaryRules,
    limit_per_category: usize,
}

impl RecommendationService {
    /// Build the service from shared resources
    #[must_use]
    pub fn new(resources: &ServerResources) -> Self {
        Self {
            preferences: Arc::clone(&resources.preferences),
            catalog: Arc::clone(&resources.catalog),
            weights: resources.scoring_weights,
            rules: resources.dietary_rules.clone(),
            limit_per_category: DEFAULT_LIMIT_PER_CATEGORY,
        }
    }

    /// Override the per-category limit
    #[must_use]
    pub fn with_limit(mut self, limit_per_category: usize) -> Self {
        self.limit_per_category = limit_per_category;
        self
    }

    /// Ranked recommendations for a user
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the user has no preference profile and
    /// an upstream error when a store read fails.
    pub async fn recommendations_for(&self, user_id: Uuid) -> AppResult<RankedRecommendations> {
        let profile = self
            .preferences
            .preference_profile(user_id)
            .await
            .map_err(|e| AppError::upstream("preference store", e.to_string()))?
            .ok_or_else(|| {
                AppError::not_found("preference profile").with_user_id(user_id)
            })?;

        self.recommendations_for_profile(&profile).await
    }

    /// Ranked recommendations for an already-loaded profile
    ///
    /// # Errors
    ///
    /// Returns an upstream error when the catalog read fails.
    pub async fn recommendations_for_profile(
        &self,
        profile: &PreferenceProfile,
    ) -> AppResult<RankedRecommendations> {
        let catalog = self
            .catalog
            .catalog_items()
            .await
            .map_err(|e| AppError::upstream("catalog", e.to_string()))?;

        Ok(rank(
            profile,
            &catalog,
            &self.weights,
            &self.rules,
            self.limit_per_category,
        ))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::config::environment::Environment;
    use crate::config::ServerConfig;
    use crate::database::memory::{MemoryStore, StaticCatalog};
    use crate::database::LogRepository;
    use crate::errors::ErrorCode;
    use crate::models::{CatalogDetails, CatalogItem, FitnessLevel};

    fn catalog() -> Vec<CatalogItem> {
        vec![
            CatalogItem {
                id: "wp-01".into(),
                name: "Foundation Strength".into(),
                target_goals: ["strength".to_owned()].into(),
                difficulty: FitnessLevel::Beginner,
                item_type: "strength".into(),
                details: CatalogDetails::Workout { duration_minutes: 45 },
            },
            CatalogItem {
                id: "np-01".into(),
                name: "Lean Meals".into(),
                target_goals: ["weight_loss".to_owned()].into(),
                difficulty: FitnessLevel::Beginner,
                item_type: "meal_plan".into(),
                details: CatalogDetails::NutritionPlan {
                    calories_per_day: 1800,
                    ingredients: ["chicken".to_owned(), "rice".to_owned()].into(),
                },
            },
        ]
    }

    fn resources_with_catalog(items: Vec<CatalogItem>) -> ServerResources {
        let store = Arc::new(MemoryStore::new());
        ServerResources::new(
            Arc::clone(&store) as Arc<dyn LogRepository>,
            store,
            Arc::new(StaticCatalog::new(items)),
            ServerConfig {
                http_port: 0,
                database_url: "sqlite::memory:".to_owned(),
                environment: Environment::Testing,
                scoring_weights: ScoringWeights::default(),
            },
        )
    }

    #[tokio::test]
    async fn test_missing_profile_is_not_found() {
        let resources = resources_with_catalog(catalog());
        let service = RecommendationService::new(&resources);
        let error = service.recommendations_for(Uuid::new_v4()).await.unwrap_err();
        assert_eq!(error.code, ErrorCode::ResourceNotFound);
    }

    #[tokio::test]
    async fn test_stored_profile_gets_ranked_catalog() {
        let resources = resources_with_catalog(catalog());
        let user_id = Uuid::new_v4();
        let mut profile = PreferenceProfile::default_for(user_id);
        profile.goals.insert("strength".to_owned());
        resources
            .preferences
            .upsert_preference_profile(&profile)
            .await
            .unwrap();

        let service = RecommendationService::new(&resources);
        let ranked = service.recommendations_for(user_id).await.unwrap();
        assert_eq!(ranked.recommended_workouts.len(), 1);
        assert_eq!(ranked.recommended_nutrition.len(), 1);
    }

    #[tokio::test]
    async fn test_vegan_profile_filters_catalog_to_empty() {
        let resources = resources_with_catalog(catalog());
        let user_id = Uuid::new_v4();
        let mut profile = PreferenceProfile::default_for(user_id);
        profile.dietary_restrictions.insert("vegan".to_owned());
        resources
            .preferences
            .upsert_preference_profile(&profile)
            .await
            .unwrap();

        let service = RecommendationService::new(&resources);
        let ranked = service.recommendations_for(user_id).await.unwrap();
        // The only nutrition plan contains chicken; empty is a success, not an error
        assert!(ranked.recommended_nutrition.is_empty());
        assert_eq!(ranked.recommended_workouts.len(), 1);
    }

    #[tokio::test]
    async fn test_empty_catalog_is_empty_success() {
        let resources = resources_with_catalog(Vec::new());
        let user_id = Uuid::new_v4();
        resources
            .preferences
            .upsert_preference_profile(&PreferenceProfile::default_for(user_id))
            .await
            .unwrap();

        let service = RecommendationService::new(&resources);
        let ranked = service.recommendations_for(user_id).await.unwrap();
        assert!(ranked.recommended_workouts.is_empty());
        assert!(ranked.recommended_nutrition.is_empty());
    }
}
