// ABOUTME: Plan recommendation engine with dietary hard filtering and weighted soft scoring
// ABOUTME: Ranking is fully deterministic; ties break on item id for reproducible output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! Recommendation matching
//!
//! Ranks catalog items against a preference profile in two phases. The hard
//! filter removes nutrition plans whose ingredients violate a dietary
//! restriction — those never appear in output regardless of score. Surviving
//! items get a weighted soft score from goal overlap, difficulty match, and
//! workout-type preference, then sort descending with an item-id tie-break so
//! repeated calls with identical inputs produce byte-identical rankings.
//!
//! The weights are configuration, not constants: construct [`ScoringWeights`]
//! explicitly or let the server read overrides from the environment.

use crate::models::{CatalogItem, PreferenceProfile};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Default number of recommendations returned per category
pub const DEFAULT_LIMIT_PER_CATEGORY: usize = 5;

/// Soft-score weights for recommendation ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringWeights {
    /// Points per goal shared between profile and item
    pub goal_overlap: u32,
    /// Points when item difficulty equals the user's fitness level
    pub difficulty_match: u32,
    /// Points when a workout's type is among the user's preferences
    pub preference_match: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            goal_overlap: 3,
            difficulty_match: 2,
            preference_match: 2,
        }
    }
}

/// Mapping from dietary restriction tags to forbidden ingredient tags
///
/// A restriction with no configured rule forbids its own tag, so an
/// unanticipated restriction still excludes exact ingredient matches instead
/// of being ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietaryRules {
    forbidden: BTreeMap<String, BTreeSet<String>>,
}

impl Default for DietaryRules {
    fn default() -> Self {
        let mut forbidden = BTreeMap::new();
        let animal: &[&str] = &[
            "meat", "beef", "pork", "chicken", "turkey", "fish", "seafood", "shellfish",
        ];
        let dairy: &[&str] = &["dairy", "milk", "cheese", "butter", "yogurt", "whey"];

        forbidden.insert(
            "vegan".to_owned(),
            animal
                .iter()
                .chain(dairy)
                .chain(["egg", "honey", "gelatin"].iter())
                .map(|&s| s.to_owned())
                .collect(),
        );
        forbidden.insert(
            "vegetarian".to_owned(),
            animal.iter().chain(["gelatin"].iter()).map(|&s| s.to_owned()).collect(),
        );
        forbidden.insert(
            "gluten_free".to_owned(),
            ["gluten", "wheat", "barley", "rye"].iter().map(|&s| s.to_owned()).collect(),
        );
        forbidden.insert(
            "dairy_free".to_owned(),
            dairy.iter().map(|&s| s.to_owned()).collect(),
        );
        forbidden.insert(
            "nut_free".to_owned(),
            ["nuts", "peanut", "almond", "cashew", "walnut", "hazelnut"]
                .iter()
                .map(|&s| s.to_owned())
                .collect(),
        );

        Self { forbidden }
    }
}

impl DietaryRules {
    /// Build rules from an explicit restriction → forbidden-ingredients map
    #[must_use]
    pub const fn new(forbidden: BTreeMap<String, BTreeSet<String>>) -> Self {
        Self { forbidden }
    }

    /// The full forbidden-ingredient set for a profile's restrictions
    #[must_use]
    pub fn forbidden_for(&self, restrictions: &BTreeSet<String>) -> BTreeSet<String> {
        let mut result = BTreeSet::new();
        for restriction in restrictions {
            let key = restriction.to_lowercase();
            if let Some(tags) = self.forbidden.get(&key) {
                result.extend(tags.iter().cloned());
            } else {
                // Unknown restriction: forbid the tag itself
                result.insert(key);
            }
        }
        result
    }

    /// Whether an item's ingredients violate any of the forbidden tags
    #[must_use]
    pub fn violates(&self, item: &CatalogItem, forbidden: &BTreeSet<String>) -> bool {
        item.ingredients()
            .is_some_and(|ingredients| ingredients.iter().any(|i| forbidden.contains(&i.to_lowercase())))
    }
}

/// Ranked recommendations, top-K per category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedRecommendations {
    /// Workout programs, best match first
    pub recommended_workouts: Vec<CatalogItem>,
    /// Nutrition plans surviving the hard filter, best match first
    pub recommended_nutrition: Vec<CatalogItem>,
}

/// Soft score of one item against a profile
///
/// Empty `goals` simply contributes nothing — users without stated goals
/// still receive difficulty- and preference-ranked recommendations.
#[must_use]
pub fn score_item(profile: &PreferenceProfile, item: &CatalogItem, weights: &ScoringWeights) -> u32 {
    let goal_overlap = profile.goals.intersection(&item.target_goals).count() as u32;

    let mut score = weights.goal_overlap * goal_overlap;
    if item.difficulty == profile.fitness_level {
        score += weights.difficulty_match;
    }
    if item.is_workout() && profile.workout_preferences.contains(&item.item_type) {
        score += weights.preference_match;
    }
    score
}

/// Rank the catalog against a profile, returning top `limit_per_category`
///
/// Nutrition plans violating a dietary restriction are excluded before
/// scoring and can never re-enter on score. A catalog smaller than the limit
/// returns in full; an empty catalog returns empty lists.
#[must_use]
pub fn rank(
    profile: &PreferenceProfile,
    catalog: &[CatalogItem],
    weights: &ScoringWeights,
    rules: &DietaryRules,
    limit_per_category: usize,
) -> RankedRecommendations {
    let forbidden = rules.forbidden_for(&profile.dietary_restrictions);

    let mut workouts: Vec<(u32, &CatalogItem)> = Vec::new();
    let mut nutrition: Vec<(u32, &CatalogItem)> = Vec::new();
    for item in catalog {
        if item.is_workout() {
            workouts.push((score_item(profile, item, weights), item));
        } else if !rules.violates(item, &forbidden) {
            nutrition.push((score_item(profile, item, weights), item));
        }
    }

    RankedRecommendations {
        recommended_workouts: take_top(workouts, limit_per_category),
        recommended_nutrition: take_top(nutrition, limit_per_category),
    }
}

/// Sort score-descending with id tie-break and truncate
fn take_top(mut scored: Vec<(u32, &CatalogItem)>, limit: usize) -> Vec<CatalogItem> {
    scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.id.cmp(&b.1.id)));
    scored.into_iter().take(limit).map(|(_, item)| item.clone()).collect()
}
