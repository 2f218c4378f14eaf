// ABOUTME: In-memory repository implementations for tests and local fixtures
// ABOUTME: Same trait surface as the SQLite backend with zero I/O dependency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! In-memory repositories
//!
//! Backing stores are plain maps behind async `RwLock`s. Used by the
//! integration tests and by the analytics/recommendation services' unit
//! coverage, where spinning up SQLite would only add noise.

use super::{CatalogProvider, LogRepository, PreferenceRepository};
use crate::models::{CatalogItem, MacroEntry, PreferenceProfile, WeightEntry, WorkoutSession};
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory log and preference store
#[derive(Default)]
pub struct MemoryStore {
    weight: RwLock<HashMap<Uuid, Vec<WeightEntry>>>,
    macros: RwLock<HashMap<Uuid, Vec<MacroEntry>>>,
    workouts: RwLock<HashMap<Uuid, Vec<WorkoutSession>>>,
    profiles: RwLock<HashMap<Uuid, PreferenceProfile>>,
}

impl MemoryStore {
    /// An empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LogRepository for MemoryStore {
    async fn weight_entries(&self, user_id: Uuid) -> Result<Vec<WeightEntry>> {
        Ok(self.weight.read().await.get(&user_id).cloned().unwrap_or_default())
    }

    async fn insert_weight_entry(&self, entry: &WeightEntry) -> Result<()> {
        self.weight
            .write()
            .await
            .entry(entry.user_id)
            .or_default()
            .push(entry.clone());
        Ok(())
    }

    async fn delete_weight_entry(&self, user_id: Uuid, entry_id: Uuid) -> Result<bool> {
        let mut guard = self.weight.write().await;
        let Some(entries) = guard.get_mut(&user_id) else {
            return Ok(false);
        };
        let before = entries.len();
        entries.retain(|e| e.id != entry_id);
        Ok(entries.len() < before)
    }

    async fn macro_entries(&self, user_id: Uuid) -> Result<Vec<MacroEntry>> {
        Ok(self.macros.read().await.get(&user_id).cloned().unwrap_or_default())
    }

    async fn insert_macro_entry(&self, entry: &MacroEntry) -> Result<()> {
        self.macros
            .write()
            .await
            .entry(entry.user_id)
            .or_default()
            .push(entry.clone());
        Ok(())
    }

    async fn workout_sessions(&self, user_id: Uuid) -> Result<Vec<WorkoutSession>> {
        Ok(self.workouts.read().await.get(&user_id).cloned().unwrap_or_default())
    }

    async fn insert_workout_session(&self, session: &WorkoutSession) -> Result<()> {
        self.workouts
            .write()
            .await
            .entry(session.user_id)
            .or_default()
            .push(session.clone());
        Ok(())
    }
}

#[async_trait]
impl PreferenceRepository for MemoryStore {
    async fn preference_profile(&self, user_id: Uuid) -> Result<Option<PreferenceProfile>> {
        Ok(self.profiles.read().await.get(&user_id).cloned())
    }

    async fn upsert_preference_profile(&self, profile: &PreferenceProfile) -> Result<()> {
        self.profiles
            .write()
            .await
            .insert(profile.user_id, profile.clone());
        Ok(())
    }
}

/// Fixed in-memory catalog
#[derive(Default)]
pub struct StaticCatalog {
    items: Vec<CatalogItem>,
}

impl StaticCatalog {
    /// A catalog holding exactly `items`
    #[must_use]
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }
}

#[async_trait]
impl CatalogProvider for StaticCatalog {
    async fn catalog_items(&self) -> Result<Vec<CatalogItem>> {
        Ok(self.items.clone())
    }
}
