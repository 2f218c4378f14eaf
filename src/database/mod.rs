// ABOUTME: Repository abstraction for log, preference, and catalog storage
// ABOUTME: One trait per store so the intelligence layer tests against in-memory fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! Database abstraction layer
//!
//! The analytics core consumes three stores: user log entries, preference
//! profiles, and the read-only plan catalog. Each is an explicit injected
//! trait so aggregation and scoring can be exercised against in-memory
//! fixtures with zero network dependency, while production wires the SQLite
//! implementation behind the same interfaces.

use crate::models::{CatalogItem, MacroEntry, PreferenceProfile, WeightEntry, WorkoutSession};
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// In-memory repositories for tests and fixtures
pub mod memory;

/// SQLite-backed repositories
pub mod sqlite;

pub use sqlite::Database;

/// Persisted time-series logs, keyed by user
///
/// Entries are immutable once created: the only mutations are insert and
/// explicit delete by id.
#[async_trait]
pub trait LogRepository: Send + Sync {
    /// All weight entries for a user, unordered
    async fn weight_entries(&self, user_id: Uuid) -> Result<Vec<WeightEntry>>;

    /// Insert a weight entry
    async fn insert_weight_entry(&self, entry: &WeightEntry) -> Result<()>;

    /// Delete a user's weight entry by id; `false` when no such entry
    async fn delete_weight_entry(&self, user_id: Uuid, entry_id: Uuid) -> Result<bool>;

    /// All macro entries for a user, unordered
    async fn macro_entries(&self, user_id: Uuid) -> Result<Vec<MacroEntry>>;

    /// Insert a macro entry
    async fn insert_macro_entry(&self, entry: &MacroEntry) -> Result<()>;

    /// All workout sessions for a user, unordered
    async fn workout_sessions(&self, user_id: Uuid) -> Result<Vec<WorkoutSession>>;

    /// Insert a workout session
    async fn insert_workout_session(&self, session: &WorkoutSession) -> Result<()>;
}

/// Preference profile storage
///
/// One profile per user; profiles are upserted and reset, never deleted.
#[async_trait]
pub trait PreferenceRepository: Send + Sync {
    /// A user's profile, `None` when never created
    async fn preference_profile(&self, user_id: Uuid) -> Result<Option<PreferenceProfile>>;

    /// Insert or replace a profile
    async fn upsert_preference_profile(&self, profile: &PreferenceProfile) -> Result<()>;
}

/// Read-only access to the plan catalog
///
/// The catalog is owned by the content-management side; this subsystem only
/// lists it.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Every published catalog item
    async fn catalog_items(&self) -> Result<Vec<CatalogItem>>;
}
