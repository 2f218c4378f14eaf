// ABOUTME: SQLite-backed repositories for logs, preferences, and the plan catalog
// ABOUTME: Embedded DDL migration; timestamps stored as RFC 3339 text, sets as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! SQLite database implementation
//!
//! A single [`Database`] owns the connection pool and implements every
//! repository trait. Schema setup is an embedded `CREATE TABLE IF NOT EXISTS`
//! migration; identifiers and timestamps are stored as text, set-valued
//! columns as JSON arrays.

use super::{CatalogProvider, LogRepository, PreferenceRepository};
use crate::models::{
    CatalogDetails, CatalogItem, FitnessLevel, MacroEntry, PreferenceProfile, WeightEntry,
    WorkoutSession,
};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use std::collections::BTreeSet;
use uuid::Uuid;

/// SQLite-backed store for all three repositories
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect and run schema migration
    ///
    /// # Errors
    ///
    /// Returns an error when the database cannot be opened or migrated.
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = SqlitePool::connect(database_url)
            .await
            .with_context(|| format!("failed to open database: {database_url}"))?;
        let db = Self { pool };
        db.migrate().await?;
        Ok(db)
    }

    /// Create tables and indexes if they do not exist
    async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS weight_entries (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                date TEXT NOT NULL,
                weight_kg REAL NOT NULL,
                note TEXT
            )
            ",
        )
        .execute(&self.pool)
        .await?;
        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_weight_entries_user_id ON weight_entries(user_id)",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS macro_entries (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                date TEXT NOT NULL,
                calories REAL NOT NULL,
                protein_g REAL NOT NULL,
                carbs_g REAL NOT NULL,
                fat_g REAL NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;
        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_macro_entries_user_id ON macro_entries(user_id)",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS workout_sessions (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                date TEXT NOT NULL,
                workout_type TEXT NOT NULL,
                duration_minutes INTEGER NOT NULL,
                calories_burned REAL NOT NULL,
                muscle_groups TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;
        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_workout_sessions_user_id ON workout_sessions(user_id)",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS preference_profiles (
                user_id TEXT PRIMARY KEY,
                fitness_level TEXT NOT NULL,
                workout_preferences TEXT NOT NULL,
                dietary_restrictions TEXT NOT NULL,
                goals TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS catalog_items (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                target_goals TEXT NOT NULL,
                difficulty TEXT NOT NULL,
                item_type TEXT NOT NULL,
                details TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Insert or replace a catalog item (used by the seeding binary)
    ///
    /// # Errors
    ///
    /// Returns an error when serialization or the write fails.
    pub async fn upsert_catalog_item(&self, item: &CatalogItem) -> Result<()> {
        sqlx::query(
            r"
            INSERT OR REPLACE INTO catalog_items (id, name, target_goals, difficulty, item_type, details)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ",
        )
        .bind(&item.id)
        .bind(&item.name)
        .bind(serde_json::to_string(&item.target_goals)?)
        .bind(item.difficulty.to_string())
        .bind(&item.item_type)
        .bind(serde_json::to_string(&item.details)?)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

fn parse_date(raw: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(raw)
        .with_context(|| format!("invalid stored timestamp: {raw}"))?
        .with_timezone(&Utc))
}

fn parse_uuid(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).with_context(|| format!("invalid stored uuid: {raw}"))
}

fn parse_set(raw: &str) -> Result<BTreeSet<String>> {
    serde_json::from_str(raw).with_context(|| format!("invalid stored set: {raw}"))
}

fn row_to_weight_entry(row: &SqliteRow) -> Result<WeightEntry> {
    let id: String = row.try_get("id")?;
    let user_id: String = row.try_get("user_id")?;
    let date: String = row.try_get("date")?;
    Ok(WeightEntry {
        id: parse_uuid(&id)?,
        user_id: parse_uuid(&user_id)?,
        date: parse_date(&date)?,
        weight_kg: row.try_get("weight_kg")?,
        note: row.try_get("note")?,
    })
}

fn row_to_macro_entry(row: &SqliteRow) -> Result<MacroEntry> {
    let id: String = row.try_get("id")?;
    let user_id: String = row.try_get("user_id")?;
    let date: String = row.try_get("date")?;
    Ok(MacroEntry {
        id: parse_uuid(&id)?,
        user_id: parse_uuid(&user_id)?,
        date: parse_date(&date)?,
        calories: row.try_get("calories")?,
        protein_g: row.try_get("protein_g")?,
        carbs_g: row.try_get("carbs_g")?,
        fat_g: row.try_get("fat_g")?,
    })
}

fn row_to_workout_session(row: &SqliteRow) -> Result<WorkoutSession> {
    let id: String = row.try_get("id")?;
    let user_id: String = row.try_get("user_id")?;
    let date: String = row.try_get("date")?;
    let duration: i64 = row.try_get("duration_minutes")?;
    let muscle_groups: String = row.try_get("muscle_groups")?;
    Ok(WorkoutSession {
        id: parse_uuid(&id)?,
        user_id: parse_uuid(&user_id)?,
        date: parse_date(&date)?,
        workout_type: row.try_get("workout_type")?,
        duration_minutes: u32::try_from(duration).context("negative stored duration")?,
        calories_burned: row.try_get("calories_burned")?,
        muscle_groups: parse_set(&muscle_groups)?,
    })
}

fn row_to_profile(row: &SqliteRow) -> Result<PreferenceProfile> {
    let user_id: String = row.try_get("user_id")?;
    let fitness_level: String = row.try_get("fitness_level")?;
    let workout_preferences: String = row.try_get("workout_preferences")?;
    let dietary_restrictions: String = row.try_get("dietary_restrictions")?;
    let goals: String = row.try_get("goals")?;
    Ok(PreferenceProfile {
        user_id: parse_uuid(&user_id)?,
        fitness_level: FitnessLevel::from_str_or_default(&fitness_level),
        workout_preferences: parse_set(&workout_preferences)?,
        dietary_restrictions: parse_set(&dietary_restrictions)?,
        goals: parse_set(&goals)?,
    })
}

fn row_to_catalog_item(row: &SqliteRow) -> Result<CatalogItem> {
    let target_goals: String = row.try_get("target_goals")?;
    let difficulty: String = row.try_get("difficulty")?;
    let details: String = row.try_get("details")?;
    let details: CatalogDetails =
        serde_json::from_str(&details).context("invalid stored catalog details")?;
    Ok(CatalogItem {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        target_goals: parse_set(&target_goals)?,
        difficulty: FitnessLevel::from_str_or_default(&difficulty),
        item_type: row.try_get("item_type")?,
        details,
    })
}

#[async_trait]
impl LogRepository for Database {
    async fn weight_entries(&self, user_id: Uuid) -> Result<Vec<WeightEntry>> {
        let rows = sqlx::query("SELECT * FROM weight_entries WHERE user_id = ?1")
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(row_to_weight_entry).collect()
    }

    async fn insert_weight_entry(&self, entry: &WeightEntry) -> Result<()> {
        sqlx::query(
            r"
            INSERT INTO weight_entries (id, user_id, date, weight_kg, note)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ",
        )
        .bind(entry.id.to_string())
        .bind(entry.user_id.to_string())
        .bind(entry.date.to_rfc3339())
        .bind(entry.weight_kg)
        .bind(&entry.note)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete_weight_entry(&self, user_id: Uuid, entry_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM weight_entries WHERE id = ?1 AND user_id = ?2")
            .bind(entry_id.to_string())
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn macro_entries(&self, user_id: Uuid) -> Result<Vec<MacroEntry>> {
        let rows = sqlx::query("SELECT * FROM macro_entries WHERE user_id = ?1")
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(row_to_macro_entry).collect()
    }

    async fn insert_macro_entry(&self, entry: &MacroEntry) -> Result<()> {
        sqlx::query(
            r"
            INSERT INTO macro_entries (id, user_id, date, calories, protein_g, carbs_g, fat_g)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            ",
        )
        .bind(entry.id.to_string())
        .bind(entry.user_id.to_string())
        .bind(entry.date.to_rfc3339())
        .bind(entry.calories)
        .bind(entry.protein_g)
        .bind(entry.carbs_g)
        .bind(entry.fat_g)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn workout_sessions(&self, user_id: Uuid) -> Result<Vec<WorkoutSession>> {
        let rows = sqlx::query("SELECT * FROM workout_sessions WHERE user_id = ?1")
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(row_to_workout_session).collect()
    }

    async fn insert_workout_session(&self, session: &WorkoutSession) -> Result<()> {
        sqlx::query(
            r"
            INSERT INTO workout_sessions
                (id, user_id, date, workout_type, duration_minutes, calories_burned, muscle_groups)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            ",
        )
        .bind(session.id.to_string())
        .bind(session.user_id.to_string())
        .bind(session.date.to_rfc3339())
        .bind(&session.workout_type)
        .bind(i64::from(session.duration_minutes))
        .bind(session.calories_burned)
        .bind(serde_json::to_string(&session.muscle_groups)?)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl PreferenceRepository for Database {
    async fn preference_profile(&self, user_id: Uuid) -> Result<Option<PreferenceProfile>> {
        let row = sqlx::query("SELECT * FROM preference_profiles WHERE user_id = ?1")
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some(row) => Ok(Some(row_to_profile(&row)?)),
            None => Ok(None),
        }
    }

    async fn upsert_preference_profile(&self, profile: &PreferenceProfile) -> Result<()> {
        sqlx::query(
            r"
            INSERT OR REPLACE INTO preference_profiles
                (user_id, fitness_level, workout_preferences, dietary_restrictions, goals)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ",
        )
        .bind(profile.user_id.to_string())
        .bind(profile.fitness_level.to_string())
        .bind(serde_json::to_string(&profile.workout_preferences)?)
        .bind(serde_json::to_string(&profile.dietary_restrictions)?)
        .bind(serde_json::to_string(&profile.goals)?)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl CatalogProvider for Database {
    async fn catalog_items(&self) -> Result<Vec<CatalogItem>> {
        let rows = sqlx::query("SELECT * FROM catalog_items ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(row_to_catalog_item).collect()
    }
}
