// ABOUTME: Integration tests for the SQLite repositories behind the service layer
// ABOUTME: Verifies persistence across reconnects using a file-backed database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{TimeZone, Utc};
use std::collections::BTreeSet;
use stride_server::database::{Database, LogRepository, PreferenceRepository};
use stride_server::models::{PreferenceProfile, WeightEntry, WorkoutSession};
use uuid::Uuid;

fn file_url(dir: &tempfile::TempDir) -> String {
    format!(
        "sqlite:{}?mode=rwc",
        dir.path().join("stride-test.db").display()
    )
}

#[tokio::test]
async fn test_entries_survive_reconnect() {
    common::init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let url = file_url(&dir);
    let user_id = Uuid::new_v4();

    let entry = WeightEntry {
        id: Uuid::new_v4(),
        user_id,
        date: Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap(),
        weight_kg: 80.0,
        note: None,
    };

    {
        let db = Database::new(&url).await.unwrap();
        db.insert_weight_entry(&entry).await.unwrap();
    }

    // A fresh connection sees the same data; migration is idempotent
    let db = Database::new(&url).await.unwrap();
    let stored = db.weight_entries(user_id).await.unwrap();
    assert_eq!(stored, vec![entry]);
}

#[tokio::test]
async fn test_workout_sets_round_trip_through_json_columns() {
    common::init_test_logging();
    let db = Database::new("sqlite::memory:").await.unwrap();
    let user_id = Uuid::new_v4();

    let session = WorkoutSession {
        id: Uuid::new_v4(),
        user_id,
        date: Utc.with_ymd_and_hms(2024, 2, 10, 18, 30, 0).unwrap(),
        workout_type: "strength".to_owned(),
        duration_minutes: 55,
        calories_burned: 480.0,
        muscle_groups: ["back".to_owned(), "biceps".to_owned()]
            .into_iter()
            .collect::<BTreeSet<_>>(),
    };
    db.insert_workout_session(&session).await.unwrap();

    let stored = db.workout_sessions(user_id).await.unwrap();
    assert_eq!(stored, vec![session]);
}

#[tokio::test]
async fn test_profile_upsert_replaces_in_place() {
    common::init_test_logging();
    let db = Database::new("sqlite::memory:").await.unwrap();
    let user_id = Uuid::new_v4();

    let mut profile = PreferenceProfile::default_for(user_id);
    profile.goals.insert("weight_loss".to_owned());
    db.upsert_preference_profile(&profile).await.unwrap();

    profile.goals.insert("endurance".to_owned());
    profile.dietary_restrictions.insert("vegan".to_owned());
    db.upsert_preference_profile(&profile).await.unwrap();

    let stored = db.preference_profile(user_id).await.unwrap().unwrap();
    assert_eq!(stored, profile);
    assert_eq!(stored.goals.len(), 2);
}
