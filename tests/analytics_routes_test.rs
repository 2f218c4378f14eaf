// ABOUTME: Integration tests for the analytics HTTP surface
// ABOUTME: Drives the full router over in-memory repositories, no network dependency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use axum::http::{Method, StatusCode};
use common::{create_test_router, send_request};
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn test_weight_log_lifecycle() {
    let (router, _resources) = create_test_router();
    let user_id = Uuid::new_v4();

    // Log two entries a month apart
    let (status, first) = send_request(
        &router,
        Method::POST,
        "/api/analytics/weight",
        Some(user_id),
        Some(json!({"weight": 80.0, "date": "2024-01-01T08:00:00Z"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(first["weightKg"], 80.0);

    let (status, _) = send_request(
        &router,
        Method::POST,
        "/api/analytics/weight",
        Some(user_id),
        Some(json!({"weight": 78.0, "date": "2024-02-01T08:00:00Z", "note": "cut going well"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // Read the all-time window back
    let (status, body) = send_request(
        &router,
        Method::GET,
        "/api/analytics/weight?period=all",
        Some(user_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["entries"].as_array().unwrap().len(), 2);
    assert_eq!(body["stats"]["current"], 78.0);
    assert_eq!(body["stats"]["changeKg"], -2.0);
    assert_eq!(body["stats"]["highest"], 80.0);
    assert_eq!(body["stats"]["lowest"], 78.0);
    assert_eq!(body["stats"]["count"], 2);

    // Delete the first entry
    let entry_id = first["id"].as_str().unwrap();
    let (status, _) = send_request(
        &router,
        Method::DELETE,
        &format!("/api/analytics/weight/{entry_id}"),
        Some(user_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // Deleting again is a 404
    let (status, body) = send_request(
        &router,
        Method::DELETE,
        &format!("/api/analytics/weight/{entry_id}"),
        Some(user_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
}

#[tokio::test]
async fn test_empty_window_returns_null_sentinels() {
    let (router, _resources) = create_test_router();

    let (status, body) = send_request(
        &router,
        Method::GET,
        "/api/analytics/weight?period=1m",
        Some(Uuid::new_v4()),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["stats"]["current"].is_null());
    assert!(body["stats"]["highest"].is_null());
    assert_eq!(body["stats"]["changeKg"], 0.0);
    assert_eq!(body["stats"]["count"], 0);
}

#[tokio::test]
async fn test_invalid_weight_is_rejected() {
    let (router, _resources) = create_test_router();

    let (status, body) = send_request(
        &router,
        Method::POST,
        "/api/analytics/weight",
        Some(Uuid::new_v4()),
        Some(json!({"weight": -3.0})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALUE_OUT_OF_RANGE");
}

#[tokio::test]
async fn test_unknown_period_token_widens_to_all_time() {
    let (router, _resources) = create_test_router();
    let user_id = Uuid::new_v4();

    send_request(
        &router,
        Method::POST,
        "/api/analytics/weight",
        Some(user_id),
        Some(json!({"weight": 82.0, "date": "2019-06-01T08:00:00Z"})),
    )
    .await;

    // A bogus token behaves like "all", so the 2019 entry is visible
    let (status, body) = send_request(
        &router,
        Method::GET,
        "/api/analytics/weight?period=bogus",
        Some(user_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["stats"]["count"], 1);
}

#[tokio::test]
async fn test_missing_auth_header_is_unauthorized() {
    let (router, _resources) = create_test_router();

    let (status, body) =
        send_request(&router, Method::GET, "/api/analytics/weight", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "AUTH_REQUIRED");
}

#[tokio::test]
async fn test_summary_shape_and_invariants() {
    let (router, _resources) = create_test_router();
    let user_id = Uuid::new_v4();

    for (workout_type, groups) in [("strength", vec!["chest"]), ("strength", vec!["chest"]), ("cardio", vec!["legs"])] {
        let (status, _) = send_request(
            &router,
            Method::POST,
            "/api/analytics/workouts",
            Some(user_id),
            Some(json!({
                "workoutType": workout_type,
                "durationMinutes": 45,
                "caloriesBurned": 350.0,
                "muscleGroups": groups,
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    send_request(
        &router,
        Method::POST,
        "/api/analytics/nutrition",
        Some(user_id),
        Some(json!({"calories": 2100.0, "proteinG": 140.0, "carbsG": 200.0, "fatG": 75.0})),
    )
    .await;

    let (status, body) = send_request(
        &router,
        Method::GET,
        "/api/analytics/summary?period=1m",
        Some(user_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["summary"]["workouts"]["totalSessions"], 3);
    assert_eq!(body["summary"]["workouts"]["totalDurationMinutes"], 135);
    assert_eq!(body["summary"]["nutrition"]["avgCalories"], 2100.0);

    // Distribution is 2:1 chest/legs and sums to exactly 100
    let distribution = body["charts"]["workoutDistribution"].as_array().unwrap();
    assert_eq!(distribution[0]["category"], "chest");
    assert_eq!(distribution[0]["percent"], 67);
    assert_eq!(distribution[1]["percent"], 33);
    let total: u64 = distribution.iter().map(|s| s["percent"].as_u64().unwrap()).sum();
    assert_eq!(total, 100);

    assert!(body["charts"]["weeklyNutrition"].as_array().unwrap().len() == 1);
    assert!(body["charts"]["weightTrend"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_nutrition_averages_over_window() {
    let (router, _resources) = create_test_router();
    let user_id = Uuid::new_v4();

    for calories in [1800.0, 2200.0] {
        send_request(
            &router,
            Method::POST,
            "/api/analytics/nutrition",
            Some(user_id),
            Some(json!({"calories": calories, "proteinG": 120.0, "carbsG": 180.0, "fatG": 60.0})),
        )
        .await;
    }

    let (status, body) = send_request(
        &router,
        Method::GET,
        "/api/analytics/nutrition?period=1m",
        Some(user_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["stats"]["avgCalories"], 2000.0);
    assert_eq!(body["stats"]["avgProteinG"], 120.0);
    assert_eq!(body["entries"].as_array().unwrap().len(), 2);
}
