// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory resources, seeded catalogs, and request helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness
#![allow(dead_code, clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

//! Shared test utilities for `stride_server`
//!
//! Common setup functions to reduce duplication across integration tests.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use std::collections::BTreeSet;
use std::sync::{Arc, Once};
use stride_server::auth::USER_ID_HEADER;
use stride_server::config::environment::{Environment, ServerConfig};
use stride_server::database::memory::{MemoryStore, StaticCatalog};
use stride_server::database::LogRepository;
use stride_server::intelligence::ScoringWeights;
use stride_server::models::{CatalogDetails, CatalogItem, FitnessLevel};
use stride_server::resources::ServerResources;
use stride_server::routes;
use tower::ServiceExt;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            // Default to WARN for quiet tests
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

fn tags(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|&s| s.to_owned()).collect()
}

/// A small catalog with known scoring behavior
pub fn test_catalog() -> Vec<CatalogItem> {
    vec![
        CatalogItem {
            id: "wp-01".into(),
            name: "Foundation Strength".into(),
            target_goals: tags(&["strength"]),
            difficulty: FitnessLevel::Beginner,
            item_type: "strength".into(),
            details: CatalogDetails::Workout { duration_minutes: 45 },
        },
        CatalogItem {
            id: "wp-02".into(),
            name: "Metcon Burner".into(),
            target_goals: tags(&["weight_loss", "endurance"]),
            difficulty: FitnessLevel::Intermediate,
            item_type: "hiit".into(),
            details: CatalogDetails::Workout { duration_minutes: 30 },
        },
        CatalogItem {
            id: "np-01".into(),
            name: "Lean Cut Meals".into(),
            target_goals: tags(&["weight_loss"]),
            difficulty: FitnessLevel::Beginner,
            item_type: "meal_plan".into(),
            details: CatalogDetails::NutritionPlan {
                calories_per_day: 1800,
                ingredients: tags(&["chicken", "rice"]),
            },
        },
        CatalogItem {
            id: "np-02".into(),
            name: "Plant Power".into(),
            target_goals: tags(&["weight_loss"]),
            difficulty: FitnessLevel::Beginner,
            item_type: "meal_plan".into(),
            details: CatalogDetails::NutritionPlan {
                calories_per_day: 1900,
                ingredients: tags(&["tofu", "lentils"]),
            },
        },
    ]
}

/// Standard in-memory resources with the test catalog
pub fn create_test_resources() -> Arc<ServerResources> {
    init_test_logging();
    let store = Arc::new(MemoryStore::new());
    Arc::new(ServerResources::new(
        Arc::clone(&store) as Arc<dyn LogRepository>,
        store,
        Arc::new(StaticCatalog::new(test_catalog())),
        ServerConfig {
            http_port: 0,
            database_url: "sqlite::memory:".to_owned(),
            environment: Environment::Testing,
            scoring_weights: ScoringWeights::default(),
        },
    ))
}

/// Full application router over fresh in-memory resources
pub fn create_test_router() -> (Router, Arc<ServerResources>) {
    let resources = create_test_resources();
    (routes::router(Arc::clone(&resources)), resources)
}

/// Send an authenticated JSON request and return status + parsed body
pub async fn send_request(
    router: &Router,
    method: Method,
    uri: &str,
    user_id: Option<Uuid>,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user_id) = user_id {
        builder = builder.header(USER_ID_HEADER, user_id.to_string());
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
