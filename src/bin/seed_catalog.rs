// ABOUTME: Catalog seeder populating the database with a starter plan catalog
// ABOUTME: Gives local and demo deployments something to recommend out of the box
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! Catalog seeder for the Stride server.
//!
//! This binary populates the database with a starter set of workout programs
//! and nutrition plans so the recommendation endpoints return useful results
//! in local and demo deployments.
//!
//! Usage:
//! ```bash
//! # Seed the default database
//! cargo run --bin seed-catalog
//!
//! # Seed a specific database
//! cargo run --bin seed-catalog -- --database-url sqlite:data/stride.db
//! ```

use anyhow::Result;
use clap::Parser;
use std::collections::BTreeSet;
use stride_server::config::environment::{ServerConfig, DEFAULT_DATABASE_URL};
use stride_server::database::Database;
use stride_server::models::{CatalogDetails, CatalogItem, FitnessLevel};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "seed-catalog",
    about = "Stride plan catalog seeder",
    long_about = "Populate the database with a starter workout and nutrition plan catalog"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,
}

fn tags(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|&s| s.to_owned()).collect()
}

fn starter_catalog() -> Vec<CatalogItem> {
    vec![
        CatalogItem {
            id: "wp-001".into(),
            name: "Foundation Strength".into(),
            target_goals: tags(&["strength", "muscle_gain"]),
            difficulty: FitnessLevel::Beginner,
            item_type: "strength".into(),
            details: CatalogDetails::Workout { duration_minutes: 45 },
        },
        CatalogItem {
            id: "wp-002".into(),
            name: "Progressive Overload Block".into(),
            target_goals: tags(&["strength", "muscle_gain"]),
            difficulty: FitnessLevel::Intermediate,
            item_type: "strength".into(),
            details: CatalogDetails::Workout { duration_minutes: 60 },
        },
        CatalogItem {
            id: "wp-003".into(),
            name: "Metcon Burner".into(),
            target_goals: tags(&["weight_loss", "endurance"]),
            difficulty: FitnessLevel::Intermediate,
            item_type: "hiit".into(),
            details: CatalogDetails::Workout { duration_minutes: 30 },
        },
        CatalogItem {
            id: "wp-004".into(),
            name: "Base Builder Runs".into(),
            target_goals: tags(&["endurance"]),
            difficulty: FitnessLevel::Beginner,
            item_type: "cardio".into(),
            details: CatalogDetails::Workout { duration_minutes: 40 },
        },
        CatalogItem {
            id: "wp-005".into(),
            name: "Mobility & Recovery Flow".into(),
            target_goals: tags(&["maintenance", "mobility"]),
            difficulty: FitnessLevel::Beginner,
            item_type: "yoga".into(),
            details: CatalogDetails::Workout { duration_minutes: 25 },
        },
        CatalogItem {
            id: "np-001".into(),
            name: "Lean Cut Meals".into(),
            target_goals: tags(&["weight_loss"]),
            difficulty: FitnessLevel::Beginner,
            item_type: "meal_plan".into(),
            details: CatalogDetails::NutritionPlan {
                calories_per_day: 1800,
                ingredients: tags(&["chicken", "rice", "broccoli", "olive oil"]),
            },
        },
        CatalogItem {
            id: "np-002".into(),
            name: "Plant Power".into(),
            target_goals: tags(&["weight_loss", "maintenance"]),
            difficulty: FitnessLevel::Beginner,
            item_type: "meal_plan".into(),
            details: CatalogDetails::NutritionPlan {
                calories_per_day: 1900,
                ingredients: tags(&["tofu", "lentils", "quinoa", "spinach"]),
            },
        },
        CatalogItem {
            id: "np-003".into(),
            name: "Mass Gainer Kitchen".into(),
            target_goals: tags(&["muscle_gain"]),
            difficulty: FitnessLevel::Intermediate,
            item_type: "meal_plan".into(),
            details: CatalogDetails::NutritionPlan {
                calories_per_day: 3200,
                ingredients: tags(&["beef", "pasta", "milk", "peanut"]),
            },
        },
        CatalogItem {
            id: "np-004".into(),
            name: "Endurance Fuel".into(),
            target_goals: tags(&["endurance"]),
            difficulty: FitnessLevel::Advanced,
            item_type: "meal_plan".into(),
            details: CatalogDetails::NutritionPlan {
                calories_per_day: 2800,
                ingredients: tags(&["oats", "banana", "salmon", "sweet potato"]),
            },
        },
    ]
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();
    stride_server::logging::init_from_env()?;

    let database_url = args
        .database_url
        .or_else(|| ServerConfig::from_env().ok().map(|c| c.database_url))
        .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned());

    info!("Seeding catalog into {database_url}");
    let database = Database::new(&database_url).await?;

    let items = starter_catalog();
    for item in &items {
        database.upsert_catalog_item(item).await?;
    }

    info!("Seeded {} catalog items", items.len());
    Ok(())
}
