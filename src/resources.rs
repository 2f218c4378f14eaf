// ABOUTME: Shared server state container handed to every route group
// ABOUTME: Holds the repositories, scoring configuration, and server config behind Arcs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! Server resources
//!
//! One container assembled at startup and shared by all handlers. Everything
//! inside is immutable after construction; per-request state lives in the
//! services.

use crate::config::ServerConfig;
use crate::database::{CatalogProvider, LogRepository, PreferenceRepository};
use crate::intelligence::{DietaryRules, ScoringWeights};
use std::sync::Arc;

/// Shared state for all route handlers
pub struct ServerResources {
    /// Log entry store
    pub logs: Arc<dyn LogRepository>,
    /// Preference profile store
    pub preferences: Arc<dyn PreferenceRepository>,
    /// Read-only plan catalog
    pub catalog: Arc<dyn CatalogProvider>,
    /// Recommendation scoring weights
    pub scoring_weights: ScoringWeights,
    /// Dietary restriction rules for the hard filter
    pub dietary_rules: DietaryRules,
    /// Server configuration
    pub config: ServerConfig,
}

impl ServerResources {
    /// Assemble resources from the repositories and configuration
    #[must_use]
    pub fn new(
        logs: Arc<dyn LogRepository>,
        preferences: Arc<dyn PreferenceRepository>,
        catalog: Arc<dyn CatalogProvider>,
        config: ServerConfig,
    ) -> Self {
        Self {
            logs,
            preferences,
            catalog,
            scoring_weights: config.scoring_weights,
            dietary_rules: DietaryRules::default(),
            config,
        }
    }
}
