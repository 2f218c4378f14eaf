// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses HTTP port, database URL, environment kind, and scoring weight overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! Environment-based configuration management
//!
//! The server is configured entirely from environment variables. Typed enums
//! parse with explicit fallbacks so a misspelled value degrades to a sane
//! default instead of aborting startup.

use crate::intelligence::ScoringWeights;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Default HTTP port when `HTTP_PORT` is unset
pub const DEFAULT_HTTP_PORT: u16 = 8081;

/// Default database URL when `DATABASE_URL` is unset
pub const DEFAULT_DATABASE_URL: &str = "sqlite:data/stride.db";

/// Environment type for logging and operational defaults
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            // Default fallback for unrecognized values
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Server configuration assembled from environment variables
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Database connection string
    pub database_url: String,
    /// Deployment environment
    pub environment: Environment,
    /// Recommendation scoring weights, overridable per deployment
    pub scoring_weights: ScoringWeights,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error when a set variable fails to parse (an unset variable
    /// falls back to its default instead).
    pub fn from_env() -> Result<Self> {
        let http_port = match env::var("HTTP_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("invalid HTTP_PORT: {raw}"))?,
            Err(_) => DEFAULT_HTTP_PORT,
        };

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned());

        let environment = Environment::from_str_or_default(
            &env::var("ENVIRONMENT").unwrap_or_default(),
        );

        Ok(Self {
            http_port,
            database_url,
            environment,
            scoring_weights: scoring_weights_from_env()?,
        })
    }

    /// One-line startup summary for the logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "environment={} http_port={} database_url={}",
            self.environment, self.http_port, self.database_url
        )
    }
}

/// Scoring weight overrides: `STRIDE_WEIGHT_GOAL`, `STRIDE_WEIGHT_DIFFICULTY`,
/// `STRIDE_WEIGHT_PREFERENCE`
fn scoring_weights_from_env() -> Result<ScoringWeights> {
    let defaults = ScoringWeights::default();
    Ok(ScoringWeights {
        goal_overlap: weight_var("STRIDE_WEIGHT_GOAL", defaults.goal_overlap)?,
        difficulty_match: weight_var("STRIDE_WEIGHT_DIFFICULTY", defaults.difficulty_match)?,
        preference_match: weight_var("STRIDE_WEIGHT_PREFERENCE", defaults.preference_match)?,
    })
}

fn weight_var(name: &str, default: u32) -> Result<u32> {
    match env::var(name) {
        Ok(raw) => raw
            .parse::<u32>()
            .with_context(|| format!("invalid {name}: {raw}")),
        Err(_) => Ok(default),
    }
}
