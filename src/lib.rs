// ABOUTME: Main library entry point for the Stride fitness analytics platform
// ABOUTME: Provides progress analytics and plan recommendation APIs over REST
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

#![deny(unsafe_code)]

//! # Stride Server
//!
//! The analytics and recommendation backend of the Stride fitness-tracking
//! application. Raw time-series logs (weight, macros, workout sessions) are
//! turned into period-bucketed statistics, and a catalog of workout programs
//! and nutrition plans is matched against each user's goals and constraints
//! through a deterministic scored ranking.
//!
//! ## Architecture
//!
//! - **Models**: Common data structures for log entries, profiles, and the
//!   plan catalog
//! - **Intelligence**: Pure aggregation and scoring functions (period
//!   resolution, weight/nutrition/workout statistics, recommendation ranking)
//! - **Database**: Repository traits with SQLite and in-memory backends
//! - **Services**: Facades wiring repositories to the intelligence layer
//! - **Routes**: Thin axum handlers exposing the `/api/*` surface
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use stride_server::config::environment::ServerConfig;
//! use stride_server::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Stride server configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

// ── Public API ──────────────────────────────────────────────────────────
// These modules are used by binary crates (src/bin/) and integration tests
// (tests/). They must remain `pub` so external consumers can access them.

/// Authenticated-user boundary over the upstream auth middleware
pub mod auth;

/// Environment-based configuration management
pub mod config;

/// Repository traits and database backends
pub mod database;

/// Unified error handling system
pub mod errors;

/// Aggregation and recommendation computations
pub mod intelligence;

/// Logging configuration and structured logging setup
pub mod logging;

/// Core data models and types
pub mod models;

/// Shared server state container
pub mod resources;

/// `HTTP` routes organized by domain
pub mod routes;

/// Service facades between routes and computation
pub mod services;
