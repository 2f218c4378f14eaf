// ABOUTME: Configuration module organization for the Stride server
// ABOUTME: Environment-only configuration; no file-based layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! Configuration management

/// Environment-based server configuration
pub mod environment;

pub use environment::ServerConfig;
