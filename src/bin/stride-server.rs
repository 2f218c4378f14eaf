// ABOUTME: Server binary wiring configuration, database, and the HTTP router
// ABOUTME: Production entry point serving the analytics and recommendation APIs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! # Stride Server Binary
//!
//! Starts the Stride analytics API: loads configuration from the
//! environment, opens the database, and serves the router until shutdown.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use stride_server::{
    config::environment::ServerConfig,
    database::{CatalogProvider, Database, LogRepository, PreferenceRepository},
    logging,
    resources::ServerResources,
    routes,
};
use tracing::info;

#[derive(Parser)]
#[command(name = "stride-server")]
#[command(about = "Stride Fitness API - progress analytics and plan recommendations")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database_url = database_url;
    }

    // Initialize production logging
    logging::init_from_env()?;

    info!("Starting Stride Fitness API");
    info!("{}", config.summary());

    let database = Arc::new(Database::new(&config.database_url).await?);
    info!("Database initialized successfully");

    let resources = Arc::new(ServerResources::new(
        Arc::clone(&database) as Arc<dyn LogRepository>,
        Arc::clone(&database) as Arc<dyn PreferenceRepository>,
        database as Arc<dyn CatalogProvider>,
        config.clone(),
    ));

    let router = routes::router(resources);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.http_port)).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    // Graceful shutdown on ctrl-c; errors here mean the signal handler could
    // not be installed and the server simply runs until killed
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "failed to install shutdown signal handler");
    }
}
