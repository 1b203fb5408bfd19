// ABOUTME: Server binary for the Morizo web backend
// ABOUTME: Loads configuration, initializes logging, and serves the HTTP API until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morizo

//! # Morizo Web Server Binary
//!
//! Plain HTTP; TLS is terminated by the reverse proxy in front of it.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use morizo_core::constants::routes;
use morizo_web::{
    config::ServerConfig,
    external::initialize_shared_client,
    logging,
    resources::ServerResources,
    routes::build_router,
};
use tokio::net::TcpListener;
use tracing::{debug, error, info, warn};

#[derive(Parser)]
#[command(name = "morizo-web-server")]
#[command(about = "Morizo web server - missing-ingredient checks and Morizo AI proxy")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind address
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // `.env` may carry RUST_LOG and LOG_FORMAT, so it is read before logging starts
    let dotenv = dotenvy::dotenv();
    logging::init_from_env()?;
    match dotenv {
        Ok(path) => info!(path = %path.display(), "Loaded .env file"),
        Err(e) => debug!("No .env file loaded: {}", e),
    }

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }

    info!("Starting Morizo web server");
    info!("{}", config.summary());
    if !config.transcription.is_enabled() {
        warn!("OPENAI_API_KEY is not set; voice transcription requests will be refused");
    }

    initialize_shared_client(config.http_client);

    let address = format!("{}:{}", config.host, config.http_port);
    display_available_endpoints(&config);

    let router = build_router(Arc::new(ServerResources::new(config)));

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Server listening on {address}");

    if let Err(e) = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shut down");
    Ok(())
}

/// Display all available API endpoints
#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(config: &ServerConfig) {
    let host = &config.host;
    let port = config.http_port;

    info!("=== Available API Endpoints ===");
    info!("   Health:            GET    http://{host}:{port}{}", routes::HEALTH);
    info!("   Readiness:         GET    http://{host}:{port}{}", routes::READY);
    info!(
        "   Missing Items:     POST   http://{host}:{port}{}",
        routes::CHECK_MISSING_INGREDIENTS
    );
    info!(
        "   Usage:             GET    http://{host}:{port}{}",
        routes::SUBSCRIPTION_USAGE
    );
    info!(
        "   Menu History:      DELETE http://{host}:{port}{}",
        routes::MENU_HISTORY_ENTRY
    );
    info!("   Voice Input:       POST   http://{host}:{port}{}", routes::WHISPER);
    info!(
        "   RevenueCat:        POST   http://{host}:{port}{}",
        routes::REVENUECAT_WEBHOOK
    );
    info!("=== End of Endpoint List ===");
}

/// Resolve on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
