//! Course Manager Gateway Library
//!
//! This crate provides the HTTP REST API in front of the course service.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use tracing::info;

use course_service_lib::build_course_service;

use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the gateway on `host:port`, overriding the configured bind address.
pub async fn run_embedded(
    host: &str,
    port: u16,
    mut config: GatewayConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    config.server.host = host.to_string();
    config.server.port = port;

    run_server(config).await
}

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: GatewayConfig) -> Result<(), Box<dyn std::error::Error>> {
    let course_service = build_course_service(&config.courses).await?;
    let state = AppState::new(course_service);

    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!(service = %config.server.service_name, "Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
