//! Gateway Referee server binary
//!
//! Boots the HTTP adapter around the scoring engine: loads configuration
//! from the environment, installs tracing, and serves the referee routes
//! until interrupted.

use std::sync::Arc;

use http::{header, HeaderValue, Method};
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use gateway_referee::adapters::{referee_router, RefereeAppState};
use gateway_referee::config::AppConfig;
use gateway_referee::domain::scoring::ScoringEngine;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let state = RefereeAppState::new(Arc::new(ScoringEngine::new()));

    let app = referee_router().with_state(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(&config)?)
            .layer(TimeoutLayer::new(config.server.request_timeout())),
    );

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        "gateway referee listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("gateway referee shutdown complete");
    Ok(())
}

/// Install the tracing subscriber.
///
/// The filter comes from `RUST_LOG` when set, otherwise from the configured
/// log level. Production gets JSON output for log aggregation.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Build the CORS layer from configuration.
///
/// With no configured origins the API is open to any origin, which suits a
/// comparison tool queried from local dashboards. Configured origins are
/// parsed strictly and restrict both methods and headers.
fn cors_layer(config: &AppConfig) -> Result<CorsLayer, http::header::InvalidHeaderValue> {
    let origins = config.server.cors_origins_list();
    if origins.is_empty() {
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any));
    }

    let parsed = origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(parsed))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}

/// Resolve when the process receives Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("received Ctrl+C, shutting down gracefully");
        },
        _ = terminate => {
            tracing::info!("received SIGTERM, shutting down gracefully");
        },
    }
}
