//! Axum router configuration for referee endpoints.
//!
//! This module defines the route structure for the referee API.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    analyze_options, get_pricing_details, health_check, root, sensitivity_analysis,
    RefereeAppState,
};

/// Create the referee API router.
///
/// # Routes
///
/// ## Service
/// - `GET /` - Service banner
/// - `GET /api/health` - Liveness probe
///
/// ## Analysis
/// - `POST /api/analyze` - Score all options against constraints
/// - `POST /api/sensitivity` - Winner stability under weight changes
///
/// ## Pricing
/// - `GET /api/pricing/:option` - Itemized monthly pricing (query: rps)
pub fn referee_routes() -> Router<RefereeAppState> {
    Router::new()
        // Service
        .route("/", get(root))
        .route("/api/health", get(health_check))
        // Analysis
        .route("/api/analyze", post(analyze_options))
        .route("/api/sensitivity", post(sensitivity_analysis))
        // Pricing
        .route("/api/pricing/:option", get(get_pricing_details))
}

/// Create the complete referee router.
///
/// Suitable for serving at the root of the application.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use crate::adapters::http::referee::{referee_router, RefereeAppState};
/// use crate::domain::scoring::ScoringEngine;
///
/// let state = RefereeAppState::new(Arc::new(ScoringEngine::new()));
/// let app = referee_router().with_state(state);
/// ```
pub fn referee_router() -> Router<RefereeAppState> {
    referee_routes()
}
