//! HTTP handlers for referee endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::scoring::ScoringEngine;

use super::dto::{AnalyzeRequest, ErrorResponse, HealthResponse, PricingQuery};

/// Floors enforced before any constraint reaches the engine.
const MIN_BUDGET: f64 = 10.0;
const MIN_RPS: f64 = 1.0;
const MIN_LATENCY_MS: f64 = 1.0;

/// Application state for referee endpoints.
#[derive(Clone)]
pub struct RefereeAppState {
    /// Shared scoring engine
    pub engine: Arc<ScoringEngine>,
}

impl RefereeAppState {
    /// Creates state around a shared engine.
    pub fn new(engine: Arc<ScoringEngine>) -> Self {
        Self { engine }
    }
}

/// Service banner.
///
/// GET /
pub async fn root() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        message: "API Gateway Referee API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Liveness probe.
///
/// GET /api/health
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        message: "All systems operational".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Score all three options against the submitted constraints.
///
/// POST /api/analyze
pub async fn analyze_options(
    State(state): State<RefereeAppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Response {
    if let Some(detail) = constraint_violation(&request) {
        return rejection(StatusCode::BAD_REQUEST, detail);
    }

    tracing::info!(use_case = %request.use_case, rps = request.rps, "analyzing options");

    let analysis = state.engine.analyze(&request.into_constraints());

    tracing::info!(winner = %analysis.winner, "analysis complete");

    Json(analysis).into_response()
}

/// Probe how stable the winner is under single-weight changes.
///
/// POST /api/sensitivity
pub async fn sensitivity_analysis(
    State(state): State<RefereeAppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Response {
    if let Some(detail) = constraint_violation(&request) {
        return rejection(StatusCode::BAD_REQUEST, detail);
    }

    let sensitivity = state.engine.analyze_sensitivity(&request.into_constraints());

    Json(sensitivity).into_response()
}

/// Itemized monthly pricing for one option.
///
/// GET /api/pricing/:option?rps=100
pub async fn get_pricing_details(
    State(state): State<RefereeAppState>,
    Path(option): Path<String>,
    Query(query): Query<PricingQuery>,
) -> Response {
    match state.engine.get_pricing_breakdown(&option, query.rps) {
        Ok(pricing) => Json(pricing).into_response(),
        Err(_) => rejection(
            StatusCode::BAD_REQUEST,
            "Invalid option. Must be apigateway, alb, or nlb",
        ),
    }
}

/// First violated floor wins; checks run in budget, rps, latency order.
fn constraint_violation(request: &AnalyzeRequest) -> Option<&'static str> {
    if request.budget < MIN_BUDGET {
        return Some("Budget must be at least $10/month");
    }
    if request.rps < MIN_RPS {
        return Some("RPS must be at least 1");
    }
    if request.latency < MIN_LATENCY_MS {
        return Some("Latency target must be at least 1ms");
    }
    None
}

fn rejection(status: StatusCode, detail: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            detail: detail.to_string(),
        }),
    )
        .into_response()
}
