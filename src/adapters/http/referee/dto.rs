//! Data transfer objects for referee HTTP endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Weights;
use crate::domain::scoring::Constraints;

// ═══════════════════════════════════════════════════════════════════════════
// Request DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// Constraints submitted to the analyze and sensitivity endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Expected steady-state requests per second
    pub rps: f64,
    /// Monthly budget in USD
    pub budget: f64,
    /// Acceptable added latency in milliseconds
    pub latency: f64,
    /// Feature identifiers the chosen option must cover
    #[serde(default)]
    pub features: Vec<String>,
    /// Declared traffic shape
    #[serde(default = "default_use_case")]
    pub use_case: String,
    /// Category weights, on whatever scale the caller prefers
    #[serde(default)]
    pub weights: Weights,
}

fn default_use_case() -> String {
    "rest".to_string()
}

impl AnalyzeRequest {
    /// Converts the wire shape into domain constraints.
    pub fn into_constraints(self) -> Constraints {
        Constraints {
            rps: self.rps,
            budget: self.budget,
            latency_target_ms: self.latency,
            required_features: self.features,
            use_case: self.use_case,
            weights: self.weights,
        }
    }
}

/// Query parameters for the pricing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingQuery {
    /// Requests per second to price at
    #[serde(default = "default_rps")]
    pub rps: f64,
}

fn default_rps() -> f64 {
    100.0
}

// ═══════════════════════════════════════════════════════════════════════════
// Response DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// Service liveness payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub version: String,
}

/// Error payload for client-visible rejections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}
