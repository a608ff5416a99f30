//! Catalog module - Static characteristics of each route option.
//!
//! Profiles are deliberately static: the engine never calls out to AWS,
//! it reasons from these published characteristics.

use once_cell::sync::Lazy;

use crate::domain::foundation::{OptionMap, RouteOption, Score};

/// Pricing inputs for the monthly cost model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingParams {
    /// Flat monthly charge regardless of traffic (load balancer hours).
    pub fixed_monthly_fee: f64,
    /// Charge per million billable requests.
    pub per_million_requests: f64,
    /// Charge per GB of processed data.
    pub per_gb_processed: f64,
    /// Requests per month covered by the free tier.
    pub free_tier_requests: f64,
    /// Assumed average payload size for traffic behind this option.
    pub avg_payload_kb: f64,
}

/// Everything the engine knows about one option.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionProfile {
    pub option: RouteOption,
    pub pricing: PricingParams,
    /// Typical added latency in milliseconds under moderate load.
    pub baseline_latency_ms: f64,
    /// Feature identifiers this option supports natively.
    pub capabilities: &'static [&'static str],
    /// Baseline operational simplicity before use-case adjustment.
    pub ops_rating: Score,
    /// Portability rating: higher means easier to walk away from.
    pub lockin_rating: Score,
}

impl OptionProfile {
    /// Checks whether this option natively supports `feature`.
    pub fn has_capability(&self, feature: &str) -> bool {
        self.capabilities.iter().any(|c| *c == feature)
    }
}

/// Profiles for all three options, keyed by [`RouteOption`].
#[derive(Debug, Clone, PartialEq)]
pub struct OptionCatalog {
    profiles: OptionMap<OptionProfile>,
}

impl OptionCatalog {
    /// Builds a catalog from explicit profiles.
    pub fn new(profiles: OptionMap<OptionProfile>) -> Self {
        Self { profiles }
    }

    /// Returns the built-in catalog with published AWS characteristics.
    pub fn standard() -> Self {
        STANDARD_CATALOG.clone()
    }

    /// Returns the profile for `option`.
    pub fn profile(&self, option: RouteOption) -> &OptionProfile {
        self.profiles.get(option)
    }

    /// Iterates profiles in tie-break priority order.
    pub fn iter(&self) -> impl Iterator<Item = (RouteOption, &OptionProfile)> {
        self.profiles.iter()
    }
}

impl Default for OptionCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Static storage for the built-in catalog.
///
/// Rates approximate us-east-1 list prices: API Gateway HTTP APIs at
/// $1.00 per million calls with the 1M-request free tier, load balancers
/// at $0.0225/hour plus simplified capacity-unit charges folded into
/// per-request and per-GB rates.
static STANDARD_CATALOG: Lazy<OptionCatalog> = Lazy::new(|| {
    OptionCatalog::new(OptionMap {
        apigateway: OptionProfile {
            option: RouteOption::ApiGateway,
            pricing: PricingParams {
                fixed_monthly_fee: 0.0,
                per_million_requests: 1.0,
                per_gb_processed: 0.09,
                free_tier_requests: 1_000_000.0,
                avg_payload_kb: 2.0,
            },
            baseline_latency_ms: 45.0,
            capabilities: &[
                "rate_limiting",
                "auth",
                "caching",
                "waf",
                "request_transformation",
                "api_keys",
            ],
            ops_rating: Score::new(85.0),
            lockin_rating: Score::new(25.0),
        },
        alb: OptionProfile {
            option: RouteOption::Alb,
            pricing: PricingParams {
                fixed_monthly_fee: 16.43,
                per_million_requests: 0.1,
                per_gb_processed: 0.008,
                free_tier_requests: 0.0,
                avg_payload_kb: 8.0,
            },
            baseline_latency_ms: 20.0,
            capabilities: &["auth", "waf", "path_routing", "sticky_sessions", "websockets"],
            ops_rating: Score::new(75.0),
            lockin_rating: Score::new(60.0),
        },
        nlb: OptionProfile {
            option: RouteOption::Nlb,
            pricing: PricingParams {
                fixed_monthly_fee: 16.43,
                per_million_requests: 0.06,
                per_gb_processed: 0.004,
                free_tier_requests: 0.0,
                avg_payload_kb: 8.0,
            },
            baseline_latency_ms: 8.0,
            capabilities: &["static_ip", "tls_passthrough", "preserve_source_ip"],
            ops_rating: Score::new(65.0),
            lockin_rating: Score::new(70.0),
        },
    })
});
