//! Pricing module - Monthly cost model for each route option.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::OptionProfile;
use crate::domain::foundation::RouteOption;

/// Seconds in the 30-day billing month the model assumes.
pub const SECONDS_PER_MONTH: f64 = 2_592_000.0;

/// Requests per pricing unit.
const REQUESTS_PER_MILLION: f64 = 1_000_000.0;

/// Kilobytes per (decimal) gigabyte, matching how AWS meters data.
const KB_PER_GB: f64 = 1_000_000.0;

/// Itemized monthly cost estimate for one option at a given request rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingBreakdown {
    pub option: RouteOption,
    /// Requests per second the estimate was computed for.
    pub rps: f64,
    pub monthly_requests: f64,
    /// Requests covered by the free tier before billing starts.
    pub free_tier_requests: f64,
    pub billable_requests: f64,
    /// Estimated GB of data processed per month.
    pub estimated_data_gb: f64,
    pub fixed_fee: f64,
    pub request_charge: f64,
    pub data_charge: f64,
    pub total: f64,
}

/// Pure cost model shared by the scorer and the pricing endpoint.
pub struct PricingModel;

impl PricingModel {
    /// Computes the itemized monthly estimate for `profile` at `rps`.
    ///
    /// # Algorithm
    /// 1. Project the request rate over a 30-day month
    /// 2. Subtract the free tier (requests only, never data)
    /// 3. Charge billable requests at the per-million rate
    /// 4. Charge estimated data volume at the per-GB rate
    ///
    /// # Edge Cases
    /// - Zero or negative rps: every charge is zero, including fixed fees,
    ///   since nothing would be provisioned for a dead route
    pub fn monthly_breakdown(profile: &OptionProfile, rps: f64) -> PricingBreakdown {
        // The negated comparison also catches NaN.
        if !(rps > 0.0) {
            return PricingBreakdown {
                option: profile.option,
                rps,
                monthly_requests: 0.0,
                free_tier_requests: profile.pricing.free_tier_requests,
                billable_requests: 0.0,
                estimated_data_gb: 0.0,
                fixed_fee: 0.0,
                request_charge: 0.0,
                data_charge: 0.0,
                total: 0.0,
            };
        }

        let pricing = &profile.pricing;
        let monthly_requests = rps * SECONDS_PER_MONTH;
        let billable_requests = (monthly_requests - pricing.free_tier_requests).max(0.0);
        let request_charge = billable_requests / REQUESTS_PER_MILLION * pricing.per_million_requests;

        let estimated_data_gb = monthly_requests * pricing.avg_payload_kb / KB_PER_GB;
        let data_charge = estimated_data_gb * pricing.per_gb_processed;

        let fixed_fee = pricing.fixed_monthly_fee;
        let total = fixed_fee + request_charge + data_charge;

        PricingBreakdown {
            option: profile.option,
            rps,
            monthly_requests,
            free_tier_requests: pricing.free_tier_requests,
            billable_requests,
            estimated_data_gb,
            fixed_fee,
            request_charge,
            data_charge,
            total,
        }
    }

    /// Total monthly cost for `profile` at `rps`.
    pub fn monthly_cost(profile: &OptionProfile, rps: f64) -> f64 {
        Self::monthly_breakdown(profile, rps).total
    }
}
