//! Category scorers - Per-category 0-100 scoring rules.

use std::collections::HashSet;

use crate::domain::catalog::OptionProfile;
use crate::domain::foundation::{RouteOption, Score};

/// Pure scoring rules, one per category.
///
/// Each rule maps one option's raw characteristics onto the shared 0-100
/// scale so the aggregator can weigh categories against each other.
pub struct CategoryScorer;

impl CategoryScorer {
    /// Scores monthly cost against the caller's budget.
    ///
    /// # Algorithm
    /// `100 * (1 - cost / budget)`, clamped to 0-100.
    ///
    /// # Edge Cases
    /// - Cost <= 0: scores 100 (a free option is perfect regardless of budget)
    /// - Budget <= 0 with positive cost: scores 0
    /// - Cost >= budget: floors at 0
    pub fn cost(monthly_cost: f64, budget: f64) -> Score {
        if monthly_cost <= 0.0 {
            return Score::HUNDRED;
        }
        if budget <= 0.0 {
            return Score::ZERO;
        }
        Score::new(100.0 * (1.0 - monthly_cost / budget))
    }

    /// Scores baseline latency against the caller's target.
    ///
    /// # Algorithm
    /// `100 * min(1, target / baseline)`, clamped to 0-100. An option at
    /// or below the target scores 100; slower options degrade in
    /// proportion to how far the target falls short of their baseline.
    ///
    /// # Edge Cases
    /// - Baseline <= 0: scores 100 (an instant option meets any target)
    pub fn latency(target_ms: f64, baseline_ms: f64) -> Score {
        if baseline_ms <= 0.0 {
            return Score::HUNDRED;
        }
        let ratio = (target_ms / baseline_ms).min(1.0);
        Score::new(100.0 * ratio)
    }

    /// Scores feature coverage as the fraction of required features the
    /// option supports natively.
    ///
    /// # Edge Cases
    /// - Empty requirement set: every option scores 100
    /// - Unrequested capabilities earn no credit
    pub fn features(required: &HashSet<&str>, profile: &OptionProfile) -> Score {
        if required.is_empty() {
            return Score::HUNDRED;
        }
        let covered = required.iter().filter(|f| profile.has_capability(f)).count();
        Score::new(100.0 * covered as f64 / required.len() as f64)
    }

    /// Scores operational simplicity: the catalog baseline nudged by how
    /// well the option's protocol model fits the declared use case.
    pub fn ops(profile: &OptionProfile, use_case: &str) -> Score {
        let adjustment = Self::use_case_adjustment(profile.option, use_case);
        Score::new(profile.ops_rating.value() + adjustment)
    }

    /// Scores vendor lock-in straight from the catalog rating.
    pub fn lockin(profile: &OptionProfile) -> Score {
        profile.lockin_rating
    }

    /// Penalty for running a use case the option was not built for.
    ///
    /// HTTP-only front doors take the biggest hit on raw TCP/UDP traffic;
    /// a bare NLB in front of an HTTP API leaves all request handling to
    /// the backend. Unrecognized use cases leave the baseline untouched.
    fn use_case_adjustment(option: RouteOption, use_case: &str) -> f64 {
        match (option, use_case) {
            (RouteOption::ApiGateway, "tcp" | "udp") => -15.0,
            (RouteOption::Alb, "tcp" | "udp") => -10.0,
            (RouteOption::Nlb, "rest" | "graphql") => -10.0,
            _ => 0.0,
        }
    }
}
