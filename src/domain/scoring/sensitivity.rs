//! Sensitivity analyzer - How far each weight can move before the winner flips.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Category, OptionMap, RouteOption, Weights};

use super::aggregator::{Aggregator, CategoryScores};

/// Absolute weight tolerance at which bisection stops.
pub const WEIGHT_TOLERANCE: f64 = 0.01;

/// Hard cap on bisection iterations per direction.
const MAX_BISECTION_STEPS: usize = 64;

/// The nearest weight change that flips the winner for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlipPoint {
    pub category: Category,
    /// Weight value, on the caller's original scale, at which the flip occurs.
    pub weight: f64,
    /// Absolute distance from the caller's current weight.
    pub distance: f64,
    pub new_winner: RouteOption,
}

/// Sensitivity verdict: the standing winner plus any nearby flips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityResult {
    pub base_winner: RouteOption,
    /// Flip points ordered nearest-first.
    pub flip_points: Vec<FlipPoint>,
}

/// Probes winner stability by perturbing one category weight at a time.
pub struct SensitivityAnalyzer;

impl SensitivityAnalyzer {
    /// Finds, per category, the nearest weight value that changes the winner.
    ///
    /// # Algorithm
    /// For each category, hold the other raw weights fixed and probe both
    /// ends of the search interval [0, Σweights]. If the winner at an end
    /// differs from the base winner, bisect between the current weight and
    /// that end down to [`WEIGHT_TOLERANCE`] and record the boundary. When
    /// both directions flip, only the nearer one is reported.
    ///
    /// # Edge Cases
    /// - All weights zero: equal weighting has no scale to perturb on;
    ///   returns the base winner with no flip points
    /// - Winner stable across the whole interval: no flip point for that
    ///   category
    pub fn analyze(scores: &OptionMap<CategoryScores>, weights: &Weights) -> SensitivityResult {
        let base_winner = Aggregator::aggregate(scores, weights).winner;

        let search_max = weights.total();
        if search_max <= 0.0 {
            return SensitivityResult {
                base_winner,
                flip_points: Vec::new(),
            };
        }

        let mut flip_points: Vec<FlipPoint> = Vec::new();
        for category in Category::ALL {
            let current = weights.get(category).max(0.0);
            let toward_zero =
                Self::probe_direction(scores, weights, category, current, 0.0, base_winner);
            let toward_max =
                Self::probe_direction(scores, weights, category, current, search_max, base_winner);

            let nearest = match (toward_zero, toward_max) {
                (Some(a), Some(b)) => Some(if a.distance <= b.distance { a } else { b }),
                (a, b) => a.or(b),
            };
            if let Some(flip) = nearest {
                flip_points.push(flip);
            }
        }

        flip_points.sort_by(|a, b| a.distance.total_cmp(&b.distance));

        SensitivityResult {
            base_winner,
            flip_points,
        }
    }

    /// Bisects between `current` (where `base_winner` holds) and `endpoint`.
    ///
    /// Returns `None` when the endpoint itself does not flip the winner,
    /// since a monotone search has nothing to find in that direction.
    fn probe_direction(
        scores: &OptionMap<CategoryScores>,
        weights: &Weights,
        category: Category,
        current: f64,
        endpoint: f64,
        base_winner: RouteOption,
    ) -> Option<FlipPoint> {
        if Self::winner_at(scores, weights, category, endpoint) == base_winner {
            return None;
        }

        // Invariant: winner(lo) == base_winner, winner(hi) != base_winner.
        let mut lo = current;
        let mut hi = endpoint;
        for _ in 0..MAX_BISECTION_STEPS {
            if (hi - lo).abs() <= WEIGHT_TOLERANCE {
                break;
            }
            let mid = (lo + hi) / 2.0;
            if Self::winner_at(scores, weights, category, mid) == base_winner {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        Some(FlipPoint {
            category,
            weight: hi,
            distance: (hi - current).abs(),
            new_winner: Self::winner_at(scores, weights, category, hi),
        })
    }

    fn winner_at(
        scores: &OptionMap<CategoryScores>,
        weights: &Weights,
        category: Category,
        value: f64,
    ) -> RouteOption {
        Aggregator::aggregate(scores, &weights.with(category, value)).winner
    }
}
