//! Scoring engine - Stateless facade over catalog, scorers, and analyzers.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::catalog::OptionCatalog;
use crate::domain::foundation::{EngineError, OptionMap, RouteOption, Score, Weights};
use crate::domain::pricing::{PricingBreakdown, PricingModel};

use super::aggregator::{Aggregator, AnalysisResult, CategoryScores};
use super::scorers::CategoryScorer;
use super::sensitivity::{SensitivityAnalyzer, SensitivityResult};

/// Caller-supplied analysis constraints.
///
/// Numeric floors (positive budget, rps, latency) are the boundary
/// layer's job; the engine itself degrades gracefully on degenerate
/// values rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Expected steady-state requests per second.
    pub rps: f64,
    /// Monthly budget in USD.
    pub budget: f64,
    /// Acceptable added latency in milliseconds.
    pub latency_target_ms: f64,
    /// Feature identifiers the chosen option must cover.
    pub required_features: Vec<String>,
    /// Declared traffic shape (rest, graphql, websocket, tcp, udp, ...).
    pub use_case: String,
    pub weights: Weights,
}

/// The referee: scores all three options against one set of constraints.
///
/// Every call reads only the immutable catalog and the caller's input,
/// so a single engine value can serve arbitrarily many concurrent
/// callers without locks.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    catalog: OptionCatalog,
}

impl ScoringEngine {
    /// Creates an engine over the built-in catalog.
    pub fn new() -> Self {
        Self {
            catalog: OptionCatalog::standard(),
        }
    }

    /// Creates an engine over an explicit catalog.
    pub fn with_catalog(catalog: OptionCatalog) -> Self {
        Self { catalog }
    }

    /// Returns the catalog this engine scores against.
    pub fn catalog(&self) -> &OptionCatalog {
        &self.catalog
    }

    /// Scores every option and picks the winner.
    pub fn analyze(&self, constraints: &Constraints) -> AnalysisResult {
        let scores = self.category_scores(constraints);
        Aggregator::aggregate(&scores, &constraints.weights)
    }

    /// Reports how far each weight can move before the winner changes.
    ///
    /// Category scores do not depend on weights, so they are computed
    /// once and shared across every probe.
    pub fn analyze_sensitivity(&self, constraints: &Constraints) -> SensitivityResult {
        let scores = self.category_scores(constraints);
        SensitivityAnalyzer::analyze(&scores, &constraints.weights)
    }

    /// Itemized monthly pricing for one option at `rps`.
    ///
    /// The total here is the same figure the cost scorer consumes during
    /// [`analyze`](Self::analyze) for that option and rps.
    pub fn pricing_breakdown(&self, option: RouteOption, rps: f64) -> PricingBreakdown {
        PricingModel::monthly_breakdown(self.catalog.profile(option), rps)
    }

    /// Pricing lookup keyed by wire identifier.
    pub fn get_pricing_breakdown(
        &self,
        option: &str,
        rps: f64,
    ) -> Result<PricingBreakdown, EngineError> {
        let option: RouteOption = option.parse()?;
        Ok(self.pricing_breakdown(option, rps))
    }

    /// Maps precomputed monthly costs onto cost scores.
    pub fn calculate_cost_scores(&self, costs: &OptionMap<f64>, budget: f64) -> OptionMap<Score> {
        costs.map(|_, cost| CategoryScorer::cost(*cost, budget))
    }

    /// Scores feature coverage for every option.
    pub fn calculate_feature_scores(&self, required_features: &[String]) -> OptionMap<Score> {
        let required: HashSet<&str> = required_features.iter().map(String::as_str).collect();
        OptionMap::from_fn(|option| {
            CategoryScorer::features(&required, self.catalog.profile(option))
        })
    }

    fn category_scores(&self, constraints: &Constraints) -> OptionMap<CategoryScores> {
        let required: HashSet<&str> =
            constraints.required_features.iter().map(String::as_str).collect();

        OptionMap::from_fn(|option| {
            let profile = self.catalog.profile(option);
            CategoryScores {
                cost: CategoryScorer::cost(
                    PricingModel::monthly_cost(profile, constraints.rps),
                    constraints.budget,
                ),
                latency: CategoryScorer::latency(
                    constraints.latency_target_ms,
                    profile.baseline_latency_ms,
                ),
                features: CategoryScorer::features(&required, profile),
                ops: CategoryScorer::ops(profile, &constraints.use_case),
                lockin: CategoryScorer::lockin(profile),
            }
        })
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rest_constraints() -> Constraints {
        Constraints {
            rps: 100.0,
            budget: 500.0,
            latency_target_ms: 100.0,
            required_features: vec!["rate_limiting".to_string(), "auth".to_string()],
            use_case: "rest".to_string(),
            weights: Weights::new(25.0, 30.0, 20.0, 15.0, 10.0),
        }
    }

    #[test]
    fn analyze_rest_scenario_scores_every_category() {
        let engine = ScoringEngine::new();
        let result = engine.analyze(&rest_constraints());

        let apigw = result.breakdown.apigateway;
        let alb = result.breakdown.alb;
        let nlb = result.breakdown.nlb;

        // cost: derived from the pricing model at 100 rps against $500
        assert!((apigw.scores.cost.value() - 39.0288).abs() < 1e-4);
        assert!((alb.scores.cost.value() - 88.21224).abs() < 1e-4);
        assert!((nlb.scores.cost.value() - 91.94472).abs() < 1e-4);

        // every baseline beats a 100ms target
        for entry in [apigw, alb, nlb] {
            assert_eq!(entry.scores.latency, Score::HUNDRED);
        }

        // rate_limiting + auth: full, half, none
        assert_eq!(apigw.scores.features, Score::HUNDRED);
        assert_eq!(alb.scores.features.value(), 50.0);
        assert_eq!(nlb.scores.features, Score::ZERO);

        // nlb takes the rest-use-case ops penalty
        assert_eq!(apigw.scores.ops.value(), 85.0);
        assert_eq!(alb.scores.ops.value(), 75.0);
        assert_eq!(nlb.scores.ops.value(), 55.0);

        assert_eq!(result.winner, RouteOption::Alb);
        assert!((alb.total.value() - 79.30306).abs() < 1e-4);
    }

    #[test]
    fn analyze_totals_stay_in_range() {
        let engine = ScoringEngine::new();
        let mut constraints = rest_constraints();
        constraints.rps = 10_000.0;
        let result = engine.analyze(&constraints);

        for (_, entry) in result.breakdown.iter() {
            assert!(entry.total >= Score::ZERO);
            assert!(entry.total <= Score::HUNDRED);
        }
    }

    #[test]
    fn analyze_cost_scores_match_pricing_totals() {
        let engine = ScoringEngine::new();
        let constraints = rest_constraints();
        let result = engine.analyze(&constraints);

        for option in RouteOption::ALL {
            let total = engine.pricing_breakdown(option, constraints.rps).total;
            let expected = CategoryScorer::cost(total, constraints.budget);
            assert_eq!(result.breakdown.get(option).scores.cost, expected);
        }
    }

    #[test]
    fn analyze_sensitivity_agrees_with_analyze() {
        let engine = ScoringEngine::new();
        let constraints = rest_constraints();

        let analysis = engine.analyze(&constraints);
        let sensitivity = engine.analyze_sensitivity(&constraints);

        assert_eq!(sensitivity.base_winner, analysis.winner);
        for flip in &sensitivity.flip_points {
            assert_ne!(flip.new_winner, sensitivity.base_winner);
        }
    }

    #[test]
    fn analyze_sensitivity_finds_the_feature_flip() {
        // apigateway sweeps features while alb leads overall, so piling
        // weight onto features must eventually hand apigateway the win.
        let engine = ScoringEngine::new();
        let sensitivity = engine.analyze_sensitivity(&rest_constraints());

        let feature_flip = sensitivity
            .flip_points
            .iter()
            .find(|f| f.category == crate::domain::foundation::Category::Features);
        let flip = feature_flip.expect("expected a features flip point");
        assert_eq!(flip.new_winner, RouteOption::ApiGateway);
        assert!(flip.weight > 20.0);
    }

    #[test]
    fn get_pricing_breakdown_accepts_known_identifiers() {
        let engine = ScoringEngine::new();
        for option in RouteOption::ALL {
            let breakdown = engine.get_pricing_breakdown(option.identifier(), 100.0).unwrap();
            assert_eq!(breakdown.option, option);
            assert!(breakdown.total > 0.0);
        }
    }

    #[test]
    fn get_pricing_breakdown_rejects_unknown_identifier() {
        let engine = ScoringEngine::new();
        let err = engine.get_pricing_breakdown("cloudfront", 100.0).unwrap_err();
        assert_eq!(err, EngineError::unknown_option("cloudfront"));
    }

    #[test]
    fn calculate_cost_scores_matches_published_example() {
        let engine = ScoringEngine::new();
        let costs = OptionMap { apigateway: 200.0, alb: 50.0, nlb: 40.0 };
        let scores = engine.calculate_cost_scores(&costs, 500.0);

        assert_eq!(scores.apigateway.value(), 60.0);
        assert_eq!(scores.alb.value(), 90.0);
        assert_eq!(scores.nlb.value(), 92.0);
        assert!(scores.nlb > scores.alb);
        assert!(scores.alb > scores.apigateway);
    }

    #[test]
    fn calculate_feature_scores_empty_set_is_all_hundreds() {
        let engine = ScoringEngine::new();
        let scores = engine.calculate_feature_scores(&[]);
        for (_, score) in scores.iter() {
            assert_eq!(*score, Score::HUNDRED);
        }
    }

    #[test]
    fn calculate_feature_scores_deduplicates_requirements() {
        let engine = ScoringEngine::new();
        let repeated = vec!["auth".to_string(), "auth".to_string(), "waf".to_string()];
        let deduped = vec!["auth".to_string(), "waf".to_string()];
        assert_eq!(
            engine.calculate_feature_scores(&repeated),
            engine.calculate_feature_scores(&deduped)
        );
    }

    #[test]
    fn tight_budget_keeps_cheapest_option_on_top_for_cost() {
        // budget at the boundary minimum, modest traffic
        let engine = ScoringEngine::new();
        let constraints = Constraints {
            rps: 10.0,
            budget: 10.0,
            latency_target_ms: 50.0,
            required_features: Vec::new(),
            use_case: "rest".to_string(),
            weights: Weights::new(50.0, 20.0, 10.0, 10.0, 10.0),
        };
        let result = engine.analyze(&constraints);

        let nlb_cost = result.breakdown.nlb.scores.cost;
        assert!(nlb_cost >= result.breakdown.alb.scores.cost);
        assert!(nlb_cost >= result.breakdown.apigateway.scores.cost);
    }

    proptest! {
        #[test]
        fn cost_score_never_increases_with_cost(
            low in 0.0..5_000.0f64,
            delta in 0.0..5_000.0f64,
            budget in 1.0..10_000.0f64,
        ) {
            let engine = ScoringEngine::new();
            let costs = OptionMap { apigateway: low, alb: low + delta, nlb: low };
            let scores = engine.calculate_cost_scores(&costs, budget);
            prop_assert!(scores.apigateway >= scores.alb);
        }

        #[test]
        fn analyze_winner_is_argmax_with_priority(
            rps in 0.1..5_000.0f64,
            budget in 1.0..5_000.0f64,
            latency in 1.0..500.0f64,
            wc in 0.0..100.0f64,
            wl in 0.0..100.0f64,
            wf in 0.0..100.0f64,
            wo in 0.0..100.0f64,
            wk in 0.0..100.0f64,
        ) {
            let engine = ScoringEngine::new();
            let constraints = Constraints {
                rps,
                budget,
                latency_target_ms: latency,
                required_features: vec!["auth".to_string()],
                use_case: "rest".to_string(),
                weights: Weights::new(wc, wl, wf, wo, wk),
            };
            let result = engine.analyze(&constraints);

            let mut expected = RouteOption::ApiGateway;
            let mut best = result.breakdown.get(expected).total;
            for (option, entry) in result.breakdown.iter() {
                prop_assert!(entry.total >= Score::ZERO);
                prop_assert!(entry.total <= Score::HUNDRED);
                if entry.total > best {
                    expected = option;
                    best = entry.total;
                }
            }
            prop_assert_eq!(result.winner, expected);
        }

        #[test]
        fn analyze_is_invariant_under_weight_scaling(
            wc in 0.0..100.0f64,
            wl in 0.0..100.0f64,
            wf in 0.0..100.0f64,
            wo in 0.0..100.0f64,
            wk in 0.0..100.0f64,
            scale in 0.01..100.0f64,
        ) {
            let engine = ScoringEngine::new();
            let mut constraints = rest_constraints();
            constraints.weights = Weights::new(wc, wl, wf, wo, wk);
            let base = engine.analyze(&constraints);

            constraints.weights =
                Weights::new(wc * scale, wl * scale, wf * scale, wo * scale, wk * scale);
            let scaled = engine.analyze(&constraints);

            for option in RouteOption::ALL {
                let a = base.breakdown.get(option).total.value();
                let b = scaled.breakdown.get(option).total.value();
                prop_assert!((a - b).abs() < 1e-6);
            }

            // Skip the winner check only in a numerical dead heat.
            let mut totals: Vec<f64> = RouteOption::ALL
                .iter()
                .map(|o| base.breakdown.get(*o).total.value())
                .collect();
            totals.sort_by(|a, b| b.total_cmp(a));
            if totals[0] - totals[1] > 1e-9 {
                prop_assert_eq!(base.winner, scaled.winner);
            }
        }

        #[test]
        fn pricing_total_never_decreases_with_traffic(
            rps in 0.1..5_000.0f64,
            delta in 0.0..5_000.0f64,
        ) {
            let engine = ScoringEngine::new();
            for option in RouteOption::ALL {
                let low = engine.pricing_breakdown(option, rps).total;
                let high = engine.pricing_breakdown(option, rps + delta).total;
                prop_assert!(low <= high);
            }
        }
    }
}
