//! Aggregator - Weighted totals and winner selection.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Category, OptionMap, RouteOption, Score, Weights};

/// The five per-category scores for one option.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub cost: Score,
    pub latency: Score,
    pub features: Score,
    pub ops: Score,
    pub lockin: Score,
}

impl CategoryScores {
    /// Returns the score for `category`.
    pub fn get(&self, category: Category) -> Score {
        match category {
            Category::Cost => self.cost,
            Category::Latency => self.latency,
            Category::Features => self.features,
            Category::Ops => self.ops,
            Category::Lockin => self.lockin,
        }
    }
}

/// One option's verdict: category scores plus the weighted total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionBreakdown {
    #[serde(flatten)]
    pub scores: CategoryScores,
    pub total: Score,
}

/// Full analysis verdict across all three options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub winner: RouteOption,
    pub breakdown: OptionMap<OptionBreakdown>,
}

/// Combines category scores into totals and picks the winner.
pub struct Aggregator;

impl Aggregator {
    /// Computes weighted totals and the winning option.
    ///
    /// # Algorithm
    /// 1. Normalize weights into fractions (negatives floored, all-zero
    ///    treated as equal weighting)
    /// 2. For each option: total = Σ(category score × weight fraction)
    /// 3. Winner = highest total
    ///
    /// # Edge Cases
    /// - Exact ties: resolved by fixed priority (apigateway, alb, nlb)
    pub fn aggregate(scores: &OptionMap<CategoryScores>, weights: &Weights) -> AnalysisResult {
        let fractions = weights.normalized();

        let breakdown = scores.map(|_, category_scores| {
            let total: f64 = Category::ALL
                .iter()
                .map(|c| category_scores.get(*c).value() * fractions.get(*c))
                .sum();
            OptionBreakdown {
                scores: *category_scores,
                total: Score::new(total),
            }
        });

        AnalysisResult {
            winner: Self::winner(&breakdown),
            breakdown,
        }
    }

    /// Iteration starts at the highest-priority option, and a later option
    /// must beat the leader strictly to take the lead.
    fn winner(breakdown: &OptionMap<OptionBreakdown>) -> RouteOption {
        let mut leader = RouteOption::ApiGateway;
        let mut best = breakdown.get(leader).total;

        for (option, entry) in breakdown.iter() {
            if entry.total > best {
                leader = option;
                best = entry.total;
            }
        }

        leader
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category_scores(values: [f64; 5]) -> CategoryScores {
        CategoryScores {
            cost: Score::new(values[0]),
            latency: Score::new(values[1]),
            features: Score::new(values[2]),
            ops: Score::new(values[3]),
            lockin: Score::new(values[4]),
        }
    }

    fn uniform_scores(apigw: f64, alb: f64, nlb: f64) -> OptionMap<CategoryScores> {
        OptionMap {
            apigateway: category_scores([apigw; 5]),
            alb: category_scores([alb; 5]),
            nlb: category_scores([nlb; 5]),
        }
    }

    #[test]
    fn aggregate_picks_dominant_option() {
        let scores = uniform_scores(40.0, 90.0, 60.0);
        let result = Aggregator::aggregate(&scores, &Weights::new(25.0, 30.0, 20.0, 15.0, 10.0));
        assert_eq!(result.winner, RouteOption::Alb);
        assert_eq!(result.breakdown.alb.total.value(), 90.0);
    }

    #[test]
    fn aggregate_weighted_total_mixes_categories() {
        let scores = OptionMap {
            apigateway: category_scores([60.0, 100.0, 100.0, 85.0, 25.0]),
            alb: category_scores([90.0, 100.0, 50.0, 75.0, 60.0]),
            nlb: category_scores([92.0, 100.0, 0.0, 55.0, 70.0]),
        };
        let weights = Weights::new(25.0, 30.0, 20.0, 15.0, 10.0);
        let result = Aggregator::aggregate(&scores, &weights);

        // apigateway: .25*60 + .30*100 + .20*100 + .15*85 + .10*25 = 80.25
        assert!((result.breakdown.apigateway.total.value() - 80.25).abs() < 1e-9);
        // alb: 22.5 + 30 + 10 + 11.25 + 6 = 79.75
        assert!((result.breakdown.alb.total.value() - 79.75).abs() < 1e-9);
        assert_eq!(result.winner, RouteOption::ApiGateway);
    }

    #[test]
    fn aggregate_three_way_tie_goes_to_apigateway() {
        let scores = uniform_scores(70.0, 70.0, 70.0);
        let result = Aggregator::aggregate(&scores, &Weights::new(1.0, 1.0, 1.0, 1.0, 1.0));
        assert_eq!(result.winner, RouteOption::ApiGateway);
    }

    #[test]
    fn aggregate_two_way_tie_respects_priority_order() {
        let scores = uniform_scores(10.0, 80.0, 80.0);
        let result = Aggregator::aggregate(&scores, &Weights::new(20.0, 20.0, 20.0, 20.0, 20.0));
        assert_eq!(result.winner, RouteOption::Alb);
    }

    #[test]
    fn aggregate_zero_weights_fall_back_to_equal_weighting() {
        let scores = OptionMap {
            apigateway: category_scores([100.0, 0.0, 0.0, 0.0, 0.0]),
            alb: category_scores([30.0, 30.0, 30.0, 30.0, 30.0]),
            nlb: category_scores([0.0, 0.0, 0.0, 0.0, 10.0]),
        };
        let result = Aggregator::aggregate(&scores, &Weights::default());

        assert!((result.breakdown.apigateway.total.value() - 20.0).abs() < 1e-9);
        assert!((result.breakdown.alb.total.value() - 30.0).abs() < 1e-9);
        assert_eq!(result.winner, RouteOption::Alb);
    }

    #[test]
    fn aggregate_is_invariant_under_weight_scaling() {
        let scores = OptionMap {
            apigateway: category_scores([60.0, 100.0, 100.0, 85.0, 25.0]),
            alb: category_scores([90.0, 100.0, 50.0, 75.0, 60.0]),
            nlb: category_scores([92.0, 100.0, 0.0, 55.0, 70.0]),
        };
        let base = Aggregator::aggregate(&scores, &Weights::new(25.0, 30.0, 20.0, 15.0, 10.0));
        let scaled = Aggregator::aggregate(&scores, &Weights::new(2.5, 3.0, 2.0, 1.5, 1.0));

        assert_eq!(base.winner, scaled.winner);
        for option in RouteOption::ALL {
            let a = base.breakdown.get(option).total.value();
            let b = scaled.breakdown.get(option).total.value();
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn aggregate_totals_stay_in_range() {
        let scores = uniform_scores(100.0, 0.0, 55.5);
        let result = Aggregator::aggregate(&scores, &Weights::new(90.0, 5.0, 3.0, 1.0, 1.0));
        for (_, entry) in result.breakdown.iter() {
            assert!(entry.total >= Score::ZERO);
            assert!(entry.total <= Score::HUNDRED);
        }
    }

    #[test]
    fn option_breakdown_serializes_flat() {
        let entry = OptionBreakdown {
            scores: category_scores([60.0, 100.0, 100.0, 85.0, 25.0]),
            total: Score::new(80.25),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["cost"], 60.0);
        assert_eq!(json["latency"], 100.0);
        assert_eq!(json["lockin"], 25.0);
        assert_eq!(json["total"], 80.25);
        // flattened: no nested "scores" object
        assert!(json.get("scores").is_none());
    }

    #[test]
    fn analysis_result_serializes_winner_and_options() {
        let scores = uniform_scores(40.0, 90.0, 60.0);
        let result = Aggregator::aggregate(&scores, &Weights::new(1.0, 1.0, 1.0, 1.0, 1.0));
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["winner"], "alb");
        for option in RouteOption::ALL {
            assert!(json["breakdown"][option.identifier()]["total"].is_f64());
        }
    }
}
