//! Category weights supplied by the caller.

use serde::{Deserialize, Serialize};

use super::Category;

/// Relative importance of each scoring category.
///
/// Weights are free-scale: callers may send values summing to 100, to 1,
/// or to anything else. Negative entries are treated as zero. A missing
/// entry deserializes as zero, and an all-zero set means equal weighting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    pub cost: f64,
    pub latency: f64,
    pub features: f64,
    pub ops: f64,
    pub lockin: f64,
}

impl Weights {
    /// Creates weights from the five raw values, in canonical category order.
    pub fn new(cost: f64, latency: f64, features: f64, ops: f64, lockin: f64) -> Self {
        Self { cost, latency, features, ops, lockin }
    }

    /// Returns the raw weight for `category`.
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Cost => self.cost,
            Category::Latency => self.latency,
            Category::Features => self.features,
            Category::Ops => self.ops,
            Category::Lockin => self.lockin,
        }
    }

    /// Returns a copy with the weight for `category` replaced.
    pub fn with(mut self, category: Category, value: f64) -> Self {
        match category {
            Category::Cost => self.cost = value,
            Category::Latency => self.latency = value,
            Category::Features => self.features = value,
            Category::Ops => self.ops = value,
            Category::Lockin => self.lockin = value,
        }
        self
    }

    /// Sum of the effective (negative-floored) weights.
    pub fn total(&self) -> f64 {
        Category::ALL.iter().map(|c| self.get(*c).max(0.0)).sum()
    }

    /// Normalizes into fractions that sum to 1.0.
    ///
    /// # Edge Cases
    /// - All weights zero or negative: every category gets 1/5
    /// - Negative entries: floored to zero before normalizing
    pub fn normalized(&self) -> Weights {
        let total = self.total();
        if total <= 0.0 {
            let equal = 1.0 / Category::ALL.len() as f64;
            return Weights::new(equal, equal, equal, equal, equal);
        }
        Weights {
            cost: self.cost.max(0.0) / total,
            latency: self.latency.max(0.0) / total,
            features: self.features.max(0.0) / total,
            ops: self.ops.max(0.0) / total,
            lockin: self.lockin.max(0.0) / total,
        }
    }
}
