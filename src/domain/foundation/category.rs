//! Scoring categories shared across options.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One axis along which every option is scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cost,
    Latency,
    Features,
    Ops,
    Lockin,
}

impl Category {
    /// All five categories in canonical order.
    pub const ALL: [Category; 5] = [
        Category::Cost,
        Category::Latency,
        Category::Features,
        Category::Ops,
        Category::Lockin,
    ];

    /// Returns the wire identifier used in weights and flip points.
    pub fn identifier(&self) -> &'static str {
        match self {
            Category::Cost => "cost",
            Category::Latency => "latency",
            Category::Features => "features",
            Category::Ops => "ops",
            Category::Lockin => "lockin",
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Cost => "Monthly Cost",
            Category::Latency => "Added Latency",
            Category::Features => "Feature Coverage",
            Category::Ops => "Operational Simplicity",
            Category::Lockin => "Vendor Lock-in",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}
