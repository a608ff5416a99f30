//! Scoring Module - Pure domain services for comparing route options.
//!
//! This module contains the stateless machinery that turns caller
//! constraints into an explainable verdict.
//!
//! # Components
//!
//! - `CategoryScorer` - Per-category 0-100 scoring rules
//! - `Aggregator` - Weighted totals and winner selection
//! - `SensitivityAnalyzer` - Bisection search for winner-flipping weights
//! - `ScoringEngine` - Facade tying catalog, scorers, and analyzers together
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. They take the
//! immutable catalog and caller input and return computed results. No
//! ports or adapters needed since there's no I/O or external dependencies.

mod aggregator;
mod engine;
mod scorers;
mod sensitivity;

// Re-export all public types
pub use aggregator::{Aggregator, AnalysisResult, CategoryScores, OptionBreakdown};
pub use engine::{Constraints, ScoringEngine};
pub use scorers::CategoryScorer;
pub use sensitivity::{FlipPoint, SensitivityAnalyzer, SensitivityResult, WEIGHT_TOLERANCE};
