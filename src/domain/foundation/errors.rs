//! Error types for the domain layer.

use thiserror::Error;

/// Errors reported by the scoring engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("Unknown option '{identifier}'. Must be apigateway, alb, or nlb")]
    UnknownOption { identifier: String },
}

impl EngineError {
    /// Creates an unknown option error.
    pub fn unknown_option(identifier: impl Into<String>) -> Self {
        EngineError::UnknownOption {
            identifier: identifier.into(),
        }
    }
}
