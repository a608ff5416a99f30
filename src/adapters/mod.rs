//! Adapters - Boundary implementations around the domain.
//!
//! Adapters connect the engine to external callers:
//! - `http` - REST API for analysis, sensitivity, and pricing

pub mod http;

pub use http::{referee_router, RefereeAppState};
