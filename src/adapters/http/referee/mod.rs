//! Referee HTTP adapter - REST API for option analysis.
//!
//! Provides endpoints for:
//! - Scoring the three options against caller constraints
//! - Probing winner stability under weight changes
//! - Per-option pricing breakdowns
//! - Health checks

pub mod dto;
pub mod handlers;
pub mod routes;

// Export DTOs for external use
pub use dto::*;

// Export handlers state and router
pub use handlers::RefereeAppState;
pub use routes::referee_router;
