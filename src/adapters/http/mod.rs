//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod referee;

// Re-export key types for convenience
pub use referee::referee_router;
pub use referee::RefereeAppState;
