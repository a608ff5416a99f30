//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects, enums, and error types that form the
//! vocabulary of the referee domain.

mod category;
mod errors;
mod option_map;
mod route_option;
mod score;
mod weights;

pub use category::Category;
pub use errors::EngineError;
pub use option_map::OptionMap;
pub use route_option::RouteOption;
pub use score::Score;
pub use weights::Weights;
