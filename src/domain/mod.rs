//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, enums, errors)
//! - `catalog` - Static characteristics of each route option
//! - `pricing` - Monthly cost model shared by scorer and pricing endpoint
//! - `scoring` - Scorers, aggregation, sensitivity, and the engine facade

pub mod catalog;
pub mod foundation;
pub mod pricing;
pub mod scoring;
