//! Gateway Referee - AWS Front Door Comparison Engine
//!
//! This crate scores API Gateway, ALB, and NLB against caller-supplied
//! constraints and explains the verdict category by category.

pub mod adapters;
pub mod config;
pub mod domain;
