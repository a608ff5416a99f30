//! The three AWS front-door options under comparison.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::EngineError;

/// A candidate entry point for routing traffic into AWS.
///
/// Variant order doubles as the tie-break priority: when two options
/// score identically, the earlier variant wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteOption {
    ApiGateway,
    Alb,
    Nlb,
}

impl RouteOption {
    /// All options in tie-break priority order.
    pub const ALL: [RouteOption; 3] = [RouteOption::ApiGateway, RouteOption::Alb, RouteOption::Nlb];

    /// Returns the wire identifier used in requests and responses.
    pub fn identifier(&self) -> &'static str {
        match self {
            RouteOption::ApiGateway => "apigateway",
            RouteOption::Alb => "alb",
            RouteOption::Nlb => "nlb",
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            RouteOption::ApiGateway => "API Gateway",
            RouteOption::Alb => "Application Load Balancer",
            RouteOption::Nlb => "Network Load Balancer",
        }
    }
}

impl FromStr for RouteOption {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "apigateway" => Ok(RouteOption::ApiGateway),
            "alb" => Ok(RouteOption::Alb),
            "nlb" => Ok(RouteOption::Nlb),
            other => Err(EngineError::unknown_option(other)),
        }
    }
}

impl fmt::Display for RouteOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}
