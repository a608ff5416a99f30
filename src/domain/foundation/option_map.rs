//! Fixed-shape container holding one value per route option.

use serde::{Deserialize, Serialize};

use super::RouteOption;

/// One `T` for each of the three options.
///
/// Serializes as an object keyed by option identifier, and iterates in
/// tie-break priority order (apigateway, alb, nlb).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionMap<T> {
    pub apigateway: T,
    pub alb: T,
    pub nlb: T,
}

impl<T> OptionMap<T> {
    /// Builds a map by evaluating `f` once per option, in priority order.
    pub fn from_fn(mut f: impl FnMut(RouteOption) -> T) -> Self {
        Self {
            apigateway: f(RouteOption::ApiGateway),
            alb: f(RouteOption::Alb),
            nlb: f(RouteOption::Nlb),
        }
    }

    /// Returns the entry for `option`.
    pub fn get(&self, option: RouteOption) -> &T {
        match option {
            RouteOption::ApiGateway => &self.apigateway,
            RouteOption::Alb => &self.alb,
            RouteOption::Nlb => &self.nlb,
        }
    }

    /// Returns the entry for `option` mutably.
    pub fn get_mut(&mut self, option: RouteOption) -> &mut T {
        match option {
            RouteOption::ApiGateway => &mut self.apigateway,
            RouteOption::Alb => &mut self.alb,
            RouteOption::Nlb => &mut self.nlb,
        }
    }

    /// Builds a new map by transforming each entry.
    pub fn map<U>(&self, mut f: impl FnMut(RouteOption, &T) -> U) -> OptionMap<U> {
        OptionMap {
            apigateway: f(RouteOption::ApiGateway, &self.apigateway),
            alb: f(RouteOption::Alb, &self.alb),
            nlb: f(RouteOption::Nlb, &self.nlb),
        }
    }

    /// Iterates entries in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (RouteOption, &T)> {
        [
            (RouteOption::ApiGateway, &self.apigateway),
            (RouteOption::Alb, &self.alb),
            (RouteOption::Nlb, &self.nlb),
        ]
        .into_iter()
    }
}
