//! Provider-resolved bus route

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::RouteIdentifier;

/// A logical route bound to the provider's internal route identifier
///
/// Produced by the provider client when a line search resolves; one logical
/// route may resolve to zero, one, or many of these. Resolved routes are
/// recomputed per request and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedRoute {
    /// The provider's numeric route code (SPTrans `cl`)
    pub provider_route_id: i32,
    /// The route identity riders know
    pub identifier: RouteIdentifier,
    /// Whether the line runs as a circular service
    pub is_circular: bool,
    /// Destination terminal for the resolved operating direction
    pub terminal_name: String,
}

impl fmt::Display for ResolvedRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} [#{}]",
            self.identifier, self.terminal_name, self.provider_route_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::BusDirection;

    #[test]
    fn display_shows_identifier_terminal_and_code() {
        let route = ResolvedRoute {
            provider_route_id: 1273,
            identifier: RouteIdentifier::new("8000-10", BusDirection::Inbound).unwrap(),
            is_circular: false,
            terminal_name: "Term. Lapa".to_string(),
        };
        assert_eq!(route.to_string(), "8000-10 (ida) -> Term. Lapa [#1273]");
    }
}
